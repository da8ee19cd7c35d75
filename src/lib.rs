//! Thread and process (VM) diagnostic policies behind a small config record.
//!
//! A [`PolicyConfig`] is folded into a [`ThreadPolicy`] and a [`VmPolicy`],
//! which a [`PolicyController`] installs into a [`PolicyStore`]. The store
//! defaults to the process-wide slot; tests and embedders can inject their
//! own.
//!
//! ```
//! use strictmode::{InMemoryPolicyStore, PolicyConfig, PolicyController};
//!
//! let controller = PolicyController::new(InMemoryPolicyStore::new());
//! controller.enable(PolicyConfig {
//!     detect_network: false,
//!     ..PolicyConfig::default()
//! });
//! assert!(controller.is_enabled());
//!
//! let inside = controller.with_relaxed_disk_access(|| controller.is_enabled());
//! assert!(inside); // the VM policy is still active
//!
//! controller.disable();
//! assert!(!controller.is_enabled());
//! ```

pub mod cli;
pub mod controller;
pub mod error;
pub mod policy;
pub mod store;

pub use controller::{ActivePolicies, LOG_TARGET, PolicyController, RelaxedScope};
pub use error::StrictModeError;
pub use policy::{PolicyConfig, Preset, ThreadPolicy, VmPolicy};
pub use store::{GlobalPolicyStore, InMemoryPolicyStore, PolicyStore};
