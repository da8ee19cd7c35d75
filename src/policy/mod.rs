pub mod flags;
pub mod model;
pub mod thread;
pub mod vm;

pub use flags::{Flag, FlagSet};
pub use model::{PolicyConfig, Preset};
pub use thread::{ThreadDetector, ThreadPenalty, ThreadPolicy};
pub use vm::{VmDetector, VmPenalty, VmPolicy};
