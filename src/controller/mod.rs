mod scope;

use std::fmt;

use crate::error::StrictModeError;
use crate::policy::{PolicyConfig, ThreadPolicy, VmPolicy};
use crate::store::{GlobalPolicyStore, PolicyStore};

pub use scope::RelaxedScope;

/// Log target shared by every controller message
pub const LOG_TARGET: &str = "strictmode";

/// Snapshot of the installed policy pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePolicies {
    pub thread: ThreadPolicy,
    pub vm: VmPolicy,
}

impl ActivePolicies {
    /// True when either policy is stricter than LAX
    pub fn is_enabled(&self) -> bool {
        !self.thread.is_lax() || !self.vm.is_lax()
    }
}

impl fmt::Display for ActivePolicies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "thread: {}", self.thread)?;
        write!(f, "vm:     {}", self.vm)
    }
}

/// Builds policies from a [`PolicyConfig`] and installs them into a [`PolicyStore`].
///
/// The plain methods never fail: errors from the store are logged under
/// [`LOG_TARGET`] and replaced by a safe default. Each of them has a `try_`
/// counterpart that returns the error instead.
#[derive(Debug, Clone)]
pub struct PolicyController<S = GlobalPolicyStore> {
    store: S,
}

impl PolicyController<GlobalPolicyStore> {
    /// Controller over the process-wide policy slot
    pub fn global() -> Self {
        Self::new(GlobalPolicyStore)
    }
}

impl Default for PolicyController<GlobalPolicyStore> {
    fn default() -> Self {
        Self::global()
    }
}

impl<S: PolicyStore> PolicyController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn try_enable(&self, config: PolicyConfig) -> Result<(), StrictModeError> {
        if config.enable_thread_policy {
            self.store.set_thread_policy(config.thread_policy())?;
        }
        if config.enable_vm_policy {
            self.store.set_vm_policy(config.vm_policy())?;
        }
        Ok(())
    }

    /// Install the policies described by `config`
    ///
    /// A scope whose master switch is off is left as it is.
    pub fn enable(&self, config: PolicyConfig) {
        match self.try_enable(config) {
            Ok(()) => log::info!(target: LOG_TARGET, "StrictMode enabled successfully"),
            Err(e) => log::error!(target: LOG_TARGET, "Failed to enable StrictMode: {e}"),
        }
    }

    pub fn enable_default(&self) {
        self.enable(PolicyConfig::default());
    }

    pub fn enable_for_development(&self) {
        self.enable(PolicyConfig::development());
    }

    pub fn enable_for_production(&self) {
        self.enable(PolicyConfig::production());
    }

    pub fn try_disable(&self) -> Result<(), StrictModeError> {
        self.store.set_thread_policy(ThreadPolicy::LAX)?;
        self.store.set_vm_policy(VmPolicy::LAX)?;
        Ok(())
    }

    /// Install LAX thread and VM policies
    pub fn disable(&self) {
        match self.try_disable() {
            Ok(()) => log::info!(target: LOG_TARGET, "StrictMode disabled"),
            Err(e) => log::error!(target: LOG_TARGET, "Failed to disable StrictMode: {e}"),
        }
    }

    pub fn try_current_policies(&self) -> Result<ActivePolicies, StrictModeError> {
        Ok(ActivePolicies {
            thread: self.store.thread_policy()?,
            vm: self.store.vm_policy()?,
        })
    }

    /// Exact read-back of the installed policies, `None` if the store cannot be read
    pub fn current_policies(&self) -> Option<ActivePolicies> {
        match self.try_current_policies() {
            Ok(active) => {
                log::info!(target: LOG_TARGET, "Current StrictMode policies: {active:?}");
                Some(active)
            }
            Err(e) => {
                log::error!(target: LOG_TARGET, "Failed to read StrictMode policies: {e}");
                None
            }
        }
    }

    pub fn try_is_enabled(&self) -> Result<bool, StrictModeError> {
        self.try_current_policies().map(|active| active.is_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        match self.try_is_enabled() {
            Ok(enabled) => {
                log::info!(target: LOG_TARGET, "StrictMode enabled: {enabled}");
                enabled
            }
            Err(e) => {
                log::error!(target: LOG_TARGET, "Failed to check StrictMode status: {e}");
                false
            }
        }
    }

    /// Approximate the config that produced the installed policies
    ///
    /// Only the two master switches are recovered. Every other field keeps
    /// its default, so the penalty flags always read log and drop-box on,
    /// dialog and death off. Use [`Self::current_policies`] for the exact
    /// detector and penalty sets.
    pub fn try_current_config(&self) -> Result<PolicyConfig, StrictModeError> {
        let active = self.try_current_policies()?;
        Ok(PolicyConfig {
            enable_thread_policy: !active.thread.is_lax(),
            enable_vm_policy: !active.vm.is_lax(),
            penalty_log: true,
            penalty_dialog: false,
            penalty_death: false,
            penalty_drop_box: true,
            ..PolicyConfig::default()
        })
    }

    pub fn current_config(&self) -> Option<PolicyConfig> {
        match self.try_current_config() {
            Ok(config) => {
                log::info!(target: LOG_TARGET, "Current StrictMode config: {config:?}");
                Some(config)
            }
            Err(e) => {
                log::error!(target: LOG_TARGET, "Failed to get current StrictMode config: {e}");
                None
            }
        }
    }

    /// Install a LAX thread policy until the returned scope is dropped
    pub fn relax_disk_access(&self) -> Result<RelaxedScope<'_, S>, StrictModeError> {
        let original = self.store.thread_policy()?;
        let scope = RelaxedScope::new(&self.store, Some(original), None);
        self.store.set_thread_policy(ThreadPolicy::LAX)?;
        log::info!(target: LOG_TARGET, "Thread policy relaxed for disk access");
        Ok(scope)
    }

    /// Stop flagging network access on the thread policy until the returned scope is dropped
    pub fn relax_network_access(&self) -> Result<RelaxedScope<'_, S>, StrictModeError> {
        let original = self.store.thread_policy()?;
        let scope = RelaxedScope::new(&self.store, Some(original), None);
        self.store.set_thread_policy(original.permit_network())?;
        log::info!(target: LOG_TARGET, "Thread policy relaxed for network access");
        Ok(scope)
    }

    /// Install LAX thread and VM policies until the returned scope is dropped
    pub fn relax_all(&self) -> Result<RelaxedScope<'_, S>, StrictModeError> {
        let thread = self.store.thread_policy()?;
        let vm = self.store.vm_policy()?;
        let scope = RelaxedScope::new(&self.store, Some(thread), Some(vm));
        self.store.set_thread_policy(ThreadPolicy::LAX)?;
        self.store.set_vm_policy(VmPolicy::LAX)?;
        log::info!(target: LOG_TARGET, "Thread and VM policies relaxed");
        Ok(scope)
    }

    /// Run `operation` with a LAX thread policy, then restore the previous one
    ///
    /// If the current policy cannot be captured, `operation` still runs
    /// under whatever policy is installed.
    pub fn with_relaxed_disk_access<R>(&self, operation: impl FnOnce() -> R) -> R {
        let _scope = self
            .relax_disk_access()
            .inspect_err(|e| log::error!(target: LOG_TARGET, "Failed to relax disk access: {e}"))
            .ok();
        operation()
    }

    /// Run `operation` with network detection removed from the thread policy
    pub fn with_relaxed_network_access<R>(&self, operation: impl FnOnce() -> R) -> R {
        let _scope = self
            .relax_network_access()
            .inspect_err(|e| log::error!(target: LOG_TARGET, "Failed to relax network access: {e}"))
            .ok();
        operation()
    }

    /// Run `operation` with LAX thread and VM policies
    pub fn with_all_relaxed<R>(&self, operation: impl FnOnce() -> R) -> R {
        let _scope = self
            .relax_all()
            .inspect_err(|e| log::error!(target: LOG_TARGET, "Failed to relax policies: {e}"))
            .ok();
        operation()
    }
}
