use crate::policy::{ThreadPolicy, VmPolicy};
use crate::store::PolicyStore;

use super::LOG_TARGET;

/// Restores the captured policies when dropped
///
/// Restoration also runs while unwinding from a panic. A failed restore is
/// logged; `Drop` never panics.
#[must_use = "policies are restored as soon as the scope is dropped"]
pub struct RelaxedScope<'a, S: PolicyStore> {
    store: &'a S,
    thread: Option<ThreadPolicy>,
    vm: Option<VmPolicy>,
}

impl<'a, S: PolicyStore> RelaxedScope<'a, S> {
    pub(super) fn new(store: &'a S, thread: Option<ThreadPolicy>, vm: Option<VmPolicy>) -> Self {
        Self { store, thread, vm }
    }

    /// Thread policy that will be reinstalled, if this scope captured one
    pub fn original_thread_policy(&self) -> Option<ThreadPolicy> {
        self.thread
    }

    /// VM policy that will be reinstalled, if this scope captured one
    pub fn original_vm_policy(&self) -> Option<VmPolicy> {
        self.vm
    }
}

impl<S: PolicyStore> Drop for RelaxedScope<'_, S> {
    fn drop(&mut self) {
        if let Some(policy) = self.thread.take()
            && let Err(e) = self.store.set_thread_policy(policy)
        {
            log::error!(target: LOG_TARGET, "Failed to restore thread policy: {e}");
        }
        if let Some(policy) = self.vm.take()
            && let Err(e) = self.store.set_vm_policy(policy)
        {
            log::error!(target: LOG_TARGET, "Failed to restore VM policy: {e}");
        }
    }
}
