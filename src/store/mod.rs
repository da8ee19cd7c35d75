mod memory;

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::error::StrictModeError;
use crate::policy::{ThreadPolicy, VmPolicy};

pub use memory::{GlobalPolicyStore, InMemoryPolicyStore};

/// Slot holding the active thread and VM policies
///
/// The host owns one of these per process. Every call is individually
/// atomic, but nothing orders calls made from different threads: a
/// concurrent `set_*` may replace a policy another caller is about to
/// restore.
#[cfg_attr(test, automock)]
pub trait PolicyStore: Send + Sync {
    fn thread_policy(&self) -> Result<ThreadPolicy, StrictModeError>;
    fn set_thread_policy(&self, policy: ThreadPolicy) -> Result<(), StrictModeError>;
    fn vm_policy(&self) -> Result<VmPolicy, StrictModeError>;
    fn set_vm_policy(&self, policy: VmPolicy) -> Result<(), StrictModeError>;
}

impl<T: PolicyStore + ?Sized> PolicyStore for &T {
    fn thread_policy(&self) -> Result<ThreadPolicy, StrictModeError> {
        (**self).thread_policy()
    }

    fn set_thread_policy(&self, policy: ThreadPolicy) -> Result<(), StrictModeError> {
        (**self).set_thread_policy(policy)
    }

    fn vm_policy(&self) -> Result<VmPolicy, StrictModeError> {
        (**self).vm_policy()
    }

    fn set_vm_policy(&self, policy: VmPolicy) -> Result<(), StrictModeError> {
        (**self).set_vm_policy(policy)
    }
}

impl<T: PolicyStore + ?Sized> PolicyStore for Arc<T> {
    fn thread_policy(&self) -> Result<ThreadPolicy, StrictModeError> {
        (**self).thread_policy()
    }

    fn set_thread_policy(&self, policy: ThreadPolicy) -> Result<(), StrictModeError> {
        (**self).set_thread_policy(policy)
    }

    fn vm_policy(&self) -> Result<VmPolicy, StrictModeError> {
        (**self).vm_policy()
    }

    fn set_vm_policy(&self, policy: VmPolicy) -> Result<(), StrictModeError> {
        (**self).set_vm_policy(policy)
    }
}
