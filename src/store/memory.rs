use std::sync::RwLock;

use super::PolicyStore;
use crate::error::StrictModeError;
use crate::policy::{ThreadPolicy, VmPolicy};

/// Lock-protected policy pair owned by whoever creates it
#[derive(Debug)]
pub struct InMemoryPolicyStore {
    thread: RwLock<ThreadPolicy>,
    vm: RwLock<VmPolicy>,
}

impl InMemoryPolicyStore {
    /// Create a store with both policies LAX
    pub const fn new() -> Self {
        Self {
            thread: RwLock::new(ThreadPolicy::LAX),
            vm: RwLock::new(VmPolicy::LAX),
        }
    }

    pub fn with_policies(thread: ThreadPolicy, vm: VmPolicy) -> Self {
        Self {
            thread: RwLock::new(thread),
            vm: RwLock::new(vm),
        }
    }
}

impl Default for InMemoryPolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn thread_policy(&self) -> Result<ThreadPolicy, StrictModeError> {
        self.thread
            .read()
            .map(|policy| *policy)
            .map_err(|_| StrictModeError::StorePoisoned { scope: "thread" })
    }

    fn set_thread_policy(&self, policy: ThreadPolicy) -> Result<(), StrictModeError> {
        let mut slot = self
            .thread
            .write()
            .map_err(|_| StrictModeError::StorePoisoned { scope: "thread" })?;
        *slot = policy;
        Ok(())
    }

    fn vm_policy(&self) -> Result<VmPolicy, StrictModeError> {
        self.vm
            .read()
            .map(|policy| *policy)
            .map_err(|_| StrictModeError::StorePoisoned { scope: "vm" })
    }

    fn set_vm_policy(&self, policy: VmPolicy) -> Result<(), StrictModeError> {
        let mut slot = self
            .vm
            .write()
            .map_err(|_| StrictModeError::StorePoisoned { scope: "vm" })?;
        *slot = policy;
        Ok(())
    }
}

static ACTIVE: InMemoryPolicyStore = InMemoryPolicyStore::new();

/// The process-wide policy slot. Lives for the whole process and starts LAX.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalPolicyStore;

impl GlobalPolicyStore {
    fn slot(&self) -> &'static InMemoryPolicyStore {
        &ACTIVE
    }
}

impl PolicyStore for GlobalPolicyStore {
    fn thread_policy(&self) -> Result<ThreadPolicy, StrictModeError> {
        self.slot().thread_policy()
    }

    fn set_thread_policy(&self, policy: ThreadPolicy) -> Result<(), StrictModeError> {
        self.slot().set_thread_policy(policy)
    }

    fn vm_policy(&self) -> Result<VmPolicy, StrictModeError> {
        self.slot().vm_policy()
    }

    fn set_vm_policy(&self, policy: VmPolicy) -> Result<(), StrictModeError> {
        self.slot().set_vm_policy(policy)
    }
}
