use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::thread::{ThreadDetector, ThreadPenalty, ThreadPolicy};
use super::vm::{VmDetector, VmPenalty, VmPolicy};

/// Named boolean toggles for the thread and process (VM) policies.
///
/// Construct with struct-update syntax over [`PolicyConfig::default`]; the
/// record never changes after construction and any combination of flags is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub enable_thread_policy: bool,
    pub enable_vm_policy: bool,

    pub detect_disk_reads: bool,
    pub detect_disk_writes: bool,
    pub detect_network: bool,
    pub detect_custom_slow_calls: bool,
    pub detect_resource_mismatches: bool,
    pub detect_unbuffered_io: bool,

    pub detect_leaked_closable_objects: bool,
    pub detect_leaked_registration_objects: bool,
    pub detect_leaked_sql_lite_objects: bool,

    pub penalty_log: bool,
    pub penalty_dialog: bool,
    pub penalty_death: bool,
    pub penalty_drop_box: bool,
    pub penalty_flash_screen: bool,
    pub penalty_death_on_network: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            enable_thread_policy: true,
            enable_vm_policy: true,
            detect_disk_reads: true,
            detect_disk_writes: true,
            detect_network: true,
            detect_custom_slow_calls: true,
            detect_resource_mismatches: true,
            detect_unbuffered_io: true,
            detect_leaked_closable_objects: true,
            detect_leaked_registration_objects: true,
            detect_leaked_sql_lite_objects: true,
            penalty_log: true,
            penalty_dialog: false,
            penalty_death: false,
            penalty_drop_box: true,
            penalty_flash_screen: false,
            penalty_death_on_network: false,
        }
    }
}

type Toggle = fn(&PolicyConfig) -> bool;

const THREAD_DETECTORS: &[(Toggle, ThreadDetector)] = &[
    (|c: &PolicyConfig| c.detect_disk_reads, ThreadDetector::DiskReads),
    (|c: &PolicyConfig| c.detect_disk_writes, ThreadDetector::DiskWrites),
    (|c: &PolicyConfig| c.detect_network, ThreadDetector::Network),
    (
        |c: &PolicyConfig| c.detect_custom_slow_calls,
        ThreadDetector::CustomSlowCalls,
    ),
    (
        |c: &PolicyConfig| c.detect_resource_mismatches,
        ThreadDetector::ResourceMismatches,
    ),
    (|c: &PolicyConfig| c.detect_unbuffered_io, ThreadDetector::UnbufferedIo),
];

const THREAD_PENALTIES: &[(Toggle, ThreadPenalty)] = &[
    (|c: &PolicyConfig| c.penalty_log, ThreadPenalty::Log),
    (|c: &PolicyConfig| c.penalty_dialog, ThreadPenalty::Dialog),
    (|c: &PolicyConfig| c.penalty_death, ThreadPenalty::Death),
    (|c: &PolicyConfig| c.penalty_drop_box, ThreadPenalty::DropBox),
    (|c: &PolicyConfig| c.penalty_flash_screen, ThreadPenalty::FlashScreen),
    (
        |c: &PolicyConfig| c.penalty_death_on_network,
        ThreadPenalty::DeathOnNetwork,
    ),
];

const VM_DETECTORS: &[(Toggle, VmDetector)] = &[
    (
        |c: &PolicyConfig| c.detect_leaked_closable_objects,
        VmDetector::LeakedClosableObjects,
    ),
    (
        |c: &PolicyConfig| c.detect_leaked_registration_objects,
        VmDetector::LeakedRegistrationObjects,
    ),
    (
        |c: &PolicyConfig| c.detect_leaked_sql_lite_objects,
        VmDetector::LeakedSqlLiteObjects,
    ),
];

// Dialog, death, flash-screen and death-on-network have no VM-scope equivalent.
const VM_PENALTIES: &[(Toggle, VmPenalty)] = &[
    (|c: &PolicyConfig| c.penalty_log, VmPenalty::Log),
    (|c: &PolicyConfig| c.penalty_drop_box, VmPenalty::DropBox),
];

impl PolicyConfig {
    /// Preset intended for development builds
    pub fn development() -> Self {
        Self {
            enable_thread_policy: true,
            enable_vm_policy: true,
            detect_disk_reads: true,
            detect_disk_writes: true,
            detect_network: true,
            detect_custom_slow_calls: true,
            detect_resource_mismatches: true,
            detect_unbuffered_io: true,
            detect_leaked_closable_objects: true,
            detect_leaked_registration_objects: true,
            detect_leaked_sql_lite_objects: true,
            penalty_log: true,
            // A dialog would block the host UI, death would crash it
            penalty_dialog: false,
            penalty_death: false,
            penalty_drop_box: true,
            penalty_flash_screen: false,
            penalty_death_on_network: false,
        }
    }

    /// Preset intended for production builds
    ///
    /// Currently installs exactly the same policies as [`Self::development`].
    pub fn production() -> Self {
        Self {
            enable_thread_policy: true,
            enable_vm_policy: true,
            detect_disk_reads: true,
            detect_disk_writes: true,
            detect_network: true,
            detect_custom_slow_calls: true,
            detect_resource_mismatches: true,
            detect_unbuffered_io: true,
            detect_leaked_closable_objects: true,
            detect_leaked_registration_objects: true,
            detect_leaked_sql_lite_objects: true,
            penalty_log: true,
            penalty_dialog: false,
            penalty_death: false,
            penalty_drop_box: true,
            penalty_flash_screen: false,
            penalty_death_on_network: false,
        }
    }

    /// Fold the enabled thread detectors and penalties into a policy
    pub fn thread_policy(&self) -> ThreadPolicy {
        let policy = THREAD_DETECTORS
            .iter()
            .filter(|(enabled, _)| enabled(self))
            .fold(ThreadPolicy::LAX, |policy, (_, detector)| {
                policy.detect(*detector)
            });
        THREAD_PENALTIES
            .iter()
            .filter(|(enabled, _)| enabled(self))
            .fold(policy, |policy, (_, penalty)| policy.penalize(*penalty))
    }

    /// Fold the enabled VM detectors and penalties into a policy
    pub fn vm_policy(&self) -> VmPolicy {
        let policy = VM_DETECTORS
            .iter()
            .filter(|(enabled, _)| enabled(self))
            .fold(VmPolicy::LAX, |policy, (_, detector)| policy.detect(*detector));
        VM_PENALTIES
            .iter()
            .filter(|(enabled, _)| enabled(self))
            .fold(policy, |policy, (_, penalty)| policy.penalize(*penalty))
    }
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Preset {
    pub fn config(self) -> PolicyConfig {
        match self {
            Preset::Default => PolicyConfig::default(),
            Preset::Development => PolicyConfig::development(),
            Preset::Production => PolicyConfig::production(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Preset::Default),
            "development" | "dev" => Ok(Preset::Development),
            "production" | "prod" => Ok(Preset::Production),
            other => Err(format!(
                "unknown preset '{other}' (expected default, development or production)"
            )),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Preset::Default => "default",
            Preset::Development => "development",
            Preset::Production => "production",
        })
    }
}
