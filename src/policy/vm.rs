use std::fmt;

use super::flags::{Flag, FlagSet};

/// Detectors evaluated against the whole process's object lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmDetector {
    LeakedClosableObjects = 1,
    LeakedRegistrationObjects = 1 << 1,
    LeakedSqlLiteObjects = 1 << 2,
}

impl Flag for VmDetector {
    const ALL: &'static [Self] = &[
        VmDetector::LeakedClosableObjects,
        VmDetector::LeakedRegistrationObjects,
        VmDetector::LeakedSqlLiteObjects,
    ];

    fn bit(self) -> u16 {
        self as u16
    }

    fn name(self) -> &'static str {
        match self {
            VmDetector::LeakedClosableObjects => "leaked_closable_objects",
            VmDetector::LeakedRegistrationObjects => "leaked_registration_objects",
            VmDetector::LeakedSqlLiteObjects => "leaked_sql_lite_objects",
        }
    }
}

/// Process-scoped penalties. Dialog, screen flash and the death variants
/// only exist for thread policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmPenalty {
    Log = 1,
    DropBox = 1 << 1,
}

impl Flag for VmPenalty {
    const ALL: &'static [Self] = &[VmPenalty::Log, VmPenalty::DropBox];

    fn bit(self) -> u16 {
        self as u16
    }

    fn name(self) -> &'static str {
        match self {
            VmPenalty::Log => "log",
            VmPenalty::DropBox => "drop_box",
        }
    }
}

/// Process-scoped policy value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VmPolicy {
    detectors: FlagSet<VmDetector>,
    penalties: FlagSet<VmPenalty>,
}

impl VmPolicy {
    pub const LAX: Self = Self {
        detectors: FlagSet::empty(),
        penalties: FlagSet::empty(),
    };

    pub fn new(detectors: FlagSet<VmDetector>, penalties: FlagSet<VmPenalty>) -> Self {
        Self {
            detectors,
            penalties,
        }
    }

    pub fn detect(self, detector: VmDetector) -> Self {
        Self {
            detectors: self.detectors.with(detector),
            ..self
        }
    }

    pub fn penalize(self, penalty: VmPenalty) -> Self {
        Self {
            penalties: self.penalties.with(penalty),
            ..self
        }
    }

    pub fn detectors(&self) -> FlagSet<VmDetector> {
        self.detectors
    }

    pub fn penalties(&self) -> FlagSet<VmPenalty> {
        self.penalties
    }

    pub fn detects(&self, detector: VmDetector) -> bool {
        self.detectors.contains(detector)
    }

    pub fn is_lax(&self) -> bool {
        *self == Self::LAX
    }
}

impl fmt::Display for VmPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "detect [{}] penalty [{}]",
            self.detectors, self.penalties
        )
    }
}
