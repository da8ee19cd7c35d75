use std::fmt;

use super::flags::{Flag, FlagSet};

/// Detectors evaluated against operations performed on a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadDetector {
    DiskReads = 1,
    DiskWrites = 1 << 1,
    Network = 1 << 2,
    CustomSlowCalls = 1 << 3,
    ResourceMismatches = 1 << 4,
    UnbufferedIo = 1 << 5,
}

impl Flag for ThreadDetector {
    const ALL: &'static [Self] = &[
        ThreadDetector::DiskReads,
        ThreadDetector::DiskWrites,
        ThreadDetector::Network,
        ThreadDetector::CustomSlowCalls,
        ThreadDetector::ResourceMismatches,
        ThreadDetector::UnbufferedIo,
    ];

    fn bit(self) -> u16 {
        self as u16
    }

    fn name(self) -> &'static str {
        match self {
            ThreadDetector::DiskReads => "disk_reads",
            ThreadDetector::DiskWrites => "disk_writes",
            ThreadDetector::Network => "network",
            ThreadDetector::CustomSlowCalls => "custom_slow_calls",
            ThreadDetector::ResourceMismatches => "resource_mismatches",
            ThreadDetector::UnbufferedIo => "unbuffered_io",
        }
    }
}

/// Reactions available to a thread policy when a detector fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadPenalty {
    Log = 1,
    Dialog = 1 << 1,
    Death = 1 << 2,
    DropBox = 1 << 3,
    FlashScreen = 1 << 4,
    DeathOnNetwork = 1 << 5,
}

impl Flag for ThreadPenalty {
    const ALL: &'static [Self] = &[
        ThreadPenalty::Log,
        ThreadPenalty::Dialog,
        ThreadPenalty::Death,
        ThreadPenalty::DropBox,
        ThreadPenalty::FlashScreen,
        ThreadPenalty::DeathOnNetwork,
    ];

    fn bit(self) -> u16 {
        self as u16
    }

    fn name(self) -> &'static str {
        match self {
            ThreadPenalty::Log => "log",
            ThreadPenalty::Dialog => "dialog",
            ThreadPenalty::Death => "death",
            ThreadPenalty::DropBox => "drop_box",
            ThreadPenalty::FlashScreen => "flash_screen",
            ThreadPenalty::DeathOnNetwork => "death_on_network",
        }
    }
}

/// Thread-scoped policy value
///
/// Policies are immutable: `detect`, `penalize` and `permit_network` all
/// return a new value, so a captured policy can always be reinstalled as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThreadPolicy {
    detectors: FlagSet<ThreadDetector>,
    penalties: FlagSet<ThreadPenalty>,
}

impl ThreadPolicy {
    /// No detectors and no penalties
    pub const LAX: Self = Self {
        detectors: FlagSet::empty(),
        penalties: FlagSet::empty(),
    };

    pub fn new(detectors: FlagSet<ThreadDetector>, penalties: FlagSet<ThreadPenalty>) -> Self {
        Self {
            detectors,
            penalties,
        }
    }

    pub fn detect(self, detector: ThreadDetector) -> Self {
        Self {
            detectors: self.detectors.with(detector),
            ..self
        }
    }

    pub fn penalize(self, penalty: ThreadPenalty) -> Self {
        Self {
            penalties: self.penalties.with(penalty),
            ..self
        }
    }

    /// Derive a policy that no longer flags network access; everything else is kept
    pub fn permit_network(self) -> Self {
        Self {
            detectors: self.detectors.without(ThreadDetector::Network),
            ..self
        }
    }

    pub fn detectors(&self) -> FlagSet<ThreadDetector> {
        self.detectors
    }

    pub fn penalties(&self) -> FlagSet<ThreadPenalty> {
        self.penalties
    }

    pub fn detects(&self, detector: ThreadDetector) -> bool {
        self.detectors.contains(detector)
    }

    pub fn is_lax(&self) -> bool {
        *self == Self::LAX
    }
}

impl fmt::Display for ThreadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "detect [{}] penalty [{}]",
            self.detectors, self.penalties
        )
    }
}
