//! Core affinity, executor and priority ranks

/// Application tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Button edge source (one instance per input line)
    Edge,
    Emergency,
    Actuator,
    Alert,
    Indicator,
}

/// RP2040 cores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoreId {
    Core0,
    Core1,
}

/// Executor a task is spawned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExecutorKind {
    /// Software-interrupt executor, preempts thread mode on its core
    Interrupt,
    /// Thread-mode executor, one per core
    Thread,
}

/// Where a task runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub core: CoreId,
    pub executor: ExecutorKind,
    /// Priority rank, higher runs first
    pub rank: u8,
}

impl Placement {
    const fn new(core: CoreId, executor: ExecutorKind, rank: u8) -> Self {
        Self {
            core,
            executor,
            rank,
        }
    }
}

impl TaskId {
    pub const fn placement(self) -> Placement {
        use CoreId::*;
        use ExecutorKind::*;

        match self {
            TaskId::Edge => Placement::new(Core0, Interrupt, 5),
            TaskId::Emergency => Placement::new(Core1, Thread, 4),
            TaskId::Actuator => Placement::new(Core0, Thread, 3),
            TaskId::Alert => Placement::new(Core0, Thread, 2),
            TaskId::Indicator => Placement::new(Core1, Thread, 1),
        }
    }

    /// Check if this task can interrupt `other` mid-poll
    ///
    /// Only an interrupt executor preempts, and only tasks on its own core.
    pub const fn preempts(self, other: TaskId) -> bool {
        let a = self.placement();
        let b = other.placement();
        a.core as u8 == b.core as u8
            && matches!(a.executor, ExecutorKind::Interrupt)
            && matches!(b.executor, ExecutorKind::Thread)
    }

    /// Check if this task runs before `other` whenever both are ready
    pub const fn outranks(self, other: TaskId) -> bool {
        self.placement().rank > other.placement().rank
    }
}
