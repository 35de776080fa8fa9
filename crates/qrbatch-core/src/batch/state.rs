//! Batch lifecycle states reported to observers.

/// `Validating → Processing(1..N) → Finalizing → {Done | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Validating,
    /// About to commit row `row` (1-based) of `total`.
    Processing {
        row: usize,
        total: usize,
    },
    Finalizing,
    Done,
    Failed,
}

impl BatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BatchState::Done | BatchState::Failed)
    }
}
