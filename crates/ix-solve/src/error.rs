use ix_graph::GraphError;
use ix_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("solver configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Every attempt allowed by `max_attempts` ended in deadlock.
    #[error("unschedulable under available strategies: {attempts} attempt(s) all deadlocked")]
    Unschedulable { attempts: u32 },
}

pub type SolveResult<T> = Result<T, SolveError>;
