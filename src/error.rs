use thiserror::Error;

/// Errors surfaced by the order intake core.
///
/// Missing required fields are the only failure the core itself produces;
/// parse failures belong to the caller and logging failures are swallowed at
/// the sink boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),
}
