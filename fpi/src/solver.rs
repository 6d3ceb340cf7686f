use thiserror::Error;

/// Typed parameters of one fixed-point iteration run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveRequest {
    /// Iteration function `g(x)` as entered in the input file.
    pub(crate) function: String,
    pub(crate) initial_guess: f64,
    pub(crate) tolerance: f64,
    pub(crate) max_iterations: u32,
}

/// Outcome of a converged run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Solution {
    pub(crate) root: f64,
    pub(crate) iterations: u32,
}

/// Errors reported by a solver backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub(crate) enum SolveError {
    #[error("no fixed-point solver backend is attached")]
    Unavailable,
}

/// Computes a fixed point for a loaded input document.
pub(crate) trait SolveService {
    fn solve(&self, request: &SolveRequest) -> Result<Solution, SolveError>;
}

/// Service used when no solver backend is linked into the shell.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DetachedSolver;

impl SolveService for DetachedSolver {
    fn solve(&self, request: &SolveRequest) -> Result<Solution, SolveError> {
        log::info!(
            "solve requested for g(x) = {}, x0 = {}, tol = {}, max_iter = {} \
             but no backend is attached",
            request.function,
            request.initial_guess,
            request.tolerance,
            request.max_iterations
        );
        Err(SolveError::Unavailable)
    }
}
