//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a run is active and which input is being
//! processed so the panic hook can say what kcluster was doing.
//! Context guards use RAII and restore the previous context on drop.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Current run phase
    pub phase: Option<RunPhase>,
    /// Point file being processed, if any
    pub current_input: Option<PathBuf>,
}

impl RunContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_input: None,
        }
    }
}

/// Major stages of a `kcluster run` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Resolving `.kcluster.toml` and CLI overrides
    ConfigLoading,
    /// Reading and parsing the point file
    InputLoading,
    /// Running the assign/update loop
    Clustering,
    /// Writing the report
    OutputGeneration,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigLoading => write!(f, "config_loading"),
            Self::InputLoading => write!(f, "input_loading"),
            Self::Clustering => write!(f, "clustering"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring the run context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current run phase.
///
/// Returns a guard that restores the previous phase on drop.
///
/// # Example
///
/// ```ignore
/// let _phase = set_phase(RunPhase::Clustering);
/// // Run the engine...
/// // Phase automatically restored when _phase drops
/// ```
#[must_use]
pub fn set_phase(phase: RunPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Set the point file currently being processed.
#[must_use]
pub fn set_current_input(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_input = Some(path.into());
        ContextGuard { previous }
    })
}

/// Get the current context snapshot.
///
/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = RunContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _phase1 = set_phase(RunPhase::InputLoading);
        assert_eq!(get_current_context().phase, Some(RunPhase::InputLoading));

        {
            let _phase2 = set_phase(RunPhase::Clustering);
            assert_eq!(get_current_context().phase, Some(RunPhase::Clustering));
        }

        assert_eq!(
            get_current_context().phase,
            Some(RunPhase::InputLoading),
            "Phase should be restored to InputLoading"
        );
    }

    #[test]
    fn test_nested_input_guard() {
        reset_context();

        let _phase = set_phase(RunPhase::InputLoading);
        {
            let _input = set_current_input("points.json");
            let ctx = get_current_context();
            assert_eq!(ctx.phase, Some(RunPhase::InputLoading));
            assert_eq!(ctx.current_input, Some(PathBuf::from("points.json")));
        }
        assert!(get_current_context().current_input.is_none());
    }

    #[test]
    fn test_run_phase_display() {
        assert_eq!(RunPhase::ConfigLoading.to_string(), "config_loading");
        assert_eq!(RunPhase::InputLoading.to_string(), "input_loading");
        assert_eq!(RunPhase::Clustering.to_string(), "clustering");
        assert_eq!(RunPhase::OutputGeneration.to_string(), "output_generation");
    }

    #[test]
    fn test_empty_context_by_default() {
        reset_context();

        let ctx = get_current_context();
        assert!(ctx.phase.is_none());
        assert!(ctx.current_input.is_none());
    }
}
