//! Observability infrastructure: logging setup and crash reports.
//!
//! ## Features
//!
//! - **Tracing**: stderr subscriber driven by `-v` or `RUST_LOG`
//! - **Panic Hook**: Produces structured crash reports with context
//! - **Context Tracking**: Thread-local run phase and input file
//!
//! ## Usage
//!
//! ```ignore
//! use kcluster::observability::{init_tracing, install_panic_hook, set_phase, RunPhase};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(1);
//!     let _phase = set_phase(RunPhase::Clustering);
//!     // If a panic occurs here, the crash report shows the phase
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_current_input, set_phase, ContextGuard, RunContext,
    RunPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{filter_for_verbosity, init_tracing};
