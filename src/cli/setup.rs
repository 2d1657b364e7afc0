//! Setup and initialization functions for CLI
//!
//! Runtime environment setup: logging, crash reporting and color control.

use crate::observability::{init_tracing, install_panic_hook};

/// Install the panic hook and the tracing subscriber.
pub fn init_runtime(verbosity: u8) {
    install_panic_hook();
    init_tracing(verbosity);
}

/// Decide whether colored output should be disabled.
///
/// Colors are off for `--plain`, when writing to a file, or when
/// `NO_COLOR` is set.
pub fn should_disable_color(plain: bool, writing_to_file: bool) -> bool {
    plain || writing_to_file || std::env::var_os("NO_COLOR").is_some()
}

/// Apply color settings (side effect function, I/O at edges)
pub fn apply_color_mode(plain: bool, writing_to_file: bool) {
    if should_disable_color(plain, writing_to_file) {
        colored::control::set_override(false);
    }
}
