/// Diagnostic output: error reporting and debug timing on stderr.
///
/// stdout carries only codec output, so everything here goes to stderr.
use std::io::Write;

use crate::types::ErrorOutput;

/// Output context passed to all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// Render errors as a JSON envelope instead of a plain line.
    pub json: bool,
    /// When true, print phase timings and byte counts to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a `[debug]` line to stderr when `--debug` is set.
    pub fn debug_line(&self, message: std::fmt::Arguments<'_>) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr, as JSON when `--json` is set.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = out.write_all(render_error(err, ctx.json).as_bytes());
}

/// Render an error the way [`write_error`] prints it, trailing newline included.
#[must_use]
pub fn render_error(err: &ErrorOutput, json: bool) -> String {
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        format!("{s}\n")
    } else {
        format!("{}{}\n", err.error.prefix(), err.error.message)
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
