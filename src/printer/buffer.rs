//! Printer state snapshots and output capture buffers

/// Layout state of a [`super::Printer`].
///
/// Two snapshots compare equal when printing the same text from either would produce the same
/// output, which is what memoization keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrinterState {
    pub indent: usize,
    /// Newlines emitted since the last printed text
    pub had_newlines: usize,
    /// Newlines requested but not yet emitted
    pub need_newlines: usize,
}

/// Output captured between [`super::Printer::buffer_start`] and
/// [`super::Printer::buffer_stop`].
#[derive(Debug)]
pub struct OutputBuffer {
    pub(super) depth: usize,
    pub(super) text: String,
    pub(super) state_on_start: PrinterState,
    pub(super) state_on_stop: Option<PrinterState>,
}

impl OutputBuffer {
    pub(super) fn new(depth: usize, state_on_start: PrinterState) -> Self {
        Self {
            depth,
            text: String::new(),
            state_on_start,
            state_on_stop: None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state_on_stop.is_some()
    }

    /// Captured text; empty until the buffer is stopped.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state_on_start(&self) -> PrinterState {
        self.state_on_start
    }

    pub fn state_on_stop(&self) -> Option<PrinterState> {
        self.state_on_stop
    }
}
