//! Text printer with indentation, deferred newlines and memoization
//!
//! A base for tree printers (AST dumps, serializers). Text goes into an in-memory sink; newline
//! requests are deferred until the next text is printed, so consecutive requests coalesce instead
//! of producing runs of blank lines.
//!
//! ## Features
//!
//! - Cached indentation strings per level
//! - A state stack (`push`/`pop`/`restore`)
//! - Output buffers that capture text and can be replayed later
//! - Memoization of rendered nodes keyed by node and printer state

mod buffer;
mod config;
mod memo;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

pub use buffer::{OutputBuffer, PrinterState};
pub use config::PrinterConfig;
pub use memo::{MemoStats, Memoize};

use memo::{CachedRendering, MemoKey};

/// Misuse of printer buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrinterError {
    #[error("output buffer already stopped")]
    BufferAlreadyStopped,

    #[error("output buffer is not the innermost active buffer")]
    BufferNotInnermost,

    #[error("printer state stack is empty")]
    StateStackEmpty,
}

/// Printer writing into an in-memory string.
///
/// `K` identifies nodes for memoization; printers that never memoize can keep the default `()`.
#[derive(Debug)]
pub struct Printer<K = ()> {
    config: PrinterConfig,
    /// Output sinks; the first is the final output, the last receives text
    sinks: Vec<String>,
    indent_strings: Vec<String>,
    indent: usize,
    had_newlines: usize,
    need_newlines: usize,
    state_stack: Vec<PrinterState>,
    memo: HashMap<MemoKey<K>, CachedRendering>,
    reuse: usize,
}

impl<K> Default for Printer<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Printer<K>
where
    K: Hash + Eq,
{
    /// Create a printer with the default config
    pub fn new() -> Self {
        Self::with_config(PrinterConfig::default())
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            config,
            sinks: vec![String::new()],
            indent_strings: vec![String::new()],
            indent: 0,
            // Output starts as if on a fresh line.
            had_newlines: 1,
            need_newlines: 0,
            state_stack: Vec::new(),
            memo: HashMap::new(),
            reuse: 0,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Flush pending newlines and return the output.
    pub fn finish(mut self) -> String {
        self.flush();
        self.sinks.into_iter().next().unwrap_or_default()
    }

    /// Output written to the final sink so far.
    pub fn output(&self) -> &str {
        self.sinks.first().map(String::as_str).unwrap_or_default()
    }

    fn sink(&mut self) -> &mut String {
        if self.sinks.is_empty() {
            self.sinks.push(String::new());
        }
        let last = self.sinks.len() - 1;
        &mut self.sinks[last]
    }

    // ========================================
    // State
    // ========================================

    pub fn state(&self) -> PrinterState {
        PrinterState {
            indent: self.indent,
            had_newlines: self.had_newlines,
            need_newlines: self.need_newlines,
        }
    }

    pub fn set_state(&mut self, state: PrinterState) {
        self.indent = state.indent;
        self.had_newlines = state.had_newlines;
        self.need_newlines = state.need_newlines;
        self.ensure_indent_string(state.indent);
    }

    /// Save the current state and return it.
    pub fn push(&mut self) -> PrinterState {
        let state = self.state();
        self.state_stack.push(state);
        state
    }

    /// Discard the most recently saved state.
    pub fn pop(&mut self) -> Option<PrinterState> {
        self.state_stack.pop()
    }

    /// Discard the most recently saved state and make it current.
    pub fn restore(&mut self) -> Option<PrinterState> {
        let state = self.state_stack.pop()?;
        self.set_state(state);
        Some(state)
    }

    // ========================================
    // Indentation
    // ========================================

    pub fn inc_indent(&mut self) {
        self.indent += 1;
        self.ensure_indent_string(self.indent);
    }

    pub fn dec_indent(&mut self) {
        debug_assert!(self.indent > 0, "dec_indent below zero");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn current_indent(&self) -> usize {
        self.indent
    }

    fn ensure_indent_string(&mut self, level: usize) {
        while self.indent_strings.len() <= level {
            let mut next = self.indent_strings.last().cloned().unwrap_or_default();
            next.push_str(&" ".repeat(self.config.indent_width));
            self.indent_strings.push(next);
        }
    }

    /// Start a fresh line and write the current indentation.
    pub fn indent(&mut self) {
        self.need_newlines(1);
        if self.indent > 0 {
            let prefix = self.indent_strings[self.indent].clone();
            self.print(prefix);
        }
    }

    pub fn indent_text(&mut self, text: impl fmt::Display) {
        self.indent();
        self.print(text);
    }

    pub fn indentln(&mut self, text: impl fmt::Display) {
        self.indent();
        self.println(text);
    }

    // ========================================
    // Text and newlines
    // ========================================

    pub fn print(&mut self, text: impl fmt::Display) {
        self.flush();
        let text = text.to_string();
        self.sink().push_str(&text);
        self.had_newlines = 0;
    }

    pub fn println(&mut self, text: impl fmt::Display) {
        self.print(text);
        self.need_newlines(1);
    }

    /// Request a line break before the next text.
    pub fn newline(&mut self) {
        self.need_newlines(1);
    }

    /// Request at least `count` newlines before the next text.
    pub fn need_newlines(&mut self, count: usize) {
        self.need_newlines = self.need_newlines.max(count);
    }

    /// Drop pending newline requests.
    pub fn ignore_newlines(&mut self) {
        self.need_newlines = 0;
    }

    /// Emit pending newlines now.
    pub fn forceln(&mut self) {
        if self.need_newlines > self.had_newlines {
            let missing = self.need_newlines - self.had_newlines;
            let newlines = "\n".repeat(missing);
            self.sink().push_str(&newlines);
            self.had_newlines = self.need_newlines;
        }
        self.need_newlines = 0;
    }

    pub fn flush(&mut self) {
        self.forceln();
    }

    // ========================================
    // Output buffers
    // ========================================

    /// Redirect output into a new capture buffer.
    pub fn buffer_start(&mut self) -> OutputBuffer {
        let state = self.push();
        self.sinks.push(String::new());
        OutputBuffer::new(self.sinks.len() - 1, state)
    }

    /// Stop capturing: the previous sink and state become current again.
    pub fn buffer_stop(&mut self, buffer: &mut OutputBuffer) -> Result<(), PrinterError> {
        if buffer.is_stopped() {
            return Err(PrinterError::BufferAlreadyStopped);
        }
        if buffer.depth + 1 != self.sinks.len() || buffer.depth == 0 {
            return Err(PrinterError::BufferNotInnermost);
        }
        buffer.state_on_stop = Some(self.state());
        buffer.text = self.sinks.pop().unwrap_or_default();
        self.restore().ok_or(PrinterError::StateStackEmpty)?;
        Ok(())
    }

    /// Replay a buffer into the current sink, stopping it first if needed.
    ///
    /// Returns the state the printer was in when the buffer stopped, which is now current.
    pub fn buffer_flush(&mut self, buffer: &mut OutputBuffer) -> Result<PrinterState, PrinterError> {
        if !buffer.is_stopped() {
            self.buffer_stop(buffer)?;
        }
        let state = buffer.state_on_stop.ok_or(PrinterError::StateStackEmpty)?;
        self.set_state(state);
        self.sink().push_str(&buffer.text);
        Ok(state)
    }

    // ========================================
    // Memoization
    // ========================================

    pub fn set_memoize(&mut self, memoize: bool) {
        self.config.memoize = memoize;
    }

    pub fn is_memoize(&self) -> bool {
        self.config.memoize
    }

    /// Begin rendering `node`.
    ///
    /// Returns `None` if an identical rendering was cached: it has already been replayed and the
    /// caller must skip the node. Otherwise the caller renders the node and hands the returned
    /// handle to [`Self::memoize_stop`].
    pub fn memoize_start(&mut self, node: K) -> Option<Memoize<K>> {
        if !self.config.memoize {
            return Some(Memoize::disabled());
        }
        let key = MemoKey {
            node,
            state: self.state(),
        };
        if let Some(cached) = self.memo.get(&key) {
            let text = cached.text.clone();
            let state = cached.state_on_stop;
            self.reuse += 1;
            self.set_state(state);
            self.sink().push_str(&text);
            return None;
        }
        let buffer = self.buffer_start();
        Some(Memoize {
            key: Some(key),
            buffer: Some(buffer),
        })
    }

    /// Finish rendering a node started with [`Self::memoize_start`].
    pub fn memoize_stop(&mut self, memo: Memoize<K>) -> Result<(), PrinterError> {
        let (Some(key), Some(mut buffer)) = (memo.key, memo.buffer) else {
            return Ok(());
        };
        let state_on_stop = self.buffer_flush(&mut buffer)?;
        self.memo.insert(
            key,
            CachedRendering {
                text: buffer.text,
                state_on_stop,
            },
        );
        Ok(())
    }

    pub fn memo_stats(&self) -> MemoStats {
        MemoStats {
            entries: self.memo.len(),
            reuse: self.reuse,
        }
    }

    pub fn log_memo_stats(&self) {
        let stats = self.memo_stats();
        tracing::debug!(
            entries = stats.entries,
            reuse = stats.reuse,
            ratio = stats.ratio(),
            "printer memoization"
        );
    }
}
