//! Stateful conversion session for live typing.
//!
//! `ConvertSession` tracks the text being typed and a generation counter so
//! that conversion results arriving out of order can be told apart: only a
//! result carrying the latest generation is applied, everything older is
//! dropped. `ConvertWorker` runs conversions on a background thread and
//! skips over queued requests that a newer one has already superseded.

mod worker;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use worker::{ConvertWorker, WorkerResult};

/// Where the session stands relative to its latest input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Output reflects the latest input (or there is no input).
    Idle,
    /// A conversion for the latest input has not completed yet.
    Converting,
}

/// Tracks live input, its converted output, and the generation counter that
/// orders them.
pub struct ConvertSession {
    input: String,
    output: String,
    generation: u64,
    state: SessionState,
}

impl ConvertSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            generation: 0,
            state: SessionState::Idle,
        }
    }

    /// Replace the working input and invalidate every in-flight conversion.
    ///
    /// Returns the new generation; a matching `complete` call is expected to
    /// deliver the output. The previous output stays visible until then.
    /// Clearing the input empties the output immediately.
    pub fn update(&mut self, input: &str) -> u64 {
        self.generation += 1;
        self.input.clear();
        self.input.push_str(input);
        if input.is_empty() {
            self.output.clear();
            self.state = SessionState::Idle;
        } else {
            self.state = SessionState::Converting;
        }
        self.generation
    }

    /// Deliver a conversion result for `generation`.
    ///
    /// Applied only when `generation` is still the latest; a result for any
    /// earlier input is dropped and the session keeps waiting.
    pub fn complete(&mut self, generation: u64, output: String) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "stale conversion dropped"
            );
            return false;
        }
        self.output = output;
        self.state = SessionState::Idle;
        true
    }

    /// Convert `input` synchronously on the calling thread.
    ///
    /// Bumps the generation, so in-flight results for older input cannot
    /// overwrite the fresh output afterwards.
    pub fn convert_now(&mut self, input: &str) -> &str {
        self.generation += 1;
        self.input.clear();
        self.input.push_str(input);
        self.output = hela_core::converter::convert(input);
        self.state = SessionState::Idle;
        &self.output
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_converting(&self) -> bool {
        self.state == SessionState::Converting
    }
}

impl Default for ConvertSession {
    fn default() -> Self {
        Self::new()
    }
}
