use crate::error::{Error, Result};
use crate::frames::{FrameSource, NativeFrames};
use crate::registry::CallerRegistry;
use std::panic::Location;
use yell_types::{CallerState, Frame};

/// Resolution needs the immediate caller's frame.
pub const MIN_CALL_DEPTH: usize = 1;

/// Maps a facade call to the caller state it belongs to.
#[derive(Debug, Clone, Default)]
pub struct StackInspector<S = NativeFrames> {
    source: S,
}

impl<S: FrameSource> StackInspector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the caller at `origin` and record the call on its state.
    pub fn resolve<'r>(
        &self,
        registry: &'r mut CallerRegistry,
        origin: &Location<'static>,
    ) -> Result<&'r mut CallerState> {
        let frames = self.source.frames(origin);
        record_call(registry, &frames)
    }
}

/// Record a call described by `frames` (innermost first).
///
/// Every resolution bumps `total_calls` and refreshes the last function,
/// stack and line. Per-function counts only move for enabled callers.
pub fn record_call<'r>(
    registry: &'r mut CallerRegistry,
    frames: &[Frame],
) -> Result<&'r mut CallerState> {
    let immediate = frames.first().ok_or(Error::InsufficientDepth {
        required: MIN_CALL_DEPTH,
        found: frames.len(),
    })?;

    let identity = immediate.file_stem();
    let function = immediate.function_label();
    let chain: Vec<String> = frames.iter().rev().map(Frame::chain_label).collect();

    let state = registry.get_or_create(&identity);
    if state.file_name.is_none() {
        state.file_name = Some(immediate.file_name());
    }
    state.total_calls += 1;
    state.log_function(&function);
    state.last_stack = chain;
    state.last_line = immediate.line;

    Ok(state)
}
