//! The call-site aware rendering pipeline behind the `yell` facade.
//!
//! - [`StackInspector`] resolves who is printing and updates that caller's
//!   [`CallerState`](yell_types::CallerState) in a [`CallerRegistry`]
//! - [`TreeRenderer`] turns nested [`Value`](yell_types::Value)s into guide-indented lines
//! - [`LineFormatter`] measures, truncates and wraps lines by visible width
//! - [`BoxRenderer`] frames lines and builds call-chain headers

pub mod boxing;
pub mod custom;
pub mod error;
pub mod frames;
pub mod inspector;
pub mod layout;
pub mod registry;
pub mod tree;

pub use boxing::{Align, BoxRenderer, call_chain};
pub use custom::{CustomClass, match_class};
pub use error::{Error, Result};
pub use frames::{FrameSource, NativeFrames};
pub use inspector::{MIN_CALL_DEPTH, StackInspector, record_call};
pub use layout::{CONTINUATION, ELLIPSIS, LineFormatter, LineMode};
pub use registry::CallerRegistry;
pub use tree::TreeRenderer;
