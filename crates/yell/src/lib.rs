//! Call-site aware, themeable console output.
//!
//! [`Yell`] prints values as colorized, guide-indented trees, either under a
//! caller header ([`Yell::print`]) or inside a severity box with the call
//! chain on top ([`Yell::info`], [`Yell::error`], ...). Every call is
//! attributed to the source file it came from; consecutive prints from the
//! same file collapse their header.
//!
//! ```no_run
//! use yell::{Yell, values};
//!
//! let mut yell = Yell::from_config()?;
//! yell.print(&values!["starting", 3, true])?;
//! yell.success(&values![vec!["a", "b"]])?;
//! # Ok::<(), yell::Error>(())
//! ```
//!
//! Settings come from `yell.toml` (see [`Settings`]); per-file output can be
//! switched off there under `[modules.<file stem>]`.

pub mod config;
pub mod error;
pub mod facade;
pub mod severity;

pub use config::{ModuleSettings, Settings};
pub use error::{Error, Result};
pub use facade::{BoxOptions, LabelOptions, MAX_BOX_WIDTH, PrintOptions, Yell};
pub use severity::Severity;

pub use yell_engine::{Align, CallerRegistry, CustomClass, FrameSource, NativeFrames};
pub use yell_style::{ColorName, Corners, StyledText, Theme, color_enabled, disable_color, enable_color};
pub use yell_types::{CallerState, Frame, Value};

/// Build a `Vec<Value>` from anything convertible into [`Value`].
///
/// ```
/// let values = yell::values!["text", 1, 2.5, None::<i32>];
/// assert_eq!(values.len(), 4);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
