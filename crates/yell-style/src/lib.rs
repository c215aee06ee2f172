//! Styling primitives for yell.
//!
//! - [`ColorName`]: the symbolic color vocabulary used by themes and config
//! - [`StyledText`]: text plus foreground/background, rendered with ANSI escapes
//! - [`ansi`]: escape-aware measuring and slicing
//! - [`Theme`]: semantic role to color table
//! - [`glyphs`]: corners, arrows, dashes and the timestamp
//!
//! Color output can be switched off process-wide with [`disable_color`];
//! styled text then renders as its raw content.

pub mod ansi;
pub mod color;
pub mod glyphs;
pub mod styled;
pub mod theme;

pub use color::{ColorName, UnknownColor, color_enabled, disable_color, enable_color};
pub use glyphs::{ArrowStyle, Corners, Direction};
pub use styled::StyledText;
pub use theme::Theme;
