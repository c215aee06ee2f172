//! Testing infrastructure for yell.
//!
//! - `SyntheticFrames`: a scriptable call stack for the stack inspector
//! - `CaptureSink`: an in-memory output sink that can be read back
//! - `fixtures`: sample value trees and frame sequences
//! - `assertions`: width and layout checks on rendered output

pub mod assertions;
pub mod fixtures;
pub mod frames;
pub mod sink;

pub use frames::SyntheticFrames;
pub use sink::CaptureSink;
