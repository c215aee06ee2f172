use regex::Regex;
use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::LazyLock;
use yell_types::Frame;

/// Supplies the call stack for a facade call.
///
/// Implementations return frames innermost first, starting with the
/// immediate caller of the facade (the code at `origin`).
pub trait FrameSource {
    fn frames(&self, origin: &Location<'static>) -> Vec<Frame>;
}

/// A fixed frame list, handy for tests and replays.
impl FrameSource for Vec<Frame> {
    fn frames(&self, _origin: &Location<'static>) -> Vec<Frame> {
        self.clone()
    }
}

static SYMBOL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+:\s+(.+?)\s*$").unwrap());

static LOCATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+at\s+(.+):(\d+):(\d+)\s*$").unwrap());

/// Symbols that belong to the runtime rather than to user code.
const RUNTIME_PREFIXES: &[&str] = &[
    "std::", "core::", "alloc::", "test::", "<std::", "<core::", "<alloc::", "<F as ",
];

/// Frames from the host's own call stack.
///
/// The immediate caller comes from `#[track_caller]` and is always
/// available. Enclosing function names come from a captured backtrace and
/// need debug symbols; without them the chain holds only the call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFrames;

#[derive(Debug, Clone, PartialEq)]
struct RawFrame {
    symbol: String,
    file: Option<String>,
    line: Option<u32>,
}

impl FrameSource for NativeFrames {
    fn frames(&self, origin: &Location<'static>) -> Vec<Frame> {
        let trace = Backtrace::force_capture().to_string();
        frames_from_backtrace(&trace, origin.file(), origin.line())
    }
}

fn frames_from_backtrace(trace: &str, origin_file: &str, origin_line: u32) -> Vec<Frame> {
    let raw = parse_backtrace(trace);
    let Some(start) = locate_caller(&raw, origin_file, origin_line) else {
        log::debug!("caller frame for {}:{} not found in backtrace", origin_file, origin_line);
        return vec![Frame::new(None, origin_file, Some(origin_line))];
    };

    let mut frames = vec![Frame::new(
        Some(&raw[start].symbol),
        origin_file,
        Some(origin_line),
    )];

    for entry in &raw[start + 1..] {
        if entry.symbol.contains("__rust_begin_short_backtrace") {
            break;
        }
        if is_runtime_symbol(&entry.symbol) {
            continue;
        }
        frames.push(Frame::new(
            Some(&entry.symbol),
            entry.file.clone().unwrap_or_default(),
            entry.line,
        ));
    }
    frames
}

fn parse_backtrace(trace: &str) -> Vec<RawFrame> {
    let mut frames: Vec<RawFrame> = Vec::new();
    for line in trace.lines() {
        if let Some(caps) = LOCATION_LINE.captures(line) {
            if let Some(last) = frames.last_mut()
                && last.file.is_none()
            {
                last.file = Some(caps[1].to_string());
                last.line = caps[2].parse().ok();
            }
        } else if let Some(caps) = SYMBOL_LINE.captures(line) {
            frames.push(RawFrame {
                symbol: caps[1].to_string(),
                file: None,
                line: None,
            });
        }
    }
    frames
}

fn locate_caller(raw: &[RawFrame], origin_file: &str, origin_line: u32) -> Option<usize> {
    let matches_file = |f: &RawFrame| f.file.as_deref().is_some_and(|p| same_file(p, origin_file));
    raw.iter()
        .position(|f| matches_file(f) && f.line == Some(origin_line))
        .or_else(|| raw.iter().position(matches_file))
}

fn same_file(backtrace_path: &str, origin_file: &str) -> bool {
    let a = normalize_path(backtrace_path);
    let b = normalize_path(origin_file);
    !a.is_empty() && !b.is_empty() && (a.ends_with(&b) || b.ends_with(&a))
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_start_matches("./").to_string()
}

fn is_runtime_symbol(symbol: &str) -> bool {
    !symbol.contains("::") || RUNTIME_PREFIXES.iter().any(|p| symbol.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/abc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:117:9
   1: std::backtrace::Backtrace::force_capture
             at /rustc/abc/library/std/src/backtrace.rs:312:9
   2: <yell_engine::frames::NativeFrames as yell_engine::frames::FrameSource>::frames
             at /home/dev/yell/crates/yell-engine/src/frames.rs:48:21
   3: yell::facade::Yell<W,S>::info
             at /home/dev/yell/crates/yell/src/facade.rs:120:9
   4: demo::net::connect
             at ./src/net.rs:14:5
   5: demo::net::connect::{{closure}}
             at ./src/net.rs:30:9
   6: core::ops::function::FnOnce::call_once
             at /rustc/abc/library/core/src/ops/function.rs:250:5
   7: demo::main
             at ./src/main.rs:8:5
   8: std::sys::backtrace::__rust_begin_short_backtrace
             at /rustc/abc/library/std/src/sys/backtrace.rs:152:18
   9: main
  10: __libc_start_main
";

    #[test]
    fn test_parse_backtrace_pairs_symbols_with_locations() {
        let raw = parse_backtrace(TRACE);
        assert_eq!(raw.len(), 11);
        assert_eq!(raw[4].symbol, "demo::net::connect");
        assert_eq!(raw[4].file.as_deref(), Some("./src/net.rs"));
        assert_eq!(raw[4].line, Some(14));
        assert_eq!(raw[9].file, None);
    }

    #[test]
    fn test_frames_start_at_caller_and_skip_runtime() {
        let frames = frames_from_backtrace(TRACE, "src/net.rs", 14);
        let labels: Vec<String> = frames.iter().map(Frame::chain_label).collect();
        assert_eq!(labels, vec!["connect()", "connect()", "main()"]);
        assert_eq!(frames[0].file, "src/net.rs");
        assert_eq!(frames[0].line, Some(14));
    }

    #[test]
    fn test_line_mismatch_falls_back_to_file_match() {
        let frames = frames_from_backtrace(TRACE, "src/main.rs", 99);
        assert_eq!(frames[0].function_name().as_deref(), Some("main"));
        assert_eq!(frames[0].line, Some(99));
    }

    #[test]
    fn test_missing_symbols_fall_back_to_call_site() {
        let frames = frames_from_backtrace("disabled backtrace", "src/lib.rs", 3);
        assert_eq!(frames, vec![Frame::new(None, "src/lib.rs", Some(3))]);
    }

    #[test]
    fn test_native_frames_resolve_this_file() {
        let frames = NativeFrames.frames(Location::caller());
        assert!(!frames.is_empty());
        assert_eq!(frames[0].file_stem(), "frames");
    }
}
