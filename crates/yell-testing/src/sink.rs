use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use yell_style::ansi;

/// An output sink that keeps everything written to it.
///
/// Clones share one buffer: hand one to the facade and read the other.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Rc<RefCell<Vec<u8>>>,
    writes: Rc<RefCell<usize>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, escapes included.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Everything written so far with ANSI escapes removed.
    pub fn plain(&self) -> String {
        ansi::strip(&self.contents()).into_owned()
    }

    /// Plain output split into lines.
    pub fn plain_lines(&self) -> Vec<String> {
        self.plain().lines().map(str::to_string).collect()
    }

    /// Number of `write` calls received.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
        *self.writes.borrow_mut() = 0;
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        *self.writes.borrow_mut() += 1;
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_strip() {
        let sink = CaptureSink::new();
        let mut writer = sink.clone();
        writer.write_all(b"\x1b[36mhello\x1b[0m\nworld\n").unwrap();

        assert_eq!(sink.plain_lines(), vec!["hello", "world"]);
        assert!(sink.contents().contains("\x1b[36m"));
        assert_eq!(sink.write_count(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }
}
