use std::cell::RefCell;
use std::panic::Location;
use std::rc::Rc;
use yell_engine::FrameSource;
use yell_types::Frame;

/// A call stack the test controls.
///
/// Clones share the same frames, so a test can keep one handle and move
/// another into the facade, then switch call sites between calls.
#[derive(Debug, Clone, Default)]
pub struct SyntheticFrames {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl SyntheticFrames {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: Rc::new(RefCell::new(frames)),
        }
    }

    /// Replace the whole stack (innermost frame first).
    pub fn set(&self, frames: Vec<Frame>) {
        *self.frames.borrow_mut() = frames;
    }

    /// Add an enclosing frame.
    pub fn push(&self, frame: Frame) {
        self.frames.borrow_mut().push(frame);
    }

    pub fn clear(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl FrameSource for SyntheticFrames {
    fn frames(&self, _origin: &Location<'static>) -> Vec<Frame> {
        self.frames.borrow().clone()
    }
}
