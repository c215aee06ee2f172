use yell::{NativeFrames, Yell, values};
use yell_testing::CaptureSink;

/// Prints from a second source file so the caller identity differs.
pub fn shout(yell: &mut Yell<CaptureSink, NativeFrames>) -> yell::Result<()> {
    yell.print(&values!["from the other site"])
}
