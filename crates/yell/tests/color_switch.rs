use yell::{CallerRegistry, Settings, Yell, values};
use yell_testing::{CaptureSink, SyntheticFrames, fixtures};

// Single test: the color switch is process-wide.
#[test]
fn test_use_theme_false_disables_color() {
    let settings = Settings {
        use_theme: false,
        show_timestamp: false,
        ..Settings::default()
    };
    let sink = CaptureSink::new();
    let frames = SyntheticFrames::new(fixtures::net_stack());
    let mut yell = Yell::with_parts(settings, CallerRegistry::new(), sink.clone(), frames);

    assert!(!yell::color_enabled());
    yell.error(&values!["plain", 1, true]).unwrap();
    yell.print(&[fixtures::nested_document()]).unwrap();
    assert!(!sink.contents().contains('\x1b'));
    assert!(sink.contents().contains("-ERROR-"));

    yell::enable_color();
    sink.clear();
    yell.info(&values!["colored"]).unwrap();
    assert!(sink.contents().contains('\x1b'));
}
