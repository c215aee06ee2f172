//! The color switch is process-wide, so it gets its own test binary with a
//! single test to keep parallel tests from observing the toggle.

use yell_style::{ColorName, StyledText, ansi, color_enabled, disable_color, enable_color};

#[test]
fn test_global_color_switch() {
    let text = StyledText::new("status", ColorName::Green).on(ColorName::Black);

    assert!(color_enabled());
    let colored = text.render();
    assert!(ansi::has_escapes(&colored));
    assert_eq!(ansi::strip(&colored), "status");
    assert!(text.escape_overhead() > 0);

    disable_color();
    assert!(!color_enabled());
    assert_eq!(text.render(), "status");
    assert_eq!(text.escape_overhead(), 0);
    assert_eq!(text.visible_len(), 6);

    enable_color();
    assert_eq!(text.render(), colored);
}
