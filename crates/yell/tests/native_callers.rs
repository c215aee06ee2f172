#[path = "support/other_site.rs"]
mod other_site;

use yell::{CallerRegistry, NativeFrames, Settings, Yell, values};
use yell_testing::CaptureSink;

fn native_yell() -> (Yell<CaptureSink, NativeFrames>, CaptureSink) {
    let settings = Settings {
        show_timestamp: false,
        ..Settings::default()
    };
    let sink = CaptureSink::new();
    let yell = Yell::with_parts(settings, CallerRegistry::new(), sink.clone(), NativeFrames);
    (yell, sink)
}

#[test]
fn test_identity_is_the_calling_file() {
    let (mut yell, _) = native_yell();
    yell.print(&values!["hello"]).unwrap();
    let line = line!() - 1;

    let state = yell.registry().get("native_callers").unwrap();
    assert_eq!(state.total_calls, 1);
    assert_eq!(state.file_name.as_deref(), Some("native_callers.rs"));
    assert_eq!(state.last_line, Some(line));
    assert!(!state.last_stack.is_empty());
}

#[test]
fn test_same_site_twice_counts_two_and_collapses() {
    let (mut yell, sink) = native_yell();
    for _ in 0..2 {
        yell.print(&values!["again"]).unwrap();
    }

    let state = yell.registry().get("native_callers").unwrap();
    assert_eq!(state.total_calls, 2);
    assert_eq!(state.last_function_calls(), 2);

    let plain = sink.plain();
    assert_eq!(plain.matches("native_callers.rs  ->").count(), 1);
    assert_eq!(plain.matches("  |---|  native_callers.").count(), 1);
}

#[test]
fn test_two_files_get_two_full_headers() {
    let (mut yell, sink) = native_yell();
    yell.print(&values!["here"]).unwrap();
    other_site::shout(&mut yell).unwrap();

    let plain = sink.plain();
    assert!(plain.contains("native_callers.rs  ->"));
    assert!(plain.contains("other_site.rs  ->"));
    assert_eq!(yell.last_caller(), Some("other_site"));
    assert_eq!(yell.registry().get("other_site").map(|c| c.total_calls), Some(1));
}

#[test]
fn test_disabled_file_from_settings() {
    let mut settings = Settings {
        show_timestamp: false,
        ..Settings::default()
    };
    settings.modules.insert(
        "other_site".to_string(),
        yell::ModuleSettings {
            on: false,
            lvl: 1,
        },
    );
    let registry = settings.registry();
    let sink = CaptureSink::new();
    let mut yell = Yell::with_parts(settings, registry, sink.clone(), NativeFrames);

    other_site::shout(&mut yell).unwrap();
    assert!(sink.is_empty());
    assert_eq!(yell.registry().get("other_site").map(|c| c.total_calls), Some(1));
}
