//! Sample inputs shared by the integration suites.

use serde_json::json;
use yell_types::{Frame, Value};

/// A three-frame stack: `main() -> run() -> connect()` with the facade
/// called from `src/net.rs` line 14.
pub fn net_stack() -> Vec<Frame> {
    vec![
        Frame::new(Some("app::net::connect"), "src/net.rs", Some(14)),
        Frame::new(Some("app::run"), "src/main.rs", Some(20)),
        Frame::new(Some("app::main"), "src/main.rs", Some(4)),
    ]
}

/// A second call site in a different file.
pub fn db_stack() -> Vec<Frame> {
    vec![
        Frame::new(Some("app::db::query"), "src/db.rs", Some(41)),
        Frame::new(Some("app::main"), "src/main.rs", Some(6)),
    ]
}

/// A module-scope call (no enclosing function).
pub fn script_stack() -> Vec<Frame> {
    vec![Frame::new(None, "scripts/setup.rs", Some(2))]
}

/// Mixed nesting with empty containers at several depths.
pub fn nested_document() -> Value {
    Value::from(json!({
        "name": "yell",
        "version": 1,
        "ratio": 0.5,
        "enabled": true,
        "owner": null,
        "tags": ["debug", "console", []],
        "limits": {
            "width": 80,
            "empty": {},
            "nested": {
                "deeper": [1, 2, {"deepest": "bottom"}]
            }
        }
    }))
}

/// A document with long strings at every depth.
pub fn wide_document() -> Value {
    let long = "lorem ipsum dolor sit amet ".repeat(8);
    Value::from(json!({
        "summary": long,
        "items": [long, {"detail": long, "more": [long]}]
    }))
}
