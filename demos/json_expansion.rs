//! Walking into strings that hold JSON objects.

use lookup::reflect::derive::Reflect;
use lookup::{Options, lookup};

#[derive(Reflect)]
struct Event {
    kind: String,
    payload: String,
    extra: serde_json::Value,
}

fn main() {
    env_logger::init();

    let events = vec![
        Event {
            kind: "deploy".into(),
            payload: r#"{"service": "api", "replicas": [1, 2, 3]}"#.into(),
            extra: serde_json::json!({ "region": "eu", "tags": ["blue", "green"] }),
        },
        Event {
            kind: "rollback".into(),
            payload: r#"{"service": "worker", "reason": null}"#.into(),
            extra: serde_json::json!({ "region": "us", "tags": [] }),
        },
    ];

    let plain = Options::default();
    let expanding = Options::default().with_expand_string_as_json(true);

    for path in ["kind", "payload.service", "payload.replicas", "extra.tags", "payload.reason"] {
        for (label, options) in [("plain", &plain), ("expanding", &expanding)] {
            match lookup(&events, path, options) {
                Ok(found) => println!("{label:<10} {path:<18} {found:?}"),
                Err(err) => {
                    log::warn!("{path} failed: {err}");
                    println!("{label:<10} {path:<18} error: {err}");
                }
            }
        }
    }
}
