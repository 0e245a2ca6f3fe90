//! Case-insensitive names and user normalization functions.

use std::collections::HashMap;

use lookup::reflect::derive::Reflect;
use lookup::{Options, lookup};

#[derive(Reflect)]
struct Settings {
    display_name: String,
    max_retries: u32,
    labels: HashMap<String, String>,
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn main() {
    env_logger::init();

    let settings = Settings {
        display_name: "primary".into(),
        max_retries: 3,
        labels: HashMap::from([("Team-Owner".to_string(), "ops".to_string())]),
    };

    let strict = Options::default();
    let folded = Options::default().with_case_insensitive(true);
    let squashed = Options::default().with_match_function(squash);

    for (label, options) in [("strict", &strict), ("folded", &folded), ("squashed", &squashed)] {
        for path in ["DISPLAY_NAME", "maxRetries", "labels.team-owner", "labels.TeamOwner"] {
            match lookup(&settings, path, options) {
                Ok(found) => println!("{label:<9} {path:<20} {found:?}"),
                Err(err) => println!("{label:<9} {path:<20} error: {err}"),
            }
        }
    }
}
