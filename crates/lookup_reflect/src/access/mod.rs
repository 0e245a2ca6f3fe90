//! Dotted path lookups over reflected values.
//!
//! A path is a list of segments joined by [`Options::split_token`]. Each
//! segment names a struct field or a map key, optionally followed by a list
//! index: `cast[0].role`.
//!
//! Resolution rules:
//!
//! - Pointers are followed transparently at every step. An unset pointer is
//!   an absent value: it is dropped from broadcasts and reported as
//!   [`LookupError::KeyNotFound`] otherwise.
//! - Field names and map keys match exactly first. With
//!   [`Options::case_insensitive`] or [`Options::match_functions`], the first
//!   field in declaration order (or the first key in iteration order) that
//!   matches is used instead.
//! - A segment that fails on a list or map is broadcast: the rest of the path
//!   is applied to every element, and the results are flattened one level into
//!   a single [`Merged`] sequence. A broadcast over an empty collection yields
//!   an empty sequence typed from [`TypeInfo`](crate::info::TypeInfo) alone.
//! - With [`Options::expand_string_as_json`], a string holding a JSON object
//!   is parsed before the next segment is applied to it.
//!
//! # Examples
//!
//! ```
//! use lookup_reflect::derive::Reflect;
//! use lookup_reflect::access::{Options, ReflectLookup};
//!
//! #[derive(Reflect)]
//! struct Episode {
//!     title: String,
//!     guests: Vec<String>,
//! }
//!
//! #[derive(Reflect)]
//! struct Season {
//!     episodes: Vec<Episode>,
//! }
//!
//! let season = Season {
//!     episodes: vec![
//!         Episode { title: "Pilot".into(), guests: vec!["Amy".into()] },
//!         Episode { title: "Finale".into(), guests: vec!["Bo".into(), "Cy".into()] },
//!     ],
//! };
//! let options = Options::default();
//!
//! let title = season.lookup("episodes[1].title", &options).unwrap();
//! assert_eq!(title.downcast_ref::<String>().unwrap(), "Finale");
//!
//! // Lists of lists are flattened.
//! let guests = season.lookup("episodes.guests", &options).unwrap();
//! let guests = guests.as_merged().unwrap().downcast_items::<String>().unwrap();
//! assert_eq!(guests, ["Amy", "Bo", "Cy"]);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod aggregate;
mod error;
mod expand;
mod options;
mod path;
mod reflect_lookup;
mod resolve;
mod resolved;
mod structural;
mod walk;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use error::LookupError;
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_SPLIT_TOKEN, MatchFn, Options};
pub use path::{Path, Segment};
pub use reflect_lookup::{ReflectLookup, lookup};
pub use resolved::{Merged, Resolved};
