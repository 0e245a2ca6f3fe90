use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A name normalizer; two names match when it maps both to the same text.
pub type MatchFn = fn(&str) -> String;

/// Settings of a path lookup.
///
/// Deserializable from any serde format, missing fields take their default.
///
/// # Examples
///
/// ```
/// use lookup_reflect::access::Options;
///
/// let options: Options = serde_json::from_str(r#"{ "case_insensitive": true }"#).unwrap();
///
/// assert!(options.case_insensitive);
/// assert_eq!(options.split_token, ".");
///
/// let options = Options::default()
///     .with_split_token("/")
///     .with_expand_string_as_json(true);
/// assert!(options.expand_string_as_json);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Parse non-empty strings holding a JSON object before matching a segment
    /// against them.
    pub expand_string_as_json: bool,
    /// Fall back to case-insensitive matching of field names and map keys.
    pub case_insensitive: bool,
    /// Separator between path segments.
    pub split_token: String,
    /// Maximum nesting of broadcasts and JSON expansions.
    pub max_depth: usize,
    /// Extra normalizers tried after an exact match fails.
    #[serde(skip)]
    pub match_functions: Vec<MatchFn>,
}

/// Default value of [`Options::split_token`].
pub const DEFAULT_SPLIT_TOKEN: &str = ".";

/// Default value of [`Options::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for Options {
    fn default() -> Self {
        Self {
            expand_string_as_json: false,
            case_insensitive: false,
            split_token: String::from(DEFAULT_SPLIT_TOKEN),
            max_depth: DEFAULT_MAX_DEPTH,
            match_functions: Vec::new(),
        }
    }
}

impl Options {
    /// Sets [`Options::expand_string_as_json`].
    #[inline]
    pub fn with_expand_string_as_json(mut self, enabled: bool) -> Self {
        self.expand_string_as_json = enabled;
        self
    }

    /// Sets [`Options::case_insensitive`].
    #[inline]
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Sets [`Options::split_token`].
    #[inline]
    pub fn with_split_token(mut self, token: impl Into<String>) -> Self {
        self.split_token = token.into();
        self
    }

    /// Sets [`Options::max_depth`].
    #[inline]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Appends a name normalizer to [`Options::match_functions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_reflect::access::Options;
    ///
    /// fn snake(name: &str) -> String {
    ///     name.replace('_', "").to_lowercase()
    /// }
    ///
    /// let options = Options::default().with_match_function(snake);
    /// assert!(options.names_match("user_name", "UserName"));
    /// assert!(!options.names_match("user", "UserName"));
    /// ```
    #[inline]
    pub fn with_match_function(mut self, func: MatchFn) -> Self {
        self.match_functions.push(func);
        self
    }

    /// Returns `true` when a non-exact match may still be accepted.
    #[inline]
    pub(crate) fn has_fallback(&self) -> bool {
        self.case_insensitive || !self.match_functions.is_empty()
    }

    /// Returns `true` if `candidate` matches the `wanted` name through one
    /// of the enabled fallbacks.
    ///
    /// Exact equality is not a fallback and is checked by the caller.
    pub fn names_match(&self, candidate: &str, wanted: &str) -> bool {
        (self.case_insensitive && eq_ignore_case(candidate, wanted))
            || self
                .match_functions
                .iter()
                .any(|func| func(candidate) == func(wanted))
    }
}

/// Unicode case-insensitive equality.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::Options;

    #[test]
    fn serialized_options_round_trip_without_match_functions() {
        fn upper(name: &str) -> String {
            name.to_uppercase()
        }
        let options = Options::default()
            .with_case_insensitive(true)
            .with_max_depth(4)
            .with_match_function(upper);

        let text = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&text).unwrap();

        assert!(back.case_insensitive);
        assert_eq!(back.max_depth, 4);
        assert!(back.match_functions.is_empty());
    }

    #[test]
    fn case_folding_is_unicode_aware() {
        let options = Options::default().with_case_insensitive(true);
        assert!(options.names_match("ÉTÉ", "été"));
        assert!(options.names_match("Cast", "cAST"));
        assert!(!options.names_match("Cast", "Casts"));
        assert!(!Options::default().names_match("Cast", "cast"));
    }
}
