use crate::Reflect;
use crate::access::{LookupError, Options, Path, Resolved, walk};

// -----------------------------------------------------------------------------
// Lookup

/// Resolves the dotted `path` against `value`.
///
/// Each segment names a struct field or a map key, and may index the list it
/// reaches with `name[idx]`. Pointers (`Option`, `Box`, `Arc`,
/// `Box<dyn Reflect>`, JSON `null`) are followed transparently.
///
/// When a segment cannot be resolved on a list or map, the remaining path is
/// applied to each element and the results are merged into one flat
/// [`Merged`](crate::access::Merged) sequence.
///
/// # Errors
///
/// - [`LookupError::MalformedIndex`]: unbalanced brackets or a bad index.
/// - [`LookupError::KeyNotFound`]: nothing matched, or the result is an unset
///   pointer.
/// - [`LookupError::InvalidIndexUsage`]: an index on a value that is not a list.
/// - [`LookupError::IndexOutOfRange`]
/// - [`LookupError::DepthLimitExceeded`]
///
/// # Examples
///
/// ```
/// use lookup_reflect::derive::Reflect;
/// use lookup_reflect::access::{lookup, Options};
///
/// #[derive(Reflect)]
/// struct Config {
///     name: String,
///     ports: Vec<u16>,
/// }
///
/// let config = Config { name: "web".into(), ports: vec![80, 443] };
///
/// let port = lookup(&config, "ports[1]", &Options::default()).unwrap();
/// assert_eq!(port.downcast_ref::<u16>(), Some(&443));
///
/// let options = Options::default().with_case_insensitive(true);
/// let name = lookup(&config, "NAME", &options).unwrap();
/// assert_eq!(name.downcast_ref::<String>().unwrap(), "web");
/// ```
pub fn lookup<'a>(
    value: &'a dyn Reflect,
    path: &str,
    options: &Options,
) -> Result<Resolved<'a>, LookupError> {
    let path = Path::parse(path, &options.split_token)?;
    walk::run(value, path.segments(), options)
}

// -----------------------------------------------------------------------------
// ReflectLookup

/// Method syntax for [`lookup`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use lookup_reflect::access::{Options, ReflectLookup};
///
/// let mut env: HashMap<String, Option<String>> = HashMap::new();
/// env.insert("HOME".into(), Some("/root".into()));
/// env.insert("SHELL".into(), None);
///
/// let home = env.lookup("HOME", &Options::default()).unwrap();
/// assert_eq!(home.downcast_ref::<String>().unwrap(), "/root");
///
/// // Unset values are not found.
/// assert!(env.lookup("SHELL", &Options::default()).is_err());
/// ```
pub trait ReflectLookup {
    /// Resolves `path` against `self`. See [`lookup`].
    fn lookup(&self, path: &str, options: &Options) -> Result<Resolved<'_>, LookupError>;
}

impl ReflectLookup for dyn Reflect {
    #[inline]
    fn lookup(&self, path: &str, options: &Options) -> Result<Resolved<'_>, LookupError> {
        lookup(self, path, options)
    }
}

impl<T: Reflect> ReflectLookup for T {
    #[inline]
    fn lookup(&self, path: &str, options: &Options) -> Result<Resolved<'_>, LookupError> {
        lookup(self, path, options)
    }
}
