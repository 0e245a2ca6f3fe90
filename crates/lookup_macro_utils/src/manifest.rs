use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how a workspace crate is
/// reachable from the crate that invokes a derive macro.
///
/// # Example
///
/// ```rust
/// # use lookup_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("lookup_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. The crate is listed in `dependencies`: `::crate_name`.
/// 2. The crate name starts with `lookup_` and the caller depends on the
///    facade crate `lookup`: `::lookup::short_name`
///    (e.g. `lookup_reflect` -> `::lookup::reflect`).
/// 3. Repeat 1-2 with `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate that derives on its own types must alias itself, for example
/// `extern crate self as lookup_reflect;`, so rule 4 resolves inside it.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "lookup";
const MEMBER_PREFIX: &str = "lookup_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        Document::parse(text.into_boxed_str())
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::parse_path(&format!("::{FACADE_NAME}::{module}")))
    }

    /// Returns the [`syn::Path`] of the package `name` as seen from the
    /// caller. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|key| match self.manifest.get(key) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modified time
    /// changes. Callers should still resolve paths once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time(&path).expect("The Cargo.toml should have a modified time.");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}
