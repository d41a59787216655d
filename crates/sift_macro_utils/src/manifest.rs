use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;
use std::{env, fs};

use toml_edit::{Document, Item, Table};

const FACADE: &str = "sift";
const PREFIX: &str = "sift_";

/// The parsed `Cargo.toml` of the crate a macro is expanded in.
///
/// Generated code has to name `sift_reflect` the way the calling crate sees
/// it. [`get_crate_path`](Manifest::get_crate_path) looks it up in this
/// order:
///
/// 1. `[dependencies]`: the crate itself gives `::sift_reflect`, the facade
///    gives `::sift::reflect`.
/// 2. The same in `[dev-dependencies]`.
/// 3. `::sift_reflect` otherwise.
///
/// ```rust
/// # use sift_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("sift_reflect"));
/// ```
///
/// Inside `sift_reflect` itself, `extern crate self as sift_reflect;` makes
/// the absolute path resolve.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    fn path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(path.exists(), "no Cargo.toml at {}", path.display());
        path
    }

    fn load(path: &PathBuf, modified_time: SystemTime) -> Self {
        let text = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
        let manifest = Document::parse(text.into_boxed_str())
            .unwrap_or_else(|e| panic!("cannot parse {}: {e}", path.display()));
        Self {
            manifest,
            modified_time,
        }
    }

    fn lookup(table: &Table, name: &str) -> Option<syn::Path> {
        if table.contains_key(name) {
            return syn::parse_str(&format!("::{name}")).ok();
        }
        let module = name.strip_prefix(PREFIX)?;
        if table.contains_key(FACADE) {
            return syn::parse_str(&format!("::{FACADE}::{module}")).ok();
        }
        None
    }

    /// Returns the path of the crate `name` as seen from the calling crate.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|key| match self.manifest.get(key) {
                Some(Item::Table(table)) => Some(table),
                _ => None,
            })
            .find_map(|table| Self::lookup(table, name))
            .unwrap_or_else(|| {
                syn::parse_str(&format!("::{name}")).expect("crate names are valid paths")
            })
    }

    /// Runs `func` with the calling crate's manifest.
    ///
    /// Manifests are parsed once per path, and again only when the file
    /// changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::path();
        let modified_time = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .expect("Cargo.toml has a modified time");

        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified_time);
        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}
