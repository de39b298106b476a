use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find a path to an expando crate
/// that is valid from the crate invoking a derive.
///
/// # Example
///
/// ```rust,no_run
/// # use expando_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("expando_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the caller *is* the `expando` umbrella package, return `::expando::short_name`.
/// 2. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 3. If the requested crate name begins with `expando_` and the caller depends
///    on the `expando` umbrella, return `::expando::short_name`
///    (e.g. `expando_reflect` -> `::expando::reflect`).
/// 4. Repeat steps 2-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate referencing itself through the derive needs an
/// `extern crate self as crate_name;` alias in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_NAME: &str = "expando";
const CRATE_PREFIX: &str = "expando_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn umbrella_path(name: &str) -> Option<syn::Path> {
        let module = name.strip_prefix(CRATE_PREFIX)?;
        let mut path = Self::parse_str::<syn::Path>(&format!("::{UMBRELLA_NAME}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }
        if deps.contains_key(UMBRELLA_NAME) {
            return Self::umbrella_path(name);
        }
        None
    }

    fn package_name(&self) -> Option<&str> {
        match self.manifest.get("package") {
            Some(Item::Table(package)) => package.get("name").and_then(Item::as_str),
            _ => None,
        }
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if self.package_name() == Some(UMBRELLA_NAME)
            && let Some(val) = Self::umbrella_path(name)
        {
            return val;
        }

        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Run `func` against the caller's parsed Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when the file's modification
    /// time changes. Call this once per macro invocation and keep the result.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn segments(path: &syn::Path) -> Vec<String> {
        path.segments.iter().map(|s| s.ident.to_string()).collect()
    }

    #[test]
    fn umbrella_path() {
        let path = Manifest::umbrella_path("expando_reflect").unwrap();
        assert!(path.leading_colon.is_some());
        assert_eq!(segments(&path), ["expando", "reflect"]);

        assert!(Manifest::umbrella_path("serde").is_none());
    }

    #[test]
    fn dependency_lookup() {
        let deps: toml_edit::DocumentMut = "expando_reflect = \"0.0.1\"".parse().unwrap();
        let path = Manifest::find_in_deps(deps.as_table(), "expando_reflect").unwrap();
        assert_eq!(segments(&path), ["expando_reflect"]);

        let deps: toml_edit::DocumentMut = "expando = \"0.0.1\"".parse().unwrap();
        let path = Manifest::find_in_deps(deps.as_table(), "expando_reflect").unwrap();
        assert_eq!(segments(&path), ["expando", "reflect"]);

        let deps: toml_edit::DocumentMut = "serde = \"1\"".parse().unwrap();
        assert!(Manifest::find_in_deps(deps.as_table(), "expando_reflect").is_none());
    }
}
