use crate::manifest::{parse_manifest_file, scalar_text, value_kind, ManifestError};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Fixed location of the version field relative to an anchor directory.
///
/// The manifest lives one level above the anchor, inside `subdir`:
///
/// ```text
/// <anchor>/..
/// ├── <anchor>/            (e.g. docker/, where get-version is installed)
/// └── <subdir>/<file_name> (e.g. superset-frontend/package.json)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestLayout {
    pub subdir: &'static str,
    pub file_name: &'static str,
    pub key: &'static str,
}

impl ManifestLayout {
    pub const DEFAULT: Self = Self {
        subdir: "superset-frontend",
        file_name: "package.json",
        key: "version",
    };

    /// Project root: the anchor with one trailing component removed.
    ///
    /// The ascent is lexical, so `a/b/.` and `a/b` both yield `a`, while
    /// `.` and `..` get an explicit `..` appended.
    pub fn project_root(&self, anchor: &Path) -> Result<PathBuf, ManifestError> {
        match anchor.components().next_back() {
            Some(Component::Normal(_)) => anchor
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| ManifestError::NoParent(anchor.to_path_buf())),
            Some(Component::CurDir | Component::ParentDir) | None => Ok(anchor.join("..")),
            Some(Component::RootDir | Component::Prefix(_)) => {
                Err(ManifestError::NoParent(anchor.to_path_buf()))
            }
        }
    }

    pub fn manifest_path(&self, anchor: &Path) -> Result<PathBuf, ManifestError> {
        Ok(self
            .project_root(anchor)?
            .join(self.subdir)
            .join(self.file_name))
    }

    /// Read the manifest below `anchor` and return the value under `key`.
    pub fn resolve(&self, anchor: &Path) -> Result<String, ManifestError> {
        let path = self.manifest_path(anchor)?;
        debug!("reading manifest {}", path.display());

        let manifest = parse_manifest_file(&path)?;
        trace!("manifest has {} top-level keys", manifest.len());

        let value = manifest
            .field(self.key)
            .ok_or_else(|| ManifestError::MissingField {
                path: path.clone(),
                key: self.key.to_owned(),
            })?;
        let version = scalar_text(value).ok_or_else(|| ManifestError::UnsupportedValue {
            path: path.clone(),
            key: self.key.to_owned(),
            kind: value_kind(value),
        })?;

        debug!("resolved {} = {version:?}", self.key);
        Ok(version)
    }
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolve the product version using the standard layout.
pub fn resolve_version(anchor: &Path) -> Result<String, ManifestError> {
    ManifestLayout::DEFAULT.resolve(anchor)
}
