//! Package manifest parsing and version resolution for pkgversion.
//!
//! This crate reads the frontend `package.json` (`Manifest`), locates it from
//! an explicit anchor directory through a fixed relative offset
//! (`ManifestLayout`), and extracts the recorded product version
//! (`resolve_version`). The value is returned verbatim; no semver checks.

pub mod layout;
pub mod manifest;

pub use layout::{resolve_version, ManifestLayout};
pub use manifest::{
    parse_manifest_file, parse_manifest_slice, parse_manifest_str, Manifest, ManifestError,
};
