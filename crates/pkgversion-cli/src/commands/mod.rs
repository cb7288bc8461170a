pub mod resolve;

use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_MANIFEST_ERROR: u8 = 2;

/// Directory holding the running `get-version` binary.
pub fn executable_anchor() -> Result<PathBuf, String> {
    let exe = std::env::current_exe().map_err(|e| format!("cannot locate executable: {e}"))?;
    anchor_of(&exe)
}

fn anchor_of(exe: &Path) -> Result<PathBuf, String> {
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("executable path '{}' has no parent directory", exe.display()))
}
