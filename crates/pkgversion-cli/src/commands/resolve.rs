use super::EXIT_SUCCESS;
use pkgversion_manifest::resolve_version;
use std::io::{ErrorKind, Write};
use std::path::Path;

pub fn run(anchor: &Path, out: &mut impl Write) -> Result<u8, String> {
    let version = resolve_version(anchor).map_err(|e| format!("manifest error: {e}"))?;
    match writeln!(out, "{version}").and_then(|()| out.flush()) {
        Ok(()) => Ok(EXIT_SUCCESS),
        // Reader went away (e.g. `get-version | head -c1`); nothing left to report.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(EXIT_SUCCESS),
        Err(e) => Err(format!("failed to write version: {e}")),
    }
}
