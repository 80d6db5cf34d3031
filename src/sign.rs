//! # Artifact Signing
//!
//! Maven Central requires detached signatures next to every uploaded file.
//! The cryptography itself stays external: this module shells out to a
//! configurable signing command (GnuPG by default) and records its stderr on
//! failure. Signing only runs when explicitly requested.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// The signing command used when the manifest does not configure one.
pub const DEFAULT_SIGN_COMMAND: &str = "gpg --armor --detach-sign --yes";

/// Run the signing command over one file and return the signature path.
///
/// The command is split on whitespace and the file path is appended as the
/// final argument, so `gpg --armor --detach-sign --yes target/lib-1.0.0.pom`
/// produces `target/lib-1.0.0.pom.asc`.
pub fn sign_file(command: &str, path: &Path) -> Result<PathBuf> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| Error::Config {
        message: "signing command is empty".to_string(),
        hint: Some("set 'signing.command' in the manifest or omit --sign".to_string()),
    })?;

    let output = Command::new(program)
        .args(parts)
        .arg(path)
        .output()
        .map_err(|e| Error::Signing {
            command: command.to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Signing {
            command: command.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(signature_path(path))
}

/// The detached signature path for a signed file (`<file>.asc`).
pub fn signature_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".asc");
    PathBuf::from(name)
}
