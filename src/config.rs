//! # Publish Manifest Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.central-publish.yaml` manifest, as well as the logic for parsing it and
//! enforcing the load-time invariants.
//!
//! ## Shape
//!
//! ```yaml
//! group: com.example
//! version: 1.2.3
//! snapshot: false
//! defaults:
//!   description: Shared description
//!   licenses:
//!     - name: MIT License
//!       url: http://www.opensource.org/licenses/mit-license.php
//! modules:
//!   - name: core
//!   - name: client
//!     kind: multi-target
//!     targets: [jvm, js]
//!   - name: mobile
//!     kind: mobile-library
//!     defaults:
//!       description: Mobile variant
//! ```
//!
//! The root `defaults` seed every module's own `defaults`; a module's `pom`
//! section holds explicitly set fields that no default may override.
//!
//! ## Load-time invariants
//!
//! Root `group` and `version` must be set (and `version` must not be the
//! unset sentinel) before any module is processed; violations abort parsing
//! with a hinted configuration error rather than surfacing later as a
//! per-module validation failure.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pom::PomDefaults;
use crate::version;

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = ".central-publish.yaml";

/// The parsed publish manifest for a multi-module project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Maven group id applied to every module unless overridden.
    pub group: Option<String>,
    /// Version applied to every module unless overridden.
    pub version: Option<String>,
    /// If true, `-SNAPSHOT` is appended to each publication version.
    pub snapshot: bool,
    /// Root-level POM defaults, seeded into every module's defaults.
    pub defaults: PomDefaults,
    /// The publishable modules.
    pub modules: Vec<Module>,
    /// External signing configuration.
    pub signing: Signing,
}

/// One publishable module in the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    /// Module name; also the artifact id and POM name fallback.
    pub name: String,
    /// Artifact id override; defaults to the module name.
    #[serde(rename = "artifact-id")]
    pub artifact_id: Option<String>,
    /// Group id override; defaults to the root group.
    pub group: Option<String>,
    /// Version override; defaults to the root version.
    pub version: Option<String>,
    /// What kind of library this module publishes.
    pub kind: ModuleKind,
    /// Target platforms; only meaningful for `multi-target` modules.
    pub targets: Vec<String>,
    /// Module-level POM defaults, seeded from the root defaults.
    pub defaults: PomDefaults,
    /// Explicitly set POM fields; never overridden by any default.
    pub pom: PomDefaults,
}

/// The closed set of publication kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    /// A single-platform library: one `jar` publication.
    #[default]
    Library,
    /// A multi-target library: a root `pom` publication plus one `jar`
    /// publication per target.
    MultiTarget,
    /// A mobile library variant: one `aar` release publication.
    MobileLibrary,
}

/// External signing command configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Signing {
    /// Command to run per generated file; defaults to
    /// `gpg --armor --detach-sign` when signing is requested.
    pub command: Option<String>,
}

/// Parse a manifest from YAML and enforce the load-time invariants.
pub fn parse(content: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(content)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Load and parse a manifest file. See [`parse`].
pub fn from_file(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    match &manifest.group {
        Some(group) if !group.trim().is_empty() => {}
        _ => {
            return Err(Error::Config {
                message: "root group is not set".to_string(),
                hint: Some("add 'group: <your.group.id>' at the manifest root".to_string()),
            })
        }
    }
    match &manifest.version {
        Some(v) if !v.trim().is_empty() && !version::is_unset(v) => {}
        _ => {
            return Err(Error::Config {
                message: "root version is not set".to_string(),
                hint: Some("add 'version: <version>' at the manifest root".to_string()),
            })
        }
    }

    let mut seen = HashSet::new();
    for module in &manifest.modules {
        if module.name.trim().is_empty() {
            return Err(Error::Config {
                message: "module with empty name".to_string(),
                hint: Some("every entry under 'modules:' needs a 'name:'".to_string()),
            });
        }
        if !seen.insert(module.name.as_str()) {
            return Err(Error::Config {
                message: format!("duplicate module name: {}", module.name),
                hint: None,
            });
        }
        if module.kind != ModuleKind::MultiTarget && !module.targets.is_empty() {
            return Err(Error::Config {
                message: format!(
                    "module {} declares targets but is not multi-target",
                    module.name
                ),
                hint: Some("set 'kind: multi-target' or remove 'targets:'".to_string()),
            });
        }
    }
    Ok(())
}
