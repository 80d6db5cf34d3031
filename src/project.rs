//! # Project Resolution
//!
//! Turns a parsed [`Manifest`](crate::config::Manifest) into finalized,
//! validated POM documents. Resolution happens in two strictly ordered
//! passes:
//!
//! 1. **Seeding**: every module's defaults are seeded from the root defaults
//!    (and the module's group/version fall back to the root's). All seeding
//!    completes before any module is finalized, so no module ever observes a
//!    partially composed defaults tree.
//! 2. **Finalization**: per publication, a draft POM is built from the
//!    module's explicitly configured fields, the seeded defaults are merged
//!    in (module name as the name fallback), the snapshot suffix rule is
//!    applied, and the rendered XML is validated.
//!
//! A validation failure fails that publication only; other publications and
//! modules are unaffected. Each module's resolved state is private to that
//! module, so callers may finalize modules in parallel.

use crate::config::{Manifest, Module, ModuleKind};
use crate::error::Result;
use crate::merge::{merge_pom_defaults, seed_defaults};
use crate::pom::{Pom, PomDefaults};
use crate::validate::validate_pom_str;
use crate::version::{with_snapshot_suffix, UNSET_VERSION};
use crate::xml::render_pom;

/// The resolved publication kind, with multi-target carrying its targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicationKind {
    Library,
    MultiTarget { targets: Vec<String> },
    MobileLibrary,
}

/// One publishable artifact of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub artifact_id: String,
    pub packaging: String,
}

/// A module with inheritance and seeding applied, ready to finalize.
#[derive(Debug, Clone)]
pub struct ResolvedModule {
    pub name: String,
    /// Base artifact id; the module name unless overridden in the manifest.
    pub artifact_id: String,
    pub group: String,
    pub version: String,
    pub kind: PublicationKind,
    /// Module defaults with the root defaults seeded in.
    defaults: PomDefaults,
    /// Explicitly configured POM fields; defaults never override these.
    explicit: PomDefaults,
}

/// A finalized, validated POM ready to write to disk.
#[derive(Debug, Clone)]
pub struct PreparedPom {
    pub module: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub xml: String,
}

impl PreparedPom {
    /// Repository-layout file name, e.g. `lib-1.0.0.pom`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.pom", self.artifact_id, self.version)
    }
}

/// The fully resolved project.
#[derive(Debug, Clone)]
pub struct Project {
    pub modules: Vec<ResolvedModule>,
}

impl Project {
    /// Resolve a manifest: inherit group/version root-to-module, seed every
    /// module's defaults from the root defaults, apply the snapshot rule.
    ///
    /// Missing coordinates are not an error here; an empty group or the
    /// unset version sentinel surfaces as a validation failure on the
    /// publication instead. Manifests loaded through `config::parse` have
    /// already rejected those at load time.
    pub fn resolve(manifest: &Manifest) -> Self {
        let root_group = manifest.group.clone().unwrap_or_default();
        let root_version = manifest
            .version
            .clone()
            .unwrap_or_else(|| UNSET_VERSION.to_string());

        let modules = manifest
            .modules
            .iter()
            .map(|module| {
                let mut defaults = module.defaults.clone();
                seed_defaults(&mut defaults, &manifest.defaults);
                let version = module.version.clone().unwrap_or_else(|| root_version.clone());
                ResolvedModule {
                    name: module.name.clone(),
                    artifact_id: module
                        .artifact_id
                        .clone()
                        .unwrap_or_else(|| module.name.clone()),
                    group: module.group.clone().unwrap_or_else(|| root_group.clone()),
                    version: with_snapshot_suffix(&version, manifest.snapshot),
                    kind: resolve_kind(module),
                    defaults,
                    explicit: module.pom.clone(),
                }
            })
            .collect();

        Self { modules }
    }
}

fn resolve_kind(module: &Module) -> PublicationKind {
    match module.kind {
        ModuleKind::Library => PublicationKind::Library,
        ModuleKind::MultiTarget => PublicationKind::MultiTarget {
            targets: module.targets.clone(),
        },
        ModuleKind::MobileLibrary => PublicationKind::MobileLibrary,
    }
}

impl ResolvedModule {
    /// The publications this module produces, derived from its kind.
    pub fn publications(&self) -> Vec<Publication> {
        let artifact_id = self.artifact_id.clone();
        match &self.kind {
            PublicationKind::Library => vec![Publication {
                artifact_id,
                packaging: "jar".to_string(),
            }],
            PublicationKind::MultiTarget { targets } => {
                let mut publications = vec![Publication {
                    artifact_id: artifact_id.clone(),
                    packaging: "pom".to_string(),
                }];
                publications.extend(targets.iter().map(|target| Publication {
                    artifact_id: format!("{}-{}", artifact_id, target.to_lowercase()),
                    packaging: "jar".to_string(),
                }));
                publications
            }
            PublicationKind::MobileLibrary => vec![Publication {
                artifact_id,
                packaging: "aar".to_string(),
            }],
        }
    }

    /// Build, merge, render and validate the POM for one publication.
    ///
    /// The defaults merge runs exactly once per publication (the seeded
    /// defaults are composed once at resolution), keeping the merge's
    /// single-call contract.
    pub fn finalize(&self, publication: &Publication) -> Result<PreparedPom> {
        let mut pom = Pom::with_fields(
            self.group.clone(),
            publication.artifact_id.clone(),
            self.version.clone(),
            self.explicit.clone(),
        );
        pom.packaging = Some(publication.packaging.clone());
        merge_pom_defaults(&mut pom, &self.defaults, &self.name);

        let xml = render_pom(&pom);
        validate_pom_str(&xml)?;

        Ok(PreparedPom {
            module: self.name.clone(),
            artifact_id: publication.artifact_id.clone(),
            version: self.version.clone(),
            packaging: publication.packaging.clone(),
            xml,
        })
    }

    /// Finalize every publication of this module.
    pub fn finalize_all(&self) -> Vec<(Publication, Result<PreparedPom>)> {
        self.publications()
            .into_iter()
            .map(|publication| {
                let prepared = self.finalize(&publication);
                (publication, prepared)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::error::Error;

    const COMPLETE: &str = r#"
group: com.example
version: 1.0.0
defaults:
  description: Shared description
  url: https://example.com
  licenses:
    - name: MIT License
      url: http://www.opensource.org/licenses/mit-license.php
  developers:
    - name: Dev Eloper
  scm:
    connection: scm:git:git://example.com/repo.git
    developerConnection: scm:git:ssh://example.com/repo.git
    url: https://example.com/repo
modules:
  - name: core
"#;

    fn complete_manifest(extra_modules: &str) -> Manifest {
        config::parse(&format!("{}{}", COMPLETE, extra_modules)).unwrap()
    }

    #[test]
    fn test_library_kind_has_one_jar_publication() {
        let project = Project::resolve(&complete_manifest(""));
        let publications = project.modules[0].publications();
        assert_eq!(
            publications,
            vec![Publication {
                artifact_id: "core".to_string(),
                packaging: "jar".to_string()
            }]
        );
    }

    #[test]
    fn test_multi_target_kind_has_root_pom_and_target_jars() {
        let manifest = complete_manifest(
            "  - name: client\n    kind: multi-target\n    targets: [JVM, js]\n",
        );
        let project = Project::resolve(&manifest);
        let publications = project.modules[1].publications();
        let ids: Vec<_> = publications.iter().map(|p| p.artifact_id.as_str()).collect();
        assert_eq!(ids, vec!["client", "client-jvm", "client-js"]);
        assert_eq!(publications[0].packaging, "pom");
        assert_eq!(publications[1].packaging, "jar");
    }

    #[test]
    fn test_mobile_library_kind_publishes_aar() {
        let manifest = complete_manifest("  - name: mobile\n    kind: mobile-library\n");
        let project = Project::resolve(&manifest);
        let publications = project.modules[1].publications();
        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].packaging, "aar");
    }

    #[test]
    fn test_group_and_version_inherit_from_root() {
        let manifest = complete_manifest(
            "  - name: other\n    group: com.example.other\n    version: 9.9.9\n",
        );
        let project = Project::resolve(&manifest);
        assert_eq!(project.modules[0].group, "com.example");
        assert_eq!(project.modules[0].version, "1.0.0");
        assert_eq!(project.modules[1].group, "com.example.other");
        assert_eq!(project.modules[1].version, "9.9.9");
    }

    #[test]
    fn test_snapshot_suffix_applied_at_resolution() {
        let mut manifest = complete_manifest("");
        manifest.snapshot = true;
        let project = Project::resolve(&manifest);
        assert_eq!(project.modules[0].version, "1.0.0-SNAPSHOT");
    }

    #[test]
    fn test_snapshot_suffix_skipped_for_unset_version() {
        let mut manifest = complete_manifest("");
        manifest.version = None;
        manifest.snapshot = true;
        let project = Project::resolve(&manifest);
        assert_eq!(project.modules[0].version, UNSET_VERSION);
    }

    #[test]
    fn test_finalize_produces_valid_pom() {
        let project = Project::resolve(&complete_manifest(""));
        let module = &project.modules[0];
        let prepared = module.finalize(&module.publications()[0]).unwrap();
        assert!(prepared.xml.contains("<name>core</name>"));
        assert!(prepared.xml.contains("<description>Shared description</description>"));
        assert_eq!(prepared.file_name(), "core-1.0.0.pom");
    }

    #[test]
    fn test_unset_version_surfaces_as_validation_failure() {
        let mut manifest = complete_manifest("");
        manifest.version = None;
        let project = Project::resolve(&manifest);
        let module = &project.modules[0];
        let err = module.finalize(&module.publications()[0]).unwrap_err();
        assert_eq!(format!("{}", err), "invalid pom: version is not set");
    }

    #[test]
    fn test_failing_publication_does_not_affect_others() {
        // the second module pins description to an empty string, which no
        // default may override; only its publication fails
        let manifest = complete_manifest("  - name: broken\n    pom:\n      description: \"\"\n");
        let project = Project::resolve(&manifest);

        let good = &project.modules[0];
        assert!(good.finalize(&good.publications()[0]).is_ok());

        let bad = &project.modules[1];
        let err = bad.finalize(&bad.publications()[0]).unwrap_err();
        assert!(matches!(err, Error::InvalidPom(_)));
        assert_eq!(format!("{}", err), "invalid pom: description is blank");
    }

    #[test]
    fn test_module_defaults_win_over_root_defaults() {
        let manifest = complete_manifest(
            "  - name: special\n    defaults:\n      description: Module description\n",
        );
        let project = Project::resolve(&manifest);
        let module = &project.modules[1];
        let prepared = module.finalize(&module.publications()[0]).unwrap();
        assert!(prepared
            .xml
            .contains("<description>Module description</description>"));
    }

    #[test]
    fn test_artifact_id_override_keeps_name_fallback() {
        let manifest = complete_manifest("  - name: runtime\n    artifact-id: core-rt\n");
        let project = Project::resolve(&manifest);
        let module = &project.modules[1];
        assert_eq!(module.publications()[0].artifact_id, "core-rt");
        let prepared = module.finalize(&module.publications()[0]).unwrap();
        assert!(prepared.xml.contains("<artifactId>core-rt</artifactId>"));
        // the POM name still falls back to the module name
        assert!(prepared.xml.contains("<name>runtime</name>"));
    }
}
