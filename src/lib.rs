//! # Central Publish Library
//!
//! This library provides the core functionality for preparing and validating
//! Maven POM metadata when publishing a multi-module project to Maven
//! Central. It is designed to be used by the `central-publish` command-line
//! tool but can also be integrated into other applications that drive a
//! publishing pipeline.
//!
//! ## Quick Example
//!
//! ```
//! use central_publish::config;
//! use central_publish::project::Project;
//!
//! let manifest = config::parse(r#"
//! group: com.example
//! version: 1.0.0
//! defaults:
//!   description: Example library
//!   url: https://example.com
//!   licenses:
//!     - name: MIT License
//!       url: http://www.opensource.org/licenses/mit-license.php
//!   developers:
//!     - name: Dev Eloper
//!   scm:
//!     connection: scm:git:git://example.com/repo.git
//!     developerConnection: scm:git:ssh://example.com/repo.git
//!     url: https://example.com/repo
//! modules:
//!   - name: core
//! "#).unwrap();
//!
//! let project = Project::resolve(&manifest);
//! let module = &project.modules[0];
//! let pom = module.finalize(&module.publications()[0]).unwrap();
//! assert!(pom.xml.contains("<name>core</name>"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`config`)**: the `.central-publish.yaml` schema describing
//!   the project's coordinates, defaults tree and modules.
//! - **POM model (`pom`)**: the metadata document for one publication, plus
//!   the all-optional defaults template.
//! - **Defaults merge (`merge`)**: fills gaps in a POM from the two-level
//!   defaults tree (root seeds module, module fills POM) without ever
//!   overwriting explicit values; repeatable entries are appended.
//! - **Rendering (`xml`)**: deterministic `pom.xml` output.
//! - **Validation (`validate`)**: the Maven Central completeness checks,
//!   applied to the serialized document, failing fast with a dotted field
//!   path.
//! - **Resolution (`project`)**: ties it together per module: seed, inherit
//!   coordinates, apply the snapshot rule, finalize and validate each
//!   publication.
//!
//! A validation failure aborts only the affected publication; the rest of
//! the project publishes normally. Nothing in this library performs network
//! I/O. Upload is left to the repository tooling, and signing is delegated
//! to an external command (`sign`).

pub mod config;
pub mod error;
pub mod merge;
pub mod output;
pub mod pom;
pub mod project;
pub mod sign;
pub mod validate;
pub mod version;
pub mod xml;

#[cfg(test)]
mod merge_proptest;
