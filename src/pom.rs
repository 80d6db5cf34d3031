//! # POM Data Model
//!
//! This module defines the data structures that represent a Maven POM for one
//! publication, along with the defaults template used to fill gaps across a
//! multi-module project.
//!
//! ## Key Components
//!
//! - **`Pom`**: the full metadata document for a single publication. Identity
//!   fields (`group_id`, `artifact_id`, `version`) are plain strings; every
//!   other scalar is optional, collections start empty, and composite blocks
//!   (`scm`, `organization`, ...) are only materialized when they have
//!   content.
//!
//! - **`PomDefaults`**: a POM-shaped value where everything is optional, used
//!   purely as a fallback source. A root-level `PomDefaults` seeds each
//!   module's own defaults, and the merged result fills the module's `Pom`
//!   (see the `merge` module).
//!
//! Both shapes deserialize from the publish manifest with `serde`, using the
//! Maven element names (`inceptionYear`, `developerConnection`, ...) so the
//! YAML reads like the POM it produces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A license entry (`<license>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
    /// `repo` or `manual` per the Maven POM reference.
    pub distribution: Option<String>,
    pub comments: Option<String>,
}

impl License {
    /// The Apache License, Version 2.0.
    pub fn apache2() -> Self {
        Self {
            name: Some("The Apache License, Version 2.0".to_string()),
            url: Some("http://www.apache.org/licenses/LICENSE-2.0.txt".to_string()),
            ..Self::default()
        }
    }

    /// The MIT license.
    pub fn mit() -> Self {
        Self {
            name: Some("MIT License".to_string()),
            url: Some("http://www.opensource.org/licenses/mit-license.php".to_string()),
            ..Self::default()
        }
    }
}

/// A developer entry (`<developer>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Developer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub roles: Vec<String>,
    pub timezone: Option<String>,
    pub properties: BTreeMap<String, String>,
}

/// A contributor entry (`<contributor>`); a developer without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contributor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub roles: Vec<String>,
    pub timezone: Option<String>,
    pub properties: BTreeMap<String, String>,
}

/// A mailing list entry (`<mailingList>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MailingList {
    pub name: Option<String>,
    pub subscribe: Option<String>,
    pub unsubscribe: Option<String>,
    pub post: Option<String>,
    pub archive: Option<String>,
    pub other_archives: Vec<String>,
}

/// The source control block (`<scm>`). Required by Maven Central with
/// non-blank `connection`, `developerConnection` and `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scm {
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
    pub url: Option<String>,
    pub tag: Option<String>,
}

impl Scm {
    pub fn is_empty(&self) -> bool {
        self.connection.is_none()
            && self.developer_connection.is_none()
            && self.url.is_none()
            && self.tag.is_none()
    }
}

/// The organization block (`<organization>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl Organization {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none()
    }
}

/// The issue tracker block (`<issueManagement>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueManagement {
    pub system: Option<String>,
    pub url: Option<String>,
}

impl IssueManagement {
    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.url.is_none()
    }
}

/// The continuous integration block (`<ciManagement>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CiManagement {
    pub system: Option<String>,
    pub url: Option<String>,
}

impl CiManagement {
    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.url.is_none()
    }
}

/// The relocation sub-block of `<distributionManagement>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relocation {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub message: Option<String>,
}

impl Relocation {
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none()
            && self.artifact_id.is_none()
            && self.version.is_none()
            && self.message.is_none()
    }
}

/// The distribution management block (`<distributionManagement>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistributionManagement {
    pub download_url: Option<String>,
    pub relocation: Option<Relocation>,
}

impl DistributionManagement {
    pub fn is_empty(&self) -> bool {
        self.download_url.is_none() && self.relocation.as_ref().is_none_or(Relocation::is_empty)
    }
}

/// The full POM for one publication.
///
/// Created per publication at resolution time, mutated only by the defaults
/// merge, then rendered to XML and validated. Composite blocks stay `None`
/// unless they have at least one sub-field set; an empty block is never
/// written to the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pom {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// `jar`, `aar` or `pom`; omitted from the document when `None`.
    pub packaging: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub inception_year: Option<String>,
    pub licenses: Vec<License>,
    pub developers: Vec<Developer>,
    pub contributors: Vec<Contributor>,
    pub mailing_lists: Vec<MailingList>,
    pub organization: Option<Organization>,
    pub scm: Option<Scm>,
    pub issue_management: Option<IssueManagement>,
    pub ci_management: Option<CiManagement>,
    pub distribution_management: Option<DistributionManagement>,
}

impl Pom {
    /// Create a POM with only the identity coordinates set.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Create a POM from identity coordinates plus explicitly configured
    /// fields. Explicit fields become the POM's own values, so a later
    /// defaults merge will not touch them; explicit collection entries sort
    /// before any appended default entries.
    pub fn with_fields(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        fields: PomDefaults,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: None,
            name: fields.name,
            description: fields.description,
            url: fields.url,
            inception_year: fields.inception_year,
            licenses: fields.licenses,
            developers: fields.developers,
            contributors: fields.contributors,
            mailing_lists: fields.mailing_lists,
            organization: materialize(fields.organization, Organization::is_empty),
            scm: materialize(fields.scm, Scm::is_empty),
            issue_management: materialize(fields.issue_management, IssueManagement::is_empty),
            ci_management: materialize(fields.ci_management, CiManagement::is_empty),
            distribution_management: materialize(
                fields.distribution_management,
                DistributionManagement::is_empty,
            ),
        }
    }
}

fn materialize<T>(block: T, is_empty: impl Fn(&T) -> bool) -> Option<T> {
    if is_empty(&block) {
        None
    } else {
        Some(block)
    }
}

/// A POM-shaped template where every field is optional.
///
/// Defaults are a fallback source only: they are configured once (root first,
/// then per module), read-only during merging, and never written back. The
/// composite blocks are always present structurally; a block with no set
/// sub-field is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomDefaults {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub inception_year: Option<String>,
    pub licenses: Vec<License>,
    pub developers: Vec<Developer>,
    pub contributors: Vec<Contributor>,
    pub mailing_lists: Vec<MailingList>,
    pub organization: Organization,
    pub scm: Scm,
    pub issue_management: IssueManagement,
    pub ci_management: CiManagement,
    pub distribution_management: DistributionManagement,
}

impl PomDefaults {
    /// Point `url` and the `scm` triple at a GitHub repository.
    pub fn github(&mut self, user: &str, project: &str) {
        let github_url = format!("https://github.com/{}/{}", user, project);
        let git_url = format!("{}.git", github_url);
        self.url = Some(github_url);
        self.scm.connection = Some(git_url.clone());
        self.scm.developer_connection = Some(git_url.clone());
        self.scm.url = Some(git_url);
    }

    /// [`github`](Self::github) plus a `<developer>` entry whose id is the
    /// GitHub user.
    pub fn github_with_developer(&mut self, user: &str, project: &str, developer: &str) {
        self.github(user, project);
        self.developers.push(Developer {
            id: Some(user.to_string()),
            name: Some(developer.to_string()),
            ..Developer::default()
        });
    }
}
