//! # POM Validation for Maven Central
//!
//! Maven Central rejects uploads whose POM is missing required metadata, and
//! it does so late, after artifacts have already been staged. This module
//! performs the same structural checks up front, against the serialized
//! document (not the in-memory model), so the generated file is the thing
//! being certified.
//!
//! ## What is checked
//!
//! Walking the `project` element's direct children in document order:
//!
//! - `groupId`, `artifactId`, `name`, `description`, `url`: non-blank text
//! - `version`: non-blank text, and not the unset sentinel (`unspecified`)
//! - `licenses`: at least one `license`, each with non-blank `name` and `url`
//! - `developers`: at least one `developer` with a non-blank `name`
//! - `scm`: non-blank `connection`, `developerConnection` and `url`
//!
//! Every one of those top-level elements must also be present at all; an
//! element that never appears is reported as missing. Only presence and
//! blankness are checked, never value formats.
//!
//! Validation is fail-fast: the first violation found (document order, then
//! the fixed required-field order for absent elements) is reported as a
//! structured [`Violation`] and the walk stops. Unknown elements are skipped.
//!
//! The XML is parsed with `xot` into a minimal element tree
//! ([`XmlElement`]); the walk itself operates on that plain tree and matches
//! element names without namespace qualification, so documents with or
//! without the Maven POM namespace validate the same way.

use std::fs;
use std::path::Path;

use thiserror::Error;
use xot::Xot;

use crate::error::{Error, Result};
use crate::version::UNSET_VERSION;

const GROUP_ID: &str = "groupId";
const ARTIFACT_ID: &str = "artifactId";
const VERSION: &str = "version";
const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const URL: &str = "url";
const LICENSES: &str = "licenses";
const LICENSE: &str = "license";
const DEVELOPERS: &str = "developers";
const DEVELOPER: &str = "developer";
const SCM: &str = "scm";
const CONNECTION: &str = "connection";
const DEVELOPER_CONNECTION: &str = "developerConnection";

/// Why a field failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// The element does not appear in the document.
    #[error("missing")]
    Missing,
    /// The element is present but its text is empty or whitespace.
    #[error("blank")]
    Blank,
    /// The version element holds the build system's unset sentinel.
    #[error("not set")]
    NotSet,
}

/// A single validation failure: a dotted field path plus the reason.
///
/// `context` qualifies nested fields (`license`, `developer`, `scm`) and is
/// absent for top-level ones, so the rendered message reads
/// `"developer.name is missing"` or `"url is blank"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{} is {}", context.map(|c| format!("{}.", c)).unwrap_or_default(), field, problem)]
pub struct Violation {
    context: Option<&'static str>,
    field: String,
    problem: Problem,
}

impl Violation {
    pub fn new(context: Option<&'static str>, field: impl Into<String>, problem: Problem) -> Self {
        Self {
            context,
            field: field.into(),
            problem,
        }
    }

    /// The dotted field path, e.g. `license.name`.
    pub fn path(&self) -> String {
        match self.context {
            Some(context) => format!("{}.{}", context, self.field),
            None => self.field.clone(),
        }
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }
}

/// A named element with text content and ordered children; the minimal
/// document shape the validator walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

/// Validate a serialized POM document.
///
/// Parses the XML and applies the Maven Central checks to the root `project`
/// element. Returns [`Error::InvalidPom`] with the first violation found, or
/// [`Error::Xml`] if the document is not well-formed.
pub fn validate_pom_str(xml: &str) -> Result<()> {
    let project = parse_document(xml)?;
    validate_project(&project)?;
    Ok(())
}

/// Validate a POM file on disk. See [`validate_pom_str`].
pub fn validate_pom_file(path: &Path) -> Result<()> {
    let xml = fs::read_to_string(path)?;
    validate_pom_str(&xml)
}

/// Parse XML into the element tree rooted at the document element.
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut xot = Xot::new();
    let doc = xot.parse(xml).map_err(|e| Error::Xml {
        message: e.to_string(),
    })?;
    let root = xot.document_element(doc).map_err(|e| Error::Xml {
        message: e.to_string(),
    })?;
    Ok(build_element(&xot, root))
}

fn build_element(xot: &Xot, node: xot::Node) -> XmlElement {
    let name = match xot.element(node) {
        Some(element) => {
            let (local, _namespace) = xot.name_ns_str(element.name());
            local.to_string()
        }
        None => String::new(),
    };
    let children: Vec<XmlElement> = xot
        .children(node)
        .filter(|child| xot.element(*child).is_some())
        .map(|child| build_element(xot, child))
        .collect();
    let text = if children.is_empty() {
        xot.text_content_str(node).unwrap_or_default().to_string()
    } else {
        String::new()
    };
    XmlElement {
        name,
        text,
        children,
    }
}

/// Walk a `project` element and verify every field Maven Central requires.
pub fn validate_project(project: &XmlElement) -> std::result::Result<(), Violation> {
    let mut visited: Vec<&str> = Vec::new();
    for child in &project.children {
        match child.name.as_str() {
            GROUP_ID | ARTIFACT_ID | NAME | DESCRIPTION | URL => {
                require_text(child, None)?;
                visited.push(&child.name);
            }
            VERSION => {
                require_text(child, None)?;
                if child.text == UNSET_VERSION {
                    return Err(Violation::new(None, VERSION, Problem::NotSet));
                }
                visited.push(&child.name);
            }
            LICENSES => {
                validate_licenses(child)?;
                visited.push(&child.name);
            }
            DEVELOPERS => {
                validate_developers(child)?;
                visited.push(&child.name);
            }
            SCM => {
                validate_scm(child)?;
                visited.push(&child.name);
            }
            _ => {}
        }
    }
    for field in [
        GROUP_ID,
        ARTIFACT_ID,
        VERSION,
        NAME,
        DESCRIPTION,
        URL,
        LICENSES,
        DEVELOPERS,
        SCM,
    ] {
        require_visited(&visited, field, None)?;
    }
    Ok(())
}

fn validate_licenses(licenses: &XmlElement) -> std::result::Result<(), Violation> {
    let mut license_found = false;
    for child in &licenses.children {
        if child.name == LICENSE {
            license_found = true;
            validate_license(child)?;
        }
    }
    if !license_found {
        return Err(Violation::new(None, LICENSE, Problem::Missing));
    }
    Ok(())
}

fn validate_license(license: &XmlElement) -> std::result::Result<(), Violation> {
    let mut visited: Vec<&str> = Vec::new();
    for child in &license.children {
        if child.name == NAME || child.name == URL {
            require_text(child, Some(LICENSE))?;
            visited.push(&child.name);
        }
    }
    require_visited(&visited, NAME, Some(LICENSE))?;
    require_visited(&visited, URL, Some(LICENSE))?;
    Ok(())
}

fn validate_developers(developers: &XmlElement) -> std::result::Result<(), Violation> {
    let mut developer_found = false;
    for child in &developers.children {
        if child.name == DEVELOPER {
            developer_found = true;
            validate_developer(child)?;
        }
    }
    if !developer_found {
        return Err(Violation::new(None, DEVELOPER, Problem::Missing));
    }
    Ok(())
}

fn validate_developer(developer: &XmlElement) -> std::result::Result<(), Violation> {
    let mut visited: Vec<&str> = Vec::new();
    for child in &developer.children {
        if child.name == NAME {
            require_text(child, Some(DEVELOPER))?;
            visited.push(&child.name);
        }
    }
    require_visited(&visited, NAME, Some(DEVELOPER))?;
    Ok(())
}

fn validate_scm(scm: &XmlElement) -> std::result::Result<(), Violation> {
    let mut visited: Vec<&str> = Vec::new();
    for child in &scm.children {
        if child.name == CONNECTION || child.name == DEVELOPER_CONNECTION || child.name == URL {
            require_text(child, Some(SCM))?;
            visited.push(&child.name);
        }
    }
    require_visited(&visited, CONNECTION, Some(SCM))?;
    require_visited(&visited, DEVELOPER_CONNECTION, Some(SCM))?;
    require_visited(&visited, URL, Some(SCM))?;
    Ok(())
}

fn require_text(
    element: &XmlElement,
    context: Option<&'static str>,
) -> std::result::Result<(), Violation> {
    if element.text.trim().is_empty() {
        return Err(Violation::new(context, element.name.clone(), Problem::Blank));
    }
    Ok(())
}

fn require_visited(
    visited: &[&str],
    field: &'static str,
    context: Option<&'static str>,
) -> std::result::Result<(), Violation> {
    if !visited.contains(&field) {
        return Err(Violation::new(context, field, Problem::Missing));
    }
    Ok(())
}
