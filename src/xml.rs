//! # POM Rendering
//!
//! Renders a [`Pom`] to `pom.xml` text. The output is deterministic: elements
//! appear in the canonical Maven order, developer/contributor properties are
//! emitted in sorted key order, and optional blocks and empty collections are
//! omitted entirely, never written as empty elements.
//!
//! The renderer is a plain string emitter; the parse side of the XML concern
//! (validation) lives in the `validate` module.

use crate::pom::{
    CiManagement, Contributor, Developer, DistributionManagement, IssueManagement, License,
    MailingList, Organization, Pom, Relocation, Scm,
};

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render a POM document as XML text.
pub fn render_pom(pom: &Pom) -> String {
    let mut w = XmlWriter::new();
    w.raw(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    w.raw(&format!(
        r#"<project xmlns="{}" xmlns:xsi="{}" xsi:schemaLocation="{}">"#,
        POM_NAMESPACE, XSI_NAMESPACE, SCHEMA_LOCATION
    ));
    w.depth = 1;

    w.leaf("modelVersion", "4.0.0");
    w.leaf("groupId", &pom.group_id);
    w.leaf("artifactId", &pom.artifact_id);
    w.leaf("version", &pom.version);
    w.leaf_opt("packaging", &pom.packaging);
    w.leaf_opt("name", &pom.name);
    w.leaf_opt("description", &pom.description);
    w.leaf_opt("url", &pom.url);
    w.leaf_opt("inceptionYear", &pom.inception_year);

    if let Some(organization) = &pom.organization {
        write_organization(&mut w, organization);
    }
    if !pom.licenses.is_empty() {
        w.open("licenses");
        for license in &pom.licenses {
            write_license(&mut w, license);
        }
        w.close("licenses");
    }
    if !pom.developers.is_empty() {
        w.open("developers");
        for developer in &pom.developers {
            write_developer(&mut w, developer);
        }
        w.close("developers");
    }
    if !pom.contributors.is_empty() {
        w.open("contributors");
        for contributor in &pom.contributors {
            write_contributor(&mut w, contributor);
        }
        w.close("contributors");
    }
    if !pom.mailing_lists.is_empty() {
        w.open("mailingLists");
        for mailing_list in &pom.mailing_lists {
            write_mailing_list(&mut w, mailing_list);
        }
        w.close("mailingLists");
    }
    if let Some(scm) = &pom.scm {
        write_scm(&mut w, scm);
    }
    if let Some(issue_management) = &pom.issue_management {
        write_issue_management(&mut w, issue_management);
    }
    if let Some(ci_management) = &pom.ci_management {
        write_ci_management(&mut w, ci_management);
    }
    if let Some(distribution_management) = &pom.distribution_management {
        write_distribution_management(&mut w, distribution_management);
    }

    w.depth = 0;
    w.raw("</project>");
    w.finish()
}

fn write_organization(w: &mut XmlWriter, organization: &Organization) {
    w.open("organization");
    w.leaf_opt("name", &organization.name);
    w.leaf_opt("url", &organization.url);
    w.close("organization");
}

fn write_license(w: &mut XmlWriter, license: &License) {
    w.open("license");
    w.leaf_opt("name", &license.name);
    w.leaf_opt("url", &license.url);
    w.leaf_opt("distribution", &license.distribution);
    w.leaf_opt("comments", &license.comments);
    w.close("license");
}

fn write_developer(w: &mut XmlWriter, developer: &Developer) {
    w.open("developer");
    w.leaf_opt("id", &developer.id);
    w.leaf_opt("name", &developer.name);
    w.leaf_opt("email", &developer.email);
    w.leaf_opt("url", &developer.url);
    w.leaf_opt("organization", &developer.organization);
    w.leaf_opt("organizationUrl", &developer.organization_url);
    write_roles(w, &developer.roles);
    w.leaf_opt("timezone", &developer.timezone);
    write_properties(w, &developer.properties);
    w.close("developer");
}

fn write_contributor(w: &mut XmlWriter, contributor: &Contributor) {
    w.open("contributor");
    w.leaf_opt("name", &contributor.name);
    w.leaf_opt("email", &contributor.email);
    w.leaf_opt("url", &contributor.url);
    w.leaf_opt("organization", &contributor.organization);
    w.leaf_opt("organizationUrl", &contributor.organization_url);
    write_roles(w, &contributor.roles);
    w.leaf_opt("timezone", &contributor.timezone);
    write_properties(w, &contributor.properties);
    w.close("contributor");
}

fn write_roles(w: &mut XmlWriter, roles: &[String]) {
    if roles.is_empty() {
        return;
    }
    w.open("roles");
    for role in roles {
        w.leaf("role", role);
    }
    w.close("roles");
}

fn write_properties(w: &mut XmlWriter, properties: &std::collections::BTreeMap<String, String>) {
    if properties.is_empty() {
        return;
    }
    w.open("properties");
    for (key, value) in properties {
        w.leaf(key, value);
    }
    w.close("properties");
}

fn write_mailing_list(w: &mut XmlWriter, mailing_list: &MailingList) {
    w.open("mailingList");
    w.leaf_opt("name", &mailing_list.name);
    w.leaf_opt("subscribe", &mailing_list.subscribe);
    w.leaf_opt("unsubscribe", &mailing_list.unsubscribe);
    w.leaf_opt("post", &mailing_list.post);
    w.leaf_opt("archive", &mailing_list.archive);
    if !mailing_list.other_archives.is_empty() {
        w.open("otherArchives");
        for other_archive in &mailing_list.other_archives {
            w.leaf("otherArchive", other_archive);
        }
        w.close("otherArchives");
    }
    w.close("mailingList");
}

fn write_scm(w: &mut XmlWriter, scm: &Scm) {
    w.open("scm");
    w.leaf_opt("connection", &scm.connection);
    w.leaf_opt("developerConnection", &scm.developer_connection);
    w.leaf_opt("url", &scm.url);
    w.leaf_opt("tag", &scm.tag);
    w.close("scm");
}

fn write_issue_management(w: &mut XmlWriter, issue_management: &IssueManagement) {
    w.open("issueManagement");
    w.leaf_opt("system", &issue_management.system);
    w.leaf_opt("url", &issue_management.url);
    w.close("issueManagement");
}

fn write_ci_management(w: &mut XmlWriter, ci_management: &CiManagement) {
    w.open("ciManagement");
    w.leaf_opt("system", &ci_management.system);
    w.leaf_opt("url", &ci_management.url);
    w.close("ciManagement");
}

fn write_distribution_management(w: &mut XmlWriter, distribution_management: &DistributionManagement) {
    w.open("distributionManagement");
    w.leaf_opt("downloadUrl", &distribution_management.download_url);
    if let Some(relocation) = &distribution_management.relocation {
        write_relocation(w, relocation);
    }
    w.close("distributionManagement");
}

fn write_relocation(w: &mut XmlWriter, relocation: &Relocation) {
    w.open("relocation");
    w.leaf_opt("groupId", &relocation.group_id);
    w.leaf_opt("artifactId", &relocation.artifact_id);
    w.leaf_opt("version", &relocation.version);
    w.leaf_opt("message", &relocation.message);
    w.close("relocation");
}

struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn raw(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn open(&mut self, name: &str) {
        self.line(&format!("<{}>", name));
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth -= 1;
        self.line(&format!("</{}>", name));
    }

    fn leaf(&mut self, name: &str, value: &str) {
        self.line(&format!("<{}>{}</{}>", name, escape_text(value), name));
    }

    fn leaf_opt(&mut self, name: &str, value: &Option<String>) {
        if let Some(value) = value {
            self.leaf(name, value);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
