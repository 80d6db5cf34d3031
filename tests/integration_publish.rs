//! Integration tests for the full publish preparation pipeline.
//!
//! These tests exercise the library end-to-end: manifest file -> resolution
//! (defaults seeding, coordinate inheritance, snapshot rule) -> POM
//! rendering -> Maven Central validation.

use std::fs;

use central_publish::config;
use central_publish::error::Error;
use central_publish::project::Project;
use central_publish::validate;

const MANIFEST: &str = r#"
group: com.example
version: 2.0.0
defaults:
  description: Shared description
  inceptionYear: "2020"
  licenses:
    - name: The Apache License, Version 2.0
      url: http://www.apache.org/licenses/LICENSE-2.0.txt
  developers:
    - id: dev
      name: Dev Eloper
  scm:
    connection: scm:git:git://example.com/repo.git
    developerConnection: scm:git:ssh://example.com/repo.git
    url: https://example.com/repo
  url: https://example.com
modules:
  - name: core
  - name: client
    kind: multi-target
    targets: [jvm]
    defaults:
      description: Client modules
  - name: mobile
    kind: mobile-library
"#;

fn load_project(yaml: &str) -> Project {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".central-publish.yaml");
    fs::write(&path, yaml).unwrap();
    let manifest = config::from_file(&path).unwrap();
    Project::resolve(&manifest)
}

#[test]
fn test_every_publication_validates() {
    let project = load_project(MANIFEST);
    let mut count = 0;
    for module in &project.modules {
        for (_, result) in module.finalize_all() {
            let prepared = result.unwrap();
            validate::validate_pom_str(&prepared.xml).unwrap();
            count += 1;
        }
    }
    // core + client root + client-jvm + mobile
    assert_eq!(count, 4);
}

#[test]
fn test_module_defaults_override_root_in_generated_pom() {
    let project = load_project(MANIFEST);
    let client = &project.modules[1];
    let prepared = client.finalize(&client.publications()[0]).unwrap();
    assert!(prepared.xml.contains("<description>Client modules</description>"));
    // root defaults still fill everything the module left unset
    assert!(prepared.xml.contains("<inceptionYear>2020</inceptionYear>"));
    assert!(prepared.xml.contains("<url>https://example.com</url>"));
}

#[test]
fn test_packaging_follows_publication_kind() {
    let project = load_project(MANIFEST);
    let poms: Vec<_> = project
        .modules
        .iter()
        .flat_map(|m| m.finalize_all())
        .map(|(publication, result)| (publication.packaging, result.unwrap().xml))
        .collect();

    assert!(poms[0].1.contains("<packaging>jar</packaging>"));
    let client_root = &poms[1];
    assert_eq!(client_root.0, "pom");
    assert!(client_root.1.contains("<packaging>pom</packaging>"));
    let mobile = poms.last().unwrap();
    assert_eq!(mobile.0, "aar");
    assert!(mobile.1.contains("<packaging>aar</packaging>"));
}

#[test]
fn test_generated_pom_round_trips_through_the_validator_tree() {
    let project = load_project(MANIFEST);
    let core = &project.modules[0];
    let prepared = core.finalize(&core.publications()[0]).unwrap();

    let tree = validate::parse_document(&prepared.xml).unwrap();
    assert_eq!(tree.name, "project");
    let names: Vec<_> = tree.children.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"groupId"));
    assert!(names.contains(&"licenses"));
    assert!(names.contains(&"scm"));
}

#[test]
fn test_incomplete_module_fails_only_itself() {
    let yaml = format!(
        "{}  - name: undocumented\n    pom:\n      description: \"\"\n",
        MANIFEST
    );
    let project = load_project(&yaml);

    let outcomes: Vec<_> = project
        .modules
        .iter()
        .flat_map(|m| m.finalize_all())
        .collect();

    let failures: Vec<_> = outcomes
        .iter()
        .filter_map(|(publication, result)| result.as_ref().err().map(|e| (publication, e)))
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0.artifact_id, "undocumented");
    assert!(matches!(failures[0].1, Error::InvalidPom(_)));
    assert_eq!(
        failures[0].1.to_string(),
        "invalid pom: description is blank"
    );
}

#[test]
fn test_snapshot_manifest_suffixes_all_modules() {
    let yaml = MANIFEST.replace("version: 2.0.0", "version: 2.0.0\nsnapshot: true");
    let project = load_project(&yaml);
    for module in &project.modules {
        assert_eq!(module.version, "2.0.0-SNAPSHOT");
        let prepared = module.finalize(&module.publications()[0]).unwrap();
        assert!(prepared.xml.contains("<version>2.0.0-SNAPSHOT</version>"));
    }
}
