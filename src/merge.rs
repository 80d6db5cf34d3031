//! # Defaults Merging
//!
//! This module implements the defaults merge that fills the gaps in a
//! publication's [`Pom`] from a [`PomDefaults`] template, and the root-to-
//! module seeding that composes two levels of defaults into one.
//!
//! ## Semantics
//!
//! - **Scalars** are filled only when unset on the target. `name`
//!   additionally falls back to the module name, so every POM ends up with a
//!   non-blank name even with zero configuration.
//! - **Repeatable collections** (licenses, developers, contributors, mailing
//!   lists) are additive: default entries are cloned and appended after the
//!   target's own entries, in the defaults' order. They are never deduplicated
//!   or merged by identity.
//! - **Composite blocks** (organization, scm, issue/ci management,
//!   distribution management and its relocation sub-block) are materialized
//!   on the target only when the target already has the block or the defaults
//!   have at least one sub-field set; within a block each sub-field keeps the
//!   target value when present. An empty block is never created.
//!
//! ## Single-call contract
//!
//! Merging is not idempotent: calling [`merge_pom_defaults`] twice with the
//! same defaults appends the repeatable entries twice. Callers merge each POM
//! exactly once per defaults level; the resolution pipeline in `project`
//! guarantees this (seed once, merge once).

use crate::pom::{
    CiManagement, DistributionManagement, IssueManagement, Organization, Pom, PomDefaults,
    Relocation, Scm,
};

/// Fill unset fields of `pom` from `defaults`.
///
/// `fallback_name` is the module's own identifier; it becomes the POM name
/// when neither the POM nor the defaults set one. Mutates `pom` in place and
/// has no other effects. See the module docs for the single-call contract.
pub fn merge_pom_defaults(pom: &mut Pom, defaults: &PomDefaults, fallback_name: &str) {
    if pom.name.is_none() {
        pom.name = defaults
            .name
            .clone()
            .or_else(|| Some(fallback_name.to_string()));
    }
    fill(&mut pom.description, &defaults.description);
    fill(&mut pom.url, &defaults.url);
    fill(&mut pom.inception_year, &defaults.inception_year);

    pom.licenses.extend(defaults.licenses.iter().cloned());
    pom.developers.extend(defaults.developers.iter().cloned());
    pom.contributors.extend(defaults.contributors.iter().cloned());
    pom.mailing_lists.extend(defaults.mailing_lists.iter().cloned());

    if pom.organization.is_some() || !defaults.organization.is_empty() {
        merge_organization(
            pom.organization.get_or_insert_with(Organization::default),
            &defaults.organization,
        );
    }
    if pom.scm.is_some() || !defaults.scm.is_empty() {
        merge_scm(pom.scm.get_or_insert_with(Scm::default), &defaults.scm);
    }
    if pom.issue_management.is_some() || !defaults.issue_management.is_empty() {
        merge_issue_management(
            pom.issue_management
                .get_or_insert_with(IssueManagement::default),
            &defaults.issue_management,
        );
    }
    if pom.ci_management.is_some() || !defaults.ci_management.is_empty() {
        merge_ci_management(
            pom.ci_management.get_or_insert_with(CiManagement::default),
            &defaults.ci_management,
        );
    }
    if pom.distribution_management.is_some() || !defaults.distribution_management.is_empty() {
        merge_distribution_management(
            pom.distribution_management
                .get_or_insert_with(DistributionManagement::default),
            &defaults.distribution_management,
        );
    }
}

/// Seed a module's defaults from the root project's defaults.
///
/// Same fill/append/block semantics as [`merge_pom_defaults`], applied
/// defaults-onto-defaults: root values land only where the module left a gap,
/// and root collection entries append after the module's own. There is no
/// name fallback at this level. Must run before the module's POMs are merged.
pub fn seed_defaults(child: &mut PomDefaults, parent: &PomDefaults) {
    fill(&mut child.name, &parent.name);
    fill(&mut child.description, &parent.description);
    fill(&mut child.url, &parent.url);
    fill(&mut child.inception_year, &parent.inception_year);

    child.licenses.extend(parent.licenses.iter().cloned());
    child.developers.extend(parent.developers.iter().cloned());
    child.contributors.extend(parent.contributors.iter().cloned());
    child.mailing_lists.extend(parent.mailing_lists.iter().cloned());

    merge_organization(&mut child.organization, &parent.organization);
    merge_scm(&mut child.scm, &parent.scm);
    merge_issue_management(&mut child.issue_management, &parent.issue_management);
    merge_ci_management(&mut child.ci_management, &parent.ci_management);
    merge_distribution_management(
        &mut child.distribution_management,
        &parent.distribution_management,
    );
}

fn fill(target: &mut Option<String>, default: &Option<String>) {
    if target.is_none() {
        target.clone_from(default);
    }
}

fn merge_organization(target: &mut Organization, defaults: &Organization) {
    fill(&mut target.name, &defaults.name);
    fill(&mut target.url, &defaults.url);
}

fn merge_scm(target: &mut Scm, defaults: &Scm) {
    fill(&mut target.connection, &defaults.connection);
    fill(&mut target.developer_connection, &defaults.developer_connection);
    fill(&mut target.url, &defaults.url);
    fill(&mut target.tag, &defaults.tag);
}

fn merge_issue_management(target: &mut IssueManagement, defaults: &IssueManagement) {
    fill(&mut target.system, &defaults.system);
    fill(&mut target.url, &defaults.url);
}

fn merge_ci_management(target: &mut CiManagement, defaults: &CiManagement) {
    fill(&mut target.system, &defaults.system);
    fill(&mut target.url, &defaults.url);
}

fn merge_distribution_management(
    target: &mut DistributionManagement,
    defaults: &DistributionManagement,
) {
    fill(&mut target.download_url, &defaults.download_url);
    let default_relocation = defaults.relocation.as_ref().filter(|r| !r.is_empty());
    if target.relocation.is_some() || default_relocation.is_some() {
        let relocation = target.relocation.get_or_insert_with(Relocation::default);
        if let Some(default_relocation) = default_relocation {
            fill(&mut relocation.group_id, &default_relocation.group_id);
            fill(&mut relocation.artifact_id, &default_relocation.artifact_id);
            fill(&mut relocation.version, &default_relocation.version);
            fill(&mut relocation.message, &default_relocation.message);
        }
    }
}
