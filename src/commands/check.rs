//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which validates the
//! `.central-publish.yaml` manifest and previews every publication without
//! writing anything to disk.
//!
//! ## Functionality
//!
//! - **Manifest Validation**: Parses the manifest and enforces the load-time
//!   invariants (root group and version set, module names unique, targets
//!   only on multi-target modules).
//! - **Publication Preview**: Resolves the project, finalizes each
//!   publication in memory and reports which POMs would pass the Maven
//!   Central checks and which would fail, with the failing field path.
//! - **Strict Mode**: With `--strict`, additionally requires every module
//!   version to parse as semver.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use central_publish::config;
use central_publish::output::OutputConfig;
use central_publish::project::Project;
use central_publish::version;

/// Check the publish manifest and preview each publication
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the .central-publish.yaml manifest to check.
    ///
    /// Can also be set with the `CENTRAL_PUBLISH_MANIFEST` environment
    /// variable.
    #[arg(short, long, value_name = "FILE", env = "CENTRAL_PUBLISH_MANIFEST", default_value = config::MANIFEST_FILE)]
    pub config: PathBuf,

    /// Use strict checking (module versions must be valid semver).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `check` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = &args.config;
    println!(
        "{} Checking manifest: {}",
        out.symbol("🔍", "[SCAN]"),
        config_path.display()
    );

    let manifest = config::from_file(config_path).map_err(|e| {
        anyhow::anyhow!("Failed to load manifest from {}: {}", config_path.display(), e)
    })?;

    println!(
        "{} Manifest parsed successfully",
        out.symbol("✅", "[OK]")
    );

    let project = Project::resolve(&manifest);
    let publication_count: usize = project.modules.iter().map(|m| m.publications().len()).sum();

    println!("\n{} Project Summary:", out.symbol("📊", "[INFO]"));
    println!("   Group: {}", manifest.group.as_deref().unwrap_or("-"));
    println!("   Version: {}", manifest.version.as_deref().unwrap_or("-"));
    println!("   Snapshot: {}", manifest.snapshot);
    println!("   Modules: {}", project.modules.len());
    println!("   Publications: {}", publication_count);

    let mut has_errors = false;

    if args.strict {
        println!("\n{} Checking versions (strict)...", out.symbol("🔍", "[SCAN]"));
        for module in &project.modules {
            if let Err(e) = version::parse_release_version(&module.version) {
                println!(
                    "{} Module {} has a non-semver version {}: {}",
                    out.symbol("❌", "[ERR]"),
                    module.name,
                    module.version,
                    e
                );
                has_errors = true;
            }
        }
        if !has_errors {
            println!("{} All module versions are valid semver", out.symbol("✅", "[OK]"));
        }
    }

    println!("\n{} Previewing publications...", out.symbol("🔍", "[SCAN]"));
    for module in &project.modules {
        for (publication, result) in module.finalize_all() {
            match result {
                Ok(prepared) => println!(
                    "{} {}:{}:{} ({})",
                    out.symbol("✅", "[OK]"),
                    module.group,
                    publication.artifact_id,
                    prepared.version,
                    publication.packaging
                ),
                Err(e) => {
                    println!(
                        "{} {}:{}: {}",
                        out.symbol("❌", "[ERR]"),
                        module.group,
                        publication.artifact_id,
                        e
                    );
                    has_errors = true;
                }
            }
        }
    }

    println!("\n{} Check Result:", out.symbol("🎯", "[RESULT]"));
    if has_errors {
        println!(
            "{} Manifest has publications that would fail to publish",
            out.symbol("❌", "[ERR]")
        );
        return Err(anyhow::anyhow!("Manifest check failed"));
    }

    println!("{} All publications are ready", out.symbol("✅", "[OK]"));
    Ok(())
}
