//! # Generate Command Implementation
//!
//! This module implements the `generate` subcommand, which produces the POM
//! file for every publication in the manifest, validates each generated file
//! and optionally signs it.
//!
//! ## Functionality
//!
//! - **Resolution**: Loads the manifest, seeds defaults root-to-module and
//!   applies the snapshot rule.
//! - **Generation**: Renders one `pom.xml` per publication into the output
//!   directory (named `<artifactId>-<version>.pom`), finalizing modules in
//!   parallel.
//! - **Validation**: Every generated POM is validated before it is written;
//!   a failing publication is reported and skipped, the rest are still
//!   written.
//! - **Signing**: With `--sign`, runs the configured external signing
//!   command over each written file.
//!
//! The command exits with an error if any publication failed, after all
//! publications have been processed.

use anyhow::Result;
use clap::Args;
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use central_publish::config;
use central_publish::error;
use central_publish::output::OutputConfig;
use central_publish::project::{PreparedPom, Project, Publication};
use central_publish::sign;

/// Generate and validate the POM files for every publication
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the .central-publish.yaml manifest.
    ///
    /// Can also be set with the `CENTRAL_PUBLISH_MANIFEST` environment
    /// variable.
    #[arg(short, long, value_name = "FILE", env = "CENTRAL_PUBLISH_MANIFEST", default_value = config::MANIFEST_FILE)]
    pub config: PathBuf,

    /// Directory to write the generated POM files into.
    #[arg(short, long, value_name = "DIR", default_value = "target/poms")]
    pub out: PathBuf,

    /// Sign each generated file with the configured signing command.
    #[arg(long)]
    pub sign: bool,
}

/// Execute the `generate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: GenerateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let manifest = config::from_file(&args.config).map_err(|e| {
        anyhow::anyhow!("Failed to load manifest from {}: {}", args.config.display(), e)
    })?;

    let project = Project::resolve(&manifest);
    if project.modules.is_empty() {
        println!("{} No modules to publish", out.symbol("⚠️", "[WARN]"));
        return Ok(());
    }

    // Finalize modules in parallel; each module's state is private to it.
    let finalized: Vec<(String, Vec<(Publication, error::Result<PreparedPom>)>)> = project
        .modules
        .par_iter()
        .map(|module| (module.name.clone(), module.finalize_all()))
        .collect();

    fs::create_dir_all(&args.out)?;

    let sign_command = manifest
        .signing
        .command
        .clone()
        .unwrap_or_else(|| sign::DEFAULT_SIGN_COMMAND.to_string());

    let mut written = 0usize;
    let mut failed = 0usize;

    for (module_name, publications) in finalized {
        for (publication, result) in publications {
            match result {
                Ok(prepared) => {
                    let path = args.out.join(prepared.file_name());
                    fs::write(&path, &prepared.xml)?;
                    debug!("wrote {}", path.display());
                    written += 1;

                    if args.sign {
                        let signature = sign::sign_file(&sign_command, &path)?;
                        println!(
                            "{} {} (signed: {})",
                            out.symbol("✅", "[OK]"),
                            path.display(),
                            signature.display()
                        );
                    } else {
                        println!("{} {}", out.symbol("✅", "[OK]"), path.display());
                    }
                }
                Err(e) => {
                    println!(
                        "{} {}:{}: {}",
                        out.symbol("❌", "[ERR]"),
                        module_name,
                        publication.artifact_id,
                        e
                    );
                    failed += 1;
                }
            }
        }
    }

    println!(
        "\n{} Generated {} POM file(s) in {}",
        out.symbol("📦", "[DONE]"),
        written,
        args.out.display()
    );

    if failed > 0 {
        return Err(anyhow::anyhow!(
            "{} publication(s) failed validation",
            failed
        ));
    }
    Ok(())
}
