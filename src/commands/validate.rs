//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks existing
//! POM files against the Maven Central requirements without generating
//! anything.
//!
//! ## Functionality
//!
//! - **File Validation**: Each given file is parsed and validated; the first
//!   missing or blank required field is reported with its dotted path.
//! - **Directory Walking**: A directory argument is walked recursively and
//!   every `*.pom` / `*.xml` file found is validated.
//!
//! This command is a safe, read-only operation that does not modify any
//! files. It exits with an error if any file fails validation.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use central_publish::output::OutputConfig;
use central_publish::validate;

/// Validate existing POM files against the Maven Central requirements
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// POM files or directories to validate.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let files = collect_pom_files(&args.paths)?;
    if files.is_empty() {
        return Err(anyhow::anyhow!("No POM files found under the given paths"));
    }

    let mut failed = 0usize;
    for file in &files {
        match validate::validate_pom_file(file) {
            Ok(()) => println!("{} {}", out.symbol("✅", "[OK]"), file.display()),
            Err(e) => {
                println!("{} {}: {}", out.symbol("❌", "[ERR]"), file.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "\n{} {} file(s) checked, {} failed",
        out.symbol("🎯", "[RESULT]"),
        files.len(),
        failed
    );

    if failed > 0 {
        return Err(anyhow::anyhow!("{} POM file(s) failed validation", failed));
    }
    Ok(())
}

fn collect_pom_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_pom_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_pom_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("pom") | Some("xml")
    )
}
