//! Implementation of the `folio init` command.
//!
//! Seeds a directory with the built-in sample content, one JSON file per
//! category, as a starting point for a new portfolio.

use std::path::Path;

use folio_adapters::sample_content;
use serde_json::Value;

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let files: [(&str, Value); 4] = [
        ("profile.json", sample_content::profile()),
        ("quick_links.json", sample_content::quick_links()),
        ("experiences.json", sample_content::experiences()),
        ("projects.json", sample_content::projects()),
    ];

    // Refuse before writing anything, not halfway through.
    if !args.force {
        if let Some((name, _)) = files.iter().find(|(name, _)| args.dir.join(name).exists()) {
            tracing::debug!(file = name, "refusing to overwrite existing content");
            return Err(CliError::ContentExists { path: args.dir });
        }
    }

    std::fs::create_dir_all(&args.dir)
        .with_cli_context(|| format!("creating directory {}", args.dir.display()))?;

    for (name, value) in &files {
        write_json(&args.dir.join(name), value)?;
        output.success(&format!("created {}", args.dir.join(name).display()))?;
    }

    output.print("")?;
    output.info(&format!(
        "Starter content written. Try: folio check {}",
        args.dir.display()
    ))?;
    Ok(())
}

fn write_json(path: &Path, value: &Value) -> CliResult<()> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialize sample content: {e}"),
        source: Some(Box::new(e)),
    })?;
    text.push('\n');
    std::fs::write(path, text).with_cli_context(|| format!("writing {}", path.display()))
}
