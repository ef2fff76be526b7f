//! Implementation of the `folio show` command.
//!
//! Prints best-effort sanitized content as pretty JSON. Unlike `check`,
//! invalid content is not a failure here: the whole point of sanitization
//! is that something renderable comes out the other side.

use folio_adapters::FileContentSource;
use folio_core::application::AuditService;
use folio_core::error::FolioError;

use crate::{
    cli::{ShowArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ShowArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = args.path.unwrap_or(config.content.dir);

    let service = AuditService::new(Box::new(FileContentSource::new(&dir)));
    let audit = service.audit()?;

    if !audit.is_valid && !output.is_quiet() {
        // Tracing goes to stderr, keeping the JSON on stdout parseable.
        tracing::warn!(
            error_count = audit.errors.len(),
            "content has validation errors; showing salvaged content ('folio check' for details)"
        );
    }

    let json = serde_json::to_string_pretty(&audit.best_effort()).map_err(|e| {
        CliError::Core(FolioError::Internal {
            message: format!("failed to serialize content: {e}"),
        })
    })?;
    println!("{json}");
    Ok(())
}
