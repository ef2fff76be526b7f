//! Implementation of the `folio check` command.
//!
//! Runs a full content audit and renders the report. The command fails
//! (exit 2) when violations are found so it can gate CI pipelines;
//! `--no-fail` turns that into a report-only run.

use folio_adapters::FileContentSource;
use folio_core::application::AuditService;
use folio_core::domain::{ContentAudit, Report, SummaryStatus};
use folio_core::error::FolioError;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = args.path.unwrap_or(config.content.dir);

    let service = AuditService::new(Box::new(FileContentSource::new(&dir)));
    let audit = service.audit()?;

    match output.format() {
        OutputFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&audit).map_err(|e| {
                CliError::Core(FolioError::Internal {
                    message: format!("failed to serialize audit: {e}"),
                })
            })?;
            println!("{json}");
        }
        _ => render_human(&audit, &dir.display().to_string(), &output)?,
    }

    if audit.is_valid || args.no_fail {
        Ok(())
    } else {
        Err(CliError::ContentInvalid {
            error_count: audit.errors.len(),
        })
    }
}

fn render_human(audit: &ContentAudit, dir: &str, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Content check: {dir}"))?;

    category_line(output, "profile", &audit.profile)?;
    category_line(output, "quickLinks", &audit.quick_links)?;
    category_line(output, "experiences", &audit.experiences)?;
    category_line(output, "projects", &audit.projects)?;

    for error in &audit.errors {
        output.print(&format!("    {} - {} [{}]", error.field, error.message, error.kind))?;
    }

    let summary = audit.summary();
    output.print("")?;
    match summary.status {
        SummaryStatus::Success => output.success(&summary.message)?,
        SummaryStatus::Error => {
            output.error(&summary.message)?;
            for (kind, count) in &summary.errors_by_kind {
                output.print(&format!("    {kind}: {count}"))?;
            }
        }
    }
    Ok(())
}

/// One status line per category: ok, error count, or skipped when the
/// directory had no file for it.
fn category_line<T>(
    output: &OutputManager,
    name: &str,
    report: &Option<Report<T>>,
) -> CliResult<()> {
    match report {
        None => output.print(&format!("  - {name}: not present"))?,
        Some(r) if r.is_valid => output.success(&format!("  {name}: ok"))?,
        Some(r) => output.error(&format!("  {name}: {} error(s)", r.errors.len()))?,
    }
    Ok(())
}
