//! Batch orchestration: load the table, resolve columns once, process every
//! row in order, persist the result, and report a summary.

use crate::client::UpdateClient;
use crate::columns::ColumnLayout;
use crate::error::Result;
use crate::processor::process_row;
use crate::status::Tally;
use crate::table::Table;
use std::path::PathBuf;
use tracing::debug;

/// Interactive confirmation seam. The orchestrator asks before overwriting
/// an existing output file and before running without a token, so the engine
/// stays testable without a terminal.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Auto-approving implementation for `--yes` and non-interactive use.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub order_col: String,
    pub transaction_col: String,
    pub dry_run: bool,
    pub has_token: bool,
}

/// Final accounting for a run. Dry-run rows count toward `total` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Run the whole batch. Returns `Ok(None)` when the user declines one of the
/// confirmation prompts; nothing has been written in that case.
pub async fn run(
    job: &BatchJob,
    client: &dyn UpdateClient,
    confirm: &dyn Confirm,
) -> Result<Option<Summary>> {
    if job.output.exists() {
        let prompt = format!(
            "Warning: Output file '{}' already exists. Overwrite?",
            job.output.display()
        );
        if !confirm.confirm(&prompt) {
            return Ok(None);
        }
    }

    if !job.has_token && !job.dry_run {
        let prompt = "Warning: No authentication token provided. \
                      API calls may fail if authentication is required. Continue anyway?";
        if !confirm.confirm(prompt) {
            return Ok(None);
        }
    }

    println!("Reading CSV from: {}", job.input.display());
    let mut table = Table::load(&job.input, job.delimiter)?;
    let layout = ColumnLayout::resolve(&mut table, &job.order_col, &job.transaction_col)?;
    debug!(?layout, rows = table.rows.len(), "resolved column layout");

    println!("\nProcessing {} rows...\n", table.rows.len());

    let mut succeeded = 0;
    let mut failed = 0;

    // Data rows start at line 2 of the file (line 1 is the header).
    for (i, row) in table.rows.iter_mut().enumerate() {
        let line = i + 2;
        let order_code = row
            .get(layout.order_code)
            .map(|f| f.trim().to_string())
            .unwrap_or_default();
        let transaction_id = row
            .get(layout.transaction_id)
            .map(|f| f.trim().to_string())
            .unwrap_or_default();

        let status = process_row(row, layout, client, job.dry_run).await;

        match status.tally() {
            Tally::Succeeded => {
                succeeded += 1;
                println!("Row {line}: ✓ Successfully added transaction ID to order {order_code}");
            }
            Tally::Failed => {
                failed += 1;
                println!("Row {line}: ✗ {status}");
            }
            Tally::Untallied => {
                println!(
                    "Row {line}: [DRY RUN] Would add transaction ID '{transaction_id}' \
                     to order '{order_code}'"
                );
            }
        }
    }

    println!("\nWriting results to: {}", job.output.display());
    table.save(&job.output, job.delimiter)?;

    Ok(Some(Summary {
        total: table.rows.len(),
        succeeded,
        failed,
    }))
}
