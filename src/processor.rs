//! Per-row decision logic: skip, dry-run, or submit, then stamp the status.

use crate::client::UpdateClient;
use crate::columns::ColumnLayout;
use crate::status::UpdateStatus;

/// Decide what to do with one row, stamp its status column, and return the
/// status for tallying. First matching rule wins: row too short, blank
/// fields, dry-run, then the real call.
pub async fn process_row(
    row: &mut Vec<String>,
    layout: ColumnLayout,
    client: &dyn UpdateClient,
    dry_run: bool,
) -> UpdateStatus {
    let status = decide(row, layout, client, dry_run).await;
    pad_to(row, layout.status);
    row[layout.status] = status.to_string();
    status
}

async fn decide(
    row: &[String],
    layout: ColumnLayout,
    client: &dyn UpdateClient,
    dry_run: bool,
) -> UpdateStatus {
    if row.len() <= layout.order_code || row.len() <= layout.transaction_id {
        return UpdateStatus::SkippedInsufficientColumns;
    }

    let order_code = row[layout.order_code].trim();
    let transaction_id = row[layout.transaction_id].trim();
    if order_code.is_empty() || transaction_id.is_empty() {
        return UpdateStatus::SkippedMissingData;
    }

    if dry_run {
        return UpdateStatus::DryRun;
    }

    client.submit(order_code, transaction_id).await
}

/// Grow `row` with empty fields until `index` is addressable.
fn pad_to(row: &mut Vec<String>, index: usize) {
    while row.len() <= index {
        row.push(String::new());
    }
}
