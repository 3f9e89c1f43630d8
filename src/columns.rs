//! One-time resolution of column names to header positions.

use crate::error::{Error, Result};
use crate::table::Table;

/// Name of the column the per-row status is written to.
pub const STATUS_COLUMN: &str = "API_Status";

/// Header positions resolved once per batch and reused for every row, so the
/// row loop never touches column names again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub order_code: usize,
    pub transaction_id: usize,
    pub status: usize,
}

impl ColumnLayout {
    /// Resolve the two required columns by name and make sure the status
    /// column exists, appending it and padding every row when absent.
    pub fn resolve(table: &mut Table, order_col: &str, transaction_col: &str) -> Result<ColumnLayout> {
        let order_code = find_column(&table.headers, order_col)?;
        let transaction_id = find_column(&table.headers, transaction_col)?;

        let status = match table.headers.iter().position(|h| h == STATUS_COLUMN) {
            Some(idx) => idx,
            None => {
                table.headers.push(STATUS_COLUMN.to_string());
                for row in &mut table.rows {
                    row.push(String::new());
                }
                table.headers.len() - 1
            }
        };

        Ok(ColumnLayout {
            order_code,
            transaction_id,
            status,
        })
    }
}

fn find_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::ColumnNotFound {
            column: name.to_string(),
            available: headers.join(", "),
        })
}
