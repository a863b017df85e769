//! JSON snapshot of a run's aggregate.
//!
//! The snapshot records the run date and every site's headlines in
//! aggregate order:
//!
//! ```json
//! { "date": "2025-05-06", "sites": [ { "site_id": "vg", "labels": {..}, "records": [..] } ] }
//! ```

use crate::aggregate::Aggregate;
use crate::models::ResultSet;
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    date: String,
    sites: Vec<&'a ResultSet>,
}

/// Serialize the aggregate for `date` to a JSON string.
pub fn aggregate_to_json(aggregate: &Aggregate, date: NaiveDate) -> Result<String, serde_json::Error> {
    let snapshot = Snapshot {
        date: date.to_string(),
        sites: aggregate.iter().collect(),
    };
    serde_json::to_string_pretty(&snapshot)
}

/// Write the aggregate snapshot to `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_snapshot(aggregate: &Aggregate, date: NaiveDate, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = aggregate_to_json(aggregate, date)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, json).await?;
    info!(sites = aggregate.len(), "Wrote JSON snapshot");
    Ok(())
}
