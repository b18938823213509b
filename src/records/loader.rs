use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::foundation::error::PackResult;
use crate::records::naming::{Rank, RecordNaming, scan_record_files};
use crate::records::record::ItemRecord;

/// A parsed record together with its ordering rank and source file.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedRecord {
    /// Parsed record.
    pub record: ItemRecord,
    /// Rank used for catalog ordering.
    pub rank: Rank,
    /// File the record was read from.
    pub source: PathBuf,
}

/// Outcome of loading a record directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Records that parsed, in scan order.
    pub records: Vec<LoadedRecord>,
    /// File names of records that could not be read or parsed.
    pub failed: Vec<String>,
}

/// Load every record file in `dir`.
///
/// A record that cannot be read or parsed is logged and listed in [`LoadReport::failed`]; it never
/// aborts the batch. Only an unreadable directory is an error.
#[tracing::instrument(skip(naming), fields(dir = %dir.display()))]
pub fn load_records(dir: &Path, naming: &RecordNaming) -> PackResult<LoadReport> {
    let files = scan_record_files(dir, naming)?;
    let mut report = LoadReport::default();

    for file in files {
        let record = match ItemRecord::from_path(&file.path) {
            Ok(record) => record,
            Err(e) => {
                warn!(file = %file.file_name, error = %e, "skipping record");
                report.failed.push(file.file_name);
                continue;
            }
        };

        // The identifier is authoritative for ordering; fall back to the file name.
        let rank = match naming.rank_of_id(&record.id) {
            Some(rank) => rank,
            None => {
                warn!(
                    file = %file.file_name,
                    id = %record.id,
                    prefix = naming.prefix(),
                    "record id does not follow the naming pattern; ordering by file name"
                );
                file.rank.clone()
            }
        };

        debug!(file = %file.file_name, id = %record.id, %rank, "loaded record");
        report.records.push(LoadedRecord {
            record,
            rank,
            source: file.path,
        });
    }

    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/records/loader.rs"]
mod tests;
