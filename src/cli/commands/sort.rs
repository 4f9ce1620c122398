use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::args::SortArgs;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report;
use crate::json_file::{to_pretty_string, write_json};
use crate::sort::sort_value;

/// Sort each file in turn. Missing, unreadable or unparsable files are
/// reported and skipped; write failures abort.
pub fn sort(args: SortArgs) -> Result<ExitStatus> {
    let mut skipped = 0;

    for path in &args.paths {
        if !path.exists() {
            report::print_not_found(path);
            skipped += 1;
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                report::print_read_failure(path, &err);
                skipped += 1;
                continue;
            }
        };
        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                report::print_parse_failure(path, &err);
                skipped += 1;
                continue;
            }
        };
        let sorted = sort_value(&value);

        if args.inplace {
            if args.backup {
                let backup = backup_path(path);
                fs::copy(path, &backup).with_context(|| {
                    format!("Failed to back up {} to {}", path.display(), backup.display())
                })?;
            }
            write_json(path, &sorted)?;
            report::print_wrote(path);
        } else {
            println!("{}", to_pretty_string(&sorted)?);
        }
    }

    report::print_skipped_warning(skipped);
    Ok(ExitStatus::Success)
}

/// `es.json` -> `es.json.bak`
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
