use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::args::MigrateArgs;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report::{self, SUCCESS_MARK};
use crate::config::load_config;
use crate::migration::{MigrationDocuments, MigrationPaths};

pub fn migrate(args: MigrateArgs) -> Result<ExitStatus> {
    let paths = resolve_paths(&args)?;

    let mut docs = MigrationDocuments::load_with(&paths, report::print_reading)?;

    let outcome = docs.merge()?;
    report::print_events(&outcome.events, &paths.content, &paths.i18n);

    let is_apply = !args.dry_run;
    if is_apply {
        println!();
        docs.save_with(&paths, report::print_saving)?;
    }

    report::print_migration_summary(&outcome.summary, &paths.content, &paths.i18n, is_apply);
    if is_apply {
        println!("{} {}", SUCCESS_MARK.green(), "Migration complete".green());
    }

    Ok(ExitStatus::Success)
}

/// Config paths resolve against the config file's directory (or the root
/// when there is none); CLI overrides resolve against the current directory.
fn resolve_paths(args: &MigrateArgs) -> Result<MigrationPaths> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let root = args
        .root
        .as_ref()
        .map(|root| cwd.join(root))
        .unwrap_or_else(|| cwd.clone());

    let loaded = load_config(&root)?;
    let mut paths = loaded.config.resolve(loaded.base_dir(&root));

    if let Some(source) = &args.source {
        paths.source = cwd.join(source);
    }
    if let Some(content) = &args.content {
        paths.content = cwd.join(content);
    }
    if let Some(i18n) = &args.i18n {
        paths.i18n = cwd.join(i18n);
    }

    Ok(paths)
}
