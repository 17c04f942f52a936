//! Rename execution.
//!
//! Applies a [`RenamePlan`] in order. There is no rollback: the first failed
//! rename stops the batch and everything already renamed stays renamed.

use crate::error::{RenameError, Result};
use crate::ops::plan::{RenamePlan, rebase};
use crate::prompt::{CollisionChoice, Input, resolve_collision};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Mutable state carried through one batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionContext {
    /// Overwrite existing destinations without asking.
    ///
    /// Set from the command line, or flipped on by an "all" answer.
    pub force: bool,
}

/// What a finished batch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub renamed: usize,
    pub skipped: usize,
}

/// Renames every pair in `plan`, asking about collisions through `input`.
///
/// When a rename is skipped, later entries that were planned below its new
/// path are renamed where they still are.
pub fn execute(
    plan: &RenamePlan,
    ctx: &mut ExecutionContext,
    input: &mut dyn Input,
) -> Result<ExecutionReport> {
    let mut report = ExecutionReport::default();
    // (planned path, actual path) of skipped renames
    let mut skipped: Vec<(PathBuf, PathBuf)> = Vec::new();

    for rename in plan.renames() {
        if rename.is_noop() {
            log::debug!("Name unchanged, skipping {}", rename.source.display());
            report.skipped += 1;
            continue;
        }

        let source = rebase(&rename.source, &skipped);
        let to = rebase(&rename.to, &skipped);

        if !ctx.force && fs::symlink_metadata(&to).is_ok() {
            let destination = plan.display_path(&to);
            match resolve_collision(input, Path::new(&destination))? {
                CollisionChoice::Confirmed => {}
                CollisionChoice::ConfirmedAll => {
                    log::info!("Overwriting all remaining collisions");
                    ctx.force = true;
                }
                CollisionChoice::Skipped => {
                    println!("{} '{}'", "Skipped".yellow(), destination);
                    report.skipped += 1;
                    skipped.push((to, source));
                    continue;
                }
            }
        }

        rename_entry(&source, &to)?;
        report.renamed += 1;
    }

    Ok(report)
}

fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| RenameError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    log::info!("Renamed {} -> {}", from.display(), to.display());

    Ok(())
}
