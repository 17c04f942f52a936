use crate::error::{RenameError, Result};
use crate::ops::{ExecutionContext, ScanOptions, execute as execute_plan, plan, scan};
use crate::prompt::{Input, confirm_batch, pause};
use colored::Colorize;
use regex::Regex;
use std::path::PathBuf;

/// Fully specified rename request.
#[derive(Debug, Clone)]
pub struct RenameArgs {
    /// Directory whose entries are renamed
    pub root: PathBuf,

    /// Regular expression tested against each name
    pub match_pattern: String,

    /// Substitution applied where the pattern matched
    pub replace_pattern: String,

    pub recursive: bool,
    pub include_dirs: bool,
    pub exclude_extension: bool,

    /// Overwrite existing destinations without asking
    pub force: bool,

    /// Skip the confirmation prompt and the closing pause
    pub no_confirm: bool,

    /// Stop after printing the plan
    pub dry_run: bool,
}

impl RenameArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            include_dirs: self.include_dirs,
            exclude_extension: self.exclude_extension,
        }
    }
}

/// Runs scan, plan, confirmation and execution for one request.
///
/// Returns [`RenameError::Cancelled`] if the user declines the batch.
pub fn execute(args: RenameArgs, input: &mut dyn Input) -> Result<()> {
    let regex = Regex::new(&args.match_pattern)?;

    log::debug!(
        "Scanning {} for /{}/ ({:?})",
        args.root.display(),
        regex,
        args.scan_options()
    );

    let entries = scan(&args.root, &regex, &args.scan_options())?;
    if entries.is_empty() {
        println!("{}", "No files found for renaming.".yellow());
        return Ok(());
    }

    let plan = plan(
        &args.root,
        &entries,
        &regex,
        &args.replace_pattern,
        args.exclude_extension,
    );
    plan.print_preview();

    if args.dry_run {
        println!("\n{}", "Dry run, no files were renamed".yellow());
        return Ok(());
    }

    if !args.no_confirm && !confirm_batch(input, plan.len())? {
        println!("{}", "Operation cancelled".yellow());
        return Err(RenameError::Cancelled);
    }

    let mut ctx = ExecutionContext { force: args.force };
    let report = execute_plan(&plan, &mut ctx, input)?;

    println!("{}", "Renaming completed successfully".green().bold());
    if report.skipped > 0 {
        println!(
            "{:>12} {}, skipped {}",
            "Renamed".green().bold(),
            report.renamed,
            report.skipped
        );
    }

    if !args.no_confirm {
        pause(input)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedInput;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: &std::path::Path, pattern: &str, replacement: &str) -> RenameArgs {
        RenameArgs {
            root: root.to_path_buf(),
            match_pattern: pattern.to_string(),
            replace_pattern: replacement.to_string(),
            recursive: false,
            include_dirs: false,
            exclude_extension: false,
            force: false,
            no_confirm: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_confirmed_run_asks_then_pauses() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("t1.txt"), "").unwrap();

        let mut input = ScriptedInput::new(["y", ""]);
        execute(args(temp.path(), "^t", "r"), &mut input).unwrap();

        assert!(temp.path().join("r1.txt").exists());
        assert_eq!(input.questions().len(), 2);
        assert!(input.questions()[1].contains("Press enter"));
    }

    #[test]
    fn test_declined_run_is_cancelled() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("t1.txt"), "").unwrap();

        let mut input = ScriptedInput::new(["n"]);
        let err = execute(args(temp.path(), "^t", "r"), &mut input).unwrap_err();

        assert!(matches!(err, RenameError::Cancelled));
        assert!(temp.path().join("t1.txt").exists());
        assert!(!temp.path().join("r1.txt").exists());
    }

    #[test]
    fn test_no_confirm_never_asks() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("t1.txt"), "").unwrap();

        let mut input = ScriptedInput::default();
        let mut request = args(temp.path(), "^t", "r");
        request.no_confirm = true;
        execute(request, &mut input).unwrap();

        assert!(input.questions().is_empty());
        assert!(temp.path().join("r1.txt").exists());
    }

    #[test]
    fn test_dry_run_leaves_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("t1.txt"), "").unwrap();

        let mut input = ScriptedInput::default();
        let mut request = args(temp.path(), "^t", "r");
        request.dry_run = true;
        execute(request, &mut input).unwrap();

        assert!(input.questions().is_empty());
        assert!(temp.path().join("t1.txt").exists());
    }

    #[test]
    fn test_no_matches_is_success() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();

        let mut input = ScriptedInput::default();
        execute(args(temp.path(), "^zzz", "r"), &mut input).unwrap();
        assert!(input.questions().is_empty());
    }

    #[test]
    fn test_bad_pattern_is_regex_error() {
        let temp = TempDir::new().unwrap();
        let mut input = ScriptedInput::default();
        let err = execute(args(temp.path(), "([a-", "r"), &mut input).unwrap_err();
        assert!(matches!(err, RenameError::Regex(_)));
    }
}
