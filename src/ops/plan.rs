//! Rename planning.
//!
//! Turns scan results into `(from, to)` pairs. Each new name is computed once
//! here; the executor never recomputes it.

use crate::ops::name::split_extension;
use crate::ops::scan::MatchEntry;
use colored::Colorize;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A single planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Path as found by the scan.
    pub from: PathBuf,
    /// Path the entry will be at when its turn comes. Differs from `from`
    /// when a parent directory is renamed earlier in the same plan.
    pub source: PathBuf,
    pub to: PathBuf,
}

impl Rename {
    /// True if the new path equals the current one.
    pub fn is_noop(&self) -> bool {
        self.source == self.to
    }
}

/// Ordered renames, one per scanned match.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    root: PathBuf,
    renames: Vec<Rename>,
}

impl RenamePlan {
    pub fn renames(&self) -> &[Rename] {
        &self.renames
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Path relative to the plan root, with forward slashes.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }

    /// Prints every planned rename in order.
    pub fn print_preview(&self) {
        println!(
            "{} {} {}:",
            "Found".green().bold(),
            self.len(),
            if self.len() == 1 {
                "file to rename"
            } else {
                "files to rename"
            }
        );

        for rename in &self.renames {
            println!(
                "  '{}' -> '{}'",
                self.display_path(&rename.from).yellow(),
                self.display_path(&rename.to).green()
            );
        }
    }
}

/// Computes a new base name.
///
/// Every match of `regex` is replaced with `replacement`, which may refer to
/// capture groups as `$1` or `${name}`. With `exclude_extension` only the stem
/// is rewritten and the extension is kept as is.
pub fn new_name(regex: &Regex, replacement: &str, name: &str, exclude_extension: bool) -> String {
    let (stem, extension) = if exclude_extension {
        split_extension(name)
    } else {
        (name, "")
    };

    let mut renamed = regex.replace_all(stem, replacement).into_owned();
    renamed.push_str(extension);
    renamed
}

/// Plans a rename for every entry, keeping scan order.
///
/// Directories always have their full name rewritten, regardless of
/// `exclude_extension`. Entries below a directory renamed earlier in the plan
/// are rebased onto its new path.
pub fn plan(
    root: &Path,
    entries: &[MatchEntry],
    regex: &Regex,
    replacement: &str,
    exclude_extension: bool,
) -> RenamePlan {
    let mut moved_dirs: Vec<(&Path, PathBuf)> = Vec::new();
    let mut renames = Vec::with_capacity(entries.len());

    for entry in entries {
        let source = rebase(&entry.path, &moved_dirs);

        let to = match entry.path.file_name().and_then(|n| n.to_str()) {
            Some(name) => {
                let renamed =
                    new_name(regex, replacement, name, exclude_extension && !entry.is_dir());
                source.with_file_name(renamed)
            }
            None => source.clone(),
        };

        log::debug!("Planned {} -> {}", source.display(), to.display());

        if entry.is_dir() && to != source {
            moved_dirs.push((&entry.path, to.clone()));
        }

        renames.push(Rename {
            from: entry.path.clone(),
            source,
            to,
        });
    }

    RenamePlan {
        root: root.to_path_buf(),
        renames,
    }
}

/// Maps `path` through the deepest `(old, new)` directory move containing it.
pub(crate) fn rebase<P: AsRef<Path>>(path: &Path, moves: &[(P, PathBuf)]) -> PathBuf {
    moves
        .iter()
        .filter_map(|(old, new)| {
            let old: &Path = old.as_ref();
            path.strip_prefix(old).ok().map(|rest| (old, new, rest))
        })
        .max_by_key(|(old, _, _)| old.components().count())
        .map(|(_, new, rest)| new.join(rest))
        .unwrap_or_else(|| path.to_path_buf())
}
