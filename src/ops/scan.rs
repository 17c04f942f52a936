//! Directory scanning.
//!
//! Walks the tree below a root and collects the entries whose name matches
//! the pattern. The walk itself is a generic visitor: for each entry the
//! caller returns a [`Visit`] that says whether to descend into it.

use crate::error::{RenameError, Result};
use crate::ops::name::match_target;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Whether an entry is a file or a directory.
///
/// Symbolic links are not followed and count as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A matched file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl MatchEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Scanner switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Test directory names too.
    pub include_dirs: bool,
    /// Match file names without their extension.
    pub exclude_extension: bool,
}

/// Visitor decision for the entry just seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Do not descend into this directory. Ignored for files.
    SkipChildren,
}

/// Walks every entry below `root` in file-name order.
///
/// `root` itself is not visited. Any walk error aborts the traversal.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&DirEntry) -> Visit,
{
    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|source| RenameError::Scan {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if visit(&entry) == Visit::SkipChildren && entry.file_type().is_dir() {
            log::trace!("Not descending into {}", entry.path().display());
            entries.skip_current_dir();
        }
    }

    Ok(())
}

/// Collects the entries below `root` whose name matches `regex`.
///
/// Results are in walk order. Fails without partial results if the root is
/// unusable or any path cannot be read.
pub fn scan(root: &Path, regex: &Regex, options: &ScanOptions) -> Result<Vec<MatchEntry>> {
    check_root(root)?;

    let mut matches = Vec::new();

    walk(root, |entry| {
        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let candidate = match kind {
            EntryKind::Directory => options.include_dirs,
            EntryKind::File => true,
        };

        if candidate {
            if let Some(name) = utf8_name(entry) {
                let target = match kind {
                    EntryKind::Directory => name,
                    EntryKind::File => match_target(name, options.exclude_extension),
                };
                if regex.is_match(target) {
                    log::trace!("Matched {}", entry.path().display());
                    matches.push(MatchEntry {
                        path: entry.path().to_path_buf(),
                        kind,
                    });
                }
            }
        }

        match kind {
            EntryKind::Directory if !options.recursive => Visit::SkipChildren,
            _ => Visit::Continue,
        }
    })?;

    log::debug!(
        "Scan of {} found {} match(es)",
        root.display(),
        matches.len()
    );

    Ok(matches)
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| RenameError::InvalidRoot {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(RenameError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    Ok(())
}

fn utf8_name(entry: &DirEntry) -> Option<&str> {
    let name = entry.file_name().to_str();
    if name.is_none() {
        log::warn!(
            "Skipping entry with a non UTF-8 name: {}",
            entry.path().display()
        );
    }
    name
}
