use assert_cmd::cargo::cargo_bin_cmd;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Creates a temp directory holding `files`, each containing its own path.
#[allow(unused)]
pub fn create_tree(files: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in files {
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, file).unwrap();
    }
    temp
}

/// Every entry below `root` mapped to its contents, keyed by relative path.
///
/// Directories get a trailing `/` and empty contents.
#[allow(unused)]
pub fn snapshot(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if entry.file_type().is_dir() {
                (format!("{}/", relative), String::new())
            } else {
                (relative, fs::read_to_string(entry.path()).unwrap())
            }
        })
        .collect()
}

/// Runs `rr` with `args` followed by the three positionals.
pub fn run_rr(
    root: &Path,
    pattern: &str,
    replacement: &str,
    args: &[&str],
    stdin: &str,
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("rr");
    cmd.args(args)
        .arg(root)
        .arg(pattern)
        .arg(replacement)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .write_stdin(stdin);

    cmd.assert()
}
