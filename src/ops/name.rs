/// Splits a base name into stem and extension.
///
/// The extension starts at the last `.` and keeps the dot. A leading dot does
/// not start an extension, so `.bashrc` is all stem and stays matchable with
/// `-e`. This is the rule `Path::extension` follows.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}

/// Returns the part of `name` that matching and substitution apply to.
pub fn match_target(name: &str, exclude_extension: bool) -> &str {
    if exclude_extension {
        split_extension(name).0
    } else {
        name
    }
}
