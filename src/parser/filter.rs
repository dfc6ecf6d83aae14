use std::path::Path;

/// A conversion candidate is a regular file whose extension equals
/// `csv`, compared case-insensitively. Directories, extensionless
/// files, and other extensions are excluded.
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
}
