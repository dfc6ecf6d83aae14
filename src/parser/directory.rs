use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find CSV files in a directory. If recursive is true, use walkdir;
/// otherwise list one level with `read_dir`.
///
/// A listing failure here is fatal for the run; callers propagate it.
pub fn find_csv_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut csv_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if crate::parser::filter::is_csv_file(path) {
                csv_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if crate::parser::filter::is_csv_file(&path) {
                csv_files.push(path);
            }
        }
    }

    Ok(csv_files)
}
