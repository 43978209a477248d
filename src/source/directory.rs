use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::source::filter::has_extension;

/// Find files with `extension` in a directory. If recursive is true, use
/// walkdir; otherwise list the top level only. Results are sorted by path.
pub fn find_text_files(
    dir: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if has_extension(path, extension) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if has_extension(&path, extension) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
