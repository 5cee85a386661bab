use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Hidden files and editor backups never count as notes. Directory names
/// are not filtered, so notes inside a dotted subdirectory are still found.
pub fn is_note_name(name: &str) -> bool {
    !name.starts_with('.') && !name.ends_with('~')
}

/// Recursively collect note files under `dir` as absolute paths. When
/// `extension` is non-empty, only file names ending with it are kept.
pub fn discover_notes(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_note_name(name) {
            continue;
        }
        if !extension.is_empty() && !name.ends_with(extension) {
            continue;
        }
        paths.push(entry.into_path());
    }
    Ok(paths)
}

/// Path relative to the notes directory, as shown in the menu and matched
/// against search words.
pub fn rel_display(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
