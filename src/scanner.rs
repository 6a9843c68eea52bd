use crate::error::TreeError;
use crate::types::FileEntry;
use std::path::Path;
use walkdir::WalkDir;

/// Collects every Markdown file under `root_dir` and returns the entries
/// sorted by `(display_dir, lowercase file name)`, ready for rendering.
///
/// The suffix match on `.md` is case-sensitive, so `README.MD` is skipped.
/// Walk errors are fatal for the run.
pub fn collect_entries(root_dir: &str) -> Result<Vec<FileEntry>, TreeError> {
    let root = Path::new(root_dir);
    let mut entries = Vec::new();

    for item in WalkDir::new(root).min_depth(1) {
        let item = item?;
        if !item.file_type().is_file() {
            continue;
        }

        let file_name = item.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(".md") {
            continue;
        }

        let rel_path = item.path().strip_prefix(root).unwrap_or(item.path());
        let display_dir = match rel_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                normalize_separators(&dir.to_string_lossy())
            }
            _ => ".".to_string(),
        };
        let link_path = format!(
            "./{}/{}",
            root_dir,
            normalize_separators(&rel_path.to_string_lossy())
        );

        entries.push(FileEntry {
            display_dir,
            file_name,
            link_path,
        });
    }

    // Stable sort: groups by directory, case-insensitive within a group
    entries.sort_by_cached_key(|e| (e.display_dir.clone(), e.file_name.to_lowercase()));

    Ok(entries)
}

fn normalize_separators(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
