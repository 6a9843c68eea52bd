/// One Markdown file discovered under the scan root.
///
/// `display_dir` is the containing directory relative to the root (`"."` for
/// the root itself), `link_path` the root-prefixed forward-slash path used as
/// the link target. Entries are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub display_dir: String,
    pub file_name: String,
    pub link_path: String,
}
