use crate::types::FileEntry;

/// Heading for files that live directly under the scan root.
const ROOT_HEADING: &str = "根目录";

/// Root-level index line hidden from the generated tree. Intentionally a
/// literal match: it only fires when the root is named `content` and the
/// file is the root-level `index.md`.
const SUPPRESSED_LINE: &str = "- [index.md](./content/index.md)";

/// Renders the sorted entry list as the final Markdown document.
///
/// Output starts with an empty top-level heading, then one `# <dir>` heading
/// per distinct `display_dir` with its files as a bulleted link list. Exactly
/// one blank line separates consecutive groups.
#[must_use]
pub fn render(entries: &[FileEntry]) -> String {
    let mut out = String::from("#\n\n");
    let mut current_dir: Option<&str> = None;

    for entry in entries {
        if current_dir != Some(entry.display_dir.as_str()) {
            if current_dir.is_some() {
                out.push('\n');
            }
            if entry.display_dir == "." {
                out.push_str(&format!("# {ROOT_HEADING}\n"));
            } else {
                out.push_str(&format!("# {}\n", entry.display_dir));
            }
            current_dir = Some(entry.display_dir.as_str());
        }

        let line = format!(
            "- [{}]({})",
            escape_file_name(&entry.file_name),
            entry.link_path
        );
        if line != SUPPRESSED_LINE {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

/// Wraps names containing Markdown link metacharacters in inline code so
/// they cannot break the `[name](target)` syntax.
fn escape_file_name(name: &str) -> String {
    if name
        .chars()
        .any(|c| matches!(c, '[' | ']' | '(' | ')' | '<' | '>'))
    {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}
