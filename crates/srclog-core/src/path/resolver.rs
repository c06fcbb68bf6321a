//! Display-name resolution relative to a project root

/// Display name used when no source identifier was given
pub const UNKNOWN_SOURCE: &str = "unknown:source:file";

fn is_filesystem_root(root: &str) -> bool {
    root == "/" || root == "\\"
}

/// Compute the label a logger shows for `candidate`
///
/// The candidate may be a file path or an arbitrary label such as
/// `"my:custom:source:path"`. Labels that do not contain the root come back
/// verbatim, so this never fails.
pub fn resolve_display_name(candidate: Option<&str>, project_root: &str) -> String {
    let candidate = match candidate {
        Some(c) if !c.is_empty() => c,
        _ => return UNKNOWN_SOURCE.to_string(),
    };

    if project_root.is_empty() {
        return candidate.to_string();
    }

    if is_filesystem_root(project_root) {
        return candidate
            .strip_prefix(|c: char| c == '/' || c == '\\')
            .unwrap_or(candidate)
            .to_string();
    }

    match candidate.find(project_root) {
        Some(start) => {
            let rest = &candidate[start + project_root.len()..];
            if rest.is_empty() {
                candidate.to_string()
            } else {
                rest.to_string()
            }
        }
        None => candidate.to_string(),
    }
}

/// Longest leading substring shared by every input
///
/// Only the lexicographically smallest and largest inputs need comparing:
/// anything they share, every string between them shares too.
pub fn longest_common_prefix(strings: &[&str]) -> String {
    let (Some(first), Some(last)) = (strings.iter().min(), strings.iter().max()) else {
        return String::new();
    };

    let mut end = 0;
    for ((idx, a), b) in first.char_indices().zip(last.chars()) {
        if a != b {
            break;
        }
        end = idx + a.len_utf8();
    }
    first[..end].to_string()
}
