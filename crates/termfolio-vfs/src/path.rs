//! Path resolution helpers.

/// Resolve a possibly-relative path against the current working directory.
///
/// `None` and `~` resolve to `home`; a leading `~` is replaced by `home`.
/// Relative paths are joined onto `cwd`. Empty and `.` segments are dropped
/// and `..` pops the previous segment. Popping past the root is a no-op, so
/// `..` at `/` stays at `/`. The result always starts with a single `/` and
/// never ends with one unless it is the root.
pub fn resolve_path(raw: Option<&str>, cwd: &str, home: &str) -> String {
    let expanded = match raw {
        None | Some("~") => home.to_string(),
        Some(p) => match p.strip_prefix('~') {
            Some(rest) => format!("{home}{rest}"),
            None => p.to_string(),
        },
    };

    let joined = if expanded.starts_with('/') {
        expanded
    } else {
        format!("{}/{expanded}", cwd.trim_end_matches('/'))
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in joined.split('/') {
        match component {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

/// Last segment of a normalized path (`/` for the root).
pub fn base_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "/",
        Some(name) => name,
    }
}
