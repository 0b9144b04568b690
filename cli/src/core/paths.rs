use std::path::{Path, PathBuf};

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

pub fn clean_path(path: &Path) -> String {
    let s = path.display().to_string();
    clean_path_str(&s).to_string()
}

/// Lexically normalize a stored path for comparison: `\` becomes `/`,
/// repeated separators collapse, `.` segments drop and `..` pops.
pub fn normalize_separators(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Make a user supplied file path absolute against the working directory.
pub fn absolutize(path: &str) -> std::io::Result<PathBuf> {
    std::path::absolute(Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("/tmp/a/b.txt"), "/tmp/a/b.txt");
        assert_eq!(normalize_separators("\\tmp\\a\\b.txt"), "/tmp/a/b.txt");
        assert_eq!(normalize_separators("/tmp//a/./b.txt"), "/tmp/a/b.txt");
        assert_eq!(normalize_separators("/tmp/x/../a/b.txt"), "/tmp/a/b.txt");
        assert_eq!(normalize_separators("a/../../b"), "../b");
        assert_eq!(normalize_separators("./"), ".");
    }

    #[test]
    fn test_absolutize_relative() {
        let abs = absolutize("some/file.txt").unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/file.txt"));
    }
}
