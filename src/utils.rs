use std::env;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against the current working directory and removes `.` and `..`
/// components lexically; symlinks are left alone and nothing is read from disk.
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize(&joined)
}

/// [`absolute_path`], as the string the conversion engine receives
pub fn absolute_path_string(path: &Path) -> String {
    absolute_path(path).to_string_lossy().into_owned()
}

/// Joins a relative `path` to the working directory, keeping any `.` and `..` exactly as
/// written
pub fn plain_absolute_path_string(path: &Path) -> String {
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path).to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." at the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/proj/./docs", "/proj/docs")]
    #[case("/proj/docs/../out", "/proj/out")]
    #[case("/..", "/")]
    #[case("/out", "/out")]
    fn normalizes_absolute_paths(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(absolute_path(Path::new(input)), PathBuf::from(expected));
    }

    #[rstest]
    #[case("/proj/./docs")]
    #[case("/proj/docs/../out")]
    fn plain_paths_keep_dot_components(#[case] input: &str) {
        assert_eq!(plain_absolute_path_string(Path::new(input)), input);
    }

    #[test]
    fn plain_relative_paths_join_working_directory() {
        let resolved = plain_absolute_path_string(Path::new("docs/../a.adoc"));
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("docs/../a.adoc"));
    }

    #[test]
    fn relative_paths_join_working_directory() {
        let resolved = absolute_path(Path::new("docs/./a.adoc"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("docs/a.adoc"));
    }
}
