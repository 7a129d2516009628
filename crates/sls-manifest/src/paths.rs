//! Lexical path helpers
//!
//! Manifest paths are computed without touching the filesystem: the output
//! directory may not exist yet, and symlinks must not change the emitted
//! relative paths. Drive prefixes are ignored when relating two paths.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the working directory and drop `.`/`..` lexically
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

/// Resolve `.` and `..` components without consulting the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.iter().collect()
}

/// Path of `path` relative to the directory `base`; both must be absolute
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_)))
        .collect();
    let base_parts: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_)))
        .collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Render a path with forward slashes regardless of host conventions
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_parent_dirs() {
        assert_eq!(
            normalize(Path::new("/work/examples/acmp/SimplicityStudio/../")),
            PathBuf::from("/work/examples/acmp")
        );
        assert_eq!(normalize(Path::new("/../a/./b")), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_relative_path_to_sibling_tree() {
        let path = Path::new("/work/examples/acmp/acmp/SimplicityStudio/acmp.slsproj");
        let base = Path::new("/work/examples/_template");
        assert_eq!(
            to_slash(&relative_path(path, base)),
            "../acmp/acmp/SimplicityStudio/acmp.slsproj"
        );
    }

    #[test]
    fn test_relative_path_inside_base() {
        let path = Path::new("/work/examples/_template/manifest.xml");
        let base = Path::new("/work/examples/_template");
        assert_eq!(relative_path(path, base), PathBuf::from("manifest.xml"));
        assert_eq!(relative_path(base, base), PathBuf::from("."));
    }

    #[test]
    fn test_to_slash_normalizes_backslashes() {
        assert_eq!(
            to_slash(Path::new("..\\acmp\\iar\\acmp.eww")),
            "../acmp/iar/acmp.eww"
        );
    }

    #[test]
    fn test_absolutize_relative_path() {
        let Ok(cwd) = std::env::current_dir() else {
            return;
        };
        let result = absolutize(Path::new("a/../b"));
        assert!(result.is_ok_and(|p| p == normalize(&cwd.join("b"))));
    }
}
