use crate::paths::{absolutize, relative_path, to_slash};
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Collect sibling build-tool project files of a descriptor.
///
/// Walks the parent of `descriptor_dir` (the project's directory, one level
/// above `SimplicityStudio/`) and returns every file whose extension is in
/// `extensions`, relative to `template_path` and with forward slashes. The
/// walk is sorted by file name so the result is reproducible.
pub fn collect_project_files(
    descriptor_dir: &Path,
    template_path: &Path,
    extensions: &[String],
) -> io::Result<Vec<String>> {
    let descriptor_dir = absolutize(descriptor_dir)?;
    let template_path = absolutize(template_path)?;
    let walk_root = descriptor_dir.parent().unwrap_or(&descriptor_dir);

    let projects: Vec<String> = WalkDir::new(walk_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
        })
        .map(|e| to_slash(&relative_path(e.path(), &template_path)))
        .collect();

    debug!(
        "Found {} sibling project file(s) under {:?}",
        projects.len(),
        walk_root
    );
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) -> bool {
        let path = root.join(rel);
        path.parent().is_some_and(|p| fs::create_dir_all(p).is_ok()) && fs::write(path, "").is_ok()
    }

    #[test]
    fn test_collects_matching_extensions_sorted() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        for rel in [
            "acmp/acmp/iar/acmp_gg.eww",
            "acmp/acmp/iar/acmp_bg.eww",
            "acmp/acmp/iar/acmp_bg.ewp",
            "acmp/acmp/SimplicityStudio/acmp.slsproj",
            "acmp/other/iar/other.eww",
        ] {
            assert!(touch(root, rel));
        }

        let files = collect_project_files(
            &root.join("acmp/acmp/SimplicityStudio"),
            &root.join("_template"),
            &["eww".to_string()],
        );
        assert!(files.is_ok());
        assert_eq!(
            files.unwrap_or_default(),
            vec![
                "../acmp/acmp/iar/acmp_bg.eww".to_string(),
                "../acmp/acmp/iar/acmp_gg.eww".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_project_files() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        assert!(touch(root, "gpio/blink/SimplicityStudio/blink.slsproj"));

        let files = collect_project_files(
            &root.join("gpio/blink/SimplicityStudio"),
            &root.join("_template"),
            &["eww".to_string()],
        );
        assert!(files.is_ok_and(|f| f.is_empty()));
    }
}
