//! Project scaffolding operations.
//!
//! Use [`generate_project_structure`] to lay out a credit-risk project under
//! an existing or new directory. Generation is repeatable: directories that
//! already exist are kept, templated files are rewritten and untemplated
//! files are only created when missing.
//!
//! Generation is not transactional. A filesystem failure aborts the run and
//! leaves whatever was already created in place.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::project::layout::{CREDIT_RISK_LAYOUT, ProjectLayout};
use crate::project::templates::{FileContent, rule_for};

/// Progress notifications emitted while scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent<'a> {
    /// The root exists; carries its resolved absolute path.
    Started { root: &'a Path },
    DirectoryCreated(&'a Path),
    FileCreated(&'a Path),
}

/// Paths touched by a scaffold run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Generates the credit-risk project layout under `root`.
///
/// `on_event` is called once the root exists, then after each directory
/// and file.
///
/// # Errors
///
/// Returns an error naming the offending path if any directory or file
/// cannot be created or written.
pub fn generate_project_structure(
    root: &Path,
    on_event: impl FnMut(ScaffoldEvent<'_>),
) -> Result<ScaffoldReport> {
    generate(root, &CREDIT_RISK_LAYOUT, on_event)
}

/// Generates an arbitrary [`ProjectLayout`] under `root`.
///
/// # Errors
///
/// See [`generate_project_structure`].
pub fn generate(
    root: &Path,
    layout: &ProjectLayout,
    mut on_event: impl FnMut(ScaffoldEvent<'_>),
) -> Result<ScaffoldReport> {
    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create project root: {}", root.display()))?;
    let resolved = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve project root: {}", root.display()))?;
    tracing::debug!(
        root = %resolved.display(),
        entries = layout.paths().count(),
        "scaffolding project"
    );
    on_event(ScaffoldEvent::Started { root: &resolved });

    let mut report = ScaffoldReport {
        root: resolved,
        directories: Vec::with_capacity(layout.directories.len()),
        files: Vec::with_capacity(layout.files.len()),
    };

    for relative in layout.directories {
        let dir = root.join(relative);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        tracing::debug!(path = %dir.display(), "directory ready");
        on_event(ScaffoldEvent::DirectoryCreated(&dir));
        report.directories.push(dir);
    }

    for relative in layout.files {
        let file = root.join(relative);
        write_placeholder(&file, relative)?;
        on_event(ScaffoldEvent::FileCreated(&file));
        report.files.push(file);
    }

    Ok(report)
}

fn write_placeholder(file: &Path, relative: &str) -> Result<()> {
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let rule = rule_for(relative);
    tracing::debug!(path = %file.display(), rule = rule.name, "writing placeholder");

    match rule.render(relative) {
        FileContent::Text(content) => std::fs::write(file, content)
            .with_context(|| format!("Failed to write file: {}", file.display())),
        FileContent::Touch => OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .map(drop)
            .with_context(|| format!("Failed to create file: {}", file.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use std::fs;

    fn generate_quietly(root: &Path) -> ScaffoldReport {
        generate_project_structure(root, |_| {}).unwrap()
    }

    fn generate_quietly_err(root: &Path) -> anyhow::Error {
        generate_project_structure(root, |_| {}).unwrap_err()
    }

    #[test]
    fn test_creates_every_manifest_path() {
        let temp = TempDir::new().unwrap();
        let report = generate_quietly(temp.path());

        for relative in CREDIT_RISK_LAYOUT.paths() {
            assert!(temp.path().join(relative).exists(), "{relative} missing");
        }
        assert_eq!(report.directories.len(), CREDIT_RISK_LAYOUT.directories.len());
        assert_eq!(report.files.len(), CREDIT_RISK_LAYOUT.files.len());
        assert!(report.root.is_absolute());
    }

    #[test]
    fn test_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("credit-risk");
        generate_quietly(&root);

        assert!(root.join("src").join("api").join("main.py").is_file());
    }

    #[test]
    fn test_notebooks_contain_empty_json() {
        let temp = TempDir::new().unwrap();
        generate_quietly(temp.path());

        for relative in CREDIT_RISK_LAYOUT.files.iter().filter(|f| f.ends_with(".ipynb")) {
            let content = fs::read_to_string(temp.path().join(relative)).unwrap();
            assert_eq!(content, "{}");
        }
    }

    #[test]
    fn test_requirements_written() {
        let temp = TempDir::new().unwrap();
        generate_quietly(temp.path());

        let content = fs::read_to_string(temp.path().join("requirements.txt")).unwrap();
        for name in [
            "pandas",
            "numpy",
            "scikit-learn",
            "mlflow",
            "fastapi",
            "uvicorn",
            "pytest",
            "python-dotenv",
            "jupyter",
            "matplotlib",
            "seaborn",
        ] {
            assert!(content.contains(name), "requirements.txt missing {name}");
        }
    }

    #[test]
    fn test_untemplated_files_are_empty() {
        let temp = TempDir::new().unwrap();
        generate_quietly(temp.path());

        for relative in ["Dockerfile", "docker-compose.yml", ".gitignore", ".github/workflows/ci.yml"] {
            let metadata = fs::metadata(temp.path().join(relative)).unwrap();
            assert_eq!(metadata.len(), 0, "{relative} should be empty");
        }
    }

    #[test]
    fn test_rerun_is_safe() {
        let temp = TempDir::new().unwrap();
        generate_quietly(temp.path());

        let extra = temp.path().join("data").join("raw").join("transactions.csv");
        fs::write(&extra, "TransactionId,Amount\n").unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM python:3.11\n").unwrap();
        fs::write(temp.path().join("src").join("train.py"), "edited").unwrap();

        generate_quietly(temp.path());

        for relative in CREDIT_RISK_LAYOUT.directories {
            assert!(temp.path().join(relative).is_dir());
        }
        assert!(extra.exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("Dockerfile")).unwrap(),
            "FROM python:3.11\n"
        );
        assert!(
            fs::read_to_string(temp.path().join("src").join("train.py"))
                .unwrap()
                .starts_with("# train.py")
        );
    }

    #[test]
    fn test_events_follow_creation_order() {
        let temp = TempDir::new().unwrap();
        let mut events = Vec::new();
        generate_project_structure(temp.path(), |event| {
            events.push(match event {
                ScaffoldEvent::Started { .. } => String::from("start"),
                ScaffoldEvent::DirectoryCreated(path) | ScaffoldEvent::FileCreated(path) => path
                    .strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            });
        })
        .unwrap();

        let expected: Vec<String> = std::iter::once(String::from("start"))
            .chain(CREDIT_RISK_LAYOUT.paths().map(String::from))
            .collect();
        assert_eq!(events, expected);
    }

    #[test]
    fn test_custom_layout() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout {
            directories: &["reports"],
            files: &["reports/summary.md", "src/score.py"],
        };
        let report = generate(temp.path(), &layout, |_| {}).unwrap();

        assert_eq!(report.files.len(), 2);
        assert!(temp.path().join("reports").is_dir());
        let module = fs::read_to_string(temp.path().join("src").join("score.py")).unwrap();
        assert!(module.contains("Module for score"));
    }

    #[test]
    fn test_directory_in_place_of_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("requirements.txt")).unwrap();

        let err = generate_quietly_err(temp.path());

        assert!(
            err.to_string().starts_with("Failed to write file"),
            "unexpected error: {err}"
        );
        assert!(err.to_string().contains("requirements.txt"));
    }

    #[test]
    fn test_file_in_place_of_directory_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notebooks"), "not a directory").unwrap();

        let err = generate_quietly_err(temp.path());

        assert!(err.to_string().starts_with("Failed to create directory"));
        assert!(err.to_string().contains("notebooks"));
    }

    #[test]
    #[cfg(unix)]
    fn test_permission_denied_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let result = generate_project_structure(&locked, |_| {});

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root bypasses permission bits; only assert when the write was refused.
        if let Err(err) = result {
            assert!(err.to_string().contains("Failed to create directory"));
        }
    }
}
