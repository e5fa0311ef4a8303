//! The directory and file manifest of a credit-risk modeling project.

/// Ordered relative paths materialised by the scaffold generator.
///
/// Paths use `/` separators and are joined onto the target root.
#[derive(Debug, Clone, Copy)]
pub struct ProjectLayout {
    pub directories: &'static [&'static str],
    pub files: &'static [&'static str],
}

/// Layout for a credit-risk model: exploration notebooks, a Python package
/// with a scoring API, tests, containerisation and CI.
pub const CREDIT_RISK_LAYOUT: ProjectLayout = ProjectLayout {
    directories: &[
        ".github/workflows",
        "data/raw",
        "data/processed",
        "notebooks",
        "src/api",
        "tests",
    ],
    files: &[
        "notebooks/01_data_exploration.ipynb",
        "notebooks/02_feature_engineering.ipynb",
        "notebooks/03_model_experimentation.ipynb",
        "notebooks/04_results_analysis.ipynb",
        "notebooks/README.md",
        "src/__init__.py",
        "src/data_processing.py",
        "src/train.py",
        "src/predict.py",
        "src/api/__init__.py",
        "src/api/main.py",
        "src/api/pydantic_models.py",
        "tests/__init__.py",
        "tests/test_data_processing.py",
        "tests/test_models.py",
        "Dockerfile",
        "docker-compose.yml",
        "requirements.txt",
        ".gitignore",
        "README.md",
        ".github/workflows/ci.yml",
    ],
};

impl ProjectLayout {
    /// All directories followed by all files, in creation order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.directories.iter().chain(self.files.iter()).copied()
    }
}
