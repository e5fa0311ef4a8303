//! Placeholder content for scaffolded files.
//!
//! Content is chosen by walking [`CONTENT_RULES`] in order and taking the
//! first rule whose predicate matches the file's relative path. The final
//! rule matches everything and leaves the file empty.

use std::path::Path;

/// What to write for a scaffolded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Overwrite the file with this text.
    Text(String),
    /// Create the file if absent, keep it untouched otherwise.
    Touch,
}

/// A `(predicate, generator)` pair keyed on the relative path.
pub struct ContentRule {
    pub name: &'static str,
    matches: fn(&str) -> bool,
    render: fn(&str) -> FileContent,
}

impl ContentRule {
    #[must_use]
    pub fn render(&self, relative: &str) -> FileContent {
        (self.render)(relative)
    }
}

pub const CONTENT_RULES: &[ContentRule] = &[
    ContentRule {
        name: "readme",
        matches: is_readme,
        render: render_readme,
    },
    ContentRule {
        name: "package-init",
        matches: is_package_init,
        render: render_package_init,
    },
    ContentRule {
        name: "python-module",
        matches: is_python_module,
        render: render_python_module,
    },
    ContentRule {
        name: "requirements",
        matches: is_requirements,
        render: render_requirements,
    },
    ContentRule {
        name: "notebook",
        matches: is_notebook,
        render: render_notebook,
    },
    ContentRule {
        name: "empty",
        matches: matches_any,
        render: render_touch,
    },
];

/// Python packages pinned in the scaffolded `requirements.txt`.
pub const REQUIREMENTS: &[&str] = &[
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
];

/// Returns the first rule matching `relative`.
#[must_use]
pub fn rule_for(relative: &str) -> &'static ContentRule {
    CONTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(relative))
        .unwrap_or(&CONTENT_RULES[CONTENT_RULES.len() - 1])
}

fn is_readme(relative: &str) -> bool {
    relative.ends_with("README.md")
}

fn is_package_init(relative: &str) -> bool {
    relative.ends_with("__init__.py")
}

fn is_python_module(relative: &str) -> bool {
    relative.ends_with(".py")
}

fn is_requirements(relative: &str) -> bool {
    relative.ends_with("requirements.txt")
}

fn is_notebook(relative: &str) -> bool {
    relative.ends_with(".ipynb")
}

fn matches_any(_: &str) -> bool {
    true
}

fn render_touch(_: &str) -> FileContent {
    FileContent::Touch
}

fn render_readme(_: &str) -> FileContent {
    FileContent::Text(String::from(
        "# Notebooks Directory\n\n\
         This directory contains exploratory notebooks for the credit risk modeling project.\n",
    ))
}

fn render_package_init(_: &str) -> FileContent {
    FileContent::Text(String::from("# Package initialization\n"))
}

fn render_python_module(relative: &str) -> FileContent {
    let path = Path::new(relative);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().replace('_', " "))
        .unwrap_or_default();

    let mut content = format!("# {file_name}\n\"\"\"\nModule for {title}\n\"\"\"\n\n");
    if relative.contains("test_") {
        content.push_str("import pytest\n\n");
    }
    FileContent::Text(content)
}

fn render_requirements(_: &str) -> FileContent {
    let mut content = String::from("# Project dependencies\n");
    for name in REQUIREMENTS {
        content.push_str(name);
        content.push('\n');
    }
    FileContent::Text(content)
}

fn render_notebook(_: &str) -> FileContent {
    FileContent::Text(String::from("{}"))
}
