//! Loading project files

use std::fs;
use std::path::{Path, PathBuf};

use ariadne::{Label, Report, ReportKind, Source};
use objscope_model::{ModelError, Project};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no project file given, pass --project <FILE>")]
    MissingProject,

    #[error("cannot read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is not a valid project file", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid project")]
    Model(#[from] ModelError),

    #[error("project has no layout named `{0}`")]
    UnknownLayout(String),

    #[error("cannot format output")]
    Output(#[from] serde_json::Error),
}

/// Read, parse and validate a project file.
///
/// JSON syntax errors are also reported on stderr with the offending line.
pub fn load_project(path: &Path) -> Result<Project, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let result = parse_project(path, &text);
    if let Err(DriverError::Json { source, .. }) = &result {
        let name = path.display().to_string();
        if let Err(err) = report_json_error(&name, &text, source) {
            warn!(%err, "cannot print diagnostic");
        }
    }
    result
}

pub fn parse_project(path: &Path, text: &str) -> Result<Project, DriverError> {
    let project: Project = serde_json::from_str(text).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    project.validate()?;
    debug!(
        project = %project.name,
        objects = project.objects.objects.len(),
        layouts = project.layouts.len(),
        "loaded project"
    );
    Ok(project)
}

fn report_json_error(name: &str, text: &str, err: &serde_json::Error) -> std::io::Result<()> {
    let len = text.chars().count();
    let start = char_offset(text, err.line(), err.column()).min(len.saturating_sub(1));
    let end = (start + 1).min(len);

    Report::build(ReportKind::Error, name, start)
        .with_message("invalid project file")
        .with_label(Label::new((name, start..end)).with_message(err.to_string()))
        .finish()
        .eprint((name, Source::from(text.to_string())))
}

/// Char offset of a 1-based line and byte column, as reported by serde_json
fn char_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let byte = (line_start + column.saturating_sub(1)).min(text.len());
    text.char_indices().take_while(|(i, _)| *i < byte).count()
}
