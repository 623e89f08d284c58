//! Solution file writer
//!
//! Solutions land at `<base_dir>/<username>/<problem_key><extension>`.
//! Existing files are overwritten; there is no merging or versioning.

use crate::model::{file_extension, ProblemKey};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a solution
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Invalid username for a directory name: '{0}'")]
    InvalidUsername(String),

    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes extracted sources under a fixed base directory
#[derive(Debug, Clone)]
pub struct SolutionWriter {
    base_dir: PathBuf,
}

impl SolutionWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Computes where the solution for `problem_key` is stored
    pub fn solution_path(&self, username: &str, problem_key: &ProblemKey, language: &str) -> PathBuf {
        let file_name = format!("{}{}", problem_key, file_extension(language));
        self.base_dir.join(username).join(file_name)
    }

    /// Writes `source` for `problem_key`, creating directories as needed
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(WriteError)` - The username is unusable or the filesystem refused
    pub fn write(
        &self,
        username: &str,
        problem_key: &ProblemKey,
        language: &str,
        source: &str,
    ) -> Result<PathBuf, WriteError> {
        validate_username(username)?;

        let path = self.solution_path(username, problem_key, language);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, normalize_line_endings(source)).map_err(|source| {
            WriteError::WriteFile {
                path: path.clone(),
                source,
            }
        })?;

        Ok(path)
    }
}

/// Re-emits `source` line by line, terminating every line with `\n`
///
/// `\r\n` and lone `\r` count as line terminators. Blank lines are kept and
/// a missing final terminator is added.
pub fn normalize_line_endings(source: &str) -> String {
    let unified = source.replace("\r\n", "\n").replace('\r', "\n");

    let mut normalized = String::with_capacity(unified.len() + 1);
    for line in unified.lines() {
        normalized.push_str(line);
        normalized.push('\n');
    }
    normalized
}

/// Rejects usernames that would escape or collapse the per-user directory
fn validate_username(username: &str) -> Result<(), WriteError> {
    let invalid = username.is_empty()
        || username == "."
        || username == ".."
        || username.contains(['/', '\\'])
        || username.contains(std::path::MAIN_SEPARATOR);

    if invalid {
        return Err(WriteError::InvalidUsername(username.to_string()));
    }
    Ok(())
}
