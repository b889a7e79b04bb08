//! Durable trace storage
//!
//! A [`TraceSink`] records a finished trace under a name, replacing anything
//! stored under that name before. Persisting is logging: a failure is reported
//! to the caller but never affects the trace it was given.
//!
//! # File Format
//!
//! [`FileSink`] writes `<dir>/<name>.txt` with one JSON object per step:
//!
//! ```text
//! {"snapshot":{"values":[5,3,8]},"annotation":{"kind":"sort","comparing":[],"swapped":[]}}
//! {"snapshot":{"values":[5,3,8]},"annotation":{"kind":"sort","comparing":[1],"swapped":[]}}
//! ```
//!
//! The encoding is lossless, so [`FileSink::load`] reconstructs the exact step
//! sequence.

use super::{Algorithm, Step, StepTrace};
use crate::errors::{Result, TraceError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Persistence contract for traces
pub trait TraceSink {
    /// Store `trace` under `name`, overwriting prior content
    fn persist(&self, name: &str, trace: &StepTrace) -> Result<()>;
}

/// Stores each trace as a text file inside a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a trace named `name` is stored at
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name).map_err(|source| TraceError::Io {
            path: self.dir.join(name),
            source,
        })?;
        Ok(self.dir.join(format!("{}.txt", name)))
    }

    /// Read back a persisted trace. The file does not record which algorithm
    /// produced it, so the caller supplies it.
    pub fn load(&self, name: &str, algorithm: Algorithm) -> Result<StepTrace> {
        let path = self.path_for(name)?;
        let io_err = |source| TraceError::Io {
            path: path.clone(),
            source,
        };

        let reader = BufReader::new(File::open(&path).map_err(io_err)?);
        let mut steps = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(io_err)?;
            if line.trim().is_empty() {
                continue;
            }
            let step: Step = serde_json::from_str(&line).map_err(|source| TraceError::Decode {
                path: path.clone(),
                line: index + 1,
                source,
            })?;
            steps.push(step);
        }
        Ok(StepTrace::from_steps(algorithm, steps))
    }

    fn write_steps(&self, path: &Path, trace: &StepTrace) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut writer = BufWriter::new(File::create(path)?);
        for step in trace {
            serde_json::to_writer(&mut writer, step)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

impl TraceSink for FileSink {
    fn persist(&self, name: &str, trace: &StepTrace) -> Result<()> {
        let path = self.path_for(name)?;
        self.write_steps(&path, trace)
            .map_err(|source| TraceError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::info!(
            path = %path.display(),
            steps = trace.len(),
            algorithm = %trace.algorithm(),
            "trace persisted"
        );
        Ok(())
    }
}

/// Names become file stems, so they must stay inside the sink directory
fn validate_name(name: &str) -> io::Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid trace name '{}'", name),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_like_names() {
        let sink = FileSink::new("logs");
        for name in ["", ".", "..", "a/b", "a\\b"] {
            let err = sink.path_for(name).unwrap_err();
            match err {
                TraceError::Io { source, .. } => {
                    assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
                }
                other => panic!("Expected Io error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_path_for_appends_extension() {
        let sink = FileSink::new("logs");
        assert_eq!(
            sink.path_for("bfs_steps").unwrap(),
            PathBuf::from("logs/bfs_steps.txt")
        );
    }
}
