//! Write emitted units to disk.
//!
//! Units are written relative to an output directory, one file each. Files whose contents already match are
//! left untouched so repeated runs do not bump modification times. [`stale_units`] answers the same question
//! without writing, for `--check`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::EmittedUnit;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What [`write_units`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files created or rewritten.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
}

/// Write every unit under `out_dir`, creating directories as needed.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display(), units = units.len()))]
pub fn write_units(units: &[EmittedUnit], out_dir: &Path) -> Result<WriteReport, OutputError> {
    fs::create_dir_all(out_dir).map_err(|source| OutputError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = WriteReport::default();
    for unit in units {
        let path = out_dir.join(&unit.path);
        if is_current(&path, &unit.source) {
            tracing::debug!(path = %path.display(), "unchanged");
            report.unchanged.push(path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &unit.source).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "written");
        report.written.push(path);
    }
    Ok(report)
}

/// Paths under `out_dir` that are missing or differ from the emitted unit.
pub fn stale_units(units: &[EmittedUnit], out_dir: &Path) -> Vec<PathBuf> {
    units
        .iter()
        .map(|unit| out_dir.join(&unit.path))
        .zip(units)
        .filter(|(path, unit)| !is_current(path, &unit.source))
        .map(|(path, _)| path)
        .collect()
}

fn is_current(path: &Path, source: &str) -> bool {
    fs::read_to_string(path).is_ok_and(|existing| existing == source)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn unit(name: &str, source: &str) -> EmittedUnit {
        EmittedUnit {
            function: name.to_string(),
            path: PathBuf::from(format!("{name}.py")),
            source: source.to_string(),
            dependencies: BTreeSet::new(),
        }
    }

    #[test]
    fn test_write_then_rewrite_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let units = vec![unit("a", "x = 1\n"), unit("b", "y = 2\n")];

        let first = write_units(&units, dir.path()).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.unchanged.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("a.py")).unwrap(), "x = 1\n");

        let second = write_units(&units, dir.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 2);
    }

    #[test]
    fn test_stale_units() {
        let dir = tempfile::tempdir().unwrap();
        let units = vec![unit("a", "x = 1\n"), unit("b", "y = 2\n")];
        assert_eq!(stale_units(&units, dir.path()).len(), 2);

        write_units(&units, dir.path()).unwrap();
        assert!(stale_units(&units, dir.path()).is_empty());

        fs::write(dir.path().join("b.py"), "y = 3\n").unwrap();
        assert_eq!(stale_units(&units, dir.path()), vec![dir.path().join("b.py")]);
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sdk").join("functions");
        write_units(&[unit("a", "x = 1\n")], &nested).unwrap();
        assert!(nested.join("a.py").is_file());
    }
}
