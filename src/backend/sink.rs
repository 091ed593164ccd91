//! Emission targets for generated units.
//!
//! Every sink keys units by hint name (`{Name}.g.cs`) and rejects a second unit with the same key in one
//! session. Directory-backed sinks also account for units left over from earlier runs when the session
//! finishes: a leftover is a `*.g.cs` file directly under the root that starts with the generated header and was
//! not emitted this session.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use autoclosed_core::lang::generated::{HEADER, HINT_EXTENSION};
use thiserror::Error;

/// Errors raised while emitting generated units
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("duplicate generated unit `{0}`: two annotated types share this name")]
    Duplicate(String),

    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to one emitted unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Written (new or changed content).
    Written,
    /// Existing file already had identical content.
    Unchanged,
    /// Check mode: existing file differs.
    Stale,
    /// Check mode: no file exists yet.
    Missing,
    /// Leftover unit deleted at the end of a session.
    Removed,
    /// Check mode: leftover unit that would be deleted.
    Orphaned,
}

/// A destination for generated units.
pub trait EmitSink {
    /// Emit one unit under `hint_name`.
    ///
    /// ## Errors
    /// - [`SinkError::Duplicate`] if `hint_name` was already emitted in this session.
    /// - [`SinkError::Io`] if the underlying storage fails.
    fn emit(&mut self, hint_name: &str, text: &str) -> Result<EmitOutcome, SinkError>;

    /// End the session, dealing with units emitted by earlier sessions but not this one.
    ///
    /// Returns one entry per leftover unit. Call only after a session that emitted every unit it should have;
    /// otherwise the units of failing types count as leftovers.
    fn finish(&mut self) -> Result<Vec<(String, EmitOutcome)>, SinkError> {
        Ok(Vec::new())
    }
}

/// Record `hint_name` as emitted, failing on a repeat.
fn claim(seen: &mut BTreeSet<String>, hint_name: &str) -> Result<(), SinkError> {
    if seen.insert(hint_name.to_string()) {
        Ok(())
    } else {
        Err(SinkError::Duplicate(hint_name.to_string()))
    }
}

/// Read an existing unit, treating "not found" as absent.
fn read_existing(path: &Path) -> Result<Option<String>, SinkError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SinkError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Generated units under `root` that were not emitted this session, sorted by name.
fn leftovers(root: &Path, seen: &BTreeSet<String>) -> Result<Vec<String>, SinkError> {
    let io = |source: std::io::Error| SinkError::Io {
        path: root.to_path_buf(),
        source,
    };
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io)?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !name.ends_with(HINT_EXTENSION) || seen.contains(&name) || !entry.path().is_file() {
            continue;
        }
        if read_existing(&entry.path())?.is_some_and(|text| text.starts_with(HEADER)) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

// ============================================================================
// Directory sink
// ============================================================================

/// Writes units into a directory, leaving byte-identical files untouched.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    seen: BTreeSet<String>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seen: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl EmitSink for DirectorySink {
    fn emit(&mut self, hint_name: &str, text: &str) -> Result<EmitOutcome, SinkError> {
        claim(&mut self.seen, hint_name)?;

        let path = self.root.join(hint_name);
        if read_existing(&path)?.as_deref() == Some(text) {
            tracing::debug!(path = %path.display(), "unchanged");
            return Ok(EmitOutcome::Unchanged);
        }

        fs::create_dir_all(&self.root).map_err(|source| SinkError::Io {
            path: self.root.clone(),
            source,
        })?;
        fs::write(&path, text).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote generated unit");
        Ok(EmitOutcome::Written)
    }

    /// Delete leftover units.
    fn finish(&mut self) -> Result<Vec<(String, EmitOutcome)>, SinkError> {
        let mut removed = Vec::new();
        for name in leftovers(&self.root, &self.seen)? {
            let path = self.root.join(&name);
            fs::remove_file(&path).map_err(|source| SinkError::Io { path: path.clone(), source })?;
            tracing::info!(path = %path.display(), "removed leftover generated unit");
            removed.push((name, EmitOutcome::Removed));
        }
        Ok(removed)
    }
}

// ============================================================================
// Check sink
// ============================================================================

/// Compares units against a directory without writing anything.
#[derive(Debug)]
pub struct CheckSink {
    root: PathBuf,
    seen: BTreeSet<String>,
    outdated: Vec<(String, EmitOutcome)>,
}

impl CheckSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seen: BTreeSet::new(),
            outdated: Vec::new(),
        }
    }

    /// Units that are stale or missing in emission order, then leftovers once finished.
    pub fn outdated(&self) -> &[(String, EmitOutcome)] {
        &self.outdated
    }

    /// Return `true` if every emitted unit matched the file on disk.
    pub fn is_clean(&self) -> bool {
        self.outdated.is_empty()
    }
}

impl EmitSink for CheckSink {
    fn emit(&mut self, hint_name: &str, text: &str) -> Result<EmitOutcome, SinkError> {
        claim(&mut self.seen, hint_name)?;

        let outcome = match read_existing(&self.root.join(hint_name))? {
            Some(existing) if existing == text => EmitOutcome::Unchanged,
            Some(_) => EmitOutcome::Stale,
            None => EmitOutcome::Missing,
        };
        if outcome != EmitOutcome::Unchanged {
            self.outdated.push((hint_name.to_string(), outcome));
        }
        Ok(outcome)
    }

    /// Report leftover units without touching them.
    fn finish(&mut self) -> Result<Vec<(String, EmitOutcome)>, SinkError> {
        let orphaned: Vec<_> = leftovers(&self.root, &self.seen)?
            .into_iter()
            .map(|name| (name, EmitOutcome::Orphaned))
            .collect();
        self.outdated.extend(orphaned.iter().cloned());
        Ok(orphaned)
    }
}

// ============================================================================
// Memory sink
// ============================================================================

/// Collects units in memory, ordered by hint name.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hint_name: &str) -> Option<&str> {
        self.files.get(hint_name).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    pub fn into_files(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl EmitSink for MemorySink {
    fn emit(&mut self, hint_name: &str, text: &str) -> Result<EmitOutcome, SinkError> {
        if self.files.contains_key(hint_name) {
            return Err(SinkError::Duplicate(hint_name.to_string()));
        }
        self.files.insert(hint_name.to_string(), text.to_string());
        Ok(EmitOutcome::Written)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("autoclosed_sink_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_sink_rejects_duplicates() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.emit("A.g.cs", "a").unwrap(), EmitOutcome::Written);
        let err = sink.emit("A.g.cs", "b").unwrap_err();
        assert!(matches!(err, SinkError::Duplicate(ref n) if n == "A.g.cs"));
        assert_eq!(sink.get("A.g.cs"), Some("a"));
    }

    #[test]
    fn test_directory_sink_writes_then_skips_identical() {
        let dir = scratch("dir");

        let mut first = DirectorySink::new(&dir);
        assert_eq!(first.emit("A.g.cs", "text").unwrap(), EmitOutcome::Written);
        assert_eq!(fs::read_to_string(dir.join("A.g.cs")).unwrap(), "text");

        let mut second = DirectorySink::new(&dir);
        assert_eq!(second.emit("A.g.cs", "text").unwrap(), EmitOutcome::Unchanged);
        assert_eq!(second.emit("B.g.cs", "other").unwrap(), EmitOutcome::Written);
        assert!(matches!(second.emit("B.g.cs", "other"), Err(SinkError::Duplicate(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_check_sink_reports_stale_and_missing() {
        let dir = scratch("check");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Same.g.cs"), "same").unwrap();
        fs::write(dir.join("Old.g.cs"), "old").unwrap();

        let mut sink = CheckSink::new(&dir);
        assert_eq!(sink.emit("Same.g.cs", "same").unwrap(), EmitOutcome::Unchanged);
        assert_eq!(sink.emit("Old.g.cs", "new").unwrap(), EmitOutcome::Stale);
        assert_eq!(sink.emit("New.g.cs", "new").unwrap(), EmitOutcome::Missing);
        assert!(!sink.is_clean());
        assert_eq!(
            sink.outdated(),
            &[
                ("Old.g.cs".to_string(), EmitOutcome::Stale),
                ("New.g.cs".to_string(), EmitOutcome::Missing)
            ]
        );
        assert!(!dir.join("New.g.cs").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_sink_removes_leftover_units_on_finish() {
        let dir = scratch("leftover");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Old.g.cs"), format!("{HEADER}\n\nold")).unwrap();
        fs::write(dir.join("Keep.g.cs"), format!("{HEADER}\n\nkeep")).unwrap();
        fs::write(dir.join("Foreign.g.cs"), "// written by another tool").unwrap();
        fs::write(dir.join("notes.cs"), HEADER).unwrap();

        let mut sink = DirectorySink::new(&dir);
        sink.emit("Keep.g.cs", "keep").unwrap();
        assert_eq!(sink.finish().unwrap(), vec![("Old.g.cs".to_string(), EmitOutcome::Removed)]);
        assert!(!dir.join("Old.g.cs").exists());
        assert!(dir.join("Keep.g.cs").exists());
        assert!(dir.join("Foreign.g.cs").exists());
        assert!(dir.join("notes.cs").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_check_sink_flags_leftover_units() {
        let dir = scratch("orphan");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Same.g.cs"), "same").unwrap();
        fs::write(dir.join("Gone.g.cs"), format!("{HEADER}\n\ngone")).unwrap();

        let mut sink = CheckSink::new(&dir);
        sink.emit("Same.g.cs", "same").unwrap();
        assert!(sink.is_clean());
        assert_eq!(sink.finish().unwrap(), vec![("Gone.g.cs".to_string(), EmitOutcome::Orphaned)]);
        assert!(!sink.is_clean());
        assert!(dir.join("Gone.g.cs").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_finish_on_missing_directory_finds_nothing() {
        let dir = scratch("absent");
        assert!(DirectorySink::new(&dir).finish().unwrap().is_empty());
        assert!(CheckSink::new(&dir).finish().unwrap().is_empty());
        assert!(MemorySink::new().finish().unwrap().is_empty());
    }
}
