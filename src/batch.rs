//! Directory driver.
//!
//! Canonicalizes every `*.svg` directly inside a source directory into a
//! destination directory. A failing file is recorded and skipped; it never
//! stops the batch and nothing is written for it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::IconError;
use crate::verify::verify;
use crate::{Options, canonicalize_bytes};

/// Driver settings that do not affect the canonical shell.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Verify each output before writing it
    pub check: bool,
}

/// Result for one file.
#[derive(Debug)]
pub enum Outcome {
    Written {
        name: String,
        bytes_in: usize,
        bytes_out: usize,
    },
    Failed {
        name: String,
        error: IconError,
    },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Written { name, .. } | Outcome::Failed { name, .. } => name,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Written { .. })
    }
}

/// Tally of a batch run, in file-name order.
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: Vec<Outcome>,
}

impl Summary {
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.processed()
    }

    pub fn bytes_in(&self) -> usize {
        self.written().map(|(i, _)| i).sum()
    }

    pub fn bytes_out(&self) -> usize {
        self.written().map(|(_, o)| o).sum()
    }

    fn written(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Written {
                bytes_in,
                bytes_out,
                ..
            } => Some((*bytes_in, *bytes_out)),
            Outcome::Failed { .. } => None,
        })
    }
}

/// List `*.svg` files directly inside `src`, sorted by name.
pub fn list_icons(src: &Path) -> Result<Vec<PathBuf>, IconError> {
    if !src.is_dir() {
        return Err(IconError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory does not exist: {}", src.display()),
        )));
    }

    let mut files = Vec::new();
    let walker = WalkBuilder::new(src)
        .standard_filters(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        let path = entry.path();
        if entry.depth() == 1 && is_file && path.extension().is_some_and(|e| e == "svg") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Canonicalize one (identifier, raw bytes) pair.
pub fn canonicalize_item(
    raw: &[u8],
    options: &Options,
    batch: &BatchOptions,
) -> Result<String, IconError> {
    let out = canonicalize_bytes(raw, options)?;
    if batch.check {
        verify(&out, options)?;
    }
    Ok(out)
}

/// Canonicalize every icon in `src` into `out`, creating `out` if needed.
///
/// Errors are returned only for problems with the directories themselves.
pub fn process_dir(
    src: &Path,
    out: &Path,
    options: &Options,
    batch: &BatchOptions,
) -> Result<Summary, IconError> {
    let files = list_icons(src)?;
    fs::create_dir_all(out)?;

    let mut summary = Summary::default();
    for path in files {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        // The destination keeps the exact OS name; `name` is for display only.
        let dest = out.join(file_name);
        let name = file_name.to_string_lossy().into_owned();

        let outcome = match process_file(&path, &dest, options, batch) {
            Ok((bytes_in, bytes_out)) => Outcome::Written {
                name,
                bytes_in,
                bytes_out,
            },
            Err(error) => Outcome::Failed { name, error },
        };
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}

fn process_file(
    src: &Path,
    dest: &Path,
    options: &Options,
    batch: &BatchOptions,
) -> Result<(usize, usize), IconError> {
    let raw = fs::read(src)?;
    let canonical = canonicalize_item(&raw, options, batch)?;
    fs::write(dest, &canonical)?;
    Ok((raw.len(), canonical.len()))
}
