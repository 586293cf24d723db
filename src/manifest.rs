//! A line-oriented scan of Apple `Contents.json` icon-set manifests.
//!
//! This is not a JSON parser.  Each line is inspected for one of the keys
//! `"filename"`, `"scale"` or `"size"` (checked in that order, so a line
//! only ever sets one field), and any line containing `}` closes the current
//! object and forgets whatever was accumulated for it.  The fields of an
//! image must therefore appear on separate lines within the same object,
//! which is how Xcode writes these files.

use crate::error::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

//===========================================================================//

const FILENAME_KEY: &str = "\"filename\"";
const SCALE_KEY: &str = "\"scale\"";
const SIZE_KEY: &str = "\"size\"";

// Values begin after this separator.
const VALUE_START: &str = ": \"";

//===========================================================================//

/// One complete image description from a manifest.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ManifestEntry {
    /// The file name to write, relative to the bundle directory.
    pub filename: String,
    /// The point size of the image (one edge).
    pub size: f32,
    /// The scale factor (1, 2, 3, ...).
    pub scale: f32,
}

impl ManifestEntry {
    /// Returns the pixel edge length, `size * scale` rounded to the nearest
    /// pixel.
    pub fn effective_size(&self) -> u32 {
        (self.size * self.scale).round() as u32
    }
}

//===========================================================================//

#[derive(Default)]
struct Accumulator {
    filename: String,
    size: f32,
    scale: f32,
}

impl Accumulator {
    fn take_complete(&mut self) -> Option<ManifestEntry> {
        if self.filename.is_empty() || self.size == 0.0 || self.scale == 0.0 {
            return None;
        }
        let accumulated = std::mem::take(self);
        Some(ManifestEntry {
            filename: accumulated.filename,
            size: accumulated.size,
            scale: accumulated.scale,
        })
    }
}

/// Scans manifest text and returns the complete entries, in file order.
pub fn scan(text: &str) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    let mut current = Accumulator::default();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.contains(FILENAME_KEY) {
            let value = value_after_key(line, line_number)?;
            let end = value.find('"').unwrap_or(value.len());
            let filename = &value[..end];
            check_filename(filename, line_number)?;
            current.filename = filename.to_string();
        } else if line.contains(SCALE_KEY) {
            current.scale = numeric_value(line, line_number, "scale")?;
        } else if line.contains(SIZE_KEY) {
            current.size = numeric_value(line, line_number, "size")?;
        }
        if line.contains('}') {
            current = Accumulator::default();
        }
        if let Some(entry) = current.take_complete() {
            if entry.effective_size() == 0 {
                malformed_manifest!(
                    line_number,
                    "{} is {} points at scale {}, which is less than a pixel",
                    entry.filename,
                    entry.size,
                    entry.scale
                );
            }
            entries.push(entry);
        }
    }
    Ok(entries)
}

// Entries are written relative to the bundle directory and must stay in it.
fn check_filename(filename: &str, line_number: usize) -> Result<()> {
    let escapes = Path::new(filename).components().any(|component| {
        matches!(
            component,
            Component::Prefix(_) | Component::RootDir | Component::ParentDir
        )
    });
    if escapes {
        malformed_manifest!(
            line_number,
            "file name {:?} is not inside the icon set directory",
            filename
        );
    }
    Ok(())
}

fn value_after_key(line: &str, line_number: usize) -> Result<&str> {
    match line.find(VALUE_START) {
        Some(start) => Ok(&line[(start + VALUE_START.len())..]),
        None => malformed_manifest!(
            line_number,
            "expected a quoted value in {:?}",
            line.trim()
        ),
    }
}

fn numeric_value(line: &str, line_number: usize, field: &str) -> Result<f32> {
    let value = value_after_key(line, line_number)?;
    let end = value
        .find(|ch: char| ch == 'x' || ch == '"')
        .unwrap_or(value.len());
    let number = value[..end].trim();
    match number.parse::<f32>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
        _ => malformed_manifest!(
            line_number,
            "invalid {} value {:?}",
            field,
            number
        ),
    }
}

//===========================================================================//


//===========================================================================//
