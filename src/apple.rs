//! Apple icon sets, laid out as a manifest describes them.

use crate::codec::RasterCodec;
use crate::error::{Error, Result};
use crate::manifest::{self, ManifestEntry};
use crate::registry::ImageRegistry;
use crate::resolve::resolve_all;
use std::fs;
use std::path::Path;

//===========================================================================//

/// The name the manifest is copied to inside the bundle.
pub const CONTENTS_FILE_NAME: &str = "Contents.json";

//===========================================================================//

/// Builds an Apple icon set in `output_dir`: one PNG per complete manifest
/// entry, named and sized as the entry says, plus a copy of the manifest.
pub fn pack<C: RasterCodec + ?Sized>(
    manifest_path: Option<&Path>,
    registry: &ImageRegistry,
    codec: &C,
    output_dir: &Path,
    allow_resize: bool,
) -> Result<()> {
    let manifest_path = manifest_path.ok_or(Error::ManifestMissing)?;
    let text = fs::read_to_string(manifest_path)
        .map_err(|error| Error::io(manifest_path, error))?;
    let entries = manifest::scan(&text)?;
    let sizes: Vec<u32> =
        entries.iter().map(ManifestEntry::effective_size).collect();
    let sources = resolve_all(&sizes, registry, allow_resize)?;

    fs::create_dir_all(output_dir)
        .map_err(|error| Error::io(output_dir, error))?;
    for (entry, source) in entries.iter().zip(sources.iter()) {
        let destination = output_dir.join(&entry.filename);
        let image = source.materialize(registry, codec)?;
        let data = codec.encode_png(&image)?;
        fs::write(&destination, data)
            .map_err(|error| Error::io(&destination, error))?;
        log::info!("Wrote {} ({}x{})", destination.display(),
                   image.width(), image.height());
    }

    let copied = output_dir.join(CONTENTS_FILE_NAME);
    if same_file(manifest_path, &copied) {
        log::debug!("Manifest is already in place at {}", copied.display());
    } else {
        fs::copy(manifest_path, &copied)
            .map_err(|error| Error::io(&copied, error))?;
    }
    Ok(())
}

fn same_file(first: &Path, second: &Path) -> bool {
    match (first.canonicalize(), second.canonicalize()) {
        (Ok(first), Ok(second)) => first == second,
        _ => first == second,
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::pack;
    use crate::codec::StandardCodec;
    use crate::error::Error;
    use crate::registry::ImageRegistry;

    #[test]
    fn missing_manifest_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = pack(None, &ImageRegistry::new(), &StandardCodec,
                          dir.path(), true);
        assert!(matches!(result, Err(Error::ManifestMissing)));
    }

    #[test]
    fn unreadable_manifest_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("Contents.json");
        let result = pack(Some(&manifest), &ImageRegistry::new(),
                          &StandardCodec, &dir.path().join("out"), true);
        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(!dir.path().join("out").exists());
    }
}

//===========================================================================//
