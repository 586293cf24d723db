//! Windows `.ico` packaging.

use crate::codec::RasterCodec;
use crate::error::{Error, Result};
use crate::icondir;
use crate::registry::ImageRegistry;
use crate::resolve::resolve_all;
use crate::size::IconSize;
use std::fs;
use std::path::Path;

//===========================================================================//

/// Prefix of the staging directory a Windows run works in.
pub const TEMP_DIR_PREFIX: &str = "makeicon_temp";

//===========================================================================//

/// Builds a `.ico` file at `output` holding one PNG per entry of `sizes`, in
/// that order.
///
/// Every size is resolved before anything touches the disk.  The PNGs are
/// staged in a `makeicon_temp*` directory under `temp_root` (or the system
/// temporary directory), which is deleted when this function returns, on
/// success or failure alike.
pub fn pack<C: RasterCodec + ?Sized>(
    sizes: &[u32],
    registry: &ImageRegistry,
    codec: &C,
    output: &Path,
    allow_resize: bool,
    temp_root: Option<&Path>,
) -> Result<()> {
    if sizes.len() > (u16::MAX as usize) {
        return Err(Error::Overflow(format!(
            "Too many sizes for one ICO file (was {}, but max is {})",
            sizes.len(),
            u16::MAX
        )));
    }
    for &size in sizes.iter() {
        IconSize::new(size as i64)?;
    }
    let sources = resolve_all(sizes, registry, allow_resize)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_DIR_PREFIX);
    let staging = match temp_root {
        Some(root) => builder.tempdir_in(root),
        None => builder.tempdir(),
    }
    .map_err(|error| {
        let root = temp_root.map_or_else(std::env::temp_dir, Path::to_path_buf);
        Error::io(root, error)
    })?;
    log::debug!("Staging PNGs in {}", staging.path().display());

    for (&size, source) in sizes.iter().zip(sources.iter()) {
        let staged = staging.path().join(format!("{}.png", size));
        let image = source.materialize(registry, codec)?;
        let data = codec.encode_png(&image)?;
        fs::write(&staged, data).map_err(|error| Error::io(&staged, error))?;
    }

    let mut payloads = Vec::with_capacity(sizes.len());
    for &size in sizes.iter() {
        let staged = staging.path().join(format!("{}.png", size));
        let data = fs::read(&staged).map_err(|error| Error::io(&staged, error))?;
        payloads.push((size, data));
    }
    let container = icondir::encode(&payloads)?;

    fs::write(output, &container).map_err(|error| Error::io(output, error))?;
    log::info!(
        "Wrote {} ({} images, {} bytes)",
        output.display(),
        sizes.len(),
        container.len()
    );
    let staging_path = staging.path().to_path_buf();
    staging.close().map_err(|error| Error::io(staging_path, error))?;
    Ok(())
}

//===========================================================================//


//===========================================================================//
