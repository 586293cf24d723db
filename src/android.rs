//! Android launcher icons: one `ic_launcher.png` per density bucket.

use crate::codec::RasterCodec;
use crate::error::{Error, Result};
use crate::registry::ImageRegistry;
use crate::resolve::resolve_all;
use std::fs;
use std::path::Path;

//===========================================================================//

/// Density directories, from the largest bucket to the smallest.
pub const DENSITY_DIRECTORIES: [&str; 5] = [
    "mipmap-xxxhdpi",
    "mipmap-xxhdpi",
    "mipmap-xhdpi",
    "mipmap-hdpi",
    "mipmap-mdpi",
];

/// The file written into each density directory.
pub const LAUNCHER_FILE_NAME: &str = "ic_launcher.png";

//===========================================================================//

/// Derives the five bucket sizes from the xxxhdpi size: 1x, 3/4x, 1/2x,
/// 3/8x and 1/4x, each built from floored halves, quarters and eighths.
pub fn bucket_sizes(base: u32) -> [u32; 5] {
    [
        base,
        (base / 2) + (base / 4),
        base / 2,
        (base / 4) + (base / 8),
        base / 4,
    ]
}

/// Writes `ic_launcher.png` into each `mipmap-*` directory under
/// `output_dir`.  Existing directories are reused and nothing else in them
/// is touched.
pub fn pack<C: RasterCodec + ?Sized>(
    base_size: u32,
    registry: &ImageRegistry,
    codec: &C,
    output_dir: &Path,
    allow_resize: bool,
) -> Result<()> {
    let sizes = bucket_sizes(base_size);
    if sizes.contains(&0) {
        return Err(Error::InvalidSize(base_size as i64));
    }
    let sources = resolve_all(&sizes, registry, allow_resize)?;

    for ((directory, &size), source) in
        DENSITY_DIRECTORIES.iter().zip(sizes.iter()).zip(sources.iter())
    {
        let bucket = output_dir.join(directory);
        fs::create_dir_all(&bucket).map_err(|error| Error::io(&bucket, error))?;
        let destination = bucket.join(LAUNCHER_FILE_NAME);
        let image = source.materialize(registry, codec)?;
        let data = codec.encode_png(&image)?;
        fs::write(&destination, data)
            .map_err(|error| Error::io(&destination, error))?;
        log::info!("Wrote {} ({}x{})", destination.display(), size, size);
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
