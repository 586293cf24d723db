//! Packages a set of raster images into platform icon containers: Windows
//! ICO files, Apple icon sets driven by a `Contents.json` manifest, and
//! Android `mipmap-*` launcher icon directories.
//!
//! For each size a platform needs, an input image of exactly that size is
//! used if one was given; otherwise, if resizing is allowed, the largest
//! input is resampled to fit.

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod android;
pub mod apple;
mod codec;
mod error;
pub mod icondir;
pub mod manifest;
mod options;
mod platform;
mod registry;
mod resolve;
mod size;
pub mod windows;

pub use crate::codec::{RasterCodec, StandardCodec};
pub use crate::error::{Error, Result};
pub use crate::icondir::{encode, IconDir, IconDirEntry};
pub use crate::manifest::ManifestEntry;
pub use crate::options::{expand_inputs, parse_size_params, Options};
pub use crate::platform::Platform;
pub use crate::registry::{Advisory, DecodedImage, ImageRegistry};
pub use crate::resolve::{resolve, resolve_all, ResolvedSource};
pub use crate::size::{IconSize, MAX_ICON_SIZE, MIN_ICON_SIZE};

//===========================================================================//

/// Runs one packaging job with the standard codec.
pub fn make_icon(options: &Options) -> Result<()> {
    make_icon_with(options, &StandardCodec)
}

/// Runs one packaging job: validates `options`, decodes every input into a
/// fresh registry, and hands the registry to the selected platform's
/// packager.  Any error aborts the job.
pub fn make_icon_with<C: RasterCodec + ?Sized>(
    options: &Options,
    codec: &C,
) -> Result<()> {
    options.validate()?;
    let registry = load_images(&options.inputs, codec)?;
    log::debug!(
        "Packaging {} input images for {}",
        registry.len(),
        options.platform
    );
    options.platform.package(options, &registry, codec)
}

/// Decodes `inputs`, in order, into a new registry.
pub fn load_images<C: RasterCodec + ?Sized>(
    inputs: &[std::path::PathBuf],
    codec: &C,
) -> Result<ImageRegistry> {
    let mut registry = ImageRegistry::new();
    for path in inputs.iter() {
        let image = codec.decode(path)?;
        registry.register(&path.display().to_string(), image);
    }
    Ok(registry)
}

//===========================================================================//
