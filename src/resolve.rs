use crate::codec::RasterCodec;
use crate::error::{Error, Result};
use crate::registry::{DecodedImage, ImageRegistry};
use std::borrow::Cow;

//===========================================================================//

/// Which registered image will provide a requested size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedSource {
    /// The image at this registry index already has the requested size.
    Exact(usize),
    /// No image has the requested size; the image at `source` (the largest
    /// one) will be resized to `size`.
    Fallback {
        /// Registry index of the image to resize.
        source: usize,
        /// The target edge length, in pixels.
        size: u32,
    },
}

impl ResolvedSource {
    /// Produces the pixels for this selection.  Only a fallback does any
    /// work, by calling the codec's resize.
    pub fn materialize<'a, C: RasterCodec + ?Sized>(
        &self,
        registry: &'a ImageRegistry,
        codec: &C,
    ) -> Result<Cow<'a, DecodedImage>> {
        match *self {
            ResolvedSource::Exact(index) => {
                Ok(Cow::Borrowed(registry.get(index)))
            }
            ResolvedSource::Fallback { source, size } => {
                let resized = codec.resize(registry.get(source), size, size)?;
                Ok(Cow::Owned(resized))
            }
        }
    }
}

//===========================================================================//

/// Picks the image that satisfies `size`: an exact match if there is one,
/// otherwise (when `allow_resize` is set) the largest registered image.
pub fn resolve(
    size: u32,
    registry: &ImageRegistry,
    allow_resize: bool,
) -> Result<ResolvedSource> {
    if let Some(index) = registry.find_exact(size) {
        log::debug!("Size {} matched input image #{}", size, index);
        return Ok(ResolvedSource::Exact(index));
    }
    if !allow_resize {
        return Err(Error::UnsatisfiableSize(size));
    }
    match registry.largest() {
        Some(source) => {
            log::debug!("Size {} will be resized from input image #{}",
                        size, source);
            Ok(ResolvedSource::Fallback { source, size })
        }
        None => Err(Error::UnsatisfiableSize(size)),
    }
}

/// Resolves every size up front, so that an unsatisfiable size aborts the
/// run before anything is written.
pub fn resolve_all(
    sizes: &[u32],
    registry: &ImageRegistry,
    allow_resize: bool,
) -> Result<Vec<ResolvedSource>> {
    sizes
        .iter()
        .map(|&size| resolve(size, registry, allow_resize))
        .collect()
}

//===========================================================================//


//===========================================================================//
