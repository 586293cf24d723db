use std::fmt;

//===========================================================================//

// Every image is forced to RGBA when it is decoded.
pub(crate) const CHANNELS: usize = 4;

//===========================================================================//

/// A decoded source image: RGBA pixels in row-major order from top to bottom.
#[derive(Clone)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl DecodedImage {
    /// Creates a new image with the given dimensions and RGBA data.  The
    /// `width` and `height` must be nonzero, and `rgba_data` must have `4 *
    /// width * height` bytes.  Panics if either condition is violated.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> DecodedImage {
        if width == 0 || height == 0 {
            panic!("Invalid image dimensions {}x{} (must be nonzero)",
                   width, height);
        }
        let expected_data_len =
            (width as u64) * (height as u64) * (CHANNELS as u64);
        if (rgba_data.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        DecodedImage { width, height, rgba_data }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always 4; the pixel data is RGBA.
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// Returns the RGBA data for this image.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// Returns the number of pixels, widened so it cannot overflow.
    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// True if both edges equal `size`.
    pub fn is_exactly(&self, size: u32) -> bool {
        self.width == size && self.height == size
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

//===========================================================================//

/// A non-fatal observation made while registering an input image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Advisory {
    /// The image is not square and will be stretched when resized.
    NotSquare {
        /// Where the image came from.
        label: String,
        /// Its width, in pixels.
        width: u32,
        /// Its height, in pixels.
        height: u32,
    },
    /// An earlier image already has these dimensions; the earlier one wins
    /// whenever that size is requested.
    DuplicateSize {
        /// Where the later image came from.
        label: String,
        /// The shared width, in pixels.
        width: u32,
        /// The shared height, in pixels.
        height: u32,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::NotSquare { label, .. } => write!(
                formatter,
                "Image file '{}' is not square and will be stretched! \
                 Consider changing its size.",
                label
            ),
            Advisory::DuplicateSize { width, height, .. } => write!(
                formatter,
                "Two provided image files have the same size of {}x{}! \
                 The first one registered will be used.",
                width, height
            ),
        }
    }
}

//===========================================================================//

/// The decoded source images for one packaging run, in registration order.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: Vec<DecodedImage>,
    advisories: Vec<Advisory>,
}

impl ImageRegistry {
    /// Creates an empty registry.
    pub fn new() -> ImageRegistry {
        ImageRegistry::default()
    }

    /// Adds an image, recording (and logging) any advisories about it.
    /// `label` identifies the image in those messages, usually its path.
    /// Returns the image's index.
    pub fn register(&mut self, label: &str, image: DecodedImage) -> usize {
        let (width, height) = (image.width(), image.height());
        if width != height {
            self.advise(Advisory::NotSquare {
                label: label.to_string(),
                width,
                height,
            });
        }
        if self
            .images
            .iter()
            .any(|other| other.width() == width && other.height() == height)
        {
            self.advise(Advisory::DuplicateSize {
                label: label.to_string(),
                width,
                height,
            });
        }
        self.images.push(image);
        self.images.len() - 1
    }

    fn advise(&mut self, advisory: Advisory) {
        log::warn!("{}", advisory);
        self.advisories.push(advisory);
    }

    /// Returns the registered images, in registration order.
    pub fn images(&self) -> &[DecodedImage] {
        &self.images
    }

    /// Returns the image at `index`.  Panics if out of range.
    pub fn get(&self, index: usize) -> &DecodedImage {
        &self.images[index]
    }

    /// Returns the advisories recorded so far.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Returns the number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the first registered image that is exactly `size` square.
    pub fn find_exact(&self, size: u32) -> Option<usize> {
        self.images.iter().position(|image| image.is_exactly(size))
    }

    /// Index of the image with the largest area.  Ties go to the image
    /// registered first.
    pub fn largest(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (index, image) in self.images.iter().enumerate() {
            match best {
                Some((_, area)) if area >= image.area() => {}
                _ => best = Some((index, image.area())),
            }
        }
        best.map(|(index, _)| index)
    }
}

//===========================================================================//


//===========================================================================//
