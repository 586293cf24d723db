use crate::error::{Error, Result};
use crate::registry::DecodedImage;
use fast_image_resize as fr;
use image::ImageReader;
use std::path::Path;

//===========================================================================//

/// The raster operations the packaging engine needs but does not implement.
pub trait RasterCodec {
    /// Decodes an image file, forcing its pixels to 8-bit RGBA.
    fn decode(&self, path: &Path) -> Result<DecodedImage>;

    /// Resamples `image` to `width` by `height` pixels.
    fn resize(
        &self,
        image: &DecodedImage,
        width: u32,
        height: u32,
    ) -> Result<DecodedImage>;

    /// Encodes `image` as an 8-bit RGBA PNG.
    fn encode_png(&self, image: &DecodedImage) -> Result<Vec<u8>>;
}

//===========================================================================//

/// Decodes with `image`, resizes with `fast_image_resize` and encodes with
/// `png`.
///
/// Resizing treats the input as sRGB: pixels are mapped to 16-bit linear
/// light and premultiplied by alpha before resampling, then mapped back, so
/// edges neither darken nor pick up the color of transparent pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardCodec;

impl RasterCodec for StandardCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let decode_error = |message: String| Error::Decode {
            path: path.to_path_buf(),
            message,
        };
        let reader = ImageReader::open(path)
            .map_err(|error| Error::io(path, error))?
            .with_guessed_format()
            .map_err(|error| Error::io(path, error))?;
        let decoded =
            reader.decode().map_err(|error| decode_error(error.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(decode_error(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }
        Ok(DecodedImage::from_rgba_data(width, height, rgba.into_raw()))
    }

    fn resize(
        &self,
        image: &DecodedImage,
        width: u32,
        height: u32,
    ) -> Result<DecodedImage> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize(0));
        }
        let source = fr::images::Image::from_vec_u8(
            image.width(),
            image.height(),
            image.rgba_data().to_vec(),
            fr::PixelType::U8x4,
        )
        .map_err(|error| Error::Resize(error.to_string()))?;

        let mapper = fr::create_srgb_mapper();
        let mut linear = fr::images::Image::new(
            image.width(),
            image.height(),
            fr::PixelType::U16x4,
        );
        mapper
            .forward_map(&source, &mut linear)
            .map_err(|error| Error::Resize(error.to_string()))?;

        // The resizer multiplies by alpha before convolving and divides after.
        let mut resized =
            fr::images::Image::new(width, height, fr::PixelType::U16x4);
        let options = fr::ResizeOptions::new().resize_alg(
            fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        );
        let mut resizer = fr::Resizer::new();
        resizer
            .resize(&linear, &mut resized, Some(&options))
            .map_err(|error| Error::Resize(error.to_string()))?;

        let mut output =
            fr::images::Image::new(width, height, fr::PixelType::U8x4);
        mapper
            .backward_map(&resized, &mut output)
            .map_err(|error| Error::Resize(error.to_string()))?;
        Ok(DecodedImage::from_rgba_data(width, height, output.into_vec()))
    }

    fn encode_png(&self, image: &DecodedImage) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(&mut data, image.width(), image.height());
            // Always RGBA, to match the 32 bpp recorded in ICO entries.
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(image.rgba_data())?;
            writer.finish()?;
        }
        Ok(data)
    }
}

//===========================================================================//


//===========================================================================//
