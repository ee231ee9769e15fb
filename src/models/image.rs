use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{ImagineError, Result};

#[cfg(feature = "image")]
pub type DecodedImage = image::DynamicImage;

/// Never constructed: decoding needs the `image` feature.
#[cfg(not(feature = "image"))]
#[derive(Debug)]
pub enum DecodedImage {}

/// Decoded pixels in row-major RGBA8 order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArray {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl PixelArray {
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

/// Raw image bytes returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
}

impl Image {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes the whole payload to `path`, replacing any existing file.
    pub fn as_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        std::fs::write(path, &self.data).map_err(|e| ImagineError::io(path, e))?;
        log::debug!("Wrote {} bytes to {}", self.data.len(), path.display());
        Ok(path.to_path_buf())
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    #[cfg(feature = "image")]
    pub fn to_image(&self) -> Option<DecodedImage> {
        match image::load_from_memory(&self.data) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Could not decode image payload: {}", e);
                None
            }
        }
    }

    #[cfg(not(feature = "image"))]
    pub fn to_image(&self) -> Option<DecodedImage> {
        log::warn!(
            "Image decoding is not available. Enable the `image` feature of imaginesdk \
             or decode `Image::bytes` with your own implementation."
        );
        None
    }

    /// The payload as a flat `u8` array, without decoding.
    pub fn to_numeric_array(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Decoded RGBA8 pixels. `None` when the payload cannot be decoded.
    pub fn to_pixel_array(&self) -> Option<PixelArray> {
        let decoded = self.to_image()?;
        Some(pixel_array(decoded))
    }
}

#[cfg(feature = "image")]
fn pixel_array(decoded: DecodedImage) -> PixelArray {
    let rgba = decoded.to_rgba8();
    PixelArray {
        width: rgba.width(),
        height: rgba.height(),
        channels: 4,
        data: rgba.into_raw(),
    }
}

#[cfg(not(feature = "image"))]
fn pixel_array(decoded: DecodedImage) -> PixelArray {
    match decoded {}
}

impl From<Vec<u8>> for Image {
    fn from(data: Vec<u8>) -> Self {
        Image::new(data)
    }
}

impl AsRef<[u8]> for Image {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_returned_unchanged() {
        let image = Image::new(b"PNGDATA".to_vec());
        assert_eq!(image.bytes(), b"PNGDATA");
        assert_eq!(image.len(), 7);
        assert_eq!(image.into_bytes(), b"PNGDATA".to_vec());
    }

    #[test]
    fn as_file_writes_full_payload() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("result.png");
        let image = Image::new(vec![0, 1, 2, 255]);

        let written = image.as_file(&target).unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), vec![0, 1, 2, 255]);
    }

    #[test]
    fn as_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("result.png");
        let err = Image::new(vec![1]).as_file(&target).unwrap_err();
        assert!(matches!(err, ImagineError::IoError { .. }));
    }

    #[test]
    fn base64_encodes_payload() {
        assert_eq!(Image::new(b"hi".to_vec()).to_base64(), "aGk=");
    }

    #[test]
    fn undecodable_bytes_degrade_to_none() {
        let image = Image::new(b"not an image".to_vec());
        assert!(image.to_image().is_none());
        assert!(image.to_pixel_array().is_none());
    }

    #[test]
    fn numeric_array_is_the_raw_payload() {
        let image = Image::new(b"PNGDATA".to_vec());
        let array = image.to_numeric_array();
        assert_eq!(array.len(), 7);
        assert_eq!(array, b"PNGDATA".to_vec());
    }

    #[cfg(feature = "image")]
    #[test]
    fn pixel_array_has_rgba_shape() {
        use std::io::Cursor;

        let mut png = Vec::new();
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let array = Image::new(png).to_pixel_array().unwrap();
        assert_eq!(array.shape(), (2, 3, 4));
        assert_eq!(&array.data[..4], &[10, 20, 30, 255]);
    }
}
