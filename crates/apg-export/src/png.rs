//! PNG encoding of rendered posters.

use std::io::Cursor;

use apg_core::ExportError;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// Encode raw RGBA pixels as PNG.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(ExportError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut output = Cursor::new(Vec::new());
    PngEncoder::new(&mut output)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })?;
    Ok(output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature() {
        let png = encode_png(&[255; 4 * 4 * 4], 4, 4).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_has_ihdr() {
        let png = encode_png(&[0; 3 * 2 * 4], 3, 2).unwrap();
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &3u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = encode_png(&[0; 10], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            ExportError::BufferSize {
                expected: 16,
                actual: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_pixels_survive_decoding() {
        let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| (i * 13) as u8).collect();
        let png = encode_png(&pixels, 2, 2).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), &pixels);
    }
}
