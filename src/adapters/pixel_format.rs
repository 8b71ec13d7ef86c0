//! Pixel format conversion between the RGB raster and RGBA surfaces.

use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialPixel { src_len } => {
                write!(f, "rgb length {} is not a multiple of 3", src_len)
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "rgba length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into packed RGBA with opaque alpha.
///
/// `dst` must hold exactly four bytes for every three in `src`; nothing is
/// written otherwise.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialPixel { src_len: src.len() });
    }

    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            9, 8, 7,
        ];
        let mut dst = vec![0; 16];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 9, 8, 7, 255]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&[], &mut dst).unwrap();

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_partial_pixel() {
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::PartialPixel { src_len: 4 })
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_wrong_destination_and_leaves_it_untouched() {
        let mut dst = vec![7; 5];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3], &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(dst, vec![7; 5]);
    }
}
