//! Binary PPM (P6) encoding.
//!
//! Channels are stored linear, without gamma correction.

use std::io::{self, Write};

use crate::ImageBuffer;
use orb_math::Color;

/// Convert a linear channel value to a byte, saturating outside [0, 1].
///
/// NaN encodes as 0.
#[inline]
pub fn to_byte(channel: f64) -> u8 {
    if channel > 1.0 {
        255
    } else if channel < 0.0 {
        0
    } else {
        (channel * 255.0 + 0.5) as u8
    }
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// The P6 header for an image of the given size.
pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{width} {height}\n255\n")
}

/// Write `image` as a P6 stream: header, then RGB8 pixels row-major,
/// top row first, with no padding or trailing data.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writer.write_all(ppm_header(image.width, image.height).as_bytes())?;

    let mut row = Vec::with_capacity(image.width as usize * 3);
    for y in 0..image.height {
        row.clear();
        for x in 0..image.width {
            row.extend_from_slice(&color_to_rgb(image.get(x, y)));
        }
        writer.write_all(&row)?;
    }

    writer.flush()
}

/// Encode `image` as an in-memory P6 file.
pub fn encode_ppm(image: &ImageBuffer) -> Vec<u8> {
    let header = ppm_header(image.width, image.height);
    let mut bytes = Vec::with_capacity(header.len() + image.pixels.len() * 3);
    // Writing into a Vec cannot fail
    let _ = write_ppm(image, &mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_byte_saturates() {
        assert_eq!(to_byte(-0.5), 0);
        assert_eq!(to_byte(-1e-9), 0);
        assert_eq!(to_byte(1.0000001), 255);
        assert_eq!(to_byte(42.0), 255);
        assert_eq!(to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_to_byte_rounds_to_nearest() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(0.25), 64);
        assert_eq!(to_byte(1.0 / 255.0), 1);
        assert_eq!(to_byte(0.49 / 255.0), 0);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::new(0.5, 0.2, 1.0)), [128, 51, 255]);
    }

    #[test]
    fn test_write_ppm_layout() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::new(2.0, -1.0, 0.5));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 0, 128]);
        assert_eq!(out, expected);
        assert_eq!(encode_ppm(&image), expected);
    }

    #[test]
    fn test_write_ppm_propagates_io_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_ppm(&ImageBuffer::new(1, 1), &mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
