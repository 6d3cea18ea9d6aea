//! PNG decoding into and encoding from ARGB canvases.

use std::io::Cursor;
use std::path::Path;

use region_fill::{Argb, Canvas};

use crate::error::ImageError;

/// Decode PNG bytes into a canvas.
///
/// Palette, low bit depth and 16-bit images are normalized to 8 bits per
/// channel; grayscale and RGB images without alpha become opaque.
pub fn decode_png(bytes: &[u8]) -> Result<Canvas, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;

    let pixels: Vec<Argb> = match info.color_type {
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|p| Argb::from_rgba_bytes([p[0], p[1], p[2], p[3]]))
            .collect(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|p| Argb::opaque(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|p| Argb::from_channels(p[1], p[0], p[0], p[0]))
            .collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| Argb::opaque(v, v, v)).collect(),
        other => {
            return Err(ImageError::UnsupportedFormat(format!(
                "{other:?} after normalization"
            )))
        }
    };

    tracing::debug!(width, height, color_type = ?info.color_type, "decoded PNG");
    Ok(Canvas::from_pixels(width, height, pixels)?)
}

/// Encode a canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ImageError> {
    let width = u32::try_from(canvas.width())
        .map_err(|_| ImageError::PngEncode(format!("width {} too large", canvas.width())))?;
    let height = u32::try_from(canvas.height())
        .map_err(|_| ImageError::PngEncode(format!("height {} too large", canvas.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&canvas.to_rgba_bytes())
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Canvas, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
}

/// Encode and write a PNG file, returning the number of bytes written.
pub fn write_png(path: &Path, canvas: &Canvas) -> Result<usize, ImageError> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, &bytes).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
