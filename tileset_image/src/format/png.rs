use crate::IndexedImage;
use anyhow::{Context, Result, bail};
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png};
use std::{fs, path::Path};

/// Encodes an RGBA image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
	if image.width() == 0 || image.height() == 0 {
		bail!("cannot encode an empty image as png");
	}

	let mut buffer: Vec<u8> = Vec::new();
	png::PngEncoder::new_with_quality(
		&mut buffer,
		png::CompressionType::Best,
		png::FilterType::Adaptive,
	)
	.write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
	.context("failed to encode png")?;

	Ok(buffer)
}

pub fn decode_png(data: &[u8]) -> Result<RgbaImage> {
	let image = image::load_from_memory_with_format(data, image::ImageFormat::Png).context("failed to decode png")?;
	Ok(image.to_rgba8())
}

/// Writes an indexed image as an RGBA PNG file.
pub fn save_png(image: &IndexedImage, path: &Path) -> Result<()> {
	let data = encode_png(&image.to_rgba())?;
	fs::write(path, data).with_context(|| format!("failed to write {path:?}"))?;
	log::debug!("wrote {path:?} ({}x{})", image.width(), image.height());
	Ok(())
}

pub fn load_png(path: &Path) -> Result<RgbaImage> {
	let data = fs::read(path).with_context(|| format!("failed to read {path:?}"))?;
	decode_png(&data).with_context(|| format!("in {path:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::OutputPalette;
	use tempfile::TempDir;
	use tileset_core::constants::DEFAULT_PALETTE;

	#[test]
	fn rgba_survives_encoding() -> Result<()> {
		let mut image = IndexedImage::new(16, 8, OutputPalette::with_sentinel(&DEFAULT_PALETTE), 0);
		image.blit_tile(8, 0, &std::array::from_fn(|i| (i % 4) as u8));
		let rgba = image.to_rgba();

		let data = encode_png(&rgba)?;
		assert_eq!(&data[1..4], b"PNG");
		assert_eq!(decode_png(&data)?, rgba);
		Ok(())
	}

	#[test]
	fn save_and_load() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("out.png");
		let image = IndexedImage::new(8, 8, OutputPalette::new(&DEFAULT_PALETTE), 1);
		save_png(&image, &path)?;

		let loaded = load_png(&path)?;
		assert_eq!(loaded.dimensions(), (8, 8));
		assert!(loaded.pixels().all(|p| p.0 == [0xFF, 0xFF, 0xFF, 0xFF]));
		Ok(())
	}

	#[test]
	fn errors() {
		assert!(encode_png(&RgbaImage::new(0, 0)).is_err());
		assert!(decode_png(b"not a png").is_err());
		assert!(load_png(Path::new("/definitely/missing.png")).is_err());
	}
}
