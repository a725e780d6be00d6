//! Decoding and scaling

use crate::{MediaError, Size};
use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Used when a GIF frame carries no delay
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(100);

/// One frame of an animation
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: Arc<RgbaImage>,
    pub duration: Duration,
}

/// Animated images are recognised by extension
pub fn is_animated_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gif"))
        .unwrap_or(false)
}

fn scale(img: &RgbaImage, (width, height): Size) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, FilterType::Nearest)
}

/// Decode any supported still image and scale it to `size`
pub fn decode_scaled(path: &Path, size: Size) -> Result<RgbaImage, MediaError> {
    if !path.is_file() {
        return Err(MediaError::NotFound(path.to_path_buf()));
    }

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    Ok(scale(&img, size))
}

/// Decode every frame of a GIF, scaled to `size`
pub fn decode_frames(path: &Path, size: Size) -> Result<Vec<Frame>, MediaError> {
    if !path.is_file() {
        return Err(MediaError::NotFound(path.to_path_buf()));
    }

    let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
    let frames = decoder.into_frames().collect_frames()?;
    if frames.is_empty() {
        return Err(MediaError::NoFrames(path.to_path_buf()));
    }

    Ok(frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let millis = if denom == 0 { 0 } else { numer / denom };
            let duration = if millis == 0 {
                DEFAULT_FRAME_DURATION
            } else {
                Duration::from_millis(u64::from(millis))
            };

            Frame {
                image: Arc::new(scale(frame.buffer(), size)),
                duration,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_is_animated_path() {
        assert!(is_animated_path(Path::new("a/b/spin.gif")));
        assert!(is_animated_path(Path::new("SPIN.GIF")));
        assert!(!is_animated_path(Path::new("cover.png")));
        assert!(!is_animated_path(Path::new("gif")));
    }

    #[test]
    fn test_decode_scaled_nearest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("two.png");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        img.save(&path).unwrap();

        let scaled = decode_scaled(&path, (4, 2)).unwrap();
        assert_eq!(scaled.dimensions(), (4, 2));
        // Hard edges, no blending between the two source pixels
        assert_eq!(scaled.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(scaled.get_pixel(2, 0), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_decode_missing() {
        let err = decode_scaled(Path::new("/definitely/not/here.png"), (8, 8)).unwrap_err();
        assert!(matches!(err, MediaError::NotFound(_)));
    }
}
