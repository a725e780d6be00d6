//! Process-lifetime image cache

use crate::decode::{Frame, decode_frames, decode_scaled, is_animated_path};
use crate::placeholder::placeholder;
use crate::Size;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// A decoded animation with its playback cursor
#[derive(Debug)]
pub struct Animation {
    size: Size,
    frames: Vec<Frame>,
    index: usize,
    last_advance: Instant,
}

impl Animation {
    fn new(size: Size, frames: Vec<Frame>, now: Instant) -> Self {
        Self {
            size,
            frames,
            index: 0,
            last_advance: now,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Advance at most one frame if the current one has been shown long enough
    fn tick(&mut self, now: Instant) -> Arc<RgbaImage> {
        let elapsed = now.saturating_duration_since(self.last_advance);
        if elapsed > self.frames[self.index].duration {
            self.index = (self.index + 1) % self.frames.len();
            self.last_advance = now;
        }
        Arc::clone(&self.frames[self.index].image)
    }
}

/// Decoded bitmaps keyed by source path and target size.
///
/// Nothing is ever evicted; the working set is bounded by the catalog.
#[derive(Debug, Default)]
pub struct ImageCache {
    stills: HashMap<(PathBuf, Size), Arc<RgbaImage>>,
    placeholders: HashMap<Size, Arc<RgbaImage>>,
    animations: HashMap<PathBuf, Animation>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmap for `path` at `size`, or the placeholder when there is nothing usable.
    ///
    /// Animated images are registered for playback and the current frame is returned.
    pub fn get(&mut self, path: &str, size: Size, now: Instant) -> Arc<RgbaImage> {
        if path.is_empty() {
            return self.placeholder(size);
        }

        let source = Path::new(path);
        let key = (source.to_path_buf(), size);
        if let Some(img) = self.stills.get(&key) {
            return Arc::clone(img);
        }

        if is_animated_path(source) {
            if let Some(anim) = self.animations.get_mut(source) {
                if anim.size == size {
                    return anim.tick(now);
                }
                tracing::debug!("Re-decoding {} for size {:?}", path, size);
            }
            return self.load_animation(key, now);
        }

        match decode_scaled(source, size) {
            Ok(img) => {
                let img = Arc::new(img);
                self.stills.insert(key, Arc::clone(&img));
                img
            }
            Err(e) => {
                tracing::warn!("Failed to load image {}: {}", path, e);
                self.remember_failure(key)
            }
        }
    }

    /// Pin the placeholder under a path that failed, so it is not read again
    fn remember_failure(&mut self, key: (PathBuf, Size)) -> Arc<RgbaImage> {
        let img = self.placeholder(key.1);
        self.animations.remove(&key.0);
        self.stills.insert(key, Arc::clone(&img));
        img
    }

    fn load_animation(&mut self, (source, size): (PathBuf, Size), now: Instant) -> Arc<RgbaImage> {
        let mut frames = match decode_frames(&source, size) {
            Ok(frames) => frames,
            Err(e) => {
                tracing::warn!("Failed to load animation {}: {}", source.display(), e);
                return self.remember_failure((source, size));
            }
        };

        if frames.len() == 1 {
            let img = frames.remove(0).image;
            self.animations.remove(&source);
            self.stills.insert((source, size), Arc::clone(&img));
            return img;
        }

        tracing::debug!("Loaded {} frames from {}", frames.len(), source.display());
        let first = Arc::clone(&frames[0].image);
        self.animations
            .insert(source, Animation::new(size, frames, now));
        first
    }

    /// Current frame of a registered animation, advancing it if its time is up
    pub fn current_frame(&mut self, path: &str, now: Instant) -> Option<Arc<RgbaImage>> {
        self.animations
            .get_mut(Path::new(path))
            .map(|anim| anim.tick(now))
    }

    pub fn animation(&self, path: &str) -> Option<&Animation> {
        self.animations.get(Path::new(path))
    }

    /// Placeholder bitmap, cached by size alone
    pub fn placeholder(&mut self, size: Size) -> Arc<RgbaImage> {
        Arc::clone(
            self.placeholders
                .entry(size)
                .or_insert_with(|| Arc::new(placeholder(size))),
        )
    }

    /// Number of cache entries (stills, placeholders and animations)
    pub fn len(&self) -> usize {
        self.stills.len() + self.placeholders.len() + self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_placeholder() {
        let mut cache = ImageCache::new();
        let now = Instant::now();

        let a = cache.get("", (32, 32), now);
        let b = cache.get("", (32, 32), now);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_file_shares_placeholder() {
        let mut cache = ImageCache::new();
        let now = Instant::now();

        let empty = cache.get("", (40, 20), now);
        let missing = cache.get("/no/such/cover.png", (40, 20), now);
        assert!(Arc::ptr_eq(&empty, &missing));

        let other = cache.get("", (20, 20), now);
        assert!(!Arc::ptr_eq(&empty, &other));
        assert_eq!(other.dimensions(), (20, 20));
    }

    #[test]
    fn test_missing_gif_is_placeholder() {
        let mut cache = ImageCache::new();
        let img = cache.get("/no/such/anim.gif", (16, 16), Instant::now());
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(cache.animation_count(), 0);
    }

    #[test]
    fn test_failed_decode_is_not_retried() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"not an image").unwrap();
        let path = path.to_str().unwrap();
        let now = Instant::now();

        let mut cache = ImageCache::new();
        let first = cache.get(path, (8, 8), now);
        assert!(Arc::ptr_eq(&first, &cache.placeholder((8, 8))));

        // A later fix on disk is not picked up; the failure is remembered
        let mut valid = RgbaImage::new(8, 8);
        valid.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));
        valid.save_with_format(path, image::ImageFormat::Png).unwrap();

        let second = cache.get(path, (8, 8), now);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_current_frame_unknown_path() {
        let mut cache = ImageCache::new();
        assert!(cache.current_frame("nothing.gif", Instant::now()).is_none());
    }
}
