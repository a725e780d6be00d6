//! Generated stand-in for missing cover art

use crate::Size;
use image::{Rgba, RgbaImage};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const FRAME_BLUE: Rgba<u8> = Rgba([0, 100, 210, 255]);
const STROKE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn fill(img: &mut RgbaImage, x: i64, y: i64, w: i64, h: i64, color: Rgba<u8>) {
    let (iw, ih) = (i64::from(img.width()), i64::from(img.height()));
    for py in y.max(0)..(y + h).min(ih) {
        for px in x.max(0)..(x + w).min(iw) {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Pixel-art frame: rounded blue border with a black stroke around a white card.
///
/// Output depends only on `size`, so callers may cache it by size alone.
pub fn placeholder((width, height): Size) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width.max(1), height.max(1), CLEAR);
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let p = (w / 32).max(1);

    // Blue frame, two cells thick, leaving the corners open
    let mut x = 3 * p;
    while x < w - 3 * p {
        fill(&mut img, x, 0, p, 2 * p, FRAME_BLUE);
        fill(&mut img, x, h - 2 * p, p, 2 * p, FRAME_BLUE);
        x += p;
    }
    let mut y = 3 * p;
    while y < h - 3 * p {
        fill(&mut img, 0, y, 2 * p, p, FRAME_BLUE);
        fill(&mut img, w - 2 * p, y, 2 * p, p, FRAME_BLUE);
        y += p;
    }

    // Outer stroke, one cell thick
    fill(&mut img, 0, 0, w, p, STROKE);
    fill(&mut img, 0, h - p, w, p, STROKE);
    fill(&mut img, 0, 0, p, h, STROKE);
    fill(&mut img, w - p, 0, p, h, STROKE);

    // Knock out the outermost corner cells to round the stroke
    for (cx, cy) in [(0, 0), (w - p, 0), (0, h - p), (w - p, h - p)] {
        fill(&mut img, cx, cy, p, p, CLEAR);
    }

    // White card with its own rounded corners
    let margin = 2 * p;
    let (iw, ih) = (w - 2 * margin, h - 2 * margin);
    if iw > 0 && ih > 0 {
        fill(&mut img, margin, margin, iw, ih, PAPER);
        for (cx, cy) in [
            (margin, margin),
            (margin + iw - p, margin),
            (margin, margin + ih - p),
            (margin + iw - p, margin + ih - p),
        ] {
            fill(&mut img, cx, cy, p, p, CLEAR);
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder((64, 48)), placeholder((64, 48)));
        assert_eq!(placeholder((64, 48)).dimensions(), (64, 48));
    }

    #[test]
    fn test_placeholder_layout() {
        let img = placeholder((64, 64));
        // Cell size is 2 px at this width
        assert_eq!(img.get_pixel(0, 0), &CLEAR);
        assert_eq!(img.get_pixel(10, 0), &STROKE);
        assert_eq!(img.get_pixel(10, 2), &FRAME_BLUE);
        assert_eq!(img.get_pixel(32, 32), &PAPER);
        // Rounded inner corner
        assert_eq!(img.get_pixel(4, 4), &CLEAR);
    }

    #[test]
    fn test_tiny_sizes_do_not_panic() {
        for size in [(0, 0), (1, 1), (2, 5), (7, 3)] {
            let img = placeholder(size);
            assert!(img.width() >= 1 && img.height() >= 1);
        }
    }
}
