//! Theme colors

use serde::{Deserialize, Serialize};

/// An RGB color, stored in JSON as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

/// Colors used across all screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: Rgb,
    pub button_color: Rgb,
    pub button_hover_color: Rgb,
    pub text_color: Rgb,
    pub header_color: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: Rgb::new(10, 10, 40),
            button_color: Rgb::new(80, 80, 200),
            button_hover_color: Rgb::new(120, 120, 255),
            text_color: Rgb::new(255, 255, 255),
            header_color: Rgb::new(255, 200, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_serializes_as_array() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");

        let rgb: Rgb = serde_json::from_str("[255, 200, 0]").unwrap();
        assert_eq!(rgb, Rgb::new(255, 200, 0));
        assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 200, 0));
    }

    #[test]
    fn test_partial_theme() {
        let theme: ThemeConfig =
            serde_json::from_str(r#"{ "text_color": [0, 0, 0] }"#).unwrap();
        assert_eq!(theme.text_color, Rgb::new(0, 0, 0));
        assert_eq!(theme.header_color, ThemeConfig::default().header_color);
    }
}
