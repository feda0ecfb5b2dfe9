//! Font discovery and measurement for text rendering.

use std::path::Path;

use ab_glyph::{Font, FontVec, ScaleFont};
use tracing::{debug, info};

use crate::error::{FigprepError, Result};

/// Load a font from an explicit path.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)?;
    FontVec::try_from_vec(data)
        .map_err(|_| FigprepError::FontLoad(format!("Failed to parse font file: {}", path.display())))
}

/// Try to load a font from common system locations.
///
/// Returns `None` when no system font is found; callers then skip text
/// rendering rather than failing.
pub fn load_system_font() -> Option<FontVec> {
    let font_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/System/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in &font_paths {
        if let Ok(font) = load_font(Path::new(path)) {
            info!("Loaded system font: {path}");
            return Some(font);
        }
    }

    debug!("No system font found, text rendering will be skipped");
    None
}

/// Width of `text` at `scale`, summed over glyph horizontal advances.
pub fn measure_text_width(text: &str, font: &FontVec, scale: f32) -> f32 {
    let scaled_font = font.as_scaled(scale);
    text.chars()
        .map(|ch| {
            let glyph = scaled_font.scaled_glyph(ch);
            scaled_font.h_advance(glyph.id)
        })
        .sum()
}
