//! Bar-chart rendering for per-class pixel totals.

use ab_glyph::FontVec;
use image::imageops::{overlay, rotate270};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::font::measure_text_width;
use crate::types::PixelCounts;

const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const BAR_COLOR: Rgb<u8> = Rgb([70, 130, 180]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const AXIS_COLOR: Rgb<u8> = Rgb([60, 60, 60]);

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 140;

/// Chart canvas dimensions and the fixed artifact file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            file_name: "pixel_counts.png".to_string(),
        }
    }
}

/// Render one bar per class, ordered by ascending pixel total, with the
/// class labels drawn vertically under the bars for readability.
///
/// Text rendering is skipped when no font is available; the bars are still
/// drawn. An empty count set yields a blank canvas.
pub fn render_bar_chart(
    counts: &PixelCounts,
    config: &ChartConfig,
    font: Option<&FontVec>,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(config.width, config.height, BACKGROUND_COLOR);

    if let Some(font) = font {
        let title = "Pixels per class";
        let scale = 22.0;
        let x = ((config.width as f32 - measure_text_width(title, font, scale)) / 2.0).max(0.0);
        draw_text_mut(&mut canvas, TEXT_COLOR, x as i32, 12, scale, font, title);
    }

    let entries = counts.sorted_ascending();
    if entries.is_empty() {
        return canvas;
    }

    let plot_width = config.width.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT);
    let plot_height = config.height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM);
    let baseline = MARGIN_TOP + plot_height;
    let max_total = entries.iter().map(|(_, total)| *total).max().unwrap_or(1).max(1);

    // x-axis
    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(MARGIN_LEFT as i32, baseline as i32).of_size(plot_width.max(1), 1),
        AXIS_COLOR,
    );

    let slot = (plot_width / entries.len() as u32).max(2);
    let bar_width = (slot * 4 / 5).max(1);

    for (index, (label, total)) in entries.iter().enumerate() {
        let bar_height =
            ((*total as f64 / max_total as f64) * plot_height as f64).round() as u32;
        let bar_height = bar_height.clamp(1, plot_height.max(1));

        let x = MARGIN_LEFT + index as u32 * slot + (slot - bar_width) / 2;
        let y = baseline - bar_height;
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(x as i32, y as i32).of_size(bar_width, bar_height),
            BAR_COLOR,
        );

        if let Some(font) = font {
            draw_vertical_label(&mut canvas, label.as_str(), font, x + bar_width / 2, baseline + 6);
        }
    }

    canvas
}

/// Draw `text` rotated 90° counterclockwise, top edge at `top`, centered on
/// `center_x`. Matches the rotated x-axis tick labels of the original
/// summary chart.
fn draw_vertical_label(canvas: &mut RgbImage, text: &str, font: &FontVec, center_x: u32, top: u32) {
    let scale = 16.0;
    let text_width = measure_text_width(text, font, scale).ceil().max(1.0) as u32;
    let text_height = scale.ceil() as u32 + 4;

    let mut strip = RgbImage::from_pixel(text_width, text_height, BACKGROUND_COLOR);
    draw_text_mut(&mut strip, TEXT_COLOR, 0, 0, scale, font, text);

    // After rotation the strip is text_height wide and text_width tall.
    let rotated = rotate270(&strip);
    let x = center_x.saturating_sub(rotated.width() / 2);
    overlay(canvas, &rotated, i64::from(x), i64::from(top));
}
