use geo::Area;
use geo_types::{Coord, LineString, Polygon};
use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::types::ExtremePoints;

/// Find the four extreme boundary points of the dominant foreground region
/// in a binary mask.
///
/// External contours are extracted and the one enclosing the largest area
/// wins; which contour wins an exact area tie follows the detector's
/// insertion order and is implementation-defined. Within the winning
/// contour the
/// leftmost, rightmost, topmost and bottommost boundary points are
/// returned. A mask with no foreground has no contours and yields `None` —
/// absence is a valid outcome, not an error.
pub fn extreme_points(mask: &GrayImage) -> Option<ExtremePoints> {
    let contours = find_contours::<i32>(mask);

    let largest = contours
        .iter()
        .filter(|contour| contour.border_type == BorderType::Outer)
        .max_by(|a, b| {
            contour_area(&a.points)
                .partial_cmp(&contour_area(&b.points))
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let points = &largest.points;
    let first = *points.first()?;

    let mut extremes = ExtremePoints {
        leftmost: first,
        rightmost: first,
        topmost: first,
        bottommost: first,
    };
    for &point in points {
        if point.x < extremes.leftmost.x {
            extremes.leftmost = point;
        }
        if point.x > extremes.rightmost.x {
            extremes.rightmost = point;
        }
        if point.y < extremes.topmost.y {
            extremes.topmost = point;
        }
        if point.y > extremes.bottommost.y {
            extremes.bottommost = point;
        }
    }
    Some(extremes)
}

fn contour_area(points: &[imageproc::point::Point<i32>]) -> f32 {
    let coords: Vec<Coord<f32>> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f32,
            y: p.y as f32,
        })
        .collect();
    Polygon::new(LineString::new(coords), vec![]).unsigned_area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn mask_with_rect(
        width: u32,
        height: u32,
        (x0, y0): (u32, u32),
        (x1, y1): (u32, u32),
    ) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.put_pixel(x, y, Luma([255u8]));
            }
        }
        mask
    }

    #[test]
    fn filled_rectangle_extremes() {
        let mask = mask_with_rect(64, 48, (10, 10), (50, 30));
        let extremes = extreme_points(&mask).unwrap();

        // Multiple boundary pixels share each extreme coordinate, so only
        // the coordinate values are asserted.
        assert_eq!(extremes.leftmost.x, 10);
        assert_eq!(extremes.rightmost.x, 50);
        assert_eq!(extremes.topmost.y, 10);
        assert_eq!(extremes.bottommost.y, 30);
    }

    #[test]
    fn largest_region_wins() {
        let mut mask = mask_with_rect(100, 100, (5, 5), (8, 8));
        for y in 40..=80 {
            for x in 30..=90 {
                mask.put_pixel(x, y, Luma([255u8]));
            }
        }

        let extremes = extreme_points(&mask).unwrap();
        assert_eq!(extremes.leftmost.x, 30);
        assert_eq!(extremes.rightmost.x, 90);
        assert_eq!(extremes.topmost.y, 40);
        assert_eq!(extremes.bottommost.y, 80);
    }

    #[test]
    fn empty_mask_has_no_extremes() {
        let mask = GrayImage::new(32, 32);
        assert!(extreme_points(&mask).is_none());
    }
}
