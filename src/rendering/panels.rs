use cvd_transform::{Recoloring, RgbImage};

/// Spacing around and between panels, in pixels
pub const PANEL_GAP: usize = 16;

/// Background colour behind the panels
pub const PANEL_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Titles of the comparison panels, left to right
pub const PANEL_TITLES: [&str; 4] = ["original", "simulated", "daltonized", "recolored"];

/// Lay images out left to right on a background, top-aligned.
///
/// Every panel is surrounded by `gap` pixels of `background`. The strip is
/// as tall as the tallest image.
pub fn compose_strip(images: &[&RgbImage], gap: usize, background: [u8; 3]) -> RgbImage {
    let content_width: usize = images.iter().map(|img| img.width()).sum();
    let content_height = images.iter().map(|img| img.height()).max().unwrap_or(0);

    let width = content_width + gap * (images.len() + 1);
    let height = content_height + gap * 2;

    let mut strip = RgbImage::filled(width, height, background);
    let pixels = strip.pixels_mut();
    let mut x_offset = gap;
    for image in images {
        for y in 0..image.height() {
            let Some(row) = image.row(y) else { break };
            let start = (y + gap) * width + x_offset;
            pixels[start..start + row.len()].copy_from_slice(row);
        }
        x_offset += image.width() + gap;
    }

    strip
}

/// Side-by-side comparison: original | simulated | daltonized | recolored.
pub fn comparison_panels(original: &RgbImage, result: &Recoloring) -> RgbImage {
    compose_strip(
        &[
            original,
            &result.simulated,
            &result.daltonized,
            &result.recolored,
        ],
        PANEL_GAP,
        PANEL_BACKGROUND,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_transform::{recolor_variant, Deficiency};

    #[test]
    fn test_compose_strip_dimensions() {
        let a = RgbImage::filled(3, 2, [1, 1, 1]);
        let b = RgbImage::filled(4, 5, [2, 2, 2]);

        let strip = compose_strip(&[&a, &b], 1, [0, 0, 0]);
        // 1 + 3 + 1 + 4 + 1
        assert_eq!(strip.width(), 10);
        // 1 + 5 + 1
        assert_eq!(strip.height(), 7);
    }

    #[test]
    fn test_compose_strip_places_images() {
        let a = RgbImage::filled(2, 1, [10, 10, 10]);
        let b = RgbImage::filled(1, 2, [20, 20, 20]);
        let bg = [0, 0, 0];

        let strip = compose_strip(&[&a, &b], 1, bg);

        assert_eq!(strip.pixel(0, 0), Some(bg));
        assert_eq!(strip.pixel(1, 1), Some([10, 10, 10]));
        assert_eq!(strip.pixel(2, 1), Some([10, 10, 10]));
        assert_eq!(strip.pixel(3, 1), Some(bg));
        assert_eq!(strip.pixel(4, 1), Some([20, 20, 20]));
        assert_eq!(strip.pixel(4, 2), Some([20, 20, 20]));
        // Below the shorter image stays background
        assert_eq!(strip.pixel(1, 2), Some(bg));
    }

    #[test]
    fn test_compose_strip_empty() {
        let strip = compose_strip(&[], 2, [9, 9, 9]);
        assert_eq!(strip.dimensions(), (2, 4));
        assert!(strip.pixels().iter().all(|&px| px == [9, 9, 9]));
    }

    #[test]
    fn test_comparison_panels_order() {
        let original = RgbImage::filled(1, 1, [255, 0, 0]);
        let result = recolor_variant(&original, Deficiency::Protanopia);

        let panels = comparison_panels(&original, &result);
        assert_eq!(panels.width(), 4 + PANEL_GAP * 5);
        assert_eq!(panels.height(), 1 + PANEL_GAP * 2);

        let y = PANEL_GAP;
        let at = |i: usize| panels.pixel(PANEL_GAP + i * (1 + PANEL_GAP), y);
        assert_eq!(at(0), Some([255, 0, 0]));
        assert_eq!(at(1), Some([144, 142, 0]));
        assert_eq!(at(2), Some([0, 0, 0]));
        assert_eq!(at(3), Some([0, 0, 0]));
        assert_eq!(PANEL_TITLES.len(), 4);
    }
}
