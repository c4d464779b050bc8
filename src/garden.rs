// src/garden.rs
use crate::utils::*;
use image::{ImageBuffer, Rgba};
use ndarray::Array1;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const SOIL: Rgba<u8> = Rgba([141, 110, 99, 255]);
pub const SUN: Rgba<u8> = Rgba([255, 213, 79, 255]);
pub const STEM: Rgba<u8> = Rgba([46, 125, 50, 255]);
pub const PETAL: Rgba<u8> = Rgba([238, 90, 111, 255]);
pub const FLOWER_CENTER: Rgba<u8> = Rgba([255, 202, 87, 255]);
pub const SMALL_PETAL: Rgba<u8> = Rgba([255, 107, 157, 255]);
pub const LEAF: Rgba<u8> = Rgba([76, 175, 80, 255]);

/// `trunc(size * fraction)`, the rounding every coordinate in the icon goes through.
#[inline(always)]
fn frac(size: u32, fraction: f64) -> i64 {
    (size as f64 * fraction) as i64
}

/// Offset of a petal placed `distance` away from its flower center at `degrees`.
fn polar_offset(distance: f64, degrees: u32) -> (i64, i64) {
    let angle = (degrees as f64).to_radians();
    ((distance * angle.cos()) as i64, (distance * angle.sin()) as i64)
}

/// Pixel geometry of the garden icon at one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenLayout {
    pub size: u32,
    pub soil_height: i64,
    pub sun: (i64, i64),
    pub sun_radius: i64,
    pub stem_width: i64,
    pub stem_bottom: i64,
    /// Center plant, six large petals.
    pub flower: (i64, i64),
    pub petal_size: i64,
    pub center_size: i64,
    /// Left plant, five small petals.
    pub bud: (i64, i64),
    pub small_petal_size: i64,
    /// Right plant, leaves only.
    pub sprout: (i64, i64),
    pub leaf_size: i64,
}

impl GardenLayout {
    pub fn new(size: u32) -> Self {
        GardenLayout {
            size,
            soil_height: frac(size, 0.3),
            sun: (frac(size, 0.15), frac(size, 0.15)),
            sun_radius: frac(size, 0.08),
            stem_width: frac(size, 0.02).max(2),
            stem_bottom: frac(size, 0.75),
            flower: (size as i64 / 2, frac(size, 0.5)),
            petal_size: frac(size, 0.08),
            center_size: frac(size, 0.06),
            bud: (frac(size, 0.25), frac(size, 0.55)),
            small_petal_size: frac(size, 0.05),
            sprout: (frac(size, 0.75), frac(size, 0.6)),
            leaf_size: frac(size, 0.06),
        }
    }

    /// Green channel of each background row, top to bottom.
    pub fn sky_gradient(&self) -> Array1<u8> {
        let size = self.size as f64;
        Array1::from_shape_fn(self.size as usize, |row| {
            let intensity = (70.0 + (20 * row) as f64 / size) as i64;
            (intensity + 100).clamp(0, 255) as u8
        })
    }

    pub fn stem(&self, (x, y): (i64, i64)) -> BoundingBox {
        let half = self.stem_width / 2;
        BoundingBox::new(x - half, y, x + half, self.stem_bottom)
    }

    pub fn petals(&self) -> Vec<BoundingBox> {
        let (fx, fy) = self.flower;
        (0..6)
            .map(|i| {
                let (dx, dy) = polar_offset(self.petal_size as f64, i * 60);
                BoundingBox::around(fx + dx, fy + dy, self.petal_size / 2)
            })
            .collect()
    }

    pub fn small_petals(&self) -> Vec<BoundingBox> {
        let (bx, by) = self.bud;
        (0..5)
            .map(|i| {
                let (dx, dy) = polar_offset(self.small_petal_size as f64 * 0.7, i * 72);
                BoundingBox::around(bx + dx, by + dy, self.small_petal_size / 2)
            })
            .collect()
    }

    /// Left and right halves of the leaf pair, meeting at the stem top.
    pub fn leaves(&self) -> [BoundingBox; 2] {
        let (x, y) = self.sprout;
        let l = self.leaf_size;
        [
            BoundingBox::new(x - l, y - l / 2, x, y + l / 2),
            BoundingBox::new(x, y - l / 2, x + l, y + l / 2),
        ]
    }
}

/// Draw the garden icon at `size` x `size`. Later shapes cover earlier ones.
pub fn render_garden_icon(size: u32) -> Canvas {
    let layout = GardenLayout::new(size);
    let mut canvas = ImageBuffer::from_pixel(size, size, TRANSPARENT);
    let s = size as i64;

    // Sky
    for (row, &green) in layout.sky_gradient().iter().enumerate() {
        let row = row as i64;
        fill_rect(&mut canvas, BoundingBox::new(0, row, s, row + 1), Rgba([76, green, 80, 255]));
    }

    fill_rect(&mut canvas, BoundingBox::new(0, s - layout.soil_height, s, s), SOIL);

    let (sun_x, sun_y) = layout.sun;
    fill_ellipse(&mut canvas, BoundingBox::around(sun_x, sun_y, layout.sun_radius), SUN);

    fill_rect(&mut canvas, layout.stem(layout.flower), STEM);
    for petal in layout.petals() {
        fill_ellipse(&mut canvas, petal, PETAL);
    }
    let (fx, fy) = layout.flower;
    fill_ellipse(&mut canvas, BoundingBox::around(fx, fy, layout.center_size / 2), FLOWER_CENTER);

    fill_rect(&mut canvas, layout.stem(layout.bud), STEM);
    for petal in layout.small_petals() {
        fill_ellipse(&mut canvas, petal, SMALL_PETAL);
    }

    fill_rect(&mut canvas, layout.stem(layout.sprout), STEM);
    for leaf in layout.leaves() {
        fill_ellipse(&mut canvas, leaf, LEAF);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_any_stem(layout: &GardenLayout, x: i64) -> bool {
        [layout.flower, layout.bud, layout.sprout].iter().any(|&plant| {
            let stem = layout.stem(plant);
            (stem.x0..=stem.x1).contains(&x)
        })
    }

    #[test]
    fn test_dimensions() {
        for size in [1, 2, 7, 48, 72, 100, 108, 333] {
            let img = render_garden_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        let img = render_garden_icon(0);
        assert_eq!(img.dimensions(), (0, 0));
        assert!(img.as_raw().is_empty());
    }

    #[test]
    fn test_deterministic() {
        for size in [48, 144] {
            assert_eq!(render_garden_icon(size), render_garden_icon(size));
        }
    }

    #[test]
    fn test_fully_opaque() {
        let img = render_garden_icon(96);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_layout_at_100() {
        let layout = GardenLayout::new(100);
        assert_eq!(layout.soil_height, 30);
        assert_eq!(layout.sun, (15, 15));
        assert_eq!(layout.sun_radius, 8);
        assert_eq!(layout.stem_width, 2);
        assert_eq!(layout.stem_bottom, 75);
        assert_eq!(layout.flower, (50, 50));
        assert_eq!(layout.bud, (25, 55));
        assert_eq!(layout.sprout, (75, 60));
        assert_eq!(layout.petal_size, 8);
        assert_eq!(layout.small_petal_size, 5);
        assert_eq!(layout.leaf_size, 6);
    }

    #[test]
    fn test_stem_width_has_a_floor() {
        assert_eq!(GardenLayout::new(48).stem_width, 2);
        assert_eq!(GardenLayout::new(1024).stem_width, 20);
    }

    #[test]
    fn test_sky_gradient() {
        let greens = GardenLayout::new(100).sky_gradient();
        assert_eq!(greens.len(), 100);
        assert_eq!(greens[0], 170);
        assert_eq!(greens[69], 183);
        assert_eq!(greens[99], 189);
        assert!(greens.windows(2).into_iter().all(|w| w[0] <= w[1]));

        let img = render_garden_icon(100);
        assert_eq!(*img.get_pixel(0, 0), Rgba([76, 170, 80, 255]));
        // Last row above the soil.
        assert_eq!(*img.get_pixel(99, 69), Rgba([76, 183, 80, 255]));
    }

    #[test]
    fn test_soil_band() {
        for size in [48, 100, 192, 432] {
            let layout = GardenLayout::new(size);
            let img = render_garden_icon(size);
            let top = size - layout.soil_height as u32;

            for (x, y, pixel) in img.enumerate_pixels() {
                if y >= top && !in_any_stem(&layout, x as i64) {
                    assert_eq!(*pixel, SOIL, "size {size}: ({x}, {y})");
                }
            }
            for x in 0..size {
                assert_ne!(*img.get_pixel(x, top - 1), SOIL, "size {size}: row above soil");
            }
        }
    }

    #[test]
    fn test_stems_reach_into_soil() {
        let layout = GardenLayout::new(100);
        let img = render_garden_icon(100);
        assert_eq!(*img.get_pixel(50, 72), STEM);
        assert_eq!(*img.get_pixel(25, 75), STEM);
        assert_eq!(*img.get_pixel(75, 75), STEM);
        assert_eq!(*img.get_pixel(50, layout.stem_bottom as u32 + 1), SOIL);
    }

    #[test]
    fn test_sun_disk() {
        for size in [48, 100, 1024] {
            let layout = GardenLayout::new(size);
            let img = render_garden_icon(size);
            let (cx, cy) = layout.sun;
            let r = layout.sun_radius as f64;

            for (x, y, pixel) in img.enumerate_pixels() {
                let d = ((x as i64 - cx) as f64).hypot((y as i64 - cy) as f64);
                if d < r {
                    assert_eq!(*pixel, SUN, "size {size}: ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_center_flower() {
        let layout = GardenLayout::new(200);
        let img = render_garden_icon(200);
        let (fx, fy) = layout.flower;
        assert_eq!(*img.get_pixel(fx as u32, fy as u32), FLOWER_CENTER);

        // Petal at 0 degrees sits petal_size to the right of the center.
        let px = (fx + layout.petal_size) as u32;
        assert_eq!(*img.get_pixel(px, fy as u32), PETAL);
        assert_eq!(layout.petals().len(), 6);
    }

    #[test]
    fn test_left_flower() {
        let layout = GardenLayout::new(400);
        let img = render_garden_icon(400);
        let petals = layout.small_petals();
        assert_eq!(petals.len(), 5);

        // First petal at 0 degrees: offset trunc(20 * 0.7) = 14.
        assert_eq!(petals[0], BoundingBox::around(100 + 14, 220, 10));
        assert_eq!(*img.get_pixel(114, 220), SMALL_PETAL);
    }

    #[test]
    fn test_right_leaves() {
        let layout = GardenLayout::new(200);
        let img = render_garden_icon(200);
        let (x, y) = layout.sprout;
        let l = layout.leaf_size;

        assert_eq!(*img.get_pixel((x - l / 2) as u32, y as u32), LEAF);
        assert_eq!(*img.get_pixel((x + l / 2) as u32, y as u32), LEAF);
        // Stem shows below the leaves.
        assert_eq!(*img.get_pixel(x as u32, (y + l) as u32), STEM);
    }
}
