// src/utils.rs
use image::{ImageBuffer, Rgba};
use ndarray::{Array1, Array2, Zip};

pub type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Inclusive pixel box: both `(x0, y0)` and `(x1, y1)` are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl BoundingBox {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        BoundingBox { x0, y0, x1, y1 }
    }

    /// Box spanning `half` pixels on each side of `(cx, cy)`.
    pub fn around(cx: i64, cy: i64, half: i64) -> Self {
        BoundingBox::new(cx - half, cy - half, cx + half, cy + half)
    }

    /// Intersect with a `width` x `height` canvas. `None` when nothing is left.
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if width == 0 || height == 0 {
            return None;
        }
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i64 - 1);
        let y1 = self.y1.min(height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let nx = x.len();
    let ny = y.len();

    let mut x_grid = Array2::zeros((ny, nx));
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    let mut y_grid = Array2::zeros((ny, nx));
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

/// Squared normalized distance along one axis. A zero radius only admits the center line.
#[inline(always)]
fn axis_term(d: f64, r: f64) -> f64 {
    if r == 0.0 {
        if d == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (d / r).powi(2)
    }
}

/// Coverage of the ellipse inscribed in `bounds`, sampled at integer pixel
/// coordinates. The mask is indexed `[row, col]` and starts at `(x0, y0)`.
pub fn ellipse_mask(bounds: &BoundingBox, x0: u32, y0: u32, x1: u32, y1: u32) -> Array2<bool> {
    let cx = (bounds.x0 + bounds.x1) as f64 / 2.0;
    let cy = (bounds.y0 + bounds.y1) as f64 / 2.0;
    let rx = (bounds.x1 - bounds.x0) as f64 / 2.0;
    let ry = (bounds.y1 - bounds.y0) as f64 / 2.0;

    let xs: Array1<f64> = Array1::range(x0 as f64, x1 as f64 + 1.0, 1.0);
    let ys: Array1<f64> = Array1::range(y0 as f64, y1 as f64 + 1.0, 1.0);
    let (x_grid, y_grid) = meshgrid(&xs, &ys);

    Zip::from(&x_grid)
        .and(&y_grid)
        .par_map_collect(|&x, &y| axis_term(x - cx, rx) + axis_term(y - cy, ry) <= 1.0)
}

pub fn fill_rect(canvas: &mut Canvas, bounds: BoundingBox, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = bounds.clip(canvas.width(), canvas.height()) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

pub fn fill_ellipse(canvas: &mut Canvas, bounds: BoundingBox, color: Rgba<u8>) {
    if bounds.x0 > bounds.x1 || bounds.y0 > bounds.y1 {
        return;
    }
    let Some((x0, y0, x1, y1)) = bounds.clip(canvas.width(), canvas.height()) else {
        return;
    };
    let mask = ellipse_mask(&bounds, x0, y0, x1, y1);
    for ((row, col), &covered) in mask.indexed_iter() {
        if covered {
            canvas.put_pixel(x0 + col as u32, y0 + row as u32, color);
        }
    }
}
