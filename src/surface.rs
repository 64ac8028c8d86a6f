//! The 2D drawing surface the backdrop paints onto.
//!
//! [`DrawSurface`] is the minimal drawing context the renderer needs.
//! [`Canvas`] implements it in software over an RGBA8 image, which is then
//! either uploaded to the window by the GPU presenter or written out as a
//! PNG snapshot.

use glam::{Vec2, Vec4};
use image::{Rgba, RgbaImage};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }

    /// Whole-pixel dimensions, rounding to nearest and clamping at zero.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.max(0.0).round() as u32, self.height.max(0.0).round() as u32)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// A 2D drawing context.
///
/// Colors are straight (non-premultiplied) RGBA in 0.0-1.0 and composite
/// source-over onto what is already painted.
pub trait DrawSurface {
    /// Current surface size.
    fn size(&self) -> Viewport;

    /// Change the surface size. Contents after a resize are unspecified.
    fn resize(&mut self, viewport: Viewport);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill the whole surface with a linear gradient running from `from`
    /// (color `start`) to `to` (color `end`). Pixels beyond either end take
    /// the end color. A zero-length gradient paints nothing.
    fn fill_linear_gradient(&mut self, from: Vec2, to: Vec2, start: Vec4, end: Vec4);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4);

    /// Stroke an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Vec4);
}

/// Software raster implementing [`DrawSurface`].
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas covering `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        let (width, height) = viewport.pixel_size();
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA8 bytes, row-major, no padding.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Source-over blend of `color` scaled by `coverage` into pixel `(x, y)`.
    fn blend(&mut self, x: u32, y: u32, color: Vec4, coverage: f32) {
        let src_a = (color.w * coverage).clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        let dst_a = dst.0[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let mut out = [0u8; 4];
        for i in 0..3 {
            let src_c = color[i].clamp(0.0, 1.0);
            let dst_c = dst.0[i] as f32 / 255.0;
            let c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
            out[i] = to_byte(c);
        }
        out[3] = to_byte(out_a);
        *dst = Rgba(out);
    }

    /// Clamp a float pixel rectangle to the canvas, as inclusive-exclusive
    /// integer ranges. `None` when nothing is left.
    fn clip(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(self.width() as f32);
        let y1 = max.y.ceil().min(self.height() as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

impl DrawSurface for Canvas {
    fn size(&self) -> Viewport {
        Viewport::new(self.width() as f32, self.height() as f32)
    }

    fn resize(&mut self, viewport: Viewport) {
        let (width, height) = viewport.pixel_size();
        if width != self.width() || height != self.height() {
            self.image = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_linear_gradient(&mut self, from: Vec2, to: Vec2, start: Vec4, end: Vec4) {
        let axis = to - from;
        let len_sq = axis.length_squared();
        if len_sq <= f32::EPSILON {
            return;
        }

        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = ((p - from).dot(axis) / len_sq).clamp(0.0, 1.0);
                self.blend(x, y, start.lerp(end, t), 1.0);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        if radius <= 0.0 {
            return;
        }
        let reach = Vec2::splat(radius + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip(center - reach, center + reach) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                // one pixel of antialiasing at the rim
                let coverage = (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Vec4) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;

        let (min, max) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let reach = Vec2::splat(half + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip(min - reach, max + reach) else {
            return;
        };

        // Coverage is accumulated per pixel as the max over all segments so
        // shared joints are not blended twice.
        let stride = (x1 - x0) as usize;
        let mut mask = vec![0.0f32; stride * (y1 - y0) as usize];

        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let Some((sx0, sy0, sx1, sy1)) = self.clip(a.min(b) - reach, a.max(b) + reach) else {
                continue;
            };
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = (half + 0.5 - distance_to_segment(p, a, b)).clamp(0.0, 1.0);
                    let cell = &mut mask[(y - y0) as usize * stride + (x - x0) as usize];
                    *cell = cell.max(coverage);
                }
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let coverage = mask[(y - y0) as usize * stride + (x - x0) as usize];
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(Viewport::new(4.0, 3.0));
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_circle_covers_center_not_corner() {
        let mut canvas = Canvas::new(Viewport::new(20.0, 20.0));
        canvas.fill_circle(Vec2::new(10.0, 10.0), 3.0, RED);

        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_circle_outside_canvas_is_clipped() {
        let mut canvas = Canvas::new(Viewport::new(10.0, 10.0));
        canvas.fill_circle(Vec2::new(-50.0, 500.0), 5.0, RED);
        canvas.fill_circle(Vec2::new(5.0, 5.0), 0.0, RED);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_translucent_blend_accumulates() {
        let mut canvas = Canvas::new(Viewport::new(8.0, 8.0));
        let half = Vec4::new(1.0, 1.0, 1.0, 0.5);
        canvas.fill_circle(Vec2::new(4.0, 4.0), 3.0, half);
        let once = canvas.pixel(4, 4).unwrap()[3];
        canvas.fill_circle(Vec2::new(4.0, 4.0), 3.0, half);
        let twice = canvas.pixel(4, 4).unwrap()[3];

        assert_eq!(once, 128);
        assert!((190..=193).contains(&twice));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut canvas = Canvas::new(Viewport::new(100.0, 100.0));
        let start = Vec4::new(0.0, 0.0, 1.0, 1.0);
        let end = Vec4::new(1.0, 0.0, 0.0, 1.0);
        canvas.fill_linear_gradient(Vec2::ZERO, Vec2::new(100.0, 100.0), start, end);

        let top_left = canvas.pixel(0, 0).unwrap();
        let bottom_right = canvas.pixel(99, 99).unwrap();
        assert!(top_left[2] > 250 && top_left[0] < 5);
        assert!(bottom_right[0] > 250 && bottom_right[2] < 5);
    }

    #[test]
    fn test_zero_length_gradient_paints_nothing() {
        let mut canvas = Canvas::new(Viewport::new(5.0, 5.0));
        canvas.fill_linear_gradient(Vec2::ONE, Vec2::ONE, RED, RED);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_stroke_polyline_hits_segment() {
        let mut canvas = Canvas::new(Viewport::new(40.0, 20.0));
        let points = [Vec2::new(0.0, 10.5), Vec2::new(20.0, 10.5), Vec2::new(39.0, 10.5)];
        canvas.stroke_polyline(&points, 1.0, RED);

        assert_eq!(canvas.pixel(20, 10), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(20, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut canvas = Canvas::new(Viewport::new(10.0, 10.0));
        canvas.fill_circle(Vec2::new(5.0, 5.0), 4.0, RED);
        canvas.clear();
        assert!(canvas.pixels().iter().all(|&b| b == 0));

        canvas.resize(Viewport::new(30.0, 12.0));
        assert_eq!(canvas.size(), Viewport::new(30.0, 12.0));
    }

    #[test]
    fn test_empty_canvas_draws_nothing() {
        let mut canvas = Canvas::new(Viewport::new(0.0, 0.0));
        canvas.clear();
        canvas.fill_linear_gradient(Vec2::ZERO, Vec2::ONE, RED, RED);
        canvas.fill_circle(Vec2::ZERO, 3.0, RED);
        canvas.stroke_polyline(&[Vec2::ZERO, Vec2::ONE], 1.0, RED);
        assert!(canvas.pixels().is_empty());
        assert!(canvas.size().is_empty());
    }
}
