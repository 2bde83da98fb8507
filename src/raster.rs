use glam::Vec3;

use crate::color::Color;

/// CPU render target: packed RGBA8 pixels plus a depth channel.
///
/// Screen coordinates are in pixels with the origin at the top left.
/// Depth is whatever the caller interpolates (NDC depth here), smaller
/// values win.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let count = (width * height) as usize;
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_rgba_word(); count],
            depth: vec![f32::INFINITY; count],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes in RGBA8 row-major order
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Color of the pixel at (x, y), ignoring alpha
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let word = self.pixels[(y * self.width + x) as usize];
        Color::new(word as u8, (word >> 8) as u8, (word >> 16) as u8)
    }

    /// Reset every pixel to `color` and the depth channel to infinity
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba_word());
        self.depth.fill(f32::INFINITY);
    }

    /// Depth-tested pixel write; out-of-bounds coordinates are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, depth: f32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        if depth < self.depth[idx] {
            self.depth[idx] = depth;
            self.pixels[idx] = color.to_rgba_word();
        }
    }

    /// Bresenham line between two projected points (x, y in pixels,
    /// z interpolated linearly along the line)
    pub fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        let (x0, y0) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let steps = dx.max(-dy).max(1) as f32;

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        let mut travelled = 0.0f32;

        loop {
            let t = travelled / steps;
            self.set_pixel(x, y, from.z + (to.z - from.z) * t, color);

            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            travelled += 1.0;
        }
    }

    /// Fill a triangle given three projected points, interpolating depth
    /// barycentrically. Accepts either winding.
    pub fn fill_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Color) {
        let area = edge(a, b, c);
        if area.abs() < 1e-6 {
            return;
        }

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as i32;
        let max_x = (a.x.max(b.x).max(c.x).ceil() as i32).min(self.width as i32 - 1);
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as i32;
        let max_y = (a.y.max(b.y).max(c.y).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let depth = w0 * a.z + w1 * b.z + w2 * c.z;
                self.set_pixel(x, y, depth, color);
            }
        }
    }
}

/// Signed parallelogram area of (b - a) × (p - a) in screen space
fn edge(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
