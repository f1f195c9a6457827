use crate::color::Color;

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, buffer: vec![0; width * height] }
    }

    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color.to_hex());
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.buffer.clear();
        self.buffer.resize(width * height, 0);
    }

    /// Source-over composite of a translucent color onto the pixel.
    /// Off-surface coordinates are dropped.
    #[inline]
    pub fn blend_point(&mut self, x: i32, y: i32, c: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height { return; }
        let idx = y as usize * self.width + x as usize;
        let dst = Color::from_hex(self.buffer[idx]);
        self.buffer[idx] = dst.lerp(c, c.a as f32 / 255.0).to_hex();
    }

    pub fn blend_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Color) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs(); let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs(); let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_point(x0, y0, c);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        fb.clear(Color::rgb(1, 2, 3));
        assert!(fb.buffer.iter().all(|&px| px == Color::rgb(1, 2, 3).to_hex()));
    }

    #[test]
    fn opaque_point_overwrites() {
        let mut fb = Framebuffer::new(8, 8);
        fb.blend_point(2, 3, Color::rgb(200, 100, 50));
        assert_eq!(fb.buffer[3 * 8 + 2], Color::rgb(200, 100, 50).to_hex());
    }

    #[test]
    fn translucent_point_blends_over_background() {
        let mut fb = Framebuffer::new(2, 1);
        fb.clear(Color::rgb(0, 0, 0));
        fb.blend_point(0, 0, Color::new(255, 255, 255, 128));
        let px = Color::from_hex(fb.buffer[0]);
        assert!(px.r > 120 && px.r < 135, "half-alpha white over black: {}", px.r);
        // untouched neighbor stays black
        assert_eq!(fb.buffer[1], 0);
    }

    #[test]
    fn out_of_bounds_points_are_dropped() {
        let mut fb = Framebuffer::new(4, 4);
        fb.blend_point(-1, 0, Color::rgb(255, 0, 0));
        fb.blend_point(0, -1, Color::rgb(255, 0, 0));
        fb.blend_point(4, 0, Color::rgb(255, 0, 0));
        fb.blend_point(0, 4, Color::rgb(255, 0, 0));
        assert!(fb.buffer.iter().all(|&px| px == 0));
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut fb = Framebuffer::new(16, 16);
        fb.blend_line(1, 1, 9, 5, Color::rgb(255, 255, 255));
        assert_ne!(fb.buffer[16 + 1], 0);
        assert_ne!(fb.buffer[5 * 16 + 9], 0);
    }

    #[test]
    fn line_survives_partial_clipping() {
        let mut fb = Framebuffer::new(8, 8);
        fb.blend_line(-5, 4, 12, 4, Color::rgb(255, 255, 255));
        for x in 0..8 {
            assert_ne!(fb.buffer[4 * 8 + x], 0);
        }
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Color::rgb(9, 9, 9));
        fb.resize(6, 2);
        assert_eq!((fb.width, fb.height), (6, 2));
        assert_eq!(fb.buffer.len(), 12);
        assert!(fb.buffer.iter().all(|&px| px == 0));
    }
}
