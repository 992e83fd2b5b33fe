//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use super::geometry::Rect;
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            // Buffer is smaller than expected - recalculate height to fit
            let adjusted_height = actual_size / width;
            (width, adjusted_height)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width) as usize).min(self.width);
        let y1 = ((rect.y + rect.height) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = ((rect.x + rect.width) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width).max(self.min_x());
        let y0 = y.min(self.height).max(self.min_y());
        let x1 = (x + w).min(self.max_x());
        let y1 = (y + h).min(self.max_y());

        for py in y0..y1 {
            let row_start = py * self.width;
            for px in x0..x1 {
                self.buffer[row_start + px] = color;
            }
        }
    }

    /// Set a single pixel (bounds-checked, respects clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y() {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }

        let idx = y * self.width + x;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = ((rect.x + rect.width) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Dim the entire frame with a semi-transparent overlay
    /// Useful for modal backgrounds
    pub fn dim(&mut self, alpha: u8) {
        let dim_color = (alpha as u32) << 24; // Black with given alpha
        for y in 0..self.height {
            for x in 0..self.width {
                self.blend_pixel(x, y, dim_color);
            }
        }
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        // Fill background (blend to handle semi-transparent fills)
        let alpha = (fill_color >> 24) & 0xFF;
        if alpha == 0xFF {
            self.fill_rect_px(x, y, w, h, fill_color);
        } else {
            self.blend_rect(
                Rect::new(x as f32, y as f32, w as f32, h as f32),
                fill_color,
            );
        }

        // Draw border (1px on each edge, always opaque)
        let opaque_border = border_color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, opaque_border);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, opaque_border);
        self.fill_rect_px(x, y, 1, h, opaque_border);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, opaque_border);
    }

    /// Draw a 1px rectangle outline without touching the interior
    pub fn draw_rect_outline(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let color = color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, color);
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, color);
        self.fill_rect_px(x, y, 1, h, color);
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, color);
    }

    /// Fill a circle with a 1px antialiased edge.
    ///
    /// The color's alpha channel is respected, so semi-transparent dots
    /// blend with whatever is beneath them.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        if radius <= 0.0 {
            return;
        }
        let base_alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        let x0 = (cx - radius - 1.0).floor().max(0.0) as usize;
        let y0 = (cy - radius - 1.0).floor().max(0.0) as usize;
        let x1 = ((cx + radius + 1.0).ceil() as usize).min(self.width);
        let y1 = ((cy + radius + 1.0).ceil() as usize).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                // Full coverage inside, linear falloff over the last pixel
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let a = ((coverage * base_alpha) * 255.0) as u32;
                    self.blend_pixel(px, py, (a << 24) | (color & 0x00FF_FFFF));
                }
            }
        }
    }

    /// Draw a soft radial glow around a point.
    ///
    /// Alpha falls off linearly from the color's own alpha at the center
    /// to zero at `radius`. Used for the indicator dots.
    pub fn draw_glow(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        let base_alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if radius <= 0.0 || base_alpha <= 0.0 {
            return;
        }
        let x0 = (cx - radius).floor().max(0.0) as usize;
        let y0 = (cy - radius).floor().max(0.0) as usize;
        let x1 = ((cx + radius).ceil() as usize).min(self.width);
        let y1 = ((cy + radius).ceil() as usize).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < radius {
                    let falloff = 1.0 - dist / radius;
                    let a = ((falloff * base_alpha) * 255.0) as u32;
                    self.blend_pixel(px, py, (a << 24) | (color & 0x00FF_FFFF));
                }
            }
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Provides methods for drawing text with proper font metrics and glyph caching.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    /// Create a new text painter
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let bitmap_idx = bitmap_y * metrics.width + bitmap_x;
                    if bitmap_idx < bitmap.len() {
                        let alpha = bitmap[bitmap_idx];
                        if alpha > 0 {
                            let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                            let py = (glyph_top + bitmap_y as f32) as isize;

                            if px >= 0 && py >= 0 {
                                // blend_pixel honors the frame's clip rect
                                let argb = ((alpha as u32) << 24) | (color & 0x00FF_FFFF);
                                frame.blend_pixel(px as usize, py as usize, argb);
                            }
                        }
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }

    /// Draw text horizontally centered within a rect
    pub fn draw_centered(&mut self, frame: &mut Frame, rect: Rect, text: &str, color: u32) {
        let text_width = self.measure_width(text);
        let x = rect.x + (rect.width - text_width) / 2.0;
        let y = rect.y + (rect.height - self.line_height as f32) / 2.0;
        self.draw(frame, x.max(0.0) as usize, y.max(0.0) as usize, text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), 0xFFFF0000);

        // Check a pixel inside the rect
        assert_eq!(frame.get_pixel(15, 15), 0xFFFF0000);
        // Check a pixel outside the rect
        assert_eq!(frame.get_pixel(5, 5), 0);
    }

    #[test]
    fn test_frame_blend_pixel() {
        let mut buffer = vec![0xFFFFFFFF_u32; 10 * 10]; // White background
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // Blend 50% black
        frame.blend_pixel(5, 5, 0x80000000);

        let result = frame.get_pixel(5, 5);
        // Should be grayish (around 128 for each channel)
        let r = (result >> 16) & 0xFF;
        let g = (result >> 8) & 0xFF;
        let b = result & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
        assert!(g > 100 && g < 160, "G channel: {}", g);
        assert!(b > 100 && b < 160, "B channel: {}", b);
    }

    #[test]
    fn test_frame_out_of_bounds() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // These should not panic
        frame.set_pixel(100, 100, 0xFFFFFFFF);
        frame.blend_pixel(100, 100, 0x80FFFFFF);
        assert_eq!(frame.get_pixel(100, 100), 0);
    }

    #[test]
    fn test_frame_with_clip_restricts_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        frame.set_clip(Rect::new(10.0, 10.0, 30.0, 30.0));

        frame.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 0xFFFF0000);

        // Inside clip: should be red
        assert_eq!(frame.get_pixel(20, 20), 0xFFFF0000);
        // Outside clip: should be untouched (0)
        assert_eq!(frame.get_pixel(5, 5), 0);
        assert_eq!(frame.get_pixel(50, 50), 0);
        // Edge of clip: 10 is inside, 40 is outside (exclusive)
        assert_eq!(frame.get_pixel(10, 10), 0xFFFF0000);
        assert_eq!(frame.get_pixel(39, 39), 0xFFFF0000);
        assert_eq!(frame.get_pixel(40, 40), 0);
    }

    #[test]
    fn test_fill_circle_center_and_outside() {
        let mut buffer = vec![0xFF000000_u32; 30 * 30];
        let mut frame = Frame::new(&mut buffer, 30, 30);

        frame.fill_circle(15.0, 15.0, 4.0, 0xFF44FF88);

        // Center is fully the dot color
        assert_eq!(frame.get_pixel(15, 15), 0xFF44FF88);
        // Far corner untouched
        assert_eq!(frame.get_pixel(0, 0), 0xFF000000);
        // Just outside the radius untouched
        assert_eq!(frame.get_pixel(15, 22), 0xFF000000);
    }

    #[test]
    fn test_glow_fades_with_distance() {
        let mut buffer = vec![0xFF000000_u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);

        frame.draw_glow(20.0, 20.0, 10.0, 0xFF4488FF);

        let center_b = frame.get_pixel(20, 20) & 0xFF;
        let edge_b = frame.get_pixel(27, 20) & 0xFF;
        let outside_b = frame.get_pixel(32, 20) & 0xFF;
        assert!(center_b > edge_b, "center {} edge {}", center_b, edge_b);
        assert_eq!(outside_b, 0);
    }

    #[test]
    fn test_glow_peak_follows_color_alpha() {
        let mut full = vec![0xFF000000_u32; 20 * 20];
        let mut half = vec![0xFF000000_u32; 20 * 20];

        Frame::new(&mut full, 20, 20).draw_glow(10.0, 10.0, 6.0, 0xFF4488FF);
        Frame::new(&mut half, 20, 20).draw_glow(10.0, 10.0, 6.0, 0x804488FF);

        let full_b = full[10 * 20 + 10] & 0xFF;
        let half_b = half[10 * 20 + 10] & 0xFF;
        assert!(full_b > half_b, "full {} half {}", full_b, half_b);
    }

    #[test]
    fn test_rect_outline_leaves_interior() {
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);

        frame.draw_rect_outline(5, 5, 10, 10, 0xFF44FF88);

        assert_eq!(frame.get_pixel(5, 5), 0xFF44FF88);
        assert_eq!(frame.get_pixel(14, 14), 0xFF44FF88);
        assert_eq!(frame.get_pixel(10, 10), 0);
    }
}
