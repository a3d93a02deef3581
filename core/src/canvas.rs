use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

use crate::bitmap::Bitmap;

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 64;
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Monochrome drawing surface covering the whole scoreboard.
///
/// Coordinates outside of `[0, WIDTH) x [0, HEIGHT)` are clipped: writes
/// are dropped and reads report the pixel as off.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Box<[bool; PIXEL_COUNT]>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("lit_pixels", &self.lit_pixels())
            .finish()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: Box::new([false; PIXEL_COUNT]),
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some(index) = Self::index(x, y) {
            self.pixels[index] = on;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|index| self.pixels[index])
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    pub fn clear_area(&mut self, x: i32, y: i32, width: u32, height: u32) {
        for y in y..y.saturating_add(height as i32) {
            for x in x..x.saturating_add(width as i32) {
                self.set_pixel(x, y, false);
            }
        }
    }

    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }

    /// Copies the lit bits of `bitmap` with its top-left corner at `(x, y)`.
    /// Unlit bits leave the canvas untouched.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        self.draw_bitmap_clipped(bitmap, x, y, usize::MAX, usize::MAX);
    }

    /// Like [`Canvas::draw_bitmap`], ignoring rows from `max_height` and
    /// columns from `max_width` on.
    pub fn draw_bitmap_clipped(
        &mut self,
        bitmap: &Bitmap,
        x: i32,
        y: i32,
        max_width: usize,
        max_height: usize,
    ) {
        for (dy, row) in bitmap.rows().take(max_height).enumerate() {
            for (dx, &on) in row.iter().take(max_width).enumerate() {
                if on {
                    self.set_pixel(x + dx as i32, y + dy as i32, true);
                }
            }
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        Drawable,
        prelude::{Point, Primitive},
        primitives::{PrimitiveStyle, Rectangle},
    };

    use super::*;

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut canvas = Canvas::new();
        for (x, y) in [(-1, 0), (0, -1), (256, 0), (0, 64), (i32::MIN, i32::MAX), (300, 300)] {
            canvas.set_pixel(x, y, true);
            assert!(!canvas.get_pixel(x, y));
        }
        assert_eq!(canvas, Canvas::new());
    }

    #[test]
    fn test_set_and_unset() {
        let mut canvas = Canvas::new();
        canvas.set_pixel(255, 63, true);
        canvas.set_pixel(0, 0, true);
        assert!(canvas.get_pixel(255, 63));
        assert!(canvas.get_pixel(0, 0));
        assert_eq!(canvas.lit_pixels(), 2);
        canvas.set_pixel(0, 0, false);
        assert!(!canvas.get_pixel(0, 0));
        assert_eq!(canvas.lit_pixels(), 1);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new();
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                canvas.set_pixel(x, y, (x + y) % 3 == 0);
            }
        }
        canvas.clear();
        assert_eq!(canvas.lit_pixels(), 0);
        assert!(!canvas.get_pixel(3, 0));
    }

    #[test]
    fn test_clear_area_clips() {
        let mut canvas = Canvas::new();
        Rectangle::new(Point::new(0, 0), Size::new(256, 64))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.lit_pixels(), PIXEL_COUNT);

        canvas.clear_area(250, 60, 100, 100);
        assert_eq!(canvas.lit_pixels(), PIXEL_COUNT - 6 * 4);
        assert!(!canvas.get_pixel(250, 60));
        assert!(canvas.get_pixel(249, 60));

        canvas.clear_area(-5, -5, 10, 10);
        assert!(!canvas.get_pixel(4, 4));
        assert!(canvas.get_pixel(5, 5));
    }

    #[test]
    fn test_draw_bitmap_keeps_background() {
        let mut canvas = Canvas::new();
        canvas.set_pixel(11, 20, true);
        let bitmap = Bitmap::from_lines(["10", "011"]);
        canvas.draw_bitmap(&bitmap, 10, 20);
        assert!(canvas.get_pixel(10, 20));
        assert!(canvas.get_pixel(11, 20));
        assert!(canvas.get_pixel(11, 21));
        assert!(canvas.get_pixel(12, 21));
        assert_eq!(canvas.lit_pixels(), 4);
    }

    #[test]
    fn test_draw_bitmap_clipped() {
        let mut canvas = Canvas::new();
        let bitmap = Bitmap::from_lines(["111", "111", "111"]);
        canvas.draw_bitmap_clipped(&bitmap, 254, 0, 2, 2);
        assert_eq!(canvas.lit_pixels(), 4);
        assert!(!canvas.get_pixel(254, 2));
    }
}
