//! A plain `0RGB` pixel buffer with the handful of drawing primitives the
//! scene painter needs.

/// Pack an opaque color in the `0RGB` layout softbuffer presents.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// A row-major pixel buffer sized to the window.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// Create a black frame of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb(0, 0, 0); (width * height) as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixels, row by row.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reallocate to a new size. Keeping the size is free.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
        }
    }

    /// Fill the whole frame with one color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the frame bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for dy in 0..h {
            let py = y + dy;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for dx in 0..w {
                let px = x + dx;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                self.pixels[(py as u32 * self.width + px as u32) as usize] = color;
            }
        }
    }

    /// Halve every channel, dimming the frame under a banner.
    pub fn darken(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = 0xFF00_0000 | ((*pixel >> 1) & 0x007F_7F7F);
        }
    }

    /// Read one pixel. Out-of-bounds reads return black.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return rgb(0, 0, 0);
        }
        self.pixels[(y * self.width + x) as usize]
    }
}
