use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame buffer
/// The Chip-8 display is composed of 64x32 black/white pixels, indexed as `[y][x]`.
/// Sprites are XORed onto it; nothing is ever drawn by overwriting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Whether the pixel at x, y is lit; coordinates wrap
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// Flips the pixel at x, y, wrapping each axis independently.
    /// Returns true if the pixel was lit before (a collision).
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH];
        let was_lit = *pixel;
        *pixel = !was_lit;
        was_lit
    }

    /// XORs an 8 pixel wide sprite onto the buffer.
    /// Every lit sprite bit wraps on its own, so a sprite straddling an edge is split across it.
    /// Returns true if any lit pixel was turned off.
    ///
    /// # Arguments
    /// * `x` `y` the top left corner of the sprite
    /// * `sprite` one byte per row, most significant bit on the left
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    collision |= self.flip(x + bit, y + row);
                }
            }
        }
        collision
    }

    pub fn rows(&self) -> &[[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        &self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
