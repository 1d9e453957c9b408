use log::debug;
use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use c8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use c8_core::FrameBuffer;

/// Anything SDL refused to do while setting up or drawing the window
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl video error: {0}")]
    Sdl(String),
}

fn sdl_error(error: impl ToString) -> DisplayError {
    DisplayError::Sdl(error.to_string())
}

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// The on/off state of these pixels is held in a 64x32 FrameBuffer of bools.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let (width, height) = (DISPLAY_WIDTH as u32 * scale, DISPLAY_HEIGHT as u32 * scale);
        let window = video_subsystem
            .window("Chip-8", width, height)
            .position_centered()
            .opengl()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        debug!("opened {}x{} window", width, height);

        Ok(Display { canvas })
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(sdl_error)?;

        let pixels = frame_to_rgb24(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                // rows may be padded past width * 3 bytes
                for (row, line) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                    buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
                }
            })
            .map_err(sdl_error)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}

/// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
///
/// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
///
/// This creates a black and white rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Triplicating each pixel to represent its RGB values
/// - Mapping lit pixels to full 255 intensity
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .rows()
        .iter()
        .flatten()
        .flat_map(|&lit| std::iter::repeat(u8::from(lit) * 255).take(3))
        .collect()
}
