use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context};
use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use c8_core::Chip8;
use c8_display::Display;

use crate::keymap::keymap;

/// Longest pause F1 can stretch a step to
const MAX_DELAY: u64 = 1000;

/// Loads `rom` and drives the machine until the window closes or a step fails.
///
/// # Arguments
/// * `rom` path to the ROM image
/// * `delay` milliseconds to sleep after every step
/// * `scale` size multiplier for each pixel
pub fn run(rom: &Path, mut delay: u64, scale: u32) -> anyhow::Result<()> {
    let image = std::fs::read(rom).with_context(|| format!("unable to read {}", rom.display()))?;
    let mut chip8 = Chip8::new();
    chip8
        .load_rom(&image)
        .with_context(|| format!("unable to load {}", rom.display()))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    display.render(chip8.frame())?;

    let mut sounding = false;
    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc)?,
                    (Keycode::F1, _) => {
                        delay = (delay + 1).min(MAX_DELAY);
                        info!("delay {}ms", delay);
                    }
                    (Keycode::F2, _) => {
                        delay = delay.saturating_sub(1);
                        info!("delay {}ms", delay);
                    }
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc)?;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        if let Err(e) = chip8.step() {
            error!("halted: {}\n{}", e, chip8.state());
            return Err(e.into());
        }

        // If the frame changed render it
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        if chip8.sound_active() != sounding {
            sounding = chip8.sound_active();
            debug!("sound {}", if sounding { "on" } else { "off" });
        }

        std::thread::sleep(Duration::from_millis(delay));
    }

    info!("quit");
    Ok(())
}
