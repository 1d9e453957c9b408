use crate::constants::KEY_COUNT;
use crate::error::{Error, Result};

/// # Keypad
/// The pressed status of the 16 hex keys 0..F.
///
/// Written by whatever translates host input, read by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; KEY_COUNT],
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key
    /// * `pressed` whether it is held down
    pub fn set(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .keys
            .get_mut(usize::from(key))
            .ok_or(Error::KeyOutOfRange { key })?;
        *slot = pressed;
        Ok(())
    }

    pub fn press(&mut self, key: u8) -> Result<()> {
        self.set(key, true)
    }

    pub fn release(&mut self, key: u8) -> Result<()> {
        self.set(key, false)
    }

    pub fn is_pressed(&self, key: u8) -> Result<bool> {
        self.keys
            .get(usize::from(key))
            .copied()
            .ok_or(Error::KeyOutOfRange { key })
    }

    /// The lowest numbered key currently held, if any
    pub fn first_pressed(&self) -> Option<u8> {
        (0..KEY_COUNT as u8).find(|&key| self.keys[usize::from(key)])
    }

    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        &self.keys
    }
}
