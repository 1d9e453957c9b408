use log::debug;

use crate::constants::{FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Error, Result};

/// # Address space
/// 4096 bytes of memory laid out as:
/// ```text
/// 0x000..0x050  unused
/// 0x050..0x0A0  font sprite sheet
/// 0x0A0..0x200  unused
/// 0x200..       program
/// ```
/// Every access is bounds checked.
#[derive(Clone)]
pub struct AddressSpace {
    bytes: [u8; MEMORY_SIZE],
}

impl AddressSpace {
    pub fn new() -> Self {
        AddressSpace {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Copy a ROM image into memory at `PROGRAM_START`
    ///
    /// # Arguments
    /// * `image` the raw program bytes, at most `MAX_ROM_SIZE` long
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: image.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + image.len()].copy_from_slice(image);
        debug!("loaded {} byte image at {:#05X}", image.len(), start);
        Ok(())
    }

    /// Copy the 16 hex digit glyphs into memory at `FONT_START`
    pub fn load_font(&mut self, glyphs: &[u8; 80]) {
        let start = FONT_START as usize;
        self.bytes[start..start + glyphs.len()].copy_from_slice(glyphs);
    }

    pub fn read(&self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Error::AddressOutOfRange { address })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(Error::AddressOutOfRange { address })?;
        *byte = value;
        Ok(())
    }

    /// Reads the big-endian word at `address`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn read_word(&self, address: usize) -> Result<u16> {
        let left = u16::from(self.read(address)?);
        let right = u16::from(self.read(address + 1)?);
        Ok(left << 8 | right)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FONT;

    #[test]
    fn test_memory_zeroed() {
        let memory = AddressSpace::new();
        assert!(memory.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_loads_image_at_program_start() {
        let mut memory = AddressSpace::new();
        memory.load(&[0x00, 0xE0]).unwrap();
        assert_eq!(memory.as_bytes()[0x200..0x202], [0x00, 0xE0]);
        assert_eq!(memory.as_bytes()[0x1FF], 0x0);
    }

    #[test]
    fn test_loads_largest_image() {
        let mut memory = AddressSpace::new();
        assert_eq!(memory.load(&[0xAB; 3583]), Ok(()));
        assert_eq!(memory.read(0xFFE), Ok(0xAB));
        assert_eq!(memory.read(0xFFF), Ok(0x0));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let mut memory = AddressSpace::new();
        assert_eq!(
            memory.load(&[0xAB; 3584]),
            Err(Error::RomTooLarge {
                size: 3584,
                max: 3583
            })
        );
        // nothing was written
        assert_eq!(memory.read(0x200), Ok(0x0));
    }

    #[test]
    fn test_loads_font() {
        let mut memory = AddressSpace::new();
        memory.load_font(&FONT);
        assert_eq!(memory.as_bytes()[0x50..0xA0], FONT[..]);
        assert_eq!(memory.read(0x4F), Ok(0x0));
        assert_eq!(memory.read(0xA0), Ok(0x0));
    }

    #[test]
    fn test_reads_word() {
        let mut memory = AddressSpace::new();
        memory.write(0x200, 0xAA).unwrap();
        memory.write(0x201, 0xBB).unwrap();
        assert_eq!(memory.read_word(0x200), Ok(0xAABB));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut memory = AddressSpace::new();
        assert_eq!(
            memory.read(0x1000),
            Err(Error::AddressOutOfRange { address: 0x1000 })
        );
        assert_eq!(
            memory.write(0x1000, 0x1),
            Err(Error::AddressOutOfRange { address: 0x1000 })
        );
        assert_eq!(
            memory.read_word(0xFFF),
            Err(Error::AddressOutOfRange { address: 0x1000 })
        );
    }
}
