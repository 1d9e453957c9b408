/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded into memory and where the program counter starts
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM accepted by `AddressSpace::load`.
/// The last byte of memory is never part of a program image.
pub const MAX_ROM_SIZE: usize = 0xFFF - PROGRAM_START as usize;

/// Where the font sprite sheet lives
pub const FONT_START: u16 = 0x50;

/// Each font glyph is 5 rows tall
pub const GLYPH_HEIGHT: u8 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Nesting depth of subroutine calls
pub const STACK_DEPTH: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// VF doubles as the carry, borrow and collision flag
pub const FLAG: u8 = 0xF;

/// # Sprite sheet
/// Hex digits 0..F, each 4 pixels wide and 5 pixels tall.
/// Only the high nibble of each row is drawn.
/// ```text
/// 0xF0 -> 1111....
/// 0x90 -> 1..1....
/// 0x90 -> 1..1....
/// 0x90 -> 1..1....
/// 0xF0 -> 1111....
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
