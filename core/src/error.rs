use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions that stop a ROM from loading or end a step early.
///
/// Arithmetic never shows up here; all 8-bit math wraps.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("memory access out of range at address {address:#06X}")]
    AddressOutOfRange { address: usize },

    #[error("stack overflow: no room to save return address {address:#06X}")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("invalid opcode {opcode:#06X}")]
    InvalidOpcode { opcode: u16 },

    #[error("key {key:#04X} is not on the keypad")]
    KeyOutOfRange { key: u8 },
}
