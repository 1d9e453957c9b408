pub use chip8::Chip8;
pub use error::{Error, Result};
pub use frame_buffer::FrameBuffer;
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use memory::AddressSpace;
pub use opcode::Opcode;
pub use registers::RegisterFile;
pub use state::{Mode, State};

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod registers;
pub mod state;
