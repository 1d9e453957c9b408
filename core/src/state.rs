use std::fmt;

use crate::constants::{FONT, STACK_DEPTH};
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::AddressSpace;
use crate::registers::RegisterFile;

/// Whether the CPU is executing or parked on Fx0A
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// Waiting for any key; its value goes into `register`
    AwaitingKey { register: u8 },
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// - registers, program counter, call stack and timers (see `RegisterFile`)
/// - the current `Mode`
///
/// ## Memory
/// - 4096 bytes of addressable memory with the sprite sheet preloaded
/// - 64x32 frame buffer holding the next frame to be drawn
///
/// ## Input
/// - the pressed status of keys 0..F
#[derive(Clone)]
pub struct State {
    pub memory: AddressSpace,
    pub registers: RegisterFile,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub mode: Mode,
    /// Set when the frame buffer changes, cleared when the frame is taken
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = AddressSpace::new();
        memory.load_font(&FONT);

        State {
            memory,
            registers: RegisterFile::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            mode: Mode::Running,
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Register and stack dump, one register per line with the stack alongside
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registers = &self.registers;
        writeln!(
            f,
            "pc {:04X}  i {:04X}  dt {:02X}  st {:02X}  {:?}",
            registers.pc, registers.i, registers.delay_timer, registers.sound_timer, self.mode
        )?;
        let stack = registers.stack();
        for n in 0..STACK_DEPTH {
            let v = registers.registers()[n];
            match stack.get(n) {
                Some(address) => writeln!(f, "v{:X} {:02X}  s{:X} {:04X}", n, v, n, address)?,
                None => writeln!(f, "v{:X} {:02X}", n, v)?,
            }
        }
        Ok(())
    }
}
