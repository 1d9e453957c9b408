use crate::constants::{FLAG, PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::error::{Error, Result};

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register, only the low 12 bits address memory
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - 16 return addresses and a pointer to the next free slot
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per step while nonzero
///
/// Register indices are opcode nibbles and therefore always in `0..16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    stack: [u16; STACK_DEPTH],
    sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    /// Reads Vx. `x` is a register nibble (0..=0xF); decoded operands always are.
    ///
    /// # Panics
    /// If `x` is past VF.
    pub fn v(&self, x: u8) -> u8 {
        debug_assert!(usize::from(x) < REGISTER_COUNT, "no register V{:X}", x);
        self.v[usize::from(x)]
    }

    /// Writes Vx. Same nibble range as `v`.
    pub fn set_v(&mut self, x: u8, value: u8) {
        debug_assert!(usize::from(x) < REGISTER_COUNT, "no register V{:X}", x);
        self.v[usize::from(x)] = value;
    }

    pub fn flag(&self) -> u8 {
        self.v(FLAG)
    }

    pub fn set_flag(&mut self, set: bool) {
        self.set_v(FLAG, u8::from(set));
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    /// Saves a return address
    pub fn push(&mut self, address: u16) -> Result<()> {
        let slot = self
            .stack
            .get_mut(self.sp)
            .ok_or(Error::StackOverflow { address })?;
        *slot = address;
        self.sp += 1;
        Ok(())
    }

    /// Removes and returns the most recently saved return address
    pub fn pop(&mut self) -> Result<u16> {
        self.sp = self.sp.checked_sub(1).ok_or(Error::StackUnderflow)?;
        Ok(self.stack[self.sp])
    }

    /// The saved return addresses, oldest first
    pub fn stack(&self) -> &[u16] {
        &self.stack[..self.sp]
    }

    /// Moves the pc past the next instruction
    pub fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
