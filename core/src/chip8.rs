use log::{info, log_enabled, trace, Level};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::Result;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operations::{await_key, execute};
use crate::state::{Mode, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the entropy source behind the random byte instruction
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one step at a time
/// - inspecting its frame buffer for rendering by some display
///
/// Stepping is driven entirely from outside; nothing here blocks or sleeps.
pub struct Chip8 {
    state: State,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    /// A powered-on machine with the font loaded and an OS seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Like `new` but drawing random bytes from `rng`
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Chip8 {
            state: State::new(),
            rng: Box::new(rng),
        }
    }

    /// Load a rom into program memory
    ///
    /// # Arguments
    /// * `image` the raw contents of a ROM file
    pub fn load_rom(&mut self, image: &[u8]) -> Result<()> {
        self.state.memory.load(image)?;
        info!("loaded {} byte ROM", image.len());
        Ok(())
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.state.keypad.press(key)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.state.keypad.release(key)
    }

    /// Advances the CPU by a single step
    /// - while awaiting a keypress, checks the keypad instead of fetching
    /// - otherwise fetches, decodes and executes the next opcode
    /// - then ticks both timers
    ///
    /// A failed step skips the timer tick.
    pub fn step(&mut self) -> Result<()> {
        match self.state.mode {
            Mode::AwaitingKey { register } => await_key(&mut self.state, register),
            Mode::Running => {
                let op = self.fetch()?;
                let instruction = Instruction::decode(op)?;
                if log_enabled!(Level::Trace) {
                    trace!(
                        "{:04X} {} {:<16} v{:02X?} i{:04X}",
                        self.state.registers.pc.wrapping_sub(2),
                        op,
                        instruction.to_string(),
                        self.state.registers.registers(),
                        self.state.registers.i
                    );
                }
                execute(instruction, &mut self.state, self.rng.as_mut())?;
            }
        }
        self.state.registers.tick_timers();
        Ok(())
    }

    /// Gets the opcode pointed at by the pc and moves the pc past it
    fn fetch(&mut self) -> Result<Opcode> {
        let pc = self.state.registers.pc;
        let word = self.state.memory.read_word(usize::from(pc))?;
        self.state.registers.pc = pc.wrapping_add(2);
        Ok(Opcode(word))
    }

    /// The current frame, whether or not it changed
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if it changed since the last call
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether a beep should be sounding
    pub fn sound_active(&self) -> bool {
        self.state.registers.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
