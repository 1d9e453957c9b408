use log::{debug, trace};
use rand::{Rng, RngCore};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, GLYPH_HEIGHT};
use crate::error::Result;
use crate::instruction::Instruction;
use crate::registers::RegisterFile;
use crate::state::{Mode, State};

/// Tallest sprite an opcode can describe
const MAX_SPRITE_HEIGHT: usize = 15;

/// Applies one decoded instruction to `state`.
///
/// The pc must already point past the instruction.
/// On error whatever the instruction changed before failing stays changed.
pub fn execute(instruction: Instruction, state: &mut State, rng: &mut dyn RngCore) -> Result<()> {
    let registers = &mut state.registers;
    match instruction {
        Instruction::Clear => {
            state.frame_buffer.clear();
            state.draw_flag = true;
        }
        Instruction::Return => registers.pc = registers.pop()?,
        Instruction::Sys { addr } | Instruction::Jump { addr } => registers.pc = addr,
        Instruction::Call { addr } => {
            registers.push(registers.pc)?;
            registers.pc = addr;
        }
        Instruction::SkipEqByte { x, kk } => skip_if(state, |r| r.v(x) == kk),
        Instruction::SkipNeByte { x, kk } => skip_if(state, |r| r.v(x) != kk),
        Instruction::SkipEqReg { x, y } => skip_if(state, |r| r.v(x) == r.v(y)),
        Instruction::SkipNeReg { x, y } => skip_if(state, |r| r.v(x) != r.v(y)),
        Instruction::LoadByte { x, kk } => registers.set_v(x, kk),
        // no carry flag for immediate adds
        Instruction::AddByte { x, kk } => registers.set_v(x, registers.v(x).wrapping_add(kk)),
        Instruction::Move { x, y } => registers.set_v(x, registers.v(y)),
        Instruction::Or { x, y } => registers.set_v(x, registers.v(x) | registers.v(y)),
        Instruction::And { x, y } => registers.set_v(x, registers.v(x) & registers.v(y)),
        Instruction::Xor { x, y } => registers.set_v(x, registers.v(x) ^ registers.v(y)),
        Instruction::AddReg { x, y } => {
            let (sum, carry) = registers.v(x).overflowing_add(registers.v(y));
            registers.set_v(x, sum);
            registers.set_flag(carry);
        }
        // VF is written before Vx, so with x == F the result replaces the flag
        Instruction::Sub { x, y } => {
            registers.set_flag(registers.v(x) > registers.v(y));
            registers.set_v(x, registers.v(x).wrapping_sub(registers.v(y)));
        }
        Instruction::SubN { x, y } => {
            registers.set_flag(registers.v(y) > registers.v(x));
            registers.set_v(x, registers.v(y).wrapping_sub(registers.v(x)));
        }
        Instruction::ShiftRight { x, .. } => {
            registers.set_flag(registers.v(x) & 0x01 != 0);
            registers.set_v(x, registers.v(x) >> 1);
        }
        Instruction::ShiftLeft { x, .. } => {
            registers.set_flag(registers.v(x) & 0x80 != 0);
            registers.set_v(x, registers.v(x) << 1);
        }
        Instruction::LoadIndex { addr } => registers.i = addr,
        Instruction::JumpV0 { addr } => registers.pc = addr + u16::from(registers.v(0x0)),
        Instruction::Random { x, kk } => registers.set_v(x, rng.gen::<u8>() & kk),
        Instruction::Draw { x, y, n } => draw(state, x, y, n)?,
        Instruction::SkipPressed { x } => {
            let pressed = state.keypad.is_pressed(registers.v(x))?;
            if pressed {
                registers.skip();
            }
        }
        Instruction::SkipNotPressed { x } => {
            let pressed = state.keypad.is_pressed(registers.v(x))?;
            if !pressed {
                registers.skip();
            }
        }
        Instruction::LoadDelay { x } => registers.set_v(x, registers.delay_timer),
        Instruction::WaitKey { x } => {
            debug!("waiting for a key for V{:X}", x);
            await_key(state, x);
        }
        Instruction::SetDelay { x } => registers.delay_timer = registers.v(x),
        Instruction::SetSound { x } => registers.sound_timer = registers.v(x),
        Instruction::AddIndex { x } => {
            registers.i = registers.i.wrapping_add(u16::from(registers.v(x)));
        }
        Instruction::LoadGlyph { x } => {
            registers.i = FONT_START + u16::from(registers.v(x)) * u16::from(GLYPH_HEIGHT);
        }
        Instruction::Bcd { x } => {
            let value = registers.v(x);
            let i = usize::from(registers.i);
            state.memory.write(i, value / 100)?;
            state.memory.write(i + 1, value / 10 % 10)?;
            state.memory.write(i + 2, value % 10)?;
        }
        Instruction::Store { x } => {
            let i = usize::from(registers.i);
            for n in 0..=x {
                state.memory.write(i + usize::from(n), registers.v(n))?;
            }
        }
        Instruction::Read { x } => {
            let i = usize::from(registers.i);
            for n in 0..=x {
                registers.set_v(n, state.memory.read(i + usize::from(n))?);
            }
        }
    }
    Ok(())
}

/// Resolves Fx0A against the current keypad.
///
/// The lowest pressed key is written to `register` and the CPU resumes.
/// With no key held the CPU stays parked and both timers take an extra tick
/// on top of the one every step gets.
pub fn await_key(state: &mut State, register: u8) {
    match state.keypad.first_pressed() {
        Some(key) => {
            debug!("key {:X} -> V{:X}", key, register);
            state.registers.set_v(register, key);
            state.mode = Mode::Running;
        }
        None => {
            state.mode = Mode::AwaitingKey { register };
            state.registers.tick_timers();
        }
    }
}

fn skip_if(state: &mut State, condition: impl Fn(&RegisterFile) -> bool) {
    if condition(&state.registers) {
        state.registers.skip();
    }
}

/// draw_sprite(x=Vx y=Vy height=n)
/// XORs the sprite at mem[I..I+n] onto the FrameBuffer with per pixel wrapping.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let mut sprite = [0; MAX_SPRITE_HEIGHT];
    let sprite = &mut sprite[..usize::from(n)];
    let i = usize::from(state.registers.i);
    for (offset, row) in sprite.iter_mut().enumerate() {
        *row = state.memory.read(i + offset)?;
    }

    let origin_x = usize::from(state.registers.v(x)) % DISPLAY_WIDTH;
    let origin_y = usize::from(state.registers.v(y)) % DISPLAY_HEIGHT;
    trace!("sprite {:02X?} at ({}, {})", sprite, origin_x, origin_y);

    // Reset the carry flag (used for collision detection)
    state.registers.set_flag(false);
    let collision = state.frame_buffer.draw_sprite(origin_x, origin_y, sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
    Ok(())
}
