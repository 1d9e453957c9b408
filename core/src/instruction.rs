use std::fmt;

use crate::error::{Error, Result};
use crate::opcode::Opcode;

/// One decoded Chip-8 operation with its operands already pulled out of the opcode.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `addr` a 12-bit address
/// and `n` a sprite height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn: PC = addr
    Sys { addr: u16 },
    /// 00E0: clear the display
    Clear,
    /// 00EE: PC = STACK.pop()
    Return,
    /// 1nnn: PC = addr
    Jump { addr: u16 },
    /// 2nnn: STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// 3xkk: if Vx == kk then skip
    SkipEqByte { x: u8, kk: u8 },
    /// 4xkk: if Vx != kk then skip
    SkipNeByte { x: u8, kk: u8 },
    /// 5xy0: if Vx == Vy then skip
    SkipEqReg { x: u8, y: u8 },
    /// 6xkk: Vx = kk
    LoadByte { x: u8, kk: u8 },
    /// 7xkk: Vx += kk
    AddByte { x: u8, kk: u8 },
    /// 8xy0: Vx = Vy
    Move { x: u8, y: u8 },
    /// 8xy1: Vx |= Vy
    Or { x: u8, y: u8 },
    /// 8xy2: Vx &= Vy
    And { x: u8, y: u8 },
    /// 8xy3: Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// 8xy4: Vx += Vy; VF = carry
    AddReg { x: u8, y: u8 },
    /// 8xy5: Vx -= Vy; VF = !borrow
    Sub { x: u8, y: u8 },
    /// 8xy6: Vx >>= 1; VF = shifted out bit
    ShiftRight { x: u8, y: u8 },
    /// 8xy7: Vx = Vy - Vx; VF = !borrow
    SubN { x: u8, y: u8 },
    /// 8xyE: Vx <<= 1; VF = shifted out bit
    ShiftLeft { x: u8, y: u8 },
    /// 9xy0: if Vx != Vy then skip
    SkipNeReg { x: u8, y: u8 },
    /// Annn: I = addr
    LoadIndex { addr: u16 },
    /// Bnnn: PC = V0 + addr
    JumpV0 { addr: u16 },
    /// Cxkk: Vx = rand_byte & kk
    Random { x: u8, kk: u8 },
    /// Dxyn: draw_sprite(x=Vx y=Vy height=n)
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E: if Vx.pressed then skip
    SkipPressed { x: u8 },
    /// ExA1: if !Vx.pressed then skip
    SkipNotPressed { x: u8 },
    /// Fx07: Vx = DT
    LoadDelay { x: u8 },
    /// Fx0A: await keypress for Vx
    WaitKey { x: u8 },
    /// Fx15: DT = Vx
    SetDelay { x: u8 },
    /// Fx18: ST = Vx
    SetSound { x: u8 },
    /// Fx1E: I += Vx
    AddIndex { x: u8 },
    /// Fx29: I = address of the glyph for Vx
    LoadGlyph { x: u8 },
    /// Fx33: mem[I..I+3] = bcd(Vx)
    Bcd { x: u8 },
    /// Fx55: mem[I..=I+x] = V0..=Vx
    Store { x: u8 },
    /// Fx65: V0..=Vx = mem[I..=I+x]
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: Opcode) -> Result<Self> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x0, ..) => Instruction::Sys { addr },
            (0x1, ..) => Instruction::Jump { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::SkipEqByte { x, kk },
            (0x4, ..) => Instruction::SkipNeByte { x, kk },
            (0x5, ..) => Instruction::SkipEqReg { x, y },
            (0x6, ..) => Instruction::LoadByte { x, kk },
            (0x7, ..) => Instruction::AddByte { x, kk },
            (0x8, .., 0x0) => Instruction::Move { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::ShiftRight { x, y },
            (0x8, .., 0x7) => Instruction::SubN { x, y },
            (0x8, .., 0xE) => Instruction::ShiftLeft { x, y },
            (0x9, ..) => Instruction::SkipNeReg { x, y },
            (0xA, ..) => Instruction::LoadIndex { addr },
            (0xB, ..) => Instruction::JumpV0 { addr },
            (0xC, ..) => Instruction::Random { x, kk },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, .., 0x9, 0xE) => Instruction::SkipPressed { x },
            (0xE, .., 0xA, 0x1) => Instruction::SkipNotPressed { x },
            (0xF, .., 0x0, 0x7) => Instruction::LoadDelay { x },
            (0xF, .., 0x0, 0xA) => Instruction::WaitKey { x },
            (0xF, .., 0x1, 0x5) => Instruction::SetDelay { x },
            (0xF, .., 0x1, 0x8) => Instruction::SetSound { x },
            (0xF, .., 0x1, 0xE) => Instruction::AddIndex { x },
            (0xF, .., 0x2, 0x9) => Instruction::LoadGlyph { x },
            (0xF, .., 0x3, 0x3) => Instruction::Bcd { x },
            (0xF, .., 0x5, 0x5) => Instruction::Store { x },
            (0xF, .., 0x6, 0x5) => Instruction::Read { x },
            _ => return Err(Error::InvalidOpcode { opcode: op.0 }),
        };
        Ok(instruction)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Sys { addr } => write!(f, "SYS {:#05X}", addr),
            Instruction::Clear => write!(f, "CLS"),
            Instruction::Return => write!(f, "RET"),
            Instruction::Jump { addr } => write!(f, "JP {:#05X}", addr),
            Instruction::Call { addr } => write!(f, "CALL {:#05X}", addr),
            Instruction::SkipEqByte { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Instruction::SkipNeByte { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            Instruction::SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Instruction::LoadByte { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Instruction::AddByte { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Instruction::Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            Instruction::And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Instruction::Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Instruction::AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Instruction::Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            Instruction::ShiftRight { x, y } => write!(f, "SHR V{:X}, V{:X}", x, y),
            Instruction::SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Instruction::ShiftLeft { x, y } => write!(f, "SHL V{:X}, V{:X}", x, y),
            Instruction::SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Instruction::LoadIndex { addr } => write!(f, "LD I, {:#05X}", addr),
            Instruction::JumpV0 { addr } => write!(f, "JP V0, {:#05X}", addr),
            Instruction::Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Instruction::Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Instruction::SkipPressed { x } => write!(f, "SKP V{:X}", x),
            Instruction::SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            Instruction::LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            Instruction::WaitKey { x } => write!(f, "LD V{:X}, K", x),
            Instruction::SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            Instruction::SetSound { x } => write!(f, "LD ST, V{:X}", x),
            Instruction::AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            Instruction::LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            Instruction::Bcd { x } => write!(f, "LD B, V{:X}", x),
            Instruction::Store { x } => write!(f, "LD [I], V{:X}", x),
            Instruction::Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;

    fn decode(word: u16) -> Result<Instruction> {
        Instruction::decode(Opcode(word))
    }

    #[test]
    fn test_decodes_fixed_opcodes() {
        assert_eq!(decode(0x00E0), Ok(Instruction::Clear));
        assert_eq!(decode(0x00EE), Ok(Instruction::Return));
    }

    #[test]
    fn test_0nnn_is_sys() {
        assert_eq!(decode(0x0123), Ok(Instruction::Sys { addr: 0x123 }));
        assert_eq!(decode(0x00E1), Ok(Instruction::Sys { addr: 0x0E1 }));
    }

    #[test]
    fn test_decodes_address_operands() {
        assert_eq!(decode(0x1ABC), Ok(Instruction::Jump { addr: 0xABC }));
        assert_eq!(decode(0x2123), Ok(Instruction::Call { addr: 0x123 }));
        assert_eq!(decode(0xAABC), Ok(Instruction::LoadIndex { addr: 0xABC }));
        assert_eq!(decode(0xBABC), Ok(Instruction::JumpV0 { addr: 0xABC }));
    }

    #[test]
    fn test_decodes_byte_operands() {
        assert_eq!(decode(0x3111), Ok(Instruction::SkipEqByte { x: 0x1, kk: 0x11 }));
        assert_eq!(decode(0x4111), Ok(Instruction::SkipNeByte { x: 0x1, kk: 0x11 }));
        assert_eq!(decode(0x6122), Ok(Instruction::LoadByte { x: 0x1, kk: 0x22 }));
        assert_eq!(decode(0x7122), Ok(Instruction::AddByte { x: 0x1, kk: 0x22 }));
        assert_eq!(decode(0xC1F0), Ok(Instruction::Random { x: 0x1, kk: 0xF0 }));
    }

    #[test]
    fn test_decodes_register_pairs() {
        assert_eq!(decode(0x5120), Ok(Instruction::SkipEqReg { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x9120), Ok(Instruction::SkipNeReg { x: 0x1, y: 0x2 }));
        // the low nibble of 5xy0 and 9xy0 is not checked
        assert_eq!(decode(0x5127), Ok(Instruction::SkipEqReg { x: 0x1, y: 0x2 }));
    }

    #[test]
    fn test_decodes_8_group() {
        assert_eq!(decode(0x8120), Ok(Instruction::Move { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8121), Ok(Instruction::Or { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8122), Ok(Instruction::And { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8123), Ok(Instruction::Xor { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8124), Ok(Instruction::AddReg { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8125), Ok(Instruction::Sub { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8126), Ok(Instruction::ShiftRight { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x8127), Ok(Instruction::SubN { x: 0x1, y: 0x2 }));
        assert_eq!(decode(0x812E), Ok(Instruction::ShiftLeft { x: 0x1, y: 0x2 }));
    }

    #[test]
    fn test_decodes_draw() {
        assert_eq!(decode(0xD125), Ok(Instruction::Draw { x: 0x1, y: 0x2, n: 0x5 }));
    }

    #[test]
    fn test_decodes_e_and_f_groups() {
        assert_eq!(decode(0xE19E), Ok(Instruction::SkipPressed { x: 0x1 }));
        assert_eq!(decode(0xE1A1), Ok(Instruction::SkipNotPressed { x: 0x1 }));
        assert_eq!(decode(0xF107), Ok(Instruction::LoadDelay { x: 0x1 }));
        assert_eq!(decode(0xF10A), Ok(Instruction::WaitKey { x: 0x1 }));
        assert_eq!(decode(0xF115), Ok(Instruction::SetDelay { x: 0x1 }));
        assert_eq!(decode(0xF118), Ok(Instruction::SetSound { x: 0x1 }));
        assert_eq!(decode(0xF11E), Ok(Instruction::AddIndex { x: 0x1 }));
        assert_eq!(decode(0xF129), Ok(Instruction::LoadGlyph { x: 0x1 }));
        assert_eq!(decode(0xF133), Ok(Instruction::Bcd { x: 0x1 }));
        assert_eq!(decode(0xF455), Ok(Instruction::Store { x: 0x4 }));
        assert_eq!(decode(0xF465), Ok(Instruction::Read { x: 0x4 }));
    }

    #[test]
    fn test_rejects_unknown_group_members() {
        for word in [0x8128, 0x812F, 0xE19F, 0xE1A2, 0xF100, 0xF166, 0xFFFF] {
            assert_eq!(decode(word), Err(Error::InvalidOpcode { opcode: word }));
        }
    }

    #[test]
    fn test_disassembles() {
        assert_eq!(decode(0x00E0).unwrap().to_string(), "CLS");
        assert_eq!(decode(0x6122).unwrap().to_string(), "LD V1, 0x22");
        assert_eq!(decode(0xA2F0).unwrap().to_string(), "LD I, 0x2F0");
        assert_eq!(decode(0xD015).unwrap().to_string(), "DRW V0, V1, 5");
        assert_eq!(decode(0xF365).unwrap().to_string(), "LD V3, [I]");
    }
}
