//! # Opcode Definitions
//!
//! The opcode is the top 3 bits of a 15-bit instruction word (values 0-7).
//! Only a representative subset is modeled; values 6 and 7 decode to
//! `None` and execute as no-ops.

use crate::encoding;
use crate::error::SpecError;
use crate::word::Word;

/// Instruction opcode (3 bits)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// TC: Z = address
    Tc = 0,
    /// XCH: A <-> M[address]
    Xch = 1,
    /// TS: M[address] = A
    Ts = 2,
    /// CA: A = M[address]
    Ca = 3,
    /// CCS: A = -M[address], then skip 1/2/3 for positive/zero/negative A
    Ccs = 4,
    /// INDEX: add M[address] to the address field of the next instruction
    Index = 5,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: u32 = 3;

    /// Number of raw opcode values (dispatch table size)
    pub const COUNT: usize = 1 << Self::BITS;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Opcode::Tc),
            1 => Some(Opcode::Xch),
            2 => Some(Opcode::Ts),
            3 => Some(Opcode::Ca),
            4 => Some(Opcode::Ccs),
            5 => Some(Opcode::Index),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Decode the opcode field of an instruction word
    #[inline]
    pub fn from_instruction(instruction: Word) -> Option<Self> {
        Self::from_u8(encoding::extract_opcode(instruction))
    }
}

impl TryFrom<u8> for Opcode {
    type Error = SpecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(SpecError::InvalidOpcode(value))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Tc => "TC",
            Opcode::Xch => "XCH",
            Opcode::Ts => "TS",
            Opcode::Ca => "CA",
            Opcode::Ccs => "CCS",
            Opcode::Index => "INDEX",
        };
        write!(f, "{}", name)
    }
}
