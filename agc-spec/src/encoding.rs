//! # Instruction Word Encoding
//!
//! ```text
//!  14 13 12 | 11 ............ 0
//! ----------|------------------
//!   opcode  |   address field
//! ```

use crate::error::{Result, SpecError};
use crate::layout::Address;
use crate::opcode::Opcode;
use crate::word::{normalize, Word};

/// Opcode field: bits 12-14
pub const OPCODE_SHIFT: u32 = 12;

/// Opcode mask after shifting (3 bits)
pub const OPCODE_MASK: Word = 0o7;

/// Opcode bits in place
pub const OPCODE_FIELD: Word = OPCODE_MASK << OPCODE_SHIFT;

/// Address field mask (12 bits)
pub const ADDRESS_FIELD_MASK: Word = 0o7777;

/// Extract the raw opcode (top 3 bits of the 15-bit word)
#[inline]
pub const fn extract_opcode(inst: Word) -> u8 {
    ((normalize(inst) >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract the 12-bit address field
#[inline]
pub const fn address_field(inst: Word) -> Address {
    inst & ADDRESS_FIELD_MASK
}

/// Opcode bits left in place, address field cleared
#[inline]
pub const fn opcode_bits(inst: Word) -> Word {
    inst & OPCODE_FIELD
}

/// Replace the address field, keeping the opcode bits
#[inline]
pub const fn with_address(inst: Word, address: Address) -> Word {
    opcode_bits(inst) | (address & ADDRESS_FIELD_MASK)
}

/// Build an instruction word from raw fields, masking both
#[inline]
pub const fn encode_raw(opcode: u8, address: Address) -> Word {
    (((opcode as Word) & OPCODE_MASK) << OPCODE_SHIFT) | (address & ADDRESS_FIELD_MASK)
}

/// Build an instruction word, rejecting addresses wider than 12 bits
pub fn encode(opcode: Opcode, address: Address) -> Result<Word> {
    if address > ADDRESS_FIELD_MASK {
        return Err(SpecError::AddressOutOfRange(address));
    }
    Ok(encode_raw(opcode.to_u8(), address))
}
