//! # Address Map and Bank Geometry
//!
//! ```text
//! 00000-00017   register file (16 words)
//! 00020-01777   erasable, switched by EB (two half-bank windows)
//! 02000-02777   fixed-fixed, bank F0
//! 03000-03777   fixed-fixed, bank F1
//! 04000-07777   fixed, switched by FB (F2-F35)
//! 10000-77777   unmapped: reads as zero, writes ignored
//! ```

/// Address in the 15-bit address space
pub type Address = u16;

/// Mask applied to every incoming address
pub const ADDRESS_MASK: Address = 0o77777;

/// Words per memory bank (erasable and fixed alike)
pub const BANK_SIZE: usize = 1024;

/// Number of erasable banks (E0, E1)
pub const ERASABLE_BANKS: usize = 2;

/// Number of fixed banks (F0-F35)
pub const FIXED_BANKS: usize = 36;

/// Fixed banks reachable without FB (F0, F1)
pub const FIXED_FIXED_BANKS: usize = 2;

/// Largest usable FB value; larger values clamp to it
pub const MAX_FIXED_BANK_SELECT: usize = FIXED_BANKS - FIXED_FIXED_BANKS - 1;

pub const REGISTER_START: Address = 0o00000;
pub const REGISTER_END: Address = 0o00017;

pub const ERASABLE_START: Address = 0o00020;
pub const ERASABLE_END: Address = 0o01777;
/// 10-bit offset within an erasable bank
pub const ERASABLE_OFFSET_MASK: Address = 0o01777;
/// Offsets at or above this use the upper half-bank select (EB bit 1)
pub const ERASABLE_UPPER_HALF: Address = 0o01000;

pub const FIXED_FIXED_START: Address = 0o02000;
pub const FIXED_FIXED_BANK1_START: Address = 0o03000;
pub const FIXED_FIXED_END: Address = 0o03777;

pub const FIXED_BANKED_START: Address = 0o04000;
pub const FIXED_BANKED_END: Address = 0o07777;

/// Offset within a fixed bank window
pub const FIXED_OFFSET_MASK: Address = 0o00777;

/// Total words in the fixed (rope) image
pub const FIXED_WORDS: usize = FIXED_BANKS * BANK_SIZE;

/// Decoded address region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Register,
    Erasable,
    FixedFixed,
    FixedBanked,
    Unmapped,
}

impl Region {
    /// Classify an address. The address is masked to 15 bits first.
    pub const fn of(addr: Address) -> Self {
        let addr = addr & ADDRESS_MASK;
        if addr <= REGISTER_END {
            Region::Register
        } else if addr <= ERASABLE_END {
            Region::Erasable
        } else if addr <= FIXED_FIXED_END {
            Region::FixedFixed
        } else if addr <= FIXED_BANKED_END {
            Region::FixedBanked
        } else {
            Region::Unmapped
        }
    }

    /// Only erasable memory accepts writes through the unified write path
    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Region::Erasable)
    }

    #[inline]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Region::FixedFixed | Region::FixedBanked)
    }
}
