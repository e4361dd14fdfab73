//! Register file map (addresses 00000-00017)

use crate::layout::{Address, REGISTER_END};
use std::fmt;

/// Number of input and of output channels held by the CPU
pub const NUM_CHANNELS: usize = 16;

/// First register-file address mapped to an I/O channel
pub const CHANNEL_BASE: Address = 0o10;

/// Named CPU registers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    /// Accumulator
    A = 0,
    /// Link
    L = 1,
    /// Overflow / auxiliary
    Q = 2,
    /// Erasable bank select
    Eb = 3,
    /// Fixed bank select
    Fb = 4,
    /// Program counter
    Z = 5,
    /// Both-bank (internal)
    Bb = 6,
}

impl Register {
    pub const ALL: [Register; 7] = [
        Register::A,
        Register::L,
        Register::Q,
        Register::Eb,
        Register::Fb,
        Register::Z,
        Register::Bb,
    ];

    /// Register mapped at `addr`, if any
    #[inline]
    pub fn from_address(addr: Address) -> Option<Self> {
        Self::ALL.get(addr as usize).copied()
    }

    #[inline]
    pub fn address(self) -> Address {
        self as Address
    }
}

/// Channel slot mapped at `addr` (00010-00017), if any
#[inline]
pub fn channel_slot(addr: Address) -> Option<usize> {
    if (CHANNEL_BASE..=REGISTER_END).contains(&addr) {
        Some((addr - CHANNEL_BASE) as usize)
    } else {
        None
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::L => "L",
            Register::Q => "Q",
            Register::Eb => "EB",
            Register::Fb => "FB",
            Register::Z => "Z",
            Register::Bb => "BB",
        };
        write!(f, "{}", name)
    }
}
