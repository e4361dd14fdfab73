//! CPU state

use agc_spec::register::{channel_slot, NUM_CHANNELS};
use agc_spec::word::{normalize, Word};
use agc_spec::{Address, Register};

/// CPU registers, channels and step bookkeeping.
///
/// Holds no memory of its own: the memory subsystem maps this register file
/// into addresses 00000-00017 and reads EB/FB from here to decode banks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuState {
    /// Accumulator
    pub a: Word,
    /// Link
    pub l: Word,
    /// Overflow / auxiliary
    pub q: Word,
    /// Program counter
    pub z: Word,

    /// Erasable bank select (bit 0: lower half, bit 1: upper half)
    pub eb: Word,
    /// Fixed bank select
    pub fb: Word,
    /// Both-bank (internal)
    pub bb: Word,

    /// Input channels
    pub input: [Word; NUM_CHANNELS],
    /// Output channels
    pub output: [Word; NUM_CHANNELS],

    /// Last fetched instruction word
    pub current_instruction: Word,
    /// Executed step count
    pub cycles: u64,
}

impl CpuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every register, channel and counter to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn get(&self, reg: Register) -> Word {
        match reg {
            Register::A => self.a,
            Register::L => self.l,
            Register::Q => self.q,
            Register::Eb => self.eb,
            Register::Fb => self.fb,
            Register::Z => self.z,
            Register::Bb => self.bb,
        }
    }

    /// Set a register; the value is masked to 15 bits
    #[inline]
    pub fn set(&mut self, reg: Register, value: Word) {
        let value = normalize(value);
        match reg {
            Register::A => self.a = value,
            Register::L => self.l = value,
            Register::Q => self.q = value,
            Register::Eb => self.eb = value,
            Register::Fb => self.fb = value,
            Register::Z => self.z = value,
            Register::Bb => self.bb = value,
        }
    }

    /// Register-file read. Channel addresses return the input side;
    /// unmapped offsets read as zero.
    pub fn read_register(&self, addr: Address) -> Word {
        if let Some(reg) = Register::from_address(addr) {
            return self.get(reg);
        }
        match channel_slot(addr) {
            Some(slot) => self.input[slot],
            None => 0,
        }
    }

    /// Register-file write. Channel addresses write the output side;
    /// unmapped offsets are ignored.
    pub fn write_register(&mut self, addr: Address, value: Word) {
        if let Some(reg) = Register::from_address(addr) {
            self.set(reg, value);
        } else if let Some(slot) = channel_slot(addr) {
            self.output[slot] = normalize(value);
        }
    }

    /// Advance Z by `count` word positions (15-bit wrap)
    #[inline]
    pub fn advance(&mut self, count: Word) {
        self.z = normalize(self.z.wrapping_add(count));
    }

    #[inline]
    pub fn inc_cycles(&mut self) {
        self.cycles += 1;
    }
}
