//! Memory subsystem
//!
//! Sole owner of the erasable and fixed bank arrays. Every access from the
//! CPU goes through [`Memory::read`], [`Memory::write`] or [`Memory::fetch`];
//! bank selection is decoded from the EB/FB registers on each access.

use crate::state::CpuState;
use agc_spec::layout::{
    Region, ADDRESS_MASK, BANK_SIZE, ERASABLE_BANKS, ERASABLE_OFFSET_MASK, ERASABLE_UPPER_HALF,
    FIXED_BANKS, FIXED_FIXED_BANK1_START, FIXED_FIXED_BANKS, FIXED_OFFSET_MASK,
    MAX_FIXED_BANK_SELECT,
};
use agc_spec::word::{normalize, Word};
use agc_spec::Address;

type Bank = [Word; BANK_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    erasable: Vec<Bank>,
    fixed: Vec<Bank>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Erasable bank for an address: the lower half-bank follows EB bit 0,
/// the upper half-bank follows EB bit 1.
#[inline]
pub fn erasable_bank(eb: Word, addr: Address) -> usize {
    let offset = addr & ERASABLE_OFFSET_MASK;
    let bit = if offset < ERASABLE_UPPER_HALF { eb & 1 } else { (eb >> 1) & 1 };
    bit as usize
}

/// Fixed bank for an address in 02000-07777. FB values past the last bank
/// clamp to F35.
#[inline]
pub fn fixed_bank(fb: Word, addr: Address) -> usize {
    match Region::of(addr) {
        Region::FixedFixed if addr < FIXED_FIXED_BANK1_START => 0,
        Region::FixedFixed => 1,
        _ => (fb as usize).min(MAX_FIXED_BANK_SELECT) + FIXED_FIXED_BANKS,
    }
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            erasable: vec![[0; BANK_SIZE]; ERASABLE_BANKS],
            fixed: vec![[0; BANK_SIZE]; FIXED_BANKS],
        }
    }

    /// Zero all erasable and fixed banks
    pub fn clear(&mut self) {
        for bank in self.erasable.iter_mut().chain(self.fixed.iter_mut()) {
            bank.fill(0);
        }
    }

    #[inline]
    fn erasable_slot(&self, cpu: &CpuState, addr: Address) -> Word {
        self.erasable[erasable_bank(cpu.eb, addr)][(addr & ERASABLE_OFFSET_MASK) as usize]
    }

    #[inline]
    fn fixed_slot(&self, cpu: &CpuState, addr: Address) -> Word {
        self.fixed[fixed_bank(cpu.fb, addr)][(addr & FIXED_OFFSET_MASK) as usize]
    }

    /// Unified data read.
    ///
    /// Registers come from the CPU register file. Unmapped addresses read
    /// as zero.
    pub fn read(&self, cpu: &CpuState, addr: Address) -> Word {
        let addr = addr & ADDRESS_MASK;
        match Region::of(addr) {
            Region::Register => cpu.read_register(addr),
            Region::Erasable => self.erasable_slot(cpu, addr),
            region if region.is_fixed() => self.fixed_slot(cpu, addr),
            _ => 0,
        }
    }

    /// Unified data write.
    ///
    /// Only erasable memory is mutated. Writes to the register window, to
    /// fixed memory and to unmapped addresses are dropped.
    pub fn write(&mut self, cpu: &CpuState, addr: Address, value: Word) {
        let addr = addr & ADDRESS_MASK;
        let region = Region::of(addr);
        if !region.is_writable() {
            tracing::trace!("write to {:05o} dropped ({:?})", addr, region);
            return;
        }
        let bank = erasable_bank(cpu.eb, addr);
        self.erasable[bank][(addr & ERASABLE_OFFSET_MASK) as usize] = normalize(value);
    }

    /// Instruction fetch.
    ///
    /// Unlike [`Memory::read`], addresses 00000-01777 always come from the
    /// erasable array, including the part the register file shadows.
    pub fn fetch(&self, cpu: &CpuState, addr: Address) -> Word {
        let addr = addr & ADDRESS_MASK;
        match Region::of(addr) {
            Region::Register | Region::Erasable => self.erasable_slot(cpu, addr),
            region if region.is_fixed() => self.fixed_slot(cpu, addr),
            _ => 0,
        }
    }

    /// Store into the cell [`Memory::fetch`] resolves for `addr`.
    ///
    /// Addresses 00000-01777 land in the erasable array even where the
    /// register file shadows them. Fixed and unmapped addresses are dropped.
    pub fn store_fetched(&mut self, cpu: &CpuState, addr: Address, value: Word) {
        let addr = addr & ADDRESS_MASK;
        match Region::of(addr) {
            Region::Register | Region::Erasable => {
                let bank = erasable_bank(cpu.eb, addr);
                self.erasable[bank][(addr & ERASABLE_OFFSET_MASK) as usize] = normalize(value);
            }
            region => tracing::trace!("instruction store to {:05o} dropped ({:?})", addr, region),
        }
    }

    /// Direct erasable access, bypassing EB. Out-of-range reads return zero.
    pub fn erasable_word(&self, bank: usize, offset: usize) -> Word {
        self.erasable
            .get(bank)
            .and_then(|b| b.get(offset))
            .copied()
            .unwrap_or(0)
    }

    /// Direct erasable store, bypassing EB. Out-of-range stores are ignored.
    pub fn set_erasable_word(&mut self, bank: usize, offset: usize, value: Word) {
        if let Some(slot) = self.erasable.get_mut(bank).and_then(|b| b.get_mut(offset)) {
            *slot = normalize(value);
        }
    }

    /// Direct fixed access by flat index (`bank * 1024 + offset`)
    pub fn fixed_word(&self, index: usize) -> Word {
        self.fixed
            .get(index / BANK_SIZE)
            .map(|b| b[index % BANK_SIZE])
            .unwrap_or(0)
    }

    /// Direct fixed store by flat index. Out-of-range stores are ignored.
    pub fn set_fixed_word(&mut self, index: usize, value: Word) {
        if let Some(bank) = self.fixed.get_mut(index / BANK_SIZE) {
            bank[index % BANK_SIZE] = normalize(value);
        }
    }
}
