//! The emulated machine: CPU state + memory + the step loop

use crate::error::Result;
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::CpuState;
use agc_spec::encoding::{address_field, encode};
use agc_spec::word::Word;
use agc_spec::{Address, Opcode};
use std::path::Path;

/// Machine configuration
#[derive(Debug, Clone)]
pub struct AgcConfig {
    /// Cycle count at which [`Agc::run`] stops
    pub max_cycles: u64,

    /// Log every executed instruction at debug level instead of trace
    pub trace: bool,
}

impl Default for AgcConfig {
    fn default() -> Self {
        Self {
            max_cycles: 1_000_000,
            trace: false,
        }
    }
}

/// State summary returned by the run helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Total cycles executed since reset
    pub cycles: u64,

    /// Program counter after the last step
    pub z: Word,

    /// Last fetched instruction word
    pub last_instruction: Word,
}

/// Guidance computer core
#[derive(Debug, Clone)]
pub struct Agc {
    cpu: CpuState,
    memory: Memory,
    config: AgcConfig,
}

impl Default for Agc {
    fn default() -> Self {
        Self::new(AgcConfig::default())
    }
}

impl Agc {
    /// Create a machine with zeroed registers and memory
    pub fn new(config: AgcConfig) -> Self {
        Self {
            cpu: CpuState::new(),
            memory: Memory::new(),
            config,
        }
    }

    /// Reset the CPU. Erasable and fixed memory are left alone.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute one instruction.
    ///
    /// Z is advanced before dispatch, so handlers see the address of the
    /// following instruction (CCS skips from there, INDEX rewrites it).
    pub fn step(&mut self) {
        let z = self.cpu.z;
        let instruction = self.memory.fetch(&self.cpu, z);
        self.cpu.current_instruction = instruction;
        self.cpu.advance(1);

        if self.config.trace {
            tracing::debug!(
                "[{:6}] Z={:05o} {:05o} {} {:04o}",
                self.cpu.cycles,
                z,
                instruction,
                mnemonic(instruction),
                address_field(instruction)
            );
        } else {
            tracing::trace!("Z={:05o} {:05o}", z, instruction);
        }

        execute(&mut self.cpu, &mut self.memory, instruction);
        self.cpu.inc_cycles();
    }

    /// Execute exactly `steps` instructions
    pub fn run_for(&mut self, steps: u64) -> ExecutionSummary {
        for _ in 0..steps {
            self.step();
        }
        self.summary()
    }

    /// Execute until the cycle counter reaches `max_cycles`
    pub fn run(&mut self) -> ExecutionSummary {
        while self.cpu.cycles < self.config.max_cycles {
            self.step();
        }
        self.summary()
    }

    pub fn summary(&self) -> ExecutionSummary {
        ExecutionSummary {
            cycles: self.cpu.cycles,
            z: self.cpu.z,
            last_instruction: self.cpu.current_instruction,
        }
    }

    /// Unified data read
    pub fn read(&self, addr: Address) -> Word {
        self.memory.read(&self.cpu, addr)
    }

    /// Unified data write (erasable only)
    pub fn write(&mut self, addr: Address, value: Word) {
        self.memory.write(&self.cpu, addr, value);
    }

    /// Instruction fetch path
    pub fn fetch(&self, addr: Address) -> Word {
        self.memory.fetch(&self.cpu, addr)
    }

    pub fn read_register(&self, addr: Address) -> Word {
        self.cpu.read_register(addr)
    }

    /// Dedicated register-file write; the unified write path never
    /// reaches registers
    pub fn write_register(&mut self, addr: Address, value: Word) {
        self.cpu.write_register(addr, value);
    }

    /// Load a rope image file into fixed memory
    pub fn load_rom(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.memory.load_rom(path)
    }

    pub fn load_rom_bytes(&mut self, bytes: &[u8]) -> usize {
        self.memory.load_rom_bytes(bytes)
    }

    /// Encode an instruction and store it straight into an erasable bank
    pub fn store_instruction(
        &mut self,
        bank: usize,
        offset: usize,
        opcode: Opcode,
        address: Address,
    ) -> Result<()> {
        let word = encode(opcode, address)?;
        self.memory.set_erasable_word(bank, offset, word);
        Ok(())
    }

    pub fn cpu(&self) -> &CpuState {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuState {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn config(&self) -> &AgcConfig {
        &self.config
    }
}

fn mnemonic(instruction: Word) -> String {
    match Opcode::from_instruction(instruction) {
        Some(op) => op.to_string(),
        None => "???".to_string(),
    }
}
