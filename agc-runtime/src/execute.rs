//! Instruction dispatch and execution
//!
//! Dispatch is a fixed table indexed by the 3-bit opcode. Opcodes without a
//! handler map to [`no_op`]; the real machine would start a restart sequence
//! there, which this core does not model.

use crate::memory::Memory;
use crate::state::CpuState;
use agc_spec::encoding::{address_field, extract_opcode, with_address, ADDRESS_FIELD_MASK};
use agc_spec::word::{self, Sign, Word, WORD_MASK};
use agc_spec::{Address, Opcode};

/// Instruction handler: (CPU state, memory, address field)
pub type Handler = fn(&mut CpuState, &mut Memory, Address);

pub const DISPATCH_TABLE: [Handler; Opcode::COUNT] = [
    transfer_control,
    exchange,
    transfer_to_storage,
    clear_and_add,
    count_compare_skip,
    index,
    no_op,
    no_op,
];

/// Decode and execute one instruction word. Z must already point past it.
pub fn execute(cpu: &mut CpuState, memory: &mut Memory, instruction: Word) {
    let opcode = extract_opcode(instruction);
    let address = address_field(instruction);
    DISPATCH_TABLE[opcode as usize](cpu, memory, address);
}

/// TC: jump to the address field
pub fn transfer_control(cpu: &mut CpuState, _memory: &mut Memory, address: Address) {
    cpu.z = word::normalize(address);
}

/// XCH: swap A with M[address]
pub fn exchange(cpu: &mut CpuState, memory: &mut Memory, address: Address) {
    let value = memory.read(cpu, address);
    memory.write(cpu, address, cpu.a);
    cpu.a = value;
}

/// TS: M[address] = A
pub fn transfer_to_storage(cpu: &mut CpuState, memory: &mut Memory, address: Address) {
    memory.write(cpu, address, cpu.a);
}

/// CA: A = M[address]
pub fn clear_and_add(cpu: &mut CpuState, memory: &mut Memory, address: Address) {
    cpu.a = memory.read(cpu, address);
}

/// CCS: A = -M[address], then skip 1, 2 or 3 words for a positive, zero
/// or negative result
pub fn count_compare_skip(cpu: &mut CpuState, memory: &mut Memory, address: Address) {
    cpu.a = word::negate(memory.read(cpu, address));
    let skip = match word::sign(cpu.a) {
        Sign::Positive => 1,
        Sign::Zero => 2,
        Sign::Negative => 3,
    };
    cpu.advance(skip);
}

/// INDEX: add M[address] to the address field of the instruction at Z,
/// rewriting it in place before it executes
pub fn index(cpu: &mut CpuState, memory: &mut Memory, address: Address) {
    let offset = memory.read(cpu, address);
    let next_addr = cpu.z;
    let next = memory.fetch(cpu, next_addr);
    let field = word::add(address_field(next), offset) & ADDRESS_FIELD_MASK;
    memory.store_fetched(cpu, next_addr, with_address(next, field));
}

/// Opcodes 6 and 7
pub fn no_op(cpu: &mut CpuState, _memory: &mut Memory, _address: Address) {
    tracing::debug!(
        "ignoring unimplemented opcode {} at Z={:05o}",
        extract_opcode(cpu.current_instruction),
        cpu.z.wrapping_sub(1) & WORD_MASK
    );
}
