//! Step-level tests for each modeled instruction

use agc_runtime::Agc;
use agc_spec::encoding::encode_raw;
use agc_spec::word::{is_zero, negate, NEGATIVE_ZERO};
use agc_spec::Opcode;

/// Place a program in erasable bank 0 starting at `origin` and point Z at it
fn load_program(agc: &mut Agc, origin: usize, program: &[(Opcode, u16)]) {
    for (i, &(opcode, address)) in program.iter().enumerate() {
        agc.store_instruction(0, origin + i, opcode, address).unwrap();
    }
    agc.cpu_mut().z = origin as u16;
}

#[test]
fn test_tc_jumps_without_touching_registers() {
    let mut agc = Agc::default();
    agc.cpu_mut().a = 0o1;
    agc.cpu_mut().l = 0o2;
    agc.cpu_mut().q = 0o3;
    load_program(&mut agc, 0, &[(Opcode::Tc, 0o1234)]);

    agc.step();

    assert_eq!(agc.cpu().z, 0o1234);
    assert_eq!((agc.cpu().a, agc.cpu().l, agc.cpu().q), (0o1, 0o2, 0o3));
}

#[test]
fn test_ccs_positive_operand_skips_three() {
    let mut agc = Agc::default();
    agc.write(0o400, 5);
    load_program(&mut agc, 0o100, &[(Opcode::Ccs, 0o400)]);

    agc.step();

    assert_eq!(agc.cpu().a, negate(5));
    assert_eq!(agc.cpu().z, 0o101 + 3);
}

#[test]
fn test_ccs_zero_operand_skips_two() {
    let mut agc = Agc::default();
    load_program(&mut agc, 0o100, &[(Opcode::Ccs, 0o400)]);

    agc.step();

    assert!(is_zero(agc.cpu().a));
    assert_eq!(agc.cpu().a, NEGATIVE_ZERO);
    assert_eq!(agc.cpu().z, 0o101 + 2);
}

#[test]
fn test_ccs_negative_zero_operand_skips_two() {
    let mut agc = Agc::default();
    agc.write(0o400, NEGATIVE_ZERO);
    load_program(&mut agc, 0o100, &[(Opcode::Ccs, 0o400)]);

    agc.step();

    assert_eq!(agc.cpu().a, 0);
    assert_eq!(agc.cpu().z, 0o101 + 2);
}

#[test]
fn test_ccs_negative_operand_skips_one() {
    let mut agc = Agc::default();
    agc.write(0o400, negate(0o17));
    load_program(&mut agc, 0o100, &[(Opcode::Ccs, 0o400)]);

    agc.step();

    assert_eq!(agc.cpu().a, 0o17);
    assert_eq!(agc.cpu().z, 0o101 + 1);
}

#[test]
fn test_index_rewrites_next_instruction_before_it_runs() {
    let mut agc = Agc::default();
    agc.write(0o200, 2);
    agc.write(0o102, 0o4444);
    load_program(&mut agc, 0o100, &[(Opcode::Index, 0o200), (Opcode::Ca, 0o100)]);

    agc.step();
    assert_eq!(agc.read(0o101), 0o30102);
    assert_eq!(agc.cpu().z, 0o101);

    agc.step();
    assert_eq!(agc.cpu().a, 0o4444);
}

#[test]
fn test_index_with_negative_offset() {
    let mut agc = Agc::default();
    agc.write(0o200, negate(3));
    agc.write(0o75, 0o6060);
    load_program(&mut agc, 0o100, &[(Opcode::Index, 0o200), (Opcode::Ca, 0o100)]);

    agc.run_for(2);

    assert_eq!(agc.read(0o101), 0o30075);
    assert_eq!(agc.cpu().a, 0o6060);
}

#[test]
fn test_xch_then_ts_roundtrip_through_memory() {
    let mut agc = Agc::default();
    agc.cpu_mut().a = 0o7070;
    agc.write(0o300, 0o1111);
    load_program(
        &mut agc,
        0o100,
        &[(Opcode::Xch, 0o300), (Opcode::Ts, 0o301), (Opcode::Ca, 0o300)],
    );

    agc.step();
    assert_eq!(agc.cpu().a, 0o1111);
    assert_eq!(agc.read(0o300), 0o7070);

    agc.step();
    assert_eq!(agc.read(0o301), 0o1111);

    agc.step();
    assert_eq!(agc.cpu().a, 0o7070);
}

#[test]
fn test_xch_respects_selected_bank() {
    let mut agc = Agc::default();
    agc.write_register(3, 1);
    agc.cpu_mut().a = 0o55;
    agc.memory_mut().set_erasable_word(1, 0o300, 0o66);
    // Program lives in bank 1 because EB bit 0 is set
    agc.store_instruction(1, 0o100, Opcode::Xch, 0o300).unwrap();
    agc.cpu_mut().z = 0o100;

    agc.step();

    assert_eq!(agc.cpu().a, 0o66);
    assert_eq!(agc.memory().erasable_word(1, 0o300), 0o55);
    assert_eq!(agc.memory().erasable_word(0, 0o300), 0);
}

#[test]
fn test_ts_to_rom_is_dropped() {
    let mut agc = Agc::default();
    agc.load_rom_bytes(&[0x00, 0x42]);
    agc.cpu_mut().a = 0o7777;
    load_program(&mut agc, 0o100, &[(Opcode::Ts, 0o2000)]);

    agc.step();

    assert_eq!(agc.read(0o2000), 0x42);
}

#[test]
fn test_unknown_opcodes_only_advance_z() {
    let mut agc = Agc::default();
    agc.cpu_mut().a = 0o12;
    agc.memory_mut().set_erasable_word(0, 0o100, encode_raw(6, 0o300));
    agc.memory_mut().set_erasable_word(0, 0o101, encode_raw(7, 0o300));
    agc.cpu_mut().z = 0o100;

    agc.run_for(2);

    assert_eq!(agc.cpu().z, 0o102);
    assert_eq!(agc.cpu().a, 0o12);
    assert_eq!(agc.cpu().cycles, 2);
    assert_eq!(agc.cpu().current_instruction, 0o70300);
}

#[test]
fn test_execution_from_fixed_memory() {
    let mut agc = Agc::default();
    // F0 offset 0: CA 0300, offset 1: TC 2000
    agc.load_rom_bytes(&[0x30, 0xC0, 0x04, 0x00]);
    agc.write(0o300, 0o4242);
    agc.cpu_mut().z = 0o2000;

    agc.step();
    assert_eq!(agc.cpu().a, 0o4242);

    agc.step();
    assert_eq!(agc.cpu().z, 0o2000);
}

#[test]
fn test_index_modifies_instruction_in_register_shadow() {
    let mut agc = Agc::default();
    load_program(&mut agc, 0, &[(Opcode::Index, 0o50), (Opcode::Ca, 0o100)]);
    agc.write(0o50, 2);
    agc.write(0o100, 0o1111);
    agc.write(0o102, 0o4444);

    agc.run_for(2);

    assert_eq!(agc.fetch(0o1), encode_raw(Opcode::Ca.to_u8(), 0o102));
    assert_eq!(agc.memory().erasable_word(0, 1), encode_raw(Opcode::Ca.to_u8(), 0o102));
    assert_eq!(agc.cpu().a, 0o4444);
    assert_eq!(agc.cpu().z, 0o2);
}
