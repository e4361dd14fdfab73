//! # AGC Core Specification
//!
//! Machine definition for a Block II style guidance computer core:
//! 15-bit 1's-complement words, a banked 15-bit address space, and the
//! single-address instruction format.
//!
//! ## Key Features
//! - 15-bit words with two zeros (`+0 = 00000`, `-0 = 77777`)
//! - End-around-carry addition
//! - Register file mapped at `00000-00017`
//! - Erasable memory switched by EB, fixed memory switched by FB
//! - 3-bit opcode + 12-bit address instruction words
//!
//! Addresses and word values are written in octal throughout, as on the
//! original hardware.

pub mod word;
pub mod layout;
pub mod register;
pub mod opcode;
pub mod encoding;
pub mod error;

pub use word::{Sign, Word};
pub use layout::Address;
pub use register::Register;
pub use opcode::Opcode;
pub use error::{Result, SpecError};
