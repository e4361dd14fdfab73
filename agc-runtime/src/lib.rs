//! # AGC Runtime
//!
//! Emulates the processor and addressable memory of a Block II style
//! guidance computer core.
//!
//! ## Features
//!
//! - **Banked memory**: 2 erasable banks with half-bank EB switching,
//!   36 fixed banks with two fixed-fixed banks and clamped FB switching
//! - **Register file** mapped at `00000-00017` for data reads
//! - **Separate instruction fetch** path that bypasses the register file
//! - **Instructions**: TC, XCH, TS, CA, CCS, INDEX; other opcodes are no-ops
//! - **Rope loading** from big-endian word images
//!
//! ## Example
//!
//! ```rust
//! use agc_runtime::{Agc, AgcConfig};
//! use agc_spec::Opcode;
//!
//! let mut agc = Agc::new(AgcConfig::default());
//! agc.store_instruction(0, 0, Opcode::Tc, 0o1234).unwrap();
//! agc.step();
//! assert_eq!(agc.cpu().z, 0o1234);
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod execute;
pub mod rom;
pub mod agc;

pub use agc::{Agc, AgcConfig, ExecutionSummary};
pub use error::{Result, RuntimeError};
pub use execute::{execute, Handler, DISPATCH_TABLE};
pub use memory::Memory;
pub use state::CpuState;
