//! ## Overview
//! DCPU-16 is a tiny fictional 16-bit microprocessor. This crate is an
//! emulator and assembler toolchain for it: it turns textual assembly
//! source into a big-endian stream of 16-bit words, and executes that
//! word stream against a model of the processor's architectural state.
//!
//! - Every architectural word is an unsigned 16-bit integer; arithmetic
//!   wraps modulo 2^16.
//! - There are no hardware faults: decoding an unknown opcode is
//!   reported to the caller as an error value, never a panic, and
//!   every `Address` the decoder can produce maps to an initialised
//!   memory cell.
//! - The engine is a pure, synchronous state-transition function: one
//!   call to [`engine::Engine::step`] advances the machine by exactly
//!   one instruction.
//!
//! ## Architecture
//! The machine has a flat word-addressable [`memory::Memory`] of 64Ki
//! RAM cells plus a handful of special cells: a program counter `PC`,
//! a stack pointer `SP`, an overflow register `O`, a one-bit `Skip`
//! latch, and eight general registers `A B C X Y Z I J`.
//!
//! Instructions are encoded as single 16-bit words, optionally followed
//! by up to two "extra words" consumed by their operands. There are two
//! instruction shapes:
//!
//! ```text
//! basic:      bits 0-3 opcode (nonzero), bits 4-9 operand a, bits 10-15 operand b
//! non-basic:  bits 0-3 zero, bits 4-9 opcode, bits 10-15 operand a
//! ```
//!
//! Operands name one of eleven addressing modes — see
//! [`instruction::operand`] for the full table — ranging from plain
//! registers to indirect-with-offset memory references to an embedded
//! small literal that costs no extra word.
//!
//! ## Execution model
//! [`engine::Engine::step`] fetches one instruction word, decodes it,
//! resolves its operands (in encoding order, since resolution of a
//! `PUSH`/`POP` operand mutates `SP` and resolution of an indirect
//! operand may consume an extra word and advance `PC`), and then, if
//! the `Skip` latch is clear, applies the opcode's semantics. If `Skip`
//! was set, the instruction's operands are still resolved — so the
//! correct number of words is consumed — but its semantics are not
//! applied, and the latch is cleared.
//!
//! Conditional opcodes (`IFE`, `IFN`, `IFG`, `IFB`) never branch
//! themselves; they only set the `Skip` latch, observed by the next
//! `step`.
//!
//! ## Assembler
//! [`assembler`] turns assembly source into the word stream the engine
//! consumes, in two passes: [`assembler::label::calculate_labels`] walks
//! the parsed program to assign each label a word offset, and
//! [`assembler::assemble`] re-walks it to resolve every label reference
//! and emit the final words.
//!
//! ## Disassembler
//! [`disassembler`] renders a word stream back to a mnemonic listing,
//! used by the `dcpu16-dump` command-line tool.
#[macro_use]
extern crate colorify;

mod error;

pub mod assembler;
pub mod disassembler;
pub mod engine;
pub mod instruction;
pub mod memory;

pub use engine::{Engine, EngineError};
pub use error::{AssemblerError, DecodeError};
pub use memory::{Address, Memory, Register};
