//! Raw numeric opcode values, as they appear in bits 0-3 (basic) or
//! bits 4-9 (non-basic) of an encoded instruction word.

pub type OpCode = u8;

pub const ALL_BASIC_OP_CODES: [OpCode; 15] = [
    SET, ADD, SUB, MUL, DIV, MOD, SHL, SHR, AND, BOR, XOR, IFE, IFN, IFG, IFB,
];

pub const SET: OpCode = 0x1;
pub const ADD: OpCode = 0x2;
pub const SUB: OpCode = 0x3;
pub const MUL: OpCode = 0x4;
pub const DIV: OpCode = 0x5;
pub const MOD: OpCode = 0x6;
pub const SHL: OpCode = 0x7;
pub const SHR: OpCode = 0x8;
pub const AND: OpCode = 0x9;
pub const BOR: OpCode = 0xA;
pub const XOR: OpCode = 0xB;
pub const IFE: OpCode = 0xC;
pub const IFN: OpCode = 0xD;
pub const IFG: OpCode = 0xE;
pub const IFB: OpCode = 0xF;

pub const ALL_NON_BASIC_OP_CODES: [OpCode; 1] = [JSR];

pub const JSR: OpCode = 0x01;
