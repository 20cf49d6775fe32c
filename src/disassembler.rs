//! Renders a word stream back to a mnemonic listing: a colored,
//! address-prefixed form for the `dcpu16-dump` command-line tool, and a
//! plain form whose lines are valid `assembler::parse` input again,
//! used by the assembler round-trip property test.

use crate::instruction::operand::Operand;
use crate::instruction::{self, Instruction};
use crate::memory::Register;

fn format_address(addr: u16) -> String {
    format!(colorify!(blue: "{:>#06x}"), addr)
}

fn format_mnemonic(name: &str, known: bool) -> String {
    if known {
        format!(colorify!(green: "{:<4}"), name)
    } else {
        format!(colorify!(red: "{:<4}"), name)
    }
}

fn render_register(r: Register) -> String {
    format!("{}", r)
}

fn render_operand(op: Operand, extra: Option<u16>) -> String {
    match op {
        Operand::Register(r) => render_register(r),
        Operand::Indirect(r) => format!("[{}]", render_register(r)),
        Operand::IndirectOffset(r) => {
            format!("[0x{:04X}+{}]", extra.unwrap_or(0), render_register(r))
        }
        Operand::Pop => "POP".to_string(),
        Operand::Peek => "PEEK".to_string(),
        Operand::Push => "PUSH".to_string(),
        Operand::Sp => "SP".to_string(),
        Operand::Pc => "PC".to_string(),
        Operand::O => "O".to_string(),
        Operand::IndirectNextWord => format!("[0x{:04X}]", extra.unwrap_or(0)),
        Operand::NextWordLiteral => format!("0x{:04X}", extra.unwrap_or(0)),
        Operand::SmallLiteral(v) => format!("0x{:02X}", v),
    }
}

/// Read the operand's extra word from the stream, if its addressing
/// mode consumes one, advancing `pc` past it.
fn take_extra(words: &[u16], pc: &mut usize, op: Operand) -> Option<u16> {
    if op.consumes_extra_word() {
        let v = words.get(*pc).copied();
        *pc += 1;
        v
    } else {
        None
    }
}

/// Walk one decoded instruction starting at `words[*pc]`, advancing
/// `*pc` past its opcode word and any extra words its operands
/// consume. Returns the instruction's address, its decode result, and
/// the extra words read for `a` and (for basic instructions) `b`.
fn step(words: &[u16], pc: &mut usize) -> (u16, Result<Instruction, ()>, Option<u16>, Option<u16>) {
    let addr = *pc as u16;
    let word = words[*pc];
    *pc += 1;
    match instruction::decode(word) {
        Ok(Instruction::Basic(op, a, b)) => {
            let a_extra = take_extra(words, pc, a);
            let b_extra = take_extra(words, pc, b);
            (addr, Ok(Instruction::Basic(op, a, b)), a_extra, b_extra)
        }
        Ok(Instruction::NonBasic(op, a)) => {
            let a_extra = take_extra(words, pc, a);
            (addr, Ok(Instruction::NonBasic(op, a)), a_extra, None)
        }
        Err(_) => (addr, Err(()), None, None),
    }
}

/// Disassemble a word stream into one mnemonic listing line per
/// instruction, address-prefixed and colored. An undecodable word is
/// rendered on its own line, flagged in red, and consumes exactly one
/// word.
pub fn disassemble(words: &[u16]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc: usize = 0;
    while pc < words.len() {
        let (addr, decoded, a_extra, b_extra) = step(words, &mut pc);
        let line = match decoded {
            Ok(Instruction::Basic(op, a, b)) => format!(
                "{}: {} {}, {}",
                format_address(addr),
                format_mnemonic(op.mnemonic(), true),
                render_operand(a, a_extra),
                render_operand(b, b_extra)
            ),
            Ok(Instruction::NonBasic(op, a)) => format!(
                "{}: {} {}",
                format_address(addr),
                format_mnemonic(op.mnemonic(), true),
                render_operand(a, a_extra)
            ),
            Err(()) => format!(
                "{}: {} 0x{:04X}",
                format_address(addr),
                format_mnemonic("DAT", false),
                words[addr as usize]
            ),
        };
        lines.push(line);
    }
    lines
}

/// Disassemble a word stream into plain, uncolored assembly text: one
/// instruction per line, no address prefix. Every line this produces
/// for a legally-decoded instruction is valid `assembler::parse` input
/// again, which is what the round-trip property test in `tests/`
/// relies on. An undecodable word is rendered as a comment so it does
/// not accidentally parse as something else.
pub fn pretty(words: &[u16]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc: usize = 0;
    while pc < words.len() {
        let (_, decoded, a_extra, b_extra) = step(words, &mut pc);
        let line = match decoded {
            Ok(Instruction::Basic(op, a, b)) => format!(
                "{} {}, {}",
                op.mnemonic(),
                render_operand(a, a_extra),
                render_operand(b, b_extra)
            ),
            Ok(Instruction::NonBasic(op, a)) => {
                format!("{} {}", op.mnemonic(), render_operand(a, a_extra))
            }
            Err(()) => format!("; illegal word 0x{:04X}", words[pc - 1]),
        };
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassembles_two_word_set_with_small_literal_b() {
        let lines = disassemble(&[0x8401]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("SET"));
        assert!(lines[0].contains("0x01"));
    }

    #[test]
    fn disassembles_basic_instruction_with_two_extra_words() {
        let lines = disassemble(&[0x7DE1, 0x1000, 0x0020]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("0x1000"));
        assert!(lines[0].contains("0x0020"));
    }

    #[test]
    fn flags_an_illegal_word_and_advances_by_one() {
        let lines = disassemble(&[0x0000, 0x8401]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("DAT"));
    }

    #[test]
    fn pretty_omits_color_codes_and_address_prefix() {
        let lines = pretty(&[0x8401]);
        assert_eq!(lines, vec!["SET A, 0x01".to_string()]);
    }

    #[test]
    fn pretty_renders_non_basic_instruction() {
        let lines = pretty(&[((crate::instruction::op_codes::JSR as u16) << 4) | (0x1F << 10), 0x0010]);
        assert_eq!(lines, vec!["JSR 0x0010".to_string()]);
    }
}
