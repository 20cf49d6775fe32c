//! Pass one of the assembler: compute each label's word offset without
//! resolving any operand.

use std::collections::HashMap;

use super::{Expr, ParsedLine, ParsedOperand, ParsedStatement};

/// Maps a label identifier to the word offset of the instruction (or
/// data word) it annotates.
pub type LabelTable = HashMap<String, u16>;

/// Word length an operand costs once encoded, known without resolving
/// any label. A literal `Immediate` in `0x00..=0x1F` packs into the
/// small-literal addressing mode (no extra word); any other literal,
/// and every label reference, costs one `nextword` — label references
/// are never packed into the small-literal mode even if they happen to
/// resolve to a small address, so that sizing here and encoding in
/// `emitter` always agree.
fn extra_words(operand: &ParsedOperand) -> u16 {
    if operand.always_has_extra_word() {
        1
    } else if let ParsedOperand::Immediate(Expr::Literal(v)) = operand {
        if *v <= 0x1F {
            0
        } else {
            1
        }
    } else if operand.may_have_extra_word() {
        1
    } else {
        0
    }
}

fn statement_len(statement: &ParsedStatement) -> u16 {
    match statement {
        ParsedStatement::Basic(_, a, b) => 1 + extra_words(a) + extra_words(b),
        ParsedStatement::NonBasic(_, a) => 1 + extra_words(a),
    }
}

/// Walk the parsed program, assigning each label the word offset of
/// the next emitted word, without resolving any operand's label
/// reference.
pub fn calculate_labels(lines: &[ParsedLine]) -> LabelTable {
    let mut table = LabelTable::new();
    let mut offset: u16 = 0;
    for line in lines {
        if let Some(name) = &line.label {
            table.insert(name.clone(), offset);
        }
        if let Some(statement) = &line.statement {
            offset = offset.wrapping_add(statement_len(statement));
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::parse;

    #[test]
    fn label_on_its_own_line_names_the_following_instruction() {
        let lines = parse("start:\nSET A, 1\n").unwrap();
        let table = calculate_labels(&lines);
        assert_eq!(table.get("start"), Some(&0));
    }

    #[test]
    fn label_sharing_a_line_with_an_instruction_names_itself() {
        let lines = parse("start: SET A, 1\nADD A, 1\n").unwrap();
        let table = calculate_labels(&lines);
        assert_eq!(table.get("start"), Some(&0));
    }

    #[test]
    fn offsets_account_for_extra_words() {
        let lines = parse("SET A, 0x1000\nhere: ADD A, 1\n").unwrap();
        let table = calculate_labels(&lines);
        // SET A, nextword(0x1000) is 2 words; `here` follows at offset 2.
        assert_eq!(table.get("here"), Some(&2));
    }

    #[test]
    fn small_literal_immediates_cost_no_extra_word() {
        let lines = parse("SET A, 1\nhere: ADD A, 1\n").unwrap();
        let table = calculate_labels(&lines);
        assert_eq!(table.get("here"), Some(&1));
    }
}
