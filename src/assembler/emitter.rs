//! Pass two of the assembler: resolve every label reference and
//! encode each parsed statement into its final word(s).

use super::label::LabelTable;
use super::{Expr, ParsedLine, ParsedOperand, ParsedStatement};
use crate::error::AssemblerError;
use crate::instruction::operand::Operand;
use crate::instruction::{self, BasicOp, Instruction, NonBasicOp};

fn resolve_expr(expr: &Expr, labels: &LabelTable, line: usize) -> Result<u16, AssemblerError> {
    match expr {
        Expr::Literal(v) => Ok(*v),
        Expr::LabelRef(name) => {
            labels
                .get(name)
                .copied()
                .ok_or_else(|| AssemblerError::UnknownLabel {
                    line,
                    name: name.clone(),
                })
        }
    }
}

/// Resolve one parsed operand to its encoded addressing-mode shape,
/// plus the extra word (if any) that must follow the instruction word.
fn resolve_operand(
    operand: &ParsedOperand,
    labels: &LabelTable,
    line: usize,
) -> Result<(Operand, Option<u16>), AssemblerError> {
    let resolved = match operand {
        ParsedOperand::Register(r) => (Operand::Register(*r), None),
        ParsedOperand::Indirect(r) => (Operand::Indirect(*r), None),
        ParsedOperand::IndirectOffset(expr, r) => {
            let value = resolve_expr(expr, labels, line)?;
            (Operand::IndirectOffset(*r), Some(value))
        }
        ParsedOperand::Pop => (Operand::Pop, None),
        ParsedOperand::Peek => (Operand::Peek, None),
        ParsedOperand::Push => (Operand::Push, None),
        ParsedOperand::Sp => (Operand::Sp, None),
        ParsedOperand::Pc => (Operand::Pc, None),
        ParsedOperand::O => (Operand::O, None),
        ParsedOperand::IndirectImmediate(expr) => {
            let value = resolve_expr(expr, labels, line)?;
            (Operand::IndirectNextWord, Some(value))
        }
        ParsedOperand::Immediate(Expr::Literal(v)) if *v <= 0x1F => {
            (Operand::SmallLiteral(*v), None)
        }
        ParsedOperand::Immediate(expr) => {
            let value = resolve_expr(expr, labels, line)?;
            (Operand::NextWordLiteral, Some(value))
        }
    };
    Ok(resolved)
}

/// Resolve every label reference in `lines` and emit the final word
/// stream.
pub fn emit(lines: &[ParsedLine], labels: &LabelTable) -> Result<Vec<u16>, AssemblerError> {
    let mut words = Vec::new();
    for line in lines {
        let statement = match &line.statement {
            Some(s) => s,
            None => continue,
        };
        match statement {
            ParsedStatement::Basic(mnemonic, a, b) => {
                let op = BasicOp::from_mnemonic(mnemonic).ok_or_else(|| AssemblerError::Parse {
                    line: line.source_line,
                    message: format!("unknown basic mnemonic `{}`", mnemonic),
                })?;
                let (a_op, a_extra) = resolve_operand(a, labels, line.source_line)?;
                let (b_op, b_extra) = resolve_operand(b, labels, line.source_line)?;
                words.push(instruction::encode(Instruction::Basic(op, a_op, b_op)));
                if let Some(v) = a_extra {
                    words.push(v);
                }
                if let Some(v) = b_extra {
                    words.push(v);
                }
            }
            ParsedStatement::NonBasic(mnemonic, a) => {
                let op =
                    NonBasicOp::from_mnemonic(mnemonic).ok_or_else(|| AssemblerError::Parse {
                        line: line.source_line,
                        message: format!("unknown non-basic mnemonic `{}`", mnemonic),
                    })?;
                let (a_op, a_extra) = resolve_operand(a, labels, line.source_line)?;
                words.push(instruction::encode(Instruction::NonBasic(op, a_op)));
                if let Some(v) = a_extra {
                    words.push(v);
                }
            }
        }
    }
    Ok(words)
}

/// Serialise a word stream to the big-endian binary object format.
pub fn write_object(words: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 2);
    for &w in words {
        bytes.extend_from_slice(&w.to_be_bytes());
    }
    bytes
}
