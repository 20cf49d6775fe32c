//! Line-oriented tokenizer/parser built on `nom`'s combinator
//! functions. Each source line is handled independently: an optional
//! `:label`, an optional mnemonic and operand list, and an optional
//! `;`-introduced comment stretching to end of line.

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_until};
use nom::character::complete::{
    alpha1, alphanumeric1, char, digit1, hex_digit1, space0,
};
use nom::combinator::{map, map_res, opt, recognize, rest};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};
use nom::IResult;

use super::{Expr, ParsedOperand, ParsedStatement};
use crate::instruction::{BasicOp, NonBasicOp};
use crate::memory::Register;

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, recognize(char('_')))),
        many0(alt((alphanumeric1, recognize(char('_'))))),
    ))(input)
}

fn hex_number(input: &str) -> IResult<&str, u16> {
    map_res(preceded(tag_no_case("0x"), hex_digit1), |s: &str| {
        u16::from_str_radix(s, 16)
    })(input)
}

fn dec_number(input: &str) -> IResult<&str, u16> {
    map_res(digit1, |s: &str| s.parse::<u16>())(input)
}

fn number(input: &str) -> IResult<&str, u16> {
    alt((hex_number, dec_number))(input)
}

fn expr(input: &str) -> IResult<&str, Expr> {
    alt((
        map(number, Expr::Literal),
        map(identifier, |s: &str| Expr::LabelRef(s.to_string())),
    ))(input)
}

fn register(input: &str) -> IResult<&str, Register> {
    map_res(identifier, |s: &str| match s.to_ascii_uppercase().as_str() {
        "A" => Ok(Register::A),
        "B" => Ok(Register::B),
        "C" => Ok(Register::C),
        "X" => Ok(Register::X),
        "Y" => Ok(Register::Y),
        "Z" => Ok(Register::Z),
        "I" => Ok(Register::I),
        "J" => Ok(Register::J),
        _ => Err(()),
    })(input)
}

fn keyword_operand(input: &str) -> IResult<&str, ParsedOperand> {
    map_res(identifier, |s: &str| match s.to_ascii_uppercase().as_str() {
        "POP" => Ok(ParsedOperand::Pop),
        "PEEK" => Ok(ParsedOperand::Peek),
        "PUSH" => Ok(ParsedOperand::Push),
        "SP" => Ok(ParsedOperand::Sp),
        "PC" => Ok(ParsedOperand::Pc),
        "O" => Ok(ParsedOperand::O),
        _ => Err(()),
    })(input)
}

/// `+`, surrounded by optional whitespace, as used inside `[expr+reg]`.
fn plus_sep(input: &str) -> IResult<&str, char> {
    delimited(space0, char('+'), space0)(input)
}

/// `[nextword + register]`, either operand order.
fn indirect_offset(input: &str) -> IResult<&str, ParsedOperand> {
    alt((
        map(separated_pair(expr, plus_sep, register), |(e, r)| {
            ParsedOperand::IndirectOffset(e, r)
        }),
        map(separated_pair(register, plus_sep, expr), |(r, e)| {
            ParsedOperand::IndirectOffset(e, r)
        }),
    ))(input)
}

/// The body of a `[...]` operand: an offset form, a bare register, or a
/// bare literal/label.
fn bracket_body(input: &str) -> IResult<&str, ParsedOperand> {
    delimited(
        space0,
        alt((
            indirect_offset,
            map(register, ParsedOperand::Indirect),
            map(expr, ParsedOperand::IndirectImmediate),
        )),
        space0,
    )(input)
}

fn bracket_operand(input: &str) -> IResult<&str, ParsedOperand> {
    delimited(char('['), bracket_body, char(']'))(input)
}

/// A single operand, in any of the eleven addressing-mode spellings.
/// Order matters: the bracket form must be tried before a bare
/// register/literal, and the named-keyword operands (`POP`, `SP`, ...)
/// must be tried before a bare register or a label reference, since all
/// three parse as an `identifier`.
fn operand(input: &str) -> IResult<&str, ParsedOperand> {
    preceded(
        space0,
        alt((
            bracket_operand,
            keyword_operand,
            map(register, ParsedOperand::Register),
            map(expr, ParsedOperand::Immediate),
        )),
    )(input)
}

/// `,`, surrounded by optional whitespace, separating `a` from `b` in a
/// basic instruction's operand list.
fn comma_sep(input: &str) -> IResult<&str, char> {
    delimited(space0, char(','), space0)(input)
}

/// One mnemonic followed by either one or two comma-separated operands.
fn operand_list(input: &str) -> IResult<&str, (ParsedOperand, Option<ParsedOperand>)> {
    tuple((operand, opt(preceded(comma_sep, operand))))(input)
}

/// Strip a `;`-introduced comment, if any, returning the code before it.
fn strip_comment(input: &str) -> IResult<&str, &str> {
    alt((terminated(take_until(";"), char(';')), rest))(input)
}

/// An optional `label:` prefix at the start of a statement.
fn label_prefix(input: &str) -> IResult<&str, Option<&str>> {
    opt(terminated(identifier, preceded(space0, char(':'))))(input)
}

fn parse_statement(input: &str) -> Result<ParsedStatement, String> {
    let (after_mnemonic, mnemonic) =
        identifier(input).map_err(|_| "expected a mnemonic".to_string())?;
    let mnemonic = mnemonic.to_ascii_uppercase();

    let (trailing, (a, b)) = operand_list(after_mnemonic).map_err(|_| {
        format!(
            "in operand `a` of `{}`: expected an operand, found `{}`",
            mnemonic,
            after_mnemonic.trim()
        )
    })?;
    if !trailing.trim().is_empty() {
        return Err(format!("unexpected trailing input `{}`", trailing.trim()));
    }

    match b {
        Some(b) => {
            if BasicOp::from_mnemonic(&mnemonic).is_none() {
                return Err(format!("unknown mnemonic `{}`", mnemonic));
            }
            Ok(ParsedStatement::Basic(mnemonic, a, b))
        }
        None => {
            if NonBasicOp::from_mnemonic(&mnemonic).is_none() {
                return Err(format!("unknown mnemonic `{}`", mnemonic));
            }
            Ok(ParsedStatement::NonBasic(mnemonic, a))
        }
    }
}

/// Parse one source line. Returns `Ok(None)` for a blank or
/// comment-only line.
pub fn parse_line(
    raw_line: &str,
) -> Result<Option<(Option<String>, Option<ParsedStatement>)>, String> {
    // `strip_comment` always succeeds: its `rest` fallback arm matches
    // the whole input when no `;` is found.
    let (_, without_comment) = strip_comment(raw_line).expect("strip_comment is total");
    let trimmed = without_comment.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // `label_prefix` always succeeds too: it is `opt(...)`.
    let (after_label, label) = label_prefix(trimmed).expect("label_prefix is total");
    let label = label.map(|s| s.to_string());
    let remainder = after_label.trim_start();

    let statement = if remainder.is_empty() {
        None
    } else {
        Some(parse_statement(remainder)?)
    };

    Ok(Some((label, statement)))
}
