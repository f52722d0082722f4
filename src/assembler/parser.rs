//! Assembly source parser.
//!
//! Turns the token stream into one [`SourceLine`] per line of source. A line
//! is any combination of a label definition (`IDENT:`) and a statement (an
//! instruction or a data directive); blank and comment-only lines produce
//! nothing.
//!
//! The parser classifies operands purely by shape - `#` means immediate,
//! parentheses mean indirection, a trailing `,X`/`,Y` means indexing - and
//! leaves the zero-page/absolute choice and mnemonic validation to the
//! encoder, which owns the opcode table.

use super::lexer::{Token, TokenStream, TokenType};
use super::{validate_label, AssemblyError, AssemblyErrorKind};

/// A parsed line of assembly source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number in the source text (1-indexed).
    pub line_number: usize,

    /// Optional label definition (e.g. `START` from `START:`).
    pub label: Option<String>,

    /// Optional instruction or directive.
    pub statement: Option<Statement>,
}

/// A single instruction or data directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A CPU instruction. The mnemonic is normalized to uppercase.
    Instruction {
        mnemonic: String,
        operand: OperandExpr,
    },

    /// `.byte` directive: literal bytes emitted at the current address.
    Byte(Vec<u8>),

    /// `.word` directive: literal little-endian words.
    Word(Vec<u16>),
}

/// The syntactic shape of an instruction operand.
///
/// `Direct` covers everything written as a bare value: zero-page, absolute,
/// and branch targets. Which of those it becomes is decided by the encoder
/// from the value range and the mnemonic's addressing modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandExpr {
    /// No operand written.
    None,
    /// Explicit accumulator operand (`ASL A`).
    Accumulator,
    /// `#value` immediate literal.
    Immediate(u16),
    /// Bare value or label: `$44`, `$4400`, `TARGET`.
    Direct(Value),
    /// `value,X`.
    DirectX(Value),
    /// `value,Y`.
    DirectY(Value),
    /// `(value)` - indirect jump target.
    Indirect(Value),
    /// `(value,X)` - indexed indirect.
    IndexedIndirect(Value),
    /// `(value),Y` - indirect indexed.
    IndirectIndexed(Value),
}

/// A literal number or a label reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Literal(u16),
    Symbol(String),
}

/// Parses a token stream into source lines.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<SourceLine>, AssemblyError> {
    let mut stream = TokenStream::new(tokens);
    let mut lines = Vec::new();

    loop {
        while matches!(stream.peek(), TokenType::Newline) {
            stream.consume();
        }
        if matches!(stream.peek(), TokenType::Eof) {
            break;
        }

        let line_number = stream.line();
        let label = parse_label(&mut stream)?;

        let statement = match stream.peek() {
            TokenType::Newline | TokenType::Eof => None,
            _ => Some(parse_statement(&mut stream)?),
        };

        match stream.peek() {
            TokenType::Newline => {
                stream.consume();
            }
            TokenType::Eof => {}
            other => {
                return Err(AssemblyError::new(
                    AssemblyErrorKind::Syntax,
                    stream.line(),
                    format!("unexpected {:?} after statement", other),
                ));
            }
        }

        lines.push(SourceLine {
            line_number,
            label,
            statement,
        });
    }

    Ok(lines)
}

/// Parses `IDENT:` if present.
fn parse_label(stream: &mut TokenStream) -> Result<Option<String>, AssemblyError> {
    let is_label = matches!(stream.peek(), TokenType::Identifier(_))
        && matches!(stream.peek_n(1), TokenType::Colon);
    if !is_label {
        return Ok(None);
    }

    let line = stream.line();
    let TokenType::Identifier(name) = stream.consume().token_type else {
        unreachable!("peeked an identifier");
    };
    stream.consume(); // colon

    validate_label(&name)
        .map_err(|message| AssemblyError::new(AssemblyErrorKind::Syntax, line, message))?;

    Ok(Some(name))
}

fn parse_statement(stream: &mut TokenStream) -> Result<Statement, AssemblyError> {
    let line = stream.line();
    match stream.consume().token_type {
        TokenType::Dot => parse_directive(stream, line),
        TokenType::Identifier(mnemonic) => {
            let operand = parse_operand(stream)?;
            Ok(Statement::Instruction {
                mnemonic: mnemonic.to_uppercase(),
                operand,
            })
        }
        other => Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("expected an instruction or directive, found {:?}", other),
        )),
    }
}

/// Parses `.byte`/`.word` after the dot has been consumed.
fn parse_directive(stream: &mut TokenStream, line: usize) -> Result<Statement, AssemblyError> {
    let TokenType::Identifier(name) = stream.consume().token_type else {
        return Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            "expected a directive name after '.'",
        ));
    };

    match name.to_uppercase().as_str() {
        "BYTE" => {
            let values = parse_number_list(stream, line)?;
            let mut bytes = Vec::with_capacity(values.len());
            for value in values {
                if value > 0xFF {
                    return Err(AssemblyError::new(
                        AssemblyErrorKind::InvalidOperand,
                        line,
                        format!(".byte value ${:X} does not fit in one byte", value),
                    ));
                }
                bytes.push(value as u8);
            }
            Ok(Statement::Byte(bytes))
        }
        "WORD" => Ok(Statement::Word(parse_number_list(stream, line)?)),
        _ => Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("unknown directive .{}", name),
        )),
    }
}

/// Parses a comma-separated list of number literals.
fn parse_number_list(stream: &mut TokenStream, line: usize) -> Result<Vec<u16>, AssemblyError> {
    let mut values = Vec::new();
    loop {
        match number_value(stream.peek()) {
            Some(value) => {
                stream.consume();
                values.push(value);
            }
            None => {
                return Err(AssemblyError::new(
                    AssemblyErrorKind::Syntax,
                    line,
                    "expected a number literal",
                ));
            }
        }
        if matches!(stream.peek(), TokenType::Comma) {
            stream.consume();
        } else {
            break;
        }
    }
    Ok(values)
}

fn number_value(token_type: &TokenType) -> Option<u16> {
    match token_type {
        TokenType::DecimalNumber(value)
        | TokenType::HexNumber(value)
        | TokenType::BinaryNumber(value) => Some(*value),
        _ => None,
    }
}

fn parse_operand(stream: &mut TokenStream) -> Result<OperandExpr, AssemblyError> {
    let line = stream.line();
    match stream.peek() {
        TokenType::Newline | TokenType::Eof => Ok(OperandExpr::None),

        // Bare `A` selects the accumulator form (`ASL A`).
        TokenType::Identifier(name) if name.eq_ignore_ascii_case("a") => {
            stream.consume();
            Ok(OperandExpr::Accumulator)
        }

        TokenType::Hash => {
            stream.consume();
            match number_value(stream.peek()) {
                Some(value) => {
                    stream.consume();
                    if value > 0xFF {
                        return Err(AssemblyError::new(
                            AssemblyErrorKind::InvalidOperand,
                            line,
                            format!("immediate value ${:X} does not fit in one byte", value),
                        ));
                    }
                    Ok(OperandExpr::Immediate(value))
                }
                None => Err(AssemblyError::new(
                    AssemblyErrorKind::InvalidOperand,
                    line,
                    "immediate operand must be a number literal",
                )),
            }
        }

        TokenType::LParen => {
            stream.consume();
            let value = parse_value(stream, line)?;
            match stream.peek() {
                // (value,X)
                TokenType::Comma => {
                    stream.consume();
                    expect_index_register(stream, line, "X")?;
                    expect(stream, TokenType::RParen, line)?;
                    Ok(OperandExpr::IndexedIndirect(value))
                }
                // (value) or (value),Y
                TokenType::RParen => {
                    stream.consume();
                    if matches!(stream.peek(), TokenType::Comma) {
                        stream.consume();
                        expect_index_register(stream, line, "Y")?;
                        Ok(OperandExpr::IndirectIndexed(value))
                    } else {
                        Ok(OperandExpr::Indirect(value))
                    }
                }
                other => Err(AssemblyError::new(
                    AssemblyErrorKind::Syntax,
                    line,
                    format!("expected ',' or ')' in indirect operand, found {:?}", other),
                )),
            }
        }

        _ => {
            let value = parse_value(stream, line)?;
            if matches!(stream.peek(), TokenType::Comma) {
                stream.consume();
                let register = index_register(stream, line)?;
                if register == "X" {
                    Ok(OperandExpr::DirectX(value))
                } else {
                    Ok(OperandExpr::DirectY(value))
                }
            } else {
                Ok(OperandExpr::Direct(value))
            }
        }
    }
}

/// Parses a number literal or label reference.
fn parse_value(stream: &mut TokenStream, line: usize) -> Result<Value, AssemblyError> {
    if let Some(value) = number_value(stream.peek()) {
        stream.consume();
        return Ok(Value::Literal(value));
    }
    match stream.consume().token_type {
        TokenType::Identifier(name) => Ok(Value::Symbol(name)),
        other => Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("expected a number or label, found {:?}", other),
        )),
    }
}

/// Consumes `X` or `Y` after a comma.
fn index_register(stream: &mut TokenStream, line: usize) -> Result<&'static str, AssemblyError> {
    match stream.consume().token_type {
        TokenType::Identifier(name) if name.eq_ignore_ascii_case("x") => Ok("X"),
        TokenType::Identifier(name) if name.eq_ignore_ascii_case("y") => Ok("Y"),
        other => Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("expected index register X or Y, found {:?}", other),
        )),
    }
}

fn expect_index_register(
    stream: &mut TokenStream,
    line: usize,
    register: &str,
) -> Result<(), AssemblyError> {
    match stream.consume().token_type {
        TokenType::Identifier(name) if name.eq_ignore_ascii_case(register) => Ok(()),
        other => Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("expected index register {}, found {:?}", register, other),
        )),
    }
}

fn expect(
    stream: &mut TokenStream,
    expected: TokenType,
    line: usize,
) -> Result<(), AssemblyError> {
    let found = stream.consume().token_type;
    if found == expected {
        Ok(())
    } else {
        Err(AssemblyError::new(
            AssemblyErrorKind::Syntax,
            line,
            format!("expected {:?}, found {:?}", expected, found),
        ))
    }
}
