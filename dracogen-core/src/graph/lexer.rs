use crate::foundation::error::{DracoError, DracoResult};

/// Byte that brackets a transition label in the NFA dump.
pub(crate) const LABEL_DELIMITER: u8 = 0x01;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// 1-based line the token starts on.
    pub(crate) line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// Alphanumeric run; single spaces between alphanumerics are part of it ("Start State").
    Ident(String),
    /// Text between two delimiter bytes.
    Label(String),

    Colon,
    Comma,
    Arrow,
    LParen,
    RParen,
    LBracket,
    RBracket,

    Eof,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'|' | b'\n' | b'\r' | b'\t')
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub(crate) fn lex(input: &str) -> DracoResult<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut line = 1usize;

    loop {
        while i < bytes.len() && is_space(bytes[i]) {
            if bytes[i] == b'\n' {
                line += 1;
            }
            i += 1;
        }
        let Some(&b) = bytes.get(i) else {
            out.push(Token {
                kind: TokenKind::Eof,
                line,
            });
            return Ok(out);
        };

        let start_line = line;
        let kind = match b {
            b':' => TokenKind::Colon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'-' if bytes.get(i + 1) == Some(&b'>') => {
                i += 1;
                TokenKind::Arrow
            }
            b'-' => {
                // negative object ids, or a lone dash
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                out.push(Token {
                    kind: TokenKind::Ident(input[start..i].to_owned()),
                    line,
                });
                continue;
            }
            LABEL_DELIMITER => {
                let start = i + 1;
                let Some(len) = bytes[start..].iter().position(|&c| c == LABEL_DELIMITER) else {
                    return Err(DracoError::parse(line, "unterminated transition label"));
                };
                let label = &input[start..start + len];
                line += label.matches('\n').count();
                i = start + len;
                TokenKind::Label(label.to_owned())
            }
            b if is_ident(b) => {
                let start = i;
                while i < bytes.len() {
                    let spaced_word =
                        bytes[i] == b' ' && bytes.get(i + 1).is_some_and(|&c| is_ident(c));
                    if is_ident(bytes[i]) || spaced_word {
                        i += 1;
                    } else {
                        break;
                    }
                }
                out.push(Token {
                    kind: TokenKind::Ident(input[start..i].to_owned()),
                    line,
                });
                continue;
            }
            _ => {
                let ch = input[i..].chars().next().unwrap_or('?');
                return Err(DracoError::parse(line, format!("unexpected character {ch:?}")));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            line: start_line,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/lexer.rs"]
mod tests;
