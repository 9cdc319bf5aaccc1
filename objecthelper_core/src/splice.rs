//! Replacing a method inside source text with generated code.

use crate::{
    error::{ObjectHelperError, Result},
    types::MethodDescriptor,
};
use std::{iter::Peekable, str::CharIndices};
use tracing::debug;

/// Source text with whitespace runs collapsed to one space, plus the byte
/// offset in the original text of every byte in `text`.
struct Normalized {
    text: String,
    offsets: Vec<usize>,
}

fn normalize_whitespace(source: &str) -> Normalized {
    let mut text = String::with_capacity(source.len());
    let mut offsets = Vec::with_capacity(source.len());
    let mut in_whitespace = false;

    for (offset, c) in source.char_indices() {
        if c.is_whitespace() {
            if !in_whitespace {
                text.push(' ');
                offsets.push(offset);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        text.push(c);
        offsets.extend((0..c.len_utf8()).map(|i| offset + i));
    }

    Normalized { text, offsets }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Byte offsets (in the original text) of the declaration start and of the
/// body's opening brace.
fn find_declaration(source: &str, declaration: &str) -> Option<(usize, usize)> {
    let normalized = normalize_whitespace(source);
    normalized
        .text
        .match_indices(declaration)
        .find_map(|(idx, matched)| {
            let preceded_by_identifier = normalized.text[..idx]
                .chars()
                .next_back()
                .is_some_and(is_identifier_char);
            let end = idx + matched.len();
            let opens_body = normalized.text[end..].trim_start().starts_with('{');
            if preceded_by_identifier || !opens_body {
                return None;
            }
            let start = normalized.offsets[idx];
            let after = normalized.offsets[end - 1] + 1;
            let open = after + source[after..].find('{')?;
            Some((start, open))
        })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

fn skip_if_next(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> bool {
    if chars.peek().is_some_and(|(_, c)| *c == expected) {
        chars.next();
        true
    } else {
        false
    }
}

/// Offset of the `}` closing the block opened at `open`, ignoring braces in
/// string or char literals and comments.
fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let mut chars = source[open..].char_indices().peekable();
    let mut state = Lexeme::Code;
    let mut depth = 0usize;

    while let Some((idx, c)) = chars.next() {
        state = match state {
            Lexeme::Code => match c {
                '{' => {
                    depth += 1;
                    Lexeme::Code
                }
                '}' => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(open + idx);
                    }
                    Lexeme::Code
                }
                '"' => Lexeme::StringLiteral,
                '\'' => Lexeme::CharLiteral,
                '/' if skip_if_next(&mut chars, '/') => Lexeme::LineComment,
                '/' if skip_if_next(&mut chars, '*') => Lexeme::BlockComment,
                _ => Lexeme::Code,
            },
            Lexeme::LineComment if c == '\n' => Lexeme::Code,
            Lexeme::BlockComment if c == '*' && skip_if_next(&mut chars, '/') => Lexeme::Code,
            Lexeme::StringLiteral | Lexeme::CharLiteral if c == '\\' => {
                chars.next();
                state
            }
            Lexeme::StringLiteral if c == '"' => Lexeme::Code,
            Lexeme::CharLiteral if c == '\'' => Lexeme::Code,
            unchanged => unchanged,
        };
    }

    None
}

/// Replaces `method` (declaration through closing brace) in `source_text`
/// with `generated`.
///
/// The declaration is matched on its text before the body with whitespace
/// runs treated as equal, so reformatted signatures still match.
pub fn replace_method(source_text: &str, method: &MethodDescriptor, generated: &str) -> Result<String> {
    let declaration = normalize_whitespace(&method.signature()).text.trim().to_string();
    if declaration.is_empty() {
        return Err(ObjectHelperError::insertion_point(format!(
            "method `{}` has no declaration text",
            method.name
        )));
    }

    let (start, open) = find_declaration(source_text, &declaration).ok_or_else(|| {
        ObjectHelperError::insertion_point(format!("declaration `{declaration}` not found"))
    })?;
    let close = matching_brace(source_text, open).ok_or_else(|| {
        ObjectHelperError::insertion_point(format!("body of `{}` is not balanced", method.name))
    })?;
    debug!(method = %method.name, start, end = close + 1, "Splicing generated method");

    let mut spliced = String::with_capacity(source_text.len() + generated.len());
    spliced.push_str(&source_text[..start]);
    spliced.push_str(generated);
    spliced.push_str(&source_text[close + 1..]);
    Ok(spliced)
}
