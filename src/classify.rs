//! Raw-token classifier (spec §4.2).
//!
//! Rewrites the flat raw-token sequence into processed tokens whose
//! categories are meaningful to the grammar: section headers, labels,
//! variable ids, signed constants, comparisons, and structural punctuation.
//! Comments, whitespace, and line boundaries were already dropped by the
//! lexer's `LINE_END`-skipping caller; here we additionally treat
//! `LINE_END` as insignificant, mirroring how the lexer discards comments.

use crate::error::{LpError, LpResult, Position};
use crate::model::{ComparisonOp, Sense};
use crate::token::{ProcessedToken, RawToken, SectionKind, Spanned};

/// One-token section keyword table (case-insensitive).
fn one_token_keyword(word: &str) -> Option<(SectionKind, Option<Sense>)> {
    match word.to_ascii_lowercase().as_str() {
        "minimize" | "minimise" | "minimum" | "min" => Some((SectionKind::Objective, Some(Sense::Minimize))),
        "maximize" | "maximise" | "maximum" | "max" => Some((SectionKind::Objective, Some(Sense::Maximize))),
        "st" | "s.t." | "s.t" => Some((SectionKind::Constraints, None)),
        "bounds" | "bound" => Some((SectionKind::Bounds, None)),
        "general" | "generals" | "gen" => Some((SectionKind::General, None)),
        "binary" | "binaries" | "bin" => Some((SectionKind::Binary, None)),
        "semi" => Some((SectionKind::SemiContinuous, None)),
        "sos" => Some((SectionKind::Sos, None)),
        "end" => Some((SectionKind::End, None)),
        _ => None,
    }
}

/// Two-token section keyword table (`subject to`, `such that`).
fn two_token_keyword(a: &str, b: &str) -> Option<(SectionKind, Option<Sense>)> {
    match (a.to_ascii_lowercase().as_str(), b.to_ascii_lowercase().as_str()) {
        ("subject", "to") | ("such", "that") => Some((SectionKind::Constraints, None)),
        _ => None,
    }
}

/// Three-token section keyword table (`semi` `-` `continuous`).
fn three_token_keyword(a: &str, b: &str) -> Option<(SectionKind, Option<Sense>)> {
    match (a.to_ascii_lowercase().as_str(), b.to_ascii_lowercase().as_str()) {
        ("semi", "continuous") => Some((SectionKind::SemiContinuous, None)),
        _ => None,
    }
}

fn is_word(word: &str, expected: &str) -> bool {
    word.eq_ignore_ascii_case(expected)
}

/// Classify a raw-token stream into processed tokens.
///
/// # Errors
/// Returns [`LpError::Classify`] when no production matches the tokens at
/// the current cursor, or when an `S`-prefixed SOS-type token carries a
/// digit other than 1 or 2.
pub fn classify(raw: &[Spanned<RawToken>]) -> LpResult<Vec<Spanned<ProcessedToken>>> {
    // Comments and whitespace were already dropped by the lexer; line
    // boundaries carry no grammatical meaning, so drop LINE_END here too.
    let tokens: Vec<Spanned<RawToken>> = raw.iter().filter(|(_, t)| !matches!(t, RawToken::LineEnd)).cloned().collect();

    #[inline]
    fn peek<'t>(tokens: &'t [Spanned<RawToken>], i: usize) -> Option<&'t RawToken> {
        tokens.get(i).map(|(_, t)| t)
    }

    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let pos = tokens[i].0;
        let tok = &tokens[i].1;

        if matches!(tok, RawToken::FileEnd) {
            break;
        }

        // --- Keyword recognition: longest match (3, then 2, then 1 token) wins.
        if let RawToken::String(a) = tok {
            if let (Some(RawToken::Minus), Some(RawToken::String(c))) = (peek(&tokens, i + 1), peek(&tokens, i + 2)) {
                if let Some((kind, sense)) = three_token_keyword(a, c) {
                    out.push((pos, ProcessedToken::SectionHeader { kind, sense }));
                    i += 3;
                    continue;
                }
            }
            if let Some(RawToken::String(b)) = peek(&tokens, i + 1) {
                if let Some((kind, sense)) = two_token_keyword(a, b) {
                    out.push((pos, ProcessedToken::SectionHeader { kind, sense }));
                    i += 2;
                    continue;
                }
            }
            if let Some((kind, sense)) = one_token_keyword(a) {
                out.push((pos, ProcessedToken::SectionHeader { kind, sense }));
                i += 1;
                continue;
            }
        }

        // --- Other productions, in priority order.
        match tok {
            RawToken::String(a) => {
                let is_colon_colon = matches!(peek(&tokens, i + 1), Some(RawToken::Colon)) && matches!(peek(&tokens, i + 2), Some(RawToken::Colon));
                if is_colon_colon {
                    let digit = a.chars().nth(1).and_then(|c| c.to_digit(10)).filter(|d| *d == 1 || *d == 2);
                    match digit {
                        Some(d) => {
                            out.push((pos, ProcessedToken::SosType(d as u8)));
                            i += 3;
                            continue;
                        }
                        None => return Err(LpError::classify(pos, format!("'{a}' is not a valid SOS type (expected S1 or S2)"))),
                    }
                }
                if matches!(peek(&tokens, i + 1), Some(RawToken::Colon)) {
                    out.push((pos, ProcessedToken::ConstraintLabel(a.clone())));
                    i += 2;
                    continue;
                }
                if is_word(a, "free") {
                    out.push((pos, ProcessedToken::Free));
                    i += 1;
                    continue;
                }
                if is_word(a, "infinity") || is_word(a, "inf") {
                    out.push((pos, ProcessedToken::Constant(f64::INFINITY)));
                    i += 1;
                    continue;
                }
                out.push((pos, ProcessedToken::VariableId(a.clone())));
                i += 1;
            }
            RawToken::Plus => match peek(&tokens, i + 1) {
                Some(RawToken::Number(v)) => {
                    out.push((pos, ProcessedToken::Constant(*v)));
                    i += 2;
                }
                Some(RawToken::BracketOpen) => {
                    out.push((pos, ProcessedToken::BracketOpen));
                    i += 2;
                }
                Some(RawToken::String(w)) if is_word(w, "infinity") || is_word(w, "inf") => {
                    out.push((pos, ProcessedToken::Constant(f64::INFINITY)));
                    i += 2;
                }
                _ => {
                    out.push((pos, ProcessedToken::Constant(1.0)));
                    i += 1;
                }
            },
            RawToken::Minus => match peek(&tokens, i + 1) {
                Some(RawToken::Number(v)) => {
                    out.push((pos, ProcessedToken::Constant(-*v)));
                    i += 2;
                }
                Some(RawToken::BracketOpen) => {
                    return Err(LpError::classify(pos, "a quadratic block may not be preceded by '-'"));
                }
                Some(RawToken::String(w)) if is_word(w, "infinity") || is_word(w, "inf") => {
                    out.push((pos, ProcessedToken::Constant(f64::NEG_INFINITY)));
                    i += 2;
                }
                _ => {
                    out.push((pos, ProcessedToken::Constant(-1.0)));
                    i += 1;
                }
            },
            RawToken::Number(v) => {
                out.push((pos, ProcessedToken::Constant(*v)));
                i += 1;
            }
            RawToken::BracketOpen => {
                out.push((pos, ProcessedToken::BracketOpen));
                i += 1;
            }
            RawToken::BracketClose => {
                out.push((pos, ProcessedToken::BracketClose));
                i += 1;
            }
            RawToken::Slash => {
                out.push((pos, ProcessedToken::Slash));
                i += 1;
            }
            RawToken::Asterisk => {
                out.push((pos, ProcessedToken::Asterisk));
                i += 1;
            }
            RawToken::Caret => {
                out.push((pos, ProcessedToken::Caret));
                i += 1;
            }
            RawToken::Less => {
                if matches!(peek(&tokens, i + 1), Some(RawToken::Equal)) {
                    out.push((pos, ProcessedToken::Comparison(ComparisonOp::Le)));
                    i += 2;
                } else {
                    out.push((pos, ProcessedToken::Comparison(ComparisonOp::Lt)));
                    i += 1;
                }
            }
            RawToken::Greater => {
                if matches!(peek(&tokens, i + 1), Some(RawToken::Equal)) {
                    out.push((pos, ProcessedToken::Comparison(ComparisonOp::Ge)));
                    i += 2;
                } else {
                    out.push((pos, ProcessedToken::Comparison(ComparisonOp::Gt)));
                    i += 1;
                }
            }
            RawToken::Equal => {
                out.push((pos, ProcessedToken::Comparison(ComparisonOp::Eq)));
                i += 1;
            }
            RawToken::Colon => return Err(LpError::classify(pos, "unexpected ':' with no preceding label")),
            RawToken::LineEnd | RawToken::FileEnd => unreachable!("filtered above"),
        }
    }

    Ok(out)
}

/// Fetch the position just past the last classified token, used by callers
/// that need to report "unexpected end of section" after an empty bucket.
pub fn eof_position(raw: &[Spanned<RawToken>]) -> Position {
    raw.last().map(|(p, _)| *p).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::source::StringSource;

    fn classify_str(input: &str) -> Vec<ProcessedToken> {
        let raw = Lexer::new(StringSource::new(input)).tokenize().unwrap();
        classify(&raw).unwrap().into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn sense_keywords() {
        assert_eq!(classify_str("minimize"), vec![ProcessedToken::SectionHeader { kind: SectionKind::Objective, sense: Some(Sense::Minimize) }]);
        assert_eq!(classify_str("MAX"), vec![ProcessedToken::SectionHeader { kind: SectionKind::Objective, sense: Some(Sense::Maximize) }]);
    }

    #[test]
    fn constraints_two_token_form() {
        assert_eq!(classify_str("subject to"), vec![ProcessedToken::SectionHeader { kind: SectionKind::Constraints, sense: None }]);
        assert_eq!(classify_str("such that"), vec![ProcessedToken::SectionHeader { kind: SectionKind::Constraints, sense: None }]);
        assert_eq!(classify_str("st"), vec![ProcessedToken::SectionHeader { kind: SectionKind::Constraints, sense: None }]);
    }

    #[test]
    fn semi_continuous_three_token_form() {
        assert_eq!(
            classify_str("semi-continuous"),
            vec![ProcessedToken::SectionHeader { kind: SectionKind::SemiContinuous, sense: None }]
        );
    }

    #[test]
    fn constraint_label_then_expression() {
        assert_eq!(classify_str("c1: x + y"), vec![
            ProcessedToken::ConstraintLabel("c1".to_owned()),
            ProcessedToken::VariableId("x".to_owned()),
            ProcessedToken::Constant(1.0),
            ProcessedToken::VariableId("y".to_owned()),
        ]);
    }

    #[test]
    fn implicit_signs() {
        assert_eq!(classify_str("x - y + 3"), vec![
            ProcessedToken::VariableId("x".to_owned()),
            ProcessedToken::Constant(-1.0),
            ProcessedToken::VariableId("y".to_owned()),
            ProcessedToken::Constant(3.0),
        ]);
    }

    #[test]
    fn sos_type_marker() {
        assert_eq!(classify_str("g1: S1:: x:1 y:2"), vec![
            ProcessedToken::ConstraintLabel("g1".to_owned()),
            ProcessedToken::SosType(1),
            ProcessedToken::ConstraintLabel("x".to_owned()),
            ProcessedToken::Constant(1.0),
            ProcessedToken::ConstraintLabel("y".to_owned()),
            ProcessedToken::Constant(2.0),
        ]);
    }

    #[test]
    fn free_and_infinity() {
        assert_eq!(classify_str("x free"), vec![ProcessedToken::VariableId("x".to_owned()), ProcessedToken::Free]);
        assert_eq!(classify_str("-infinity"), vec![ProcessedToken::Constant(f64::NEG_INFINITY)]);
    }

    #[test]
    fn comparisons() {
        assert_eq!(classify_str("<= >= < > ="), vec![
            ProcessedToken::Comparison(ComparisonOp::Le),
            ProcessedToken::Comparison(ComparisonOp::Ge),
            ProcessedToken::Comparison(ComparisonOp::Lt),
            ProcessedToken::Comparison(ComparisonOp::Gt),
            ProcessedToken::Comparison(ComparisonOp::Eq),
        ]);
    }

    #[test]
    fn minus_before_bracket_is_rejected() {
        let raw = Lexer::new(StringSource::new("o: -[ x^2 ]")).tokenize().unwrap();
        assert!(classify(&raw).is_err());
    }

    #[test]
    fn plus_before_bracket_drops_the_sign() {
        assert_eq!(classify_str("+[ x^2 ]"), vec![
            ProcessedToken::BracketOpen,
            ProcessedToken::VariableId("x".to_owned()),
            ProcessedToken::Caret,
            ProcessedToken::Constant(2.0),
            ProcessedToken::BracketClose,
        ]);
    }

    #[test]
    fn bad_sos_digit_is_classify_error() {
        let raw = Lexer::new(StringSource::new("g1: S3:: x:1")).tokenize().unwrap();
        assert!(classify(&raw).is_err());
    }
}
