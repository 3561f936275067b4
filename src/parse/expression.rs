//! Shared linear/quadratic expression parser (spec §4.4 "Expression parser").
//!
//! Used by both the objective and constraint section processors. Matches,
//! in priority order, the longest pattern it can at the current cursor;
//! returns as soon as nothing matches, leaving the cursor at the first
//! unconsumed token for the caller to verify.

use crate::builder::ModelBuilder;
use crate::error::{LpError, LpResult, Position};
use crate::model::{Expression, LinearTerm, QuadraticTerm};
use crate::token::{ProcessedToken, Spanned};

fn peek<'t>(tokens: &'t [Spanned<ProcessedToken>], i: usize) -> Option<&'t ProcessedToken> {
    tokens.get(i).map(|(_, t)| t)
}

fn pos_at(tokens: &[Spanned<ProcessedToken>], i: usize) -> Position {
    tokens.get(i).map(|(p, _)| *p).or_else(|| tokens.last().map(|(p, _)| *p)).unwrap_or_default()
}

/// Parse a single expression starting at `*i`, advancing it past every
/// consumed token.
///
/// # Errors
/// Returns [`LpError::Structural`] for a mismatched quadratic bracket or a
/// missing `/2` trailer after an objective quadratic block, and
/// [`LpError::Semantic`] for a quadratic exponent other than 2.
pub fn parse_expression(tokens: &[Spanned<ProcessedToken>], i: &mut usize, builder: &mut ModelBuilder, is_objective: bool) -> LpResult<Expression> {
    let mut expr = Expression::default();

    if let Some(ProcessedToken::ConstraintLabel(name)) = peek(tokens, *i) {
        expr.name = Some(name.clone());
        *i += 1;
    }

    loop {
        match (peek(tokens, *i), peek(tokens, *i + 1)) {
            (Some(ProcessedToken::Constant(c)), Some(ProcessedToken::VariableId(name))) => {
                let var = builder.intern(name);
                expr.linear.push(LinearTerm { coefficient: *c, var });
                *i += 2;
                continue;
            }
            (Some(ProcessedToken::VariableId(name)), _) => {
                let var = builder.intern(name);
                expr.linear.push(LinearTerm { coefficient: 1.0, var });
                *i += 1;
                continue;
            }
            (Some(ProcessedToken::BracketOpen), _) => {
                *i += 1;
                parse_quadratic_block(tokens, i, builder, &mut expr)?;
                let close_pos = pos_at(tokens, *i);
                match peek(tokens, *i) {
                    Some(ProcessedToken::BracketClose) => *i += 1,
                    _ => return Err(LpError::structural(close_pos, "unterminated quadratic block: expected ']'")),
                }
                if is_objective {
                    let slash_pos = pos_at(tokens, *i);
                    match (peek(tokens, *i), peek(tokens, *i + 1)) {
                        (Some(ProcessedToken::Slash), Some(ProcessedToken::Constant(v))) if (*v - 2.0).abs() < f64::EPSILON => {
                            *i += 2;
                        }
                        _ => return Err(LpError::structural(slash_pos, "objective quadratic block must be followed by '/2'")),
                    }
                }
                continue;
            }
            (Some(ProcessedToken::Constant(c)), _) => {
                expr.offset = *c;
                *i += 1;
                continue;
            }
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses the body of a `[ ... ]` quadratic block, leaving `*i` positioned
/// at the closing bracket (or the first token that fails every pattern).
fn parse_quadratic_block(tokens: &[Spanned<ProcessedToken>], i: &mut usize, builder: &mut ModelBuilder, expr: &mut Expression) -> LpResult<()> {
    loop {
        let (t0, t1, t2, t3) = (peek(tokens, *i), peek(tokens, *i + 1), peek(tokens, *i + 2), peek(tokens, *i + 3));
        match (t0, t1, t2, t3) {
            (Some(ProcessedToken::Constant(c)), Some(ProcessedToken::VariableId(name)), Some(ProcessedToken::Caret), Some(ProcessedToken::Constant(exp))) => {
                check_exponent(tokens, *i + 3, *exp)?;
                let var = builder.intern(name);
                expr.quadratic.push(QuadraticTerm { coefficient: *c, var1: var, var2: var });
                *i += 4;
            }
            (Some(ProcessedToken::VariableId(name)), Some(ProcessedToken::Caret), Some(ProcessedToken::Constant(exp)), _) => {
                check_exponent(tokens, *i + 2, *exp)?;
                let var = builder.intern(name);
                expr.quadratic.push(QuadraticTerm { coefficient: 1.0, var1: var, var2: var });
                *i += 3;
            }
            (Some(ProcessedToken::Constant(c)), Some(ProcessedToken::VariableId(n1)), Some(ProcessedToken::Asterisk), Some(ProcessedToken::VariableId(n2))) => {
                let var1 = builder.intern(n1);
                let var2 = builder.intern(n2);
                expr.quadratic.push(QuadraticTerm { coefficient: *c, var1, var2 });
                *i += 4;
            }
            (Some(ProcessedToken::VariableId(n1)), Some(ProcessedToken::Asterisk), Some(ProcessedToken::VariableId(n2)), _) => {
                let var1 = builder.intern(n1);
                let var2 = builder.intern(n2);
                expr.quadratic.push(QuadraticTerm { coefficient: 1.0, var1, var2 });
                *i += 3;
            }
            _ => return Ok(()),
        }
    }
}

fn check_exponent(tokens: &[Spanned<ProcessedToken>], pos_index: usize, exp: f64) -> LpResult<()> {
    if (exp - 2.0).abs() > f64::EPSILON {
        return Err(LpError::semantic(pos_at(tokens, pos_index), format!("quadratic exponent must be 2, found {exp}")));
    }
    Ok(())
}
