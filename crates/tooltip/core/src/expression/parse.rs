//! `nom` parser for placeholder expressions.
//!
//! Precedence, lowest first:
//!
//! ```text
//! comparison  := additive (('<' | '>' | '<=' | '>=' | '==' | '!=') additive)*
//! additive    := term (('+' | '-') term)*
//! term        := unary (('*' | '/' | '%') unary)*
//! unary       := ('+' | '-') unary | power
//! power       := primary ('**' unary)?
//! primary     := '(' comparison ')' | number | ident | ident '(' args ')'
//! ```
//!
//! Trees are limited to [`MAX_EXPRESSION_DEPTH`] levels, so hostile input
//! becomes a [`ParseError`] instead of exhausting the stack.

use nom::Parser;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map_res, not, opt, recognize, value},
    error::{Error as NomError, ErrorKind},
    multi::separated_list0,
    number::complete::recognize_float,
    sequence::{delimited, pair, terminated},
};

use super::{BinOp, Expr, UnaryOp};

/// Maximum nesting of an expression tree (signs, parentheses, operator chains).
pub const MAX_EXPRESSION_DEPTH: usize = 64;

/// Error produced when placeholder text is not a well-formed expression.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} at offset {offset}")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    fn from_nom(source: &str, error: NomError<&str>) -> Self {
        let offset = source.len() - error.input.len();
        let message = match error.code {
            ErrorKind::TooLarge => {
                format!("expression nested deeper than {MAX_EXPRESSION_DEPTH} levels")
            }
            _ => match error.input.chars().next() {
                Some(ch) => format!("unexpected '{ch}'"),
                None => "unexpected end of input".to_string(),
            },
        };
        Self::new(message, offset)
    }
}

type PResult<'a, O> = IResult<&'a str, O>;

/// Parses `source` into an [`Expr`].
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::new("empty expression", 0));
    }

    match comparison(source, 0) {
        Ok(("", node)) => Ok(node.expr),
        Ok((rest, _)) => Err(ParseError::from_nom(
            source,
            NomError::new(rest, ErrorKind::Eof),
        )),
        Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
            Err(ParseError::from_nom(source, error))
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(ParseError::new("incomplete expression", source.len()))
        }
    }
}

// ============================================================================
// Tree Nodes
// ============================================================================

/// Subtree together with its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    fn unary<'a>(
        input: &'a str,
        op: UnaryOp,
        operand: Node,
    ) -> Result<Self, nom::Err<NomError<&'a str>>> {
        let height = checked_height(input, operand.height)?;
        Ok(Self {
            expr: Expr::Unary {
                op,
                operand: Box::new(operand.expr),
            },
            height,
        })
    }

    fn binary<'a>(
        input: &'a str,
        op: BinOp,
        left: Node,
        right: Node,
    ) -> Result<Self, nom::Err<NomError<&'a str>>> {
        let height = checked_height(input, left.height.max(right.height))?;
        Ok(Self {
            expr: Expr::Binary {
                op,
                left: Box::new(left.expr),
                right: Box::new(right.expr),
            },
            height,
        })
    }
}

/// Height of a node above children of height `child`, or a failure past the limit.
fn checked_height(input: &str, child: usize) -> Result<usize, nom::Err<NomError<&str>>> {
    let height = child + 1;
    if height > MAX_EXPRESSION_DEPTH {
        return Err(too_deep(input));
    }
    Ok(height)
}

fn too_deep(input: &str) -> nom::Err<NomError<&str>> {
    nom::Err::Failure(NomError::new(input, ErrorKind::TooLarge))
}

// ============================================================================
// Grammar
// ============================================================================

fn comparison(input: &str, depth: usize) -> PResult<'_, Node> {
    let operator = alt((
        value(BinOp::Le, tag("<=")),
        value(BinOp::Ge, tag(">=")),
        value(BinOp::Eq, tag("==")),
        value(BinOp::Ne, tag("!=")),
        value(BinOp::Lt, char('<')),
        value(BinOp::Gt, char('>')),
    ));
    fold_left(input, depth, additive, ws(operator))
}

fn additive(input: &str, depth: usize) -> PResult<'_, Node> {
    let operator = alt((value(BinOp::Add, char('+')), value(BinOp::Sub, char('-'))));
    fold_left(input, depth, term, ws(operator))
}

fn term(input: &str, depth: usize) -> PResult<'_, Node> {
    let operator = alt((
        value(BinOp::Mul, terminated(char('*'), not(char('*')))),
        value(BinOp::Div, char('/')),
        value(BinOp::Mod, char('%')),
    ));
    fold_left(input, depth, unary, ws(operator))
}

/// Parses a left-associative chain: `a-b-c` becomes `(a-b)-c`.
fn fold_left<'a, P>(
    input: &'a str,
    depth: usize,
    operand: fn(&'a str, usize) -> PResult<'a, Node>,
    mut operator: P,
) -> PResult<'a, Node>
where
    P: Parser<&'a str, Output = BinOp, Error = NomError<&'a str>>,
{
    let (mut input, mut left) = operand(input, depth)?;
    loop {
        let (next, op) = match operator.parse(input) {
            Ok(parsed) => parsed,
            Err(nom::Err::Error(_)) => break,
            Err(error) => return Err(error),
        };
        let (next, right) = operand(next, depth)?;
        left = Node::binary(input, op, left, right)?;
        input = next;
    }
    Ok((input, left))
}

/// Parses sign chains like `--x`; each level counts against the depth limit.
fn unary(input: &str, depth: usize) -> PResult<'_, Node> {
    if depth >= MAX_EXPRESSION_DEPTH {
        return Err(too_deep(input));
    }
    let depth = depth + 1;

    let sign = alt((value(UnaryOp::Neg, char('-')), value(UnaryOp::Plus, char('+'))));
    if let Ok((rest, op)) = ws(sign).parse(input) {
        let (rest, operand) = unary(rest, depth)?;
        return Ok((rest, Node::unary(input, op, operand)?));
    }
    power(input, depth)
}

fn power(input: &str, depth: usize) -> PResult<'_, Node> {
    let (input, base) = primary(input, depth)?;
    if let Ok((rest, _)) = ws(tag("**")).parse(input) {
        let (rest, exponent) = unary(rest, depth)?;
        return Ok((rest, Node::binary(input, BinOp::Pow, base, exponent)?));
    }
    Ok((input, base))
}

fn primary(input: &str, depth: usize) -> PResult<'_, Node> {
    if let Ok((rest, _)) = ws_char('(').parse(input) {
        let (rest, inner) = comparison(rest, depth)?;
        let (rest, _) = ws_char(')').parse(rest)?;
        return Ok((rest, inner));
    }
    if let Ok(parsed) = number(input) {
        return Ok(parsed);
    }
    ident_or_call(input, depth)
}

fn number(input: &str) -> PResult<'_, Node> {
    let (input, n) =
        ws(map_res(recognize_float, |text: &str| text.parse::<f64>())).parse(input)?;
    Ok((input, Node::leaf(Expr::Number(n))))
}

/// Parses either a name or a call; a name followed by `(...)` is a call.
fn ident_or_call<'a>(input: &'a str, depth: usize) -> PResult<'a, Node> {
    let (input, name) = ws(identifier).parse(input)?;
    let (input, args) = opt(delimited(
        ws_char('('),
        separated_list0(ws_char(','), |i: &'a str| comparison(i, depth)),
        ws_char(')'),
    ))
    .parse(input)?;

    let node = match args {
        Some(args) => {
            let tallest = args.iter().map(|arg| arg.height).max().unwrap_or(0);
            let height = checked_height(input, tallest)?;
            Node {
                expr: Expr::Call {
                    name,
                    args: args.into_iter().map(|arg| arg.expr).collect(),
                },
                height,
            }
        }
        None => Node::leaf(Expr::Ident(name)),
    };
    Ok((input, node))
}

// ============================================================================
// Lexical Helpers
// ============================================================================

/// Parses names (`[A-Za-z_][A-Za-z0-9_.]*`); dots stay part of the name.
fn identifier(input: &str) -> PResult<'_, String> {
    let (input, name) = recognize(pair(
        take_while1(is_ident_start),
        take_while(is_ident_continue),
    ))
    .parse(input)?;
    Ok((input, name.to_string()))
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '.' || c.is_ascii_alphanumeric()
}

/// Wraps a parser with leading/trailing whitespace skipping.
fn ws<'a, P>(
    parser: P,
) -> impl Parser<&'a str, Output = <P as Parser<&'a str>>::Output, Error = NomError<&'a str>>
where
    P: Parser<&'a str, Error = NomError<&'a str>>,
{
    delimited(multispace0, parser, multispace0)
}

fn ws_char<'a>(c: char) -> impl Parser<&'a str, Output = char, Error = NomError<&'a str>> {
    ws(char(c))
}
