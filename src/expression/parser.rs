use crate::data::value::Value;
use crate::expression::ast::{BinaryOp, Expr, UnaryOp};
use crate::expression::syntax::SyntaxError;
use crate::expression::lexer::{Span, Token, TokenKind, lex};

/// Deepest allowed parenthesis/unary nesting, and tallest allowed expression tree.
pub(crate) const MAX_DEPTH: usize = 128;

pub(crate) fn parse_expr(src: &str) -> Result<Expr, SyntaxError> {
    let tokens = lex(src)?;
    let mut p = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = p.parse_or()?;
    p.expect(TokenKind::Eof)?;
    Ok(node.expr)
}

/// A parsed subtree and its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(SyntaxError::new(
                self.span().start,
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the first matching operator token and return its binary op.
    fn consume_any(&mut self, ops: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let found = ops
            .iter()
            .find(|(kind, _)| self.peek().kind == *kind)
            .map(|(_, op)| *op)?;
        self.bump();
        Some(found)
    }

    fn too_deep(at: usize) -> SyntaxError {
        SyntaxError::new(at, format!("expression nests deeper than {MAX_DEPTH} levels"))
    }

    /// Enter one level of parenthesis or unary nesting.
    fn descend(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Self::too_deep(self.span().start));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn grow(expr: Expr, height: usize, at: usize) -> Result<Node, SyntaxError> {
        if height > MAX_DEPTH {
            return Err(Self::too_deep(at));
        }
        Ok(Node { expr, height })
    }

    fn binary_level(
        &mut self,
        ops: &[(TokenKind, BinaryOp)],
        next: fn(&mut Self) -> Result<Node, SyntaxError>,
    ) -> Result<Node, SyntaxError> {
        let mut node = next(self)?;
        loop {
            let at = self.span().start;
            let Some(op) = self.consume_any(ops) else {
                return Ok(node);
            };
            let right = next(self)?;
            let height = node.height.max(right.height) + 1;
            node = Self::grow(Expr::binary(op, node.expr, right.expr), height, at)?;
        }
    }

    fn parse_or(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(&[(TokenKind::OrOr, BinaryOp::Or)], Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(&[(TokenKind::AndAnd, BinaryOp::And)], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(
            &[(TokenKind::EqEq, BinaryOp::Eq), (TokenKind::Ne, BinaryOp::Ne)],
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(
            &[
                (TokenKind::Lt, BinaryOp::Lt),
                (TokenKind::Le, BinaryOp::Le),
                (TokenKind::Gt, BinaryOp::Gt),
                (TokenKind::Ge, BinaryOp::Ge),
            ],
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(
            &[
                (TokenKind::Plus, BinaryOp::Add),
                (TokenKind::Minus, BinaryOp::Sub),
            ],
            Self::parse_factor,
        )
    }

    fn parse_factor(&mut self) -> Result<Node, SyntaxError> {
        self.binary_level(
            &[
                (TokenKind::Star, BinaryOp::Mul),
                (TokenKind::Slash, BinaryOp::Div),
                (TokenKind::Percent, BinaryOp::Rem),
            ],
            Self::parse_unary,
        )
    }

    fn parse_unary(&mut self) -> Result<Node, SyntaxError> {
        let at = self.span().start;
        let op = if self.consume(TokenKind::Minus) {
            UnaryOp::Neg
        } else if self.consume(TokenKind::Bang) {
            UnaryOp::Not
        } else {
            return self.parse_primary();
        };
        self.descend()?;
        let inner = self.parse_unary()?;
        self.ascend();
        Self::grow(Expr::Unary(op, Box::new(inner.expr)), inner.height + 1, at)
    }

    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let t = self.bump();
        let expr = match t.kind {
            TokenKind::Number(v) => Expr::Literal(Value::Number(v)),
            TokenKind::Str(s) => Expr::Literal(Value::Text(s)),
            TokenKind::True => Expr::Literal(Value::Bool(true)),
            TokenKind::False => Expr::Literal(Value::Bool(false)),
            TokenKind::Null => Expr::Literal(Value::Empty),
            TokenKind::Ident(name) => Expr::Field(name),
            TokenKind::LParen => {
                self.descend()?;
                let inner = self.parse_or()?;
                self.ascend();
                self.expect(TokenKind::RParen)?;
                return Ok(inner);
            }
            other => {
                return Err(SyntaxError::new(
                    t.span.start,
                    format!("expected expression, found {other:?}"),
                ));
            }
        };
        Ok(Node::leaf(expr))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/parser.rs"]
mod tests;
