use crate::expression::syntax::SyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Number(f64),
    Str(String),
    True,
    False,
    Null,
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    EqEq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    AndAnd,
    OrOr,
    Eof,
}

/// Split an expression into tokens, ending with [`TokenKind::Eof`] at `input.len()`.
pub(crate) fn lex(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut cursor = Cursor { src: input, pos: 0 };
    let mut out = Vec::new();
    loop {
        cursor.eat_while(char::is_whitespace);
        let start = cursor.pos;
        let Some(c) = cursor.peek() else {
            out.push(Token {
                kind: TokenKind::Eof,
                span: Span { start, end: start },
            });
            return Ok(out);
        };
        let leading_dot = c == '.' && cursor.peek2().is_some_and(|d| d.is_ascii_digit());
        let kind = if c.is_ascii_digit() || leading_dot {
            cursor.number()?
        } else if c == '\'' || c == '"' {
            cursor.string(c)?
        } else if c.is_ascii_alphabetic() || c == '_' {
            cursor.word()
        } else {
            cursor.operator(c)?
        };
        out.push(Token {
            kind,
            span: Span {
                start,
                end: cursor.pos,
            },
        });
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Advance past every char matching `pred`; returns how many bytes were consumed.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.eat(&pred) {}
        self.pos - start
    }

    /// `12`, `1.5`, `.5`, with an optional `e[+-]digits` exponent.
    fn number(&mut self) -> Result<TokenKind, SyntaxError> {
        let start = self.pos;
        self.eat_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek2().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }
        let marker = self.pos;
        if self.eat(|c| c == 'e' || c == 'E') {
            self.eat(|c| c == '+' || c == '-');
            if self.eat_while(|c| c.is_ascii_digit()) == 0 {
                return Err(SyntaxError::new(marker, "exponent needs at least one digit"));
            }
        }
        self.src[start..self.pos]
            .parse()
            .map(TokenKind::Number)
            .map_err(|_| SyntaxError::new(start, "malformed number"))
    }

    /// Quoted text without escapes.
    fn string(&mut self, quote: char) -> Result<TokenKind, SyntaxError> {
        let open = self.pos;
        self.bump();
        let body = self.pos;
        self.eat_while(|c| c != quote);
        let text = self.src[body..self.pos].to_owned();
        if self.bump().is_none() {
            return Err(SyntaxError::new(open, "string is never closed"));
        }
        Ok(TokenKind::Str(text))
    }

    fn word(&mut self) -> TokenKind {
        let start = self.pos;
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        match &self.src[start..self.pos] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            name => TokenKind::Ident(name.to_owned()),
        }
    }

    fn operator(&mut self, c: char) -> Result<TokenKind, SyntaxError> {
        const PAIRS: [(&str, TokenKind); 6] = [
            ("&&", TokenKind::AndAnd),
            ("||", TokenKind::OrOr),
            ("==", TokenKind::EqEq),
            ("!=", TokenKind::Ne),
            ("<=", TokenKind::Le),
            (">=", TokenKind::Ge),
        ];
        let rest = self.rest();
        if let Some((text, kind)) = PAIRS.iter().find(|(text, _)| rest.starts_with(text)) {
            self.pos += text.len();
            return Ok(kind.clone());
        }
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '!' => TokenKind::Bang,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            other => {
                return Err(SyntaxError::new(self.pos, format!("unexpected character '{other}'")));
            }
        };
        self.bump();
        Ok(kind)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
