//! Recursive descent parser.
//!
//! ```text
//! expression := or
//! or         := and ( '||' and )*
//! and        := unary ( '&&' unary )*
//! unary      := '!' unary | primary
//! primary    := '(' expression ')' | comparison
//! comparison := label [ ( '=' | '!=' ) ( label | string ) ]
//! ```
//!
//! Nesting of groups, negations and operator chains is limited to
//! [`MAX_DEPTH`] levels, which also bounds the depth of the resulting tree.

use crate::{Expected, Expr, SyntaxError, Token, TokenKind};

// ---

/// Maximum nesting depth of an expression.
pub const MAX_DEPTH: usize = 256;

/// Builds an expression from a token sequence produced by [`crate::tokenize`].
///
/// The whole sequence must form exactly one expression. A missing trailing
/// [`TokenKind::End`] is tolerated.
pub fn parse(tokens: &[Token<'_>]) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;
    parser.finish()?;
    Ok(expr)
}

// ---

struct Parser<'t, 's> {
    tokens: &'t [Token<'s>],
    pos: usize,
    depth: usize,
    end: Token<'s>,
}

impl<'t, 's> Parser<'t, 's> {
    fn new(tokens: &'t [Token<'s>]) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
        Self {
            tokens,
            pos: 0,
            depth: 0,
            end: Token::end(end),
        }
    }

    #[inline]
    fn peek(&self) -> Token<'s> {
        self.tokens.get(self.pos).copied().unwrap_or(self.end)
    }

    #[inline]
    fn bump(&mut self) -> Token<'s> {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind<'_>) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn descend(&mut self, token: Token<'s>) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(unexpected(Expected::ShallowerNesting, token));
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.or()
    }

    // each chained operator adds a level to the left spine of the tree
    fn or(&mut self) -> Result<Expr, SyntaxError> {
        let depth = self.depth;
        let mut lhs = self.and()?;
        while self.peek().kind == TokenKind::Or {
            let token = self.bump();
            self.descend(token)?;
            let rhs = self.and()?;
            lhs = lhs.or(rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expr, SyntaxError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        while self.peek().kind == TokenKind::And {
            let token = self.bump();
            self.descend(token)?;
            let rhs = self.unary()?;
            lhs = lhs.and(rhs);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.peek().kind != TokenKind::Not {
            return self.primary();
        }
        let token = self.bump();
        self.descend(token)?;
        let arg = self.unary()?;
        self.depth -= 1;
        Ok(!arg)
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.bump();
        match token.kind {
            TokenKind::LParen => {
                self.descend(token)?;
                let expr = self.expression()?;
                self.depth -= 1;
                let close = self.bump();
                if close.kind != TokenKind::RParen {
                    return Err(unexpected(Expected::ClosingParen, close));
                }
                Ok(expr)
            }
            TokenKind::Label(label) => self.comparison(label),
            _ => Err(unexpected(Expected::Operand, token)),
        }
    }

    fn comparison(&mut self, label: &str) -> Result<Expr, SyntaxError> {
        if self.eat(TokenKind::Equals) {
            Ok(Expr::equals(label, self.value()?))
        } else if self.eat(TokenKind::NotEquals) {
            Ok(!Expr::equals(label, self.value()?))
        } else {
            Ok(Expr::exists(label))
        }
    }

    fn value(&mut self) -> Result<&'s str, SyntaxError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Label(value) | TokenKind::StringLiteral(value) => Ok(value),
            _ => Err(unexpected(Expected::Value, token)),
        }
    }

    fn finish(&mut self) -> Result<(), SyntaxError> {
        let token = self.peek();
        match token.kind {
            TokenKind::End => Ok(()),
            _ => Err(unexpected(Expected::End, token)),
        }
    }
}

fn unexpected(expected: Expected, token: Token<'_>) -> SyntaxError {
    SyntaxError {
        expected,
        found: token.kind.to_string(),
        position: token.span.start,
    }
}
