use crate::{LexError, Span, Token, TokenKind, token::InnerToken};

// ---

type InnerLexer<'s> = logos::Lexer<'s, InnerToken>;

/// Streaming tokenizer over a selector source.
///
/// Yields tokens in source order, finishing with a single [`TokenKind::End`].
/// After the first error the lexer is exhausted.
pub struct Lexer<'s> {
    inner: InnerLexer<'s>,
    done: bool,
}

impl<'s> Lexer<'s> {
    #[inline]
    pub fn new(source: &'s str) -> Self {
        Self {
            inner: InnerLexer::new(source),
            done: false,
        }
    }

    fn unexpected_char(&self, span: Span) -> LexError {
        let ch = self.inner.source()[span.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::UnexpectedChar { ch, offset: span.start }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Token<'s>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(token) = self.inner.next() else {
            self.done = true;
            return Some(Ok(Token::end(self.inner.source().len())));
        };

        let span = Span::from(self.inner.span());
        let slice = self.inner.slice();

        let kind = match token {
            Ok(InnerToken::And) => TokenKind::And,
            Ok(InnerToken::Or) => TokenKind::Or,
            Ok(InnerToken::NotEquals) => TokenKind::NotEquals,
            Ok(InnerToken::Not) => TokenKind::Not,
            Ok(InnerToken::Equals) => TokenKind::Equals,
            Ok(InnerToken::LParen) => TokenKind::LParen,
            Ok(InnerToken::RParen) => TokenKind::RParen,
            Ok(InnerToken::Label) => TokenKind::Label(slice),
            Ok(InnerToken::Quoted) => TokenKind::StringLiteral(&slice[1..slice.len() - 1]),
            Ok(InnerToken::Unterminated) => {
                self.done = true;
                return Some(Err(LexError::UnterminatedLiteral {
                    literal: slice.to_owned(),
                    offset: span.start,
                }));
            }
            Err(()) => {
                self.done = true;
                return Some(Err(self.unexpected_char(span)));
            }
        };

        Some(Ok(Token::new(kind, span)))
    }
}

// ---

/// Splits `source` into tokens, the last of which is always [`TokenKind::End`].
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests;
