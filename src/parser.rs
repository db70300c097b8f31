use crate::ast::Ast;
use crate::error::Error;
use crate::token::{Token, TokenKind};
use std::mem;
use std::vec::IntoIter;

/// Deepest accepted nesting of parenthesis and function operands. The parser
/// recurses once per level.
pub const MAX_DEPTH: usize = 256;

/// Longest accepted token sequence. Operator chains such as `1 + 1 + ...`
/// are parsed in a loop, but they still build trees as deep as half their
/// length, and cloning, comparing or dropping those trees walks them
/// recursively.
pub const MAX_TOKENS: usize = 4096;

/// Parse a token sequence into a single `Ast`.
///
/// The grammar is LL(1):
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := factor (('*' | '/') factor)*
/// factor  := primary ('^' primary)*
/// primary := NUMBER | VARIABLE | FUNCTION expr | '(' expr ')'
/// ```
///
/// All binary operators, `^` included, associate to the left. A function
/// takes the whole expression following it as operand, so `sin x + 1` is
/// `sin(x + 1)`.
pub fn parse(tokens: Vec<Token>) -> Result<Ast, Error> {
    Parser::new(tokens)?.parse()
}

/// A recursive descent parser with one token of lookahead
pub struct Parser {
    tokens: IntoIter<Token>,
    lookahead: Option<Token>,
    depth: usize,
}

impl Parser {
    /// Create a parser, consuming the first token as lookahead
    pub fn new(tokens: Vec<Token>) -> Result<Self, Error> {
        if tokens.len() > MAX_TOKENS {
            return Err(Error::ParseError(format!(
                "expression too long: {} tokens, at most {} allowed",
                tokens.len(),
                MAX_TOKENS
            )));
        }
        let mut tokens = tokens.into_iter();
        let lookahead = tokens.next();
        if lookahead.is_none() {
            return Err(Error::ParseError("empty expression".into()));
        }
        Ok(Self {
            tokens,
            lookahead,
            depth: 0,
        })
    }

    /// Parse the whole token sequence. Tokens left over after a complete
    /// expression are an error.
    pub fn parse(mut self) -> Result<Ast, Error> {
        let ast = self.expr()?;
        match self.lookahead {
            None => Ok(ast),
            Some(token) => Err(Error::ParseError(format!(
                "unexpected {} '{}' after the end of the expression",
                token.kind(),
                token
            ))),
        }
    }

    fn expr(&mut self) -> Result<Ast, Error> {
        let mut node = self.term()?;
        while let Some(op) = self.next_if(&[TokenKind::Plus, TokenKind::Minus]) {
            let right = self.term()?;
            node = Ast::binary(op, node, right);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Ast, Error> {
        let mut node = self.factor()?;
        while let Some(op) = self.next_if(&[TokenKind::Multiply, TokenKind::Divide]) {
            let right = self.factor()?;
            node = Ast::binary(op, node, right);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<Ast, Error> {
        let mut node = self.primary()?;
        while let Some(op) = self.next_if(&[TokenKind::Power]) {
            let right = self.primary()?;
            node = Ast::binary(op, node, right);
        }
        Ok(node)
    }

    fn primary(&mut self) -> Result<Ast, Error> {
        let token = self.advance().ok_or_else(|| {
            Error::ParseError("expected an operand, found end of input".into())
        })?;
        match token.kind() {
            TokenKind::Number | TokenKind::Variable => Ok(Ast::leaf(token)),
            TokenKind::Function => {
                self.enter(&token)?;
                let arg = self.expr()?;
                self.depth -= 1;
                Ok(Ast::function(token, arg))
            }
            TokenKind::LeftParen => {
                self.enter(&token)?;
                let inner = self.expr()?;
                self.expect(TokenKind::RightParen)?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => Err(Error::ParseError(format!(
                "expected an operand, found '{}'",
                token
            ))),
        }
    }

    /// Go one nesting level down, at `token`
    fn enter(&mut self, token: &Token) -> Result<(), Error> {
        if self.depth == MAX_DEPTH {
            return Err(Error::ParseError(format!(
                "'{}' is nested deeper than {} levels",
                token, MAX_DEPTH
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// Move to the next token, returning the previous lookahead
    fn advance(&mut self) -> Option<Token> {
        mem::replace(&mut self.lookahead, self.tokens.next())
    }

    /// Consume the lookahead if it has one of the given `kinds`
    fn next_if(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let matches = self
            .lookahead
            .as_ref()
            .map_or(false, |token| kinds.contains(&token.kind()));
        if matches {
            self.advance()
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        match self.advance() {
            Some(token) if token.kind() == kind => Ok(token),
            Some(token) => Err(Error::ParseError(format!(
                "expected {}, found '{}'",
                kind, token
            ))),
            None => Err(Error::ParseError(format!(
                "expected {}, found end of input",
                kind
            ))),
        }
    }
}
