use crate::token::{Token, TokenKind};

/// Names accepted for the free variable
const VARIABLES: [&str; 2] = ["x", "t"];

#[must_use]
/// Check if `word` names the free variable
///
/// # Examples
///
/// ```
/// # use graphcalc::is_variable;
///
/// assert_eq!(is_variable("x"), true);
/// assert_eq!(is_variable("t"), true);
/// assert_eq!(is_variable("y"), false);
/// ```
pub fn is_variable(word: &str) -> bool {
    VARIABLES.contains(&word)
}

/// Split `input` into tokens.
///
/// This never fails: any word that is not a number, an operator, a
/// parenthesis or the variable becomes a `Function` token, and unknown
/// function names are only rejected when the expression is evaluated.
///
/// # Examples
///
/// ```
/// # use graphcalc::{tokenize, TokenKind};
/// let kinds: Vec<TokenKind> = tokenize("sin(x)").iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Function, TokenKind::LeftParen, TokenKind::Variable, TokenKind::RightParen]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { input }
    }

    /// Split the whole input into tokens
    pub fn tokenize(self) -> Vec<Token> {
        let padded = pad(self.input);
        padded.split_whitespace().map(classify).collect()
    }
}

/// Surround parenthesis and `^` with spaces so that whitespace splitting
/// isolates them. A `^` following `n`, `s` or `e` belongs to a function name
/// (`sin^-1`, `cos^-1`, `tan^-1`, `e^`) and stays attached; after `e` the
/// name ends there, so a space is added behind it.
fn pad(input: &str) -> String {
    let mut padded = String::with_capacity(input.len() * 2);
    let mut previous = None;
    for c in input.chars() {
        match c {
            '^' if is_suffix_start(previous) => {
                padded.push(c);
                if previous == Some('e') {
                    padded.push(' ');
                }
            }
            '^' | '(' | ')' => {
                padded.push(' ');
                padded.push(c);
                padded.push(' ');
            }
            _ => padded.push(c),
        }
        previous = Some(c);
    }
    padded
}

fn is_suffix_start(previous: Option<char>) -> bool {
    match previous {
        Some('n') | Some('s') | Some('e') => true,
        _ => false,
    }
}

fn classify(word: &str) -> Token {
    let kind = if is_number(word) {
        TokenKind::Number
    } else if let Some(kind) = TokenKind::terminal(word) {
        kind
    } else if is_variable(word) {
        TokenKind::Variable
    } else {
        TokenKind::Function
    };
    Token::new(kind, word)
}

/// Check if `word` is an integer or floating point literal. `inf` and `NaN`
/// are accepted by `f64::from_str`, but they are not written with digits.
fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit()) && word.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};
    use test_case::test_case;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[test_case("2 + 2" => vec![tok(TokenKind::Number, "2"), tok(TokenKind::Plus, "+"), tok(TokenKind::Number, "2")] ; "addition is lexed properly")]
    #[test_case("x^2" => vec![tok(TokenKind::Variable, "x"), tok(TokenKind::Power, "^"), tok(TokenKind::Number, "2")] ; "caret is split without spaces")]
    #[test_case("log(9)" => vec![tok(TokenKind::Function, "log"), tok(TokenKind::LeftParen, "("), tok(TokenKind::Number, "9"), tok(TokenKind::RightParen, ")")] ; "function call")]
    #[test_case("sin^-1(t)" => vec![tok(TokenKind::Function, "sin^-1"), tok(TokenKind::LeftParen, "("), tok(TokenKind::Variable, "t"), tok(TokenKind::RightParen, ")")] ; "inverse function suffix stays attached")]
    #[test_case("e^x" => vec![tok(TokenKind::Function, "e^"), tok(TokenKind::Variable, "x")] ; "exponential is split after the caret")]
    #[test_case("-3.5 * 1e2" => vec![tok(TokenKind::Number, "-3.5"), tok(TokenKind::Multiply, "*"), tok(TokenKind::Number, "1e2")] ; "signed and scientific literals")]
    #[test_case("2*3" => vec![tok(TokenKind::Function, "2*3")] ; "operators need surrounding whitespace")]
    #[test_case("inf" => vec![tok(TokenKind::Function, "inf")] ; "named float values are not numbers")]
    #[test_case("" => Vec::<Token>::new() ; "empty input")]
    fn lex(input: &str) -> Vec<Token> {
        tokenize(input)
    }

    #[test]
    fn padding() {
        assert_eq!(pad("(x)"), " ( x ) ");
        assert_eq!(pad("x^2"), "x ^ 2");
        assert_eq!(pad("cos^-1"), "cos^-1");
        assert_eq!(pad("e^(x)"), "e^  ( x ) ");
        assert_eq!(pad("^2"), " ^ 2");
    }

    #[test]
    fn numbers() {
        let numbers = ["0", "12", "-4", "+4", "3.25", "5.", ".5", "1e-3", "2E10"];
        for n in &numbers {
            assert!(is_number(n), "{} should be a number", n);
        }

        let non_numbers = ["x", "sin", "inf", "NaN", "-", "1+2", "0x10", "e^"];
        for n in &non_numbers {
            assert!(!is_number(n), "{} should not be a number", n);
        }
    }

    #[test]
    fn variables() {
        assert!(is_variable("x"));
        assert!(is_variable("t"));
        assert!(!is_variable("X"));
        assert!(!is_variable("xt"));
    }
}
