use crate::ast::operators::{BinOp, UnaryOp};
use crate::ast::Token;
use crate::error::ExprError;

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// True when the input at the cursor starts with `literal`.
    fn matches_literal(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, ch)| self.peek_char(i) == Some(ch))
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a variable name after its `#`/`$` prefix has been consumed.
    ///
    /// The first character must be a letter, digit, or `_`; later characters
    /// may also be `.`, which must not end the name.
    fn read_variable_name(&mut self, prefix: char) -> Result<String, ExprError> {
        let mut name = String::new();
        name.push(prefix);

        match self.current_char() {
            Some(ch) if ch.is_alphanumeric() || ch == '_' => {}
            _ => {
                return Err(ExprError::Parse(format!(
                    "expected a variable name after '{}' at position {}",
                    prefix, self.position
                )));
            }
        }

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' || ch == '.' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if name.ends_with('.') {
            return Err(ExprError::Parse(format!(
                "variable name '{}' may not end with '.'",
                name
            )));
        }

        Ok(name)
    }

    fn read_string(&mut self) -> Result<String, ExprError> {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                self.advance();
                return Ok(result);
            }
            // No escape sequences: every character up to the closing
            // quote is literal.
            result.push(ch);
            self.advance();
        }

        Err(ExprError::Parse(
            "unterminated string: missing closing quote".to_string(),
        ))
    }

    fn read_number(&mut self) -> Result<Token, ExprError> {
        let mut number = String::new();
        let mut is_fractional = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_fractional
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_fractional = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        number
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ExprError::Parse(format!("invalid number literal '{}'", number)))
    }

    pub fn next_token(&mut self) -> Result<Token, ExprError> {
        self.skip_whitespace();

        // Boolean literals by prefix, before identifiers.
        if self.matches_literal("true") {
            self.position += 4;
            return Ok(Token::Boolean(true));
        }
        if self.matches_literal("false") {
            self.position += 5;
            return Ok(Token::Boolean(false));
        }

        match self.current_char() {
            None => Ok(Token::Eof),
            Some(prefix @ ('#' | '$')) => {
                self.advance();
                let name = self.read_variable_name(prefix)?;
                Ok(Token::Variable(name))
            }
            Some('\'') => Ok(Token::String(self.read_string()?)),
            Some('-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                // A '-' directly against a digit is a negative literal,
                // not the subtraction operator.
                self.read_number()
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some('(') => {
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen)
            }
            Some('[') => {
                self.advance();
                Ok(Token::LBracket)
            }
            Some(']') => {
                self.advance();
                Ok(Token::RBracket)
            }
            Some(',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::Equal))
                } else {
                    Err(ExprError::Parse(format!(
                        "unexpected '=' at position {} (did you mean '=='?)",
                        self.position
                    )))
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::NotEqual))
                } else {
                    self.advance();
                    Ok(Token::Unary(UnaryOp::Not))
                }
            }
            Some('&') => {
                if self.peek_char(1) == Some('&') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::And))
                } else {
                    self.advance();
                    Ok(Token::Operator(BinOp::BitAnd))
                }
            }
            Some('|') => {
                if self.peek_char(1) == Some('|') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::Or))
                } else {
                    self.advance();
                    Ok(Token::Operator(BinOp::BitOr))
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::GreaterEqual))
                } else {
                    self.advance();
                    Ok(Token::Operator(BinOp::GreaterThan))
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::Operator(BinOp::LessEqual))
                } else {
                    self.advance();
                    Ok(Token::Operator(BinOp::LessThan))
                }
            }
            Some('+') => {
                self.advance();
                Ok(Token::Operator(BinOp::Add))
            }
            Some('-') => {
                self.advance();
                Ok(Token::Operator(BinOp::Subtract))
            }
            Some('*') => {
                self.advance();
                Ok(Token::Operator(BinOp::Multiply))
            }
            Some('/') => {
                self.advance();
                Ok(Token::Operator(BinOp::Divide))
            }
            Some('%') => {
                self.advance();
                Ok(Token::Operator(BinOp::Modulo))
            }
            Some(ch) if ch.is_alphabetic() => Ok(Token::Identifier(self.read_identifier())),
            Some(ch) => Err(ExprError::Parse(format!(
                "unexpected character '{}' at position {}",
                ch, self.position
            ))),
        }
    }
}

/// Tokenizes an entire input string.
///
/// The returned sequence does not include the trailing [`Token::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token()? {
            Token::Eof => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

#[test]
fn test_variable_prefixes() {
    let mut lexer = Lexer::new("#count $user.name");
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Variable("#count".to_string())
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Variable("$user.name".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_negative_literal_vs_minus() {
    let mut lexer = Lexer::new("5 - -3");
    assert_eq!(lexer.next_token().unwrap(), Token::Number(5.0));
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Operator(BinOp::Subtract)
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Number(-3.0));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
