use crate::{
    ast::{BinOp, Expr, Token},
    error::ExprError,
    lexer::Lexer,
};
use std::mem;

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ExprError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ExprError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ExprError> {
        if !self.check(&expected) {
            if self.current_token == Token::Eof {
                return Err(ExprError::MissingOperand(format!(
                    "expected {:?} but the expression ended",
                    expected
                )));
            }
            return Err(ExprError::Parse(format!(
                "expected {:?}, got {:?}",
                expected, self.current_token
            )));
        }
        self.advance()
    }

    /// Parse primary expressions (atoms): literals, variables, calls,
    /// unary `!`, and parenthesized subexpressions.
    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            // Literals
            Token::Number(n) => {
                self.advance()?;
                Ok(Expr::Number(n))
            }
            Token::String(s) => {
                self.advance()?;
                Ok(Expr::String(s))
            }
            Token::Boolean(b) => {
                self.advance()?;
                Ok(Expr::Boolean(b))
            }

            // Variables, optionally indexed
            Token::Variable(name) => {
                self.advance()?;
                if self.check(&Token::LBracket) {
                    self.advance()?;
                    let index = self.parse_expression()?;
                    self.expect(Token::RBracket)?;
                    Ok(Expr::ArrayAccess {
                        variable: name,
                        index: Box::new(index),
                    })
                } else {
                    Ok(Expr::Variable(name))
                }
            }

            // An identifier is only valid as a function name
            Token::Identifier(name) => {
                self.advance()?;
                if !self.check(&Token::LParen) {
                    return Err(ExprError::Parse(format!(
                        "unexpected identifier '{}' (identifiers must be function calls)",
                        name
                    )));
                }
                self.advance()?;

                let mut args = Vec::new();
                if !self.check(&Token::RParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if self.check(&Token::Comma) {
                            self.advance()?;
                        } else {
                            break;
                        }
                    }
                }
                self.expect(Token::RParen)?;
                Ok(Expr::FunctionCall { name, args })
            }

            // `!` binds to another primary, not a full subexpression
            Token::Unary(op) => {
                self.advance()?;
                let operand = self.parse_primary()?;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                })
            }

            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }

            Token::Eof => Err(ExprError::MissingOperand(
                "the expression ended where a value was expected".to_string(),
            )),

            token => Err(ExprError::Parse(format!(
                "unexpected token in expression: {:?}",
                token
            ))),
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.current_token {
                Token::Operator(op @ (BinOp::Multiply | BinOp::Divide | BinOp::Modulo)) => op,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_primary()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token {
                Token::Operator(op @ (BinOp::Add | BinOp::Subtract)) => op,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_multiplicative()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_bitand(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_additive()?;

        while let Token::Operator(BinOp::BitAnd) = self.current_token {
            self.advance()?;
            let right = self.parse_additive()?;

            left = Expr::Binary {
                op: BinOp::BitAnd,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_bitor(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_bitand()?;

        while let Token::Operator(BinOp::BitOr) = self.current_token {
            self.advance()?;
            let right = self.parse_bitand()?;

            left = Expr::Binary {
                op: BinOp::BitOr,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_bitor()?;

        loop {
            let op = match self.current_token {
                Token::Operator(
                    op @ (BinOp::GreaterThan
                    | BinOp::GreaterEqual
                    | BinOp::LessThan
                    | BinOp::LessEqual),
                ) => op,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_bitor()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = match self.current_token {
                Token::Operator(op @ (BinOp::Equal | BinOp::NotEqual)) => op,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_comparison()?;

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_equality()?;

        while let Token::Operator(BinOp::And) = self.current_token {
            self.advance()?;
            let right = self.parse_equality()?;

            left = Expr::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_and()?;

        while let Token::Operator(BinOp::Or) = self.current_token {
            self.advance()?;
            let right = self.parse_and()?;

            left = Expr::Binary {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ExprError> {
        self.parse_or()
    }

    /// Parses one complete expression.
    ///
    /// The whole token stream must be consumed: tokens left over after a
    /// syntactically valid expression are an error, not silently ignored.
    pub fn parse(&mut self) -> Result<Expr, ExprError> {
        if self.current_token == Token::Eof {
            return Err(ExprError::Parse("empty expression".to_string()));
        }

        let expr = self.parse_expression()?;

        if self.current_token != Token::Eof {
            return Err(ExprError::Parse(format!(
                "unexpected trailing token {:?} after a complete expression",
                self.current_token
            )));
        }
        Ok(expr)
    }
}
