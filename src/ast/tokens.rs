use crate::ast::operators::{BinOp, UnaryOp};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Decimal number literal
    ///
    /// Always carries an `f64`; there is no separate integer token. A
    /// leading `-` is part of the literal when it is immediately followed
    /// by a digit.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// -1.5
    /// ```
    Number(f64),

    /// String literal enclosed in single quotes
    ///
    /// No escape sequences are supported.
    ///
    /// # Examples
    /// ```text
    /// 'hello'
    /// 'item #1'
    /// ```
    String(String),

    /// Boolean values
    ///
    /// # Examples
    /// ```text
    /// true
    /// false
    /// ```
    Boolean(bool),

    // Identifiers and References
    /// Function name
    ///
    /// Any bare letter-starting word that is not `true`/`false`. Only
    /// valid when followed by a parenthesized argument list.
    ///
    /// # Examples
    /// ```text
    /// sqrt(9)
    /// max(1, 2)
    /// ```
    Identifier(String),

    /// Variable reference, including its prefix character
    ///
    /// Starts with `#` or `$`, followed by letters, digits, `_`, and
    /// non-leading/non-trailing `.` segments for structured names.
    ///
    /// # Examples
    /// ```text
    /// #count
    /// $user.name
    /// ```
    Variable(String),

    // Operators
    /// Binary operator (`+ - * / % == != && || & | > >= < <=`)
    Operator(BinOp),

    /// Unary operator (`!`)
    Unary(UnaryOp),

    // Delimiters
    /// Left parenthesis for grouping or argument lists
    LParen,

    /// Right parenthesis
    RParen,

    /// Left bracket for array indexing
    LBracket,

    /// Right bracket
    RBracket,

    /// Comma for separating function arguments
    Comma,

    /// End of input
    Eof,
}
