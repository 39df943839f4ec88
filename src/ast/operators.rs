/// Binary operators.
///
/// Each operator belongs to exactly one precedence tier; the parser folds
/// every tier left-associatively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    // Logical
    /// Logical OR (`||`), short-circuiting
    Or,
    /// Logical AND (`&&`), short-circuiting
    And,

    // Equality
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,

    // Comparison
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,

    // Bitwise
    /// Bitwise OR (`|`), integer operands only
    BitOr,
    /// Bitwise AND (`&`), integer operands only
    BitAnd,

    // Arithmetic
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`), sign follows the dividend
    Modulo,
}

impl BinOp {
    /// The literal source form of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::GreaterThan => ">",
            BinOp::GreaterEqual => ">=",
            BinOp::LessThan => "<",
            BinOp::LessEqual => "<=",
            BinOp::BitOr => "|",
            BinOp::BitAnd => "&",
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    /// Logical NOT (`!`)
    Not,
}
