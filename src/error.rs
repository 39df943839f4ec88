//! Error types shared by every stage of the pipeline.
//!
//! Lexing, parsing, and evaluation all fail through the same [`ExprError`]
//! enum so that embedding applications match on one taxonomy regardless of
//! where a failure originated. Every variant carries a descriptive payload
//! and the enum derives `PartialEq`, so tests can assert on exact errors.

/// Errors raised while tokenizing, parsing, or evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Lexical or grammatical failure (bad character, unterminated string,
    /// unexpected or trailing token)
    Parse(String),

    /// A token was required but the input ended
    MissingOperand(String),

    /// The variable resolver has no binding for the name
    VariableNotFound(String),

    /// The function resolver has no function with the name
    FunctionNotFound(String),

    /// A value did not support the conversion an operator or coercion needed
    TypeMismatch(String),

    /// The operation itself is invalid (division by zero, index out of
    /// bounds, unsupported comparison)
    InvalidOperation(String),

    /// A function was called with the wrong number of arguments
    InvalidArity(String),

    /// A host-resolver failure that is none of the engine's own kinds,
    /// passed through to the caller unmodified
    Custom(String),
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ExprError::MissingOperand(msg) => write!(f, "Missing operand: {}", msg),
            ExprError::VariableNotFound(name) => write!(f, "Variable not found: {}", name),
            ExprError::FunctionNotFound(name) => write!(f, "Function not found: {}", name),
            ExprError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            ExprError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            ExprError::InvalidArity(msg) => write!(f, "Invalid arity: {}", msg),
            ExprError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ExprError {}
