pub mod args;
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod value;

pub use args::Arguments;
pub use ast::{BinOp, Expr, Token, UnaryOp};
pub use error::ExprError;
pub use evaluator::{
    ComparatorResolver, Evaluator, FunctionResolver, VariableResolver,
};
pub use lexer::{tokenize, Lexer};
pub use parser::Parser;
pub use value::{FromValue, HostObject, Value};

/// Evaluates an expression with the default resolvers.
///
/// Only literal computations succeed: the defaults fail every variable,
/// function, and host comparison. Embedding applications wanting resolvers
/// use [`Evaluator`] directly.
///
/// # Examples
///
/// ```
/// let result: f64 = sorrel::evaluate("2 + 3 * 4").unwrap();
/// assert_eq!(result, 14.0);
/// ```
pub fn evaluate<T: FromValue>(expression: &str) -> Result<T, ExprError> {
    Evaluator::new().evaluate(expression)
}
