use crate::{
    args::Arguments,
    ast::{BinOp, Expr, UnaryOp},
    error::ExprError,
    lexer::Lexer,
    parser::Parser,
    value::{FromValue, Value},
};

/// Resolves a variable reference, prefix character included.
pub type VariableResolver<'a> = dyn Fn(&str) -> Result<Value, ExprError> + 'a;

/// Resolves a function call given its evaluated arguments.
pub type FunctionResolver<'a> = dyn Fn(&str, Arguments) -> Result<Value, ExprError> + 'a;

/// Resolves a comparison the native rules could not decide.
pub type ComparatorResolver<'a> = dyn Fn(&Value, &Value, BinOp) -> Result<Value, ExprError> + 'a;

/// Default variable resolver: every name is unbound.
pub fn default_variables(name: &str) -> Result<Value, ExprError> {
    Err(ExprError::VariableNotFound(name.to_string()))
}

/// Default function resolver: every name is unknown.
pub fn default_functions(name: &str, _args: Arguments) -> Result<Value, ExprError> {
    Err(ExprError::FunctionNotFound(name.to_string()))
}

/// Default comparator: no host-defined comparisons exist.
pub fn default_comparator(left: &Value, right: &Value, op: BinOp) -> Result<Value, ExprError> {
    Err(ExprError::InvalidOperation(format!(
        "cannot compare {} {} {}",
        left.kind(),
        op.symbol(),
        right.kind()
    )))
}

/// The expression evaluator.
///
/// Walks a parsed [`Expr`] tree and produces a [`Value`], bridging to the
/// embedding application through three resolvers. The evaluator holds no
/// state of its own: resolvers are borrowed for the evaluator's lifetime
/// and every call is independent, so evaluating the same expression twice
/// yields the same result.
///
/// Logical `&&` and `||` short-circuit: the resolver for a variable on the
/// untaken side is never invoked, so resolvers must not be relied on for
/// unconditional side effects.
///
/// # Examples
///
/// ```
/// use sorrel::{Evaluator, ExprError, Value};
///
/// let vars = |name: &str| match name {
///     "#rate" => Ok(Value::Number(0.2)),
///     other => Err(ExprError::VariableNotFound(other.to_string())),
/// };
///
/// let evaluator = Evaluator::new().with_variables(&vars);
/// let total: f64 = evaluator.evaluate("100 * (1 + #rate)").unwrap();
/// assert_eq!(total, 120.0);
/// ```
pub struct Evaluator<'a> {
    variables: &'a VariableResolver<'a>,
    functions: &'a FunctionResolver<'a>,
    comparator: &'a ComparatorResolver<'a>,
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with the default (all-failing) resolvers.
    pub fn new() -> Self {
        Evaluator {
            variables: &default_variables,
            functions: &default_functions,
            comparator: &default_comparator,
        }
    }

    /// Replaces the variable resolver.
    pub fn with_variables(mut self, resolver: &'a VariableResolver<'a>) -> Self {
        self.variables = resolver;
        self
    }

    /// Replaces the function resolver.
    pub fn with_functions(mut self, resolver: &'a FunctionResolver<'a>) -> Self {
        self.functions = resolver;
        self
    }

    /// Replaces the comparator resolver.
    pub fn with_comparator(mut self, resolver: &'a ComparatorResolver<'a>) -> Self {
        self.comparator = resolver;
        self
    }

    /// Parses and evaluates an expression string, coercing the result to
    /// the requested type.
    ///
    /// This is the main entry point: tokenize, parse, walk the tree, then
    /// convert the dynamic result through [`FromValue`].
    pub fn evaluate<T: FromValue>(&self, expression: &str) -> Result<T, ExprError> {
        let lexer = Lexer::new(expression);
        let mut parser = Parser::new(lexer)?;
        let expr = parser.parse()?;
        let value = self.eval(&expr)?;
        T::from_value(value)
    }

    /// Evaluates an already-parsed expression tree.
    pub fn eval(&self, expr: &Expr) -> Result<Value, ExprError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::String(s.clone())),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),

            Expr::Variable(name) => (self.variables)(name),

            Expr::ArrayAccess { variable, index } => {
                let value = (self.variables)(variable)?;
                let items = match &value {
                    Value::Array(items) => items,
                    other => {
                        return Err(ExprError::TypeMismatch(format!(
                            "variable '{}' is {}, not an indexable array",
                            variable,
                            other.kind()
                        )));
                    }
                };

                let index_value = self.eval(index)?;
                let idx = index_value.as_int().ok_or_else(|| {
                    ExprError::TypeMismatch(format!(
                        "array index must be an integer, got {}",
                        index_value.kind()
                    ))
                })?;

                if idx < 0 || idx as usize >= items.len() {
                    return Err(ExprError::InvalidOperation(format!(
                        "index {} is out of bounds for '{}' (length {})",
                        idx,
                        variable,
                        items.len()
                    )));
                }
                Ok(items[idx as usize].clone())
            }

            Expr::FunctionCall { name, args } => {
                // Arguments are always evaluated left-to-right in full;
                // only `&&`/`||` short-circuit.
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg)?);
                }
                (self.functions)(name, Arguments::new(values))
            }

            Expr::Unary {
                op: UnaryOp::Not,
                operand,
            } => {
                let value = self.eval(operand)?;
                let b = value.as_bool().ok_or_else(|| {
                    ExprError::TypeMismatch(format!(
                        "operand of '!' is {} and has no boolean conversion",
                        value.kind()
                    ))
                })?;
                Ok(Value::Boolean(!b))
            }

            Expr::Binary { op, left, right } => match op {
                BinOp::And => {
                    if !self.eval_bool(left, "&&")? {
                        return Ok(Value::Boolean(false));
                    }
                    Ok(Value::Boolean(self.eval_bool(right, "&&")?))
                }
                BinOp::Or => {
                    if self.eval_bool(left, "||")? {
                        return Ok(Value::Boolean(true));
                    }
                    Ok(Value::Boolean(self.eval_bool(right, "||")?))
                }
                _ => {
                    let left_value = self.eval(left)?;
                    let right_value = self.eval(right)?;
                    self.apply_binop(*op, &left_value, &right_value)
                }
            },
        }
    }

    /// Evaluates one side of a logical operator and requires to-bool.
    fn eval_bool(&self, expr: &Expr, symbol: &str) -> Result<bool, ExprError> {
        let value = self.eval(expr)?;
        value.as_bool().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "operand of '{}' is {} and has no boolean conversion",
                symbol,
                value.kind()
            ))
        })
    }

    fn numeric_operand(&self, op: BinOp, value: &Value) -> Result<f64, ExprError> {
        value.as_double().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "operand of '{}' is {} and has no numeric conversion",
                op.symbol(),
                value.kind()
            ))
        })
    }

    fn integer_operand(&self, op: BinOp, value: &Value) -> Result<i64, ExprError> {
        value.as_int().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "operand of '{}' is {} and has no integer conversion",
                op.symbol(),
                value.kind()
            ))
        })
    }

    fn apply_binop(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, ExprError> {
        match op {
            BinOp::Add => match (left.as_double(), right.as_double()) {
                (Some(a), Some(b)) => Ok(Value::Number(a + b)),
                _ => match (left.as_text(), right.as_text()) {
                    (Some(a), Some(b)) => Ok(Value::String(format!("{}{}", a, b))),
                    _ if left.kind() != right.kind() => Err(ExprError::TypeMismatch(format!(
                        "incompatible operands: {} + {}",
                        left.kind(),
                        right.kind()
                    ))),
                    _ => Err(ExprError::TypeMismatch(
                        "operands of '+' must be numeric or string".to_string(),
                    )),
                },
            },

            BinOp::Subtract => {
                let a = self.numeric_operand(op, left)?;
                let b = self.numeric_operand(op, right)?;
                Ok(Value::Number(a - b))
            }
            BinOp::Multiply => {
                let a = self.numeric_operand(op, left)?;
                let b = self.numeric_operand(op, right)?;
                Ok(Value::Number(a * b))
            }
            BinOp::Divide => {
                let a = self.numeric_operand(op, left)?;
                let b = self.numeric_operand(op, right)?;
                if b == 0.0 {
                    return Err(ExprError::InvalidOperation(
                        "division by zero".to_string(),
                    ));
                }
                Ok(Value::Number(a / b))
            }
            BinOp::Modulo => {
                // Truncating remainder, sign follows the dividend.
                let a = self.numeric_operand(op, left)?;
                let b = self.numeric_operand(op, right)?;
                Ok(Value::Number(a % b))
            }

            BinOp::BitAnd => {
                let a = self.integer_operand(op, left)?;
                let b = self.integer_operand(op, right)?;
                Ok(Value::Number((a & b) as f64))
            }
            BinOp::BitOr => {
                let a = self.integer_operand(op, left)?;
                let b = self.integer_operand(op, right)?;
                Ok(Value::Number((a | b) as f64))
            }

            BinOp::Equal
            | BinOp::NotEqual
            | BinOp::GreaterThan
            | BinOp::GreaterEqual
            | BinOp::LessThan
            | BinOp::LessEqual => self.compare(op, left, right),

            // Handled with short-circuiting in eval
            BinOp::And | BinOp::Or => Err(ExprError::InvalidOperation(
                "logical operator outside short-circuit evaluation".to_string(),
            )),
        }
    }

    /// Comparison resolution order: numeric, native strings, native
    /// booleans (equality only), then the host comparator.
    fn compare(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, ExprError> {
        if let (Some(a), Some(b)) = (left.as_double(), right.as_double()) {
            let result = match op {
                BinOp::Equal => a == b,
                BinOp::NotEqual => a != b,
                BinOp::GreaterThan => a > b,
                BinOp::GreaterEqual => a >= b,
                BinOp::LessThan => a < b,
                BinOp::LessEqual => a <= b,
                _ => unreachable!(),
            };
            return Ok(Value::Boolean(result));
        }

        if let (Value::String(a), Value::String(b)) = (left, right) {
            let result = match op {
                BinOp::Equal => a == b,
                BinOp::NotEqual => a != b,
                BinOp::GreaterThan => a > b,
                BinOp::GreaterEqual => a >= b,
                BinOp::LessThan => a < b,
                BinOp::LessEqual => a <= b,
                _ => unreachable!(),
            };
            return Ok(Value::Boolean(result));
        }

        if let (Value::Boolean(a), Value::Boolean(b)) = (left, right) {
            // Booleans support equality natively; ordering falls through
            // to the host comparator.
            match op {
                BinOp::Equal => return Ok(Value::Boolean(a == b)),
                BinOp::NotEqual => return Ok(Value::Boolean(a != b)),
                _ => {}
            }
        }

        (self.comparator)(left, right, op)
    }
}
