//! Evaluate expressions against a JSON variable document.

use super::{json_to_value, value_to_json, CliError};
use crate::{functions::math_functions, Evaluator, ExprError, Value};

/// Options for an evaluation run
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON object of variables, as text
    pub vars: Option<String>,
    /// Requested result type, routed through the final coercion
    pub coerce: Option<CoerceType>,
}

/// Result types the CLI can request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoerceType {
    Int,
    Number,
    String,
    Bool,
}

/// Resolves one variable reference against the JSON document.
///
/// The `#`/`$` prefix is stripped and dotted segments walk nested
/// objects, so `$user.name` reads `{"user": {"name": ...}}`.
fn lookup_variable(doc: &serde_json::Value, name: &str) -> Result<Value, ExprError> {
    let mut current = doc;
    for segment in name[1..].split('.') {
        current = current
            .get(segment)
            .ok_or_else(|| ExprError::VariableNotFound(name.to_string()))?;
    }
    json_to_value(current)
}

/// Parses the variable document and evaluates the expression with the
/// math library installed.
pub fn execute_eval(options: &EvalOptions) -> Result<serde_json::Value, CliError> {
    let doc: serde_json::Value = match &options.vars {
        Some(text) => serde_json::from_str(text)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };
    if !doc.is_object() {
        return Err(CliError::VarsNotObject);
    }

    let variables = |name: &str| lookup_variable(&doc, name);
    let evaluator = Evaluator::new()
        .with_variables(&variables)
        .with_functions(&math_functions);

    let expression = options.expression.as_str();
    let json = match options.coerce {
        None => {
            let value: Value = evaluator.evaluate(expression)?;
            value_to_json(&value)?
        }
        Some(CoerceType::Int) => {
            let n: i64 = evaluator.evaluate(expression)?;
            serde_json::Value::from(n)
        }
        Some(CoerceType::Number) => {
            let value: Value = evaluator.evaluate::<f64>(expression).map(Value::Number)?;
            value_to_json(&value)?
        }
        Some(CoerceType::String) => {
            let s: String = evaluator.evaluate(expression)?;
            serde_json::Value::String(s)
        }
        Some(CoerceType::Bool) => {
            let b: bool = evaluator.evaluate(expression)?;
            serde_json::Value::Bool(b)
        }
    };
    Ok(json)
}
