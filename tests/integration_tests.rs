// tests/integration_tests.rs
//
// End-to-end coverage: the math library, resolver combinations, and the
// CLI evaluation path.

use sorrel::functions::math_functions;
use sorrel::{Evaluator, ExprError, Value};

fn math() -> Evaluator<'static> {
    Evaluator::new().with_functions(&math_functions)
}

// ============================================================================
// Math Function Library
// ============================================================================

#[test]
fn test_single_argument_functions() {
    assert_eq!(math().evaluate::<f64>("sqrt(9)").unwrap(), 3.0);
    assert_eq!(math().evaluate::<f64>("floor(2.7)").unwrap(), 2.0);
    assert_eq!(math().evaluate::<f64>("ceil(2.1)").unwrap(), 3.0);
    assert_eq!(math().evaluate::<f64>("round(2.5)").unwrap(), 3.0);
    assert_eq!(math().evaluate::<f64>("abs(-4)").unwrap(), 4.0);
    assert_eq!(math().evaluate::<f64>("cos(0)").unwrap(), 1.0);
    assert_eq!(math().evaluate::<f64>("sin(0)").unwrap(), 0.0);
}

#[test]
fn test_log_is_natural() {
    let e = std::f64::consts::E;
    let result = math().evaluate::<f64>(&format!("log({})", e)).unwrap();
    assert!((result - 1.0).abs() < 1e-12);
}

#[test]
fn test_two_argument_functions() {
    assert_eq!(math().evaluate::<f64>("pow(2, 10)").unwrap(), 1024.0);
    assert_eq!(math().evaluate::<f64>("atan2(0, 1)").unwrap(), 0.0);
}

#[test]
fn test_single_argument_arity_is_exact() {
    let result = math().evaluate::<f64>("sqrt(1, 2)");
    assert!(matches!(result, Err(ExprError::InvalidArity(_))));

    let result = math().evaluate::<f64>("pow(2)");
    assert!(matches!(result, Err(ExprError::InvalidArity(_))));
}

#[test]
fn test_min_max_are_variadic() {
    assert_eq!(math().evaluate::<f64>("min(7, 7)").unwrap(), 7.0);
    assert_eq!(math().evaluate::<f64>("max(1, 9, 4)").unwrap(), 9.0);
    assert_eq!(math().evaluate::<f64>("min(3, 1, 2, 8)").unwrap(), 1.0);
}

#[test]
fn test_min_requires_two_arguments() {
    let result = math().evaluate::<f64>("min(7)");
    assert!(matches!(result, Err(ExprError::InvalidArity(_))));
}

#[test]
fn test_unknown_name_in_math_library() {
    let result = math().evaluate::<f64>("cbrt(8)");
    assert_eq!(result, Err(ExprError::FunctionNotFound("cbrt".to_string())));
}

#[test]
fn test_functions_compose_with_operators() {
    assert_eq!(
        math().evaluate::<f64>("sqrt(9) + pow(2, 3) * 2").unwrap(),
        19.0
    );
    assert_eq!(
        math().evaluate::<f64>("max(min(5, 3), abs(-2))").unwrap(),
        3.0
    );
}

// ============================================================================
// Resolvers Together
// ============================================================================

#[test]
fn test_rule_evaluation_scenario() {
    let vars = |name: &str| match name {
        "#price" => Ok(Value::Number(120.0)),
        "#qty" => Ok(Value::Number(3.0)),
        "$region" => Ok(Value::String("eu".to_string())),
        other => Err(ExprError::VariableNotFound(other.to_string())),
    };
    let evaluator = Evaluator::new()
        .with_variables(&vars)
        .with_functions(&math_functions);

    let total: f64 = evaluator.evaluate("#price * #qty").unwrap();
    assert_eq!(total, 360.0);

    let eligible: bool = evaluator
        .evaluate("#price * #qty > 300 && $region == 'eu'")
        .unwrap();
    assert!(eligible);

    let capped: f64 = evaluator
        .evaluate("min(#price * #qty, 350)")
        .unwrap();
    assert_eq!(capped, 350.0);
}

#[test]
fn test_default_resolvers_fail_not_found() {
    let evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate::<f64>("#x"),
        Err(ExprError::VariableNotFound("#x".to_string()))
    );
    assert_eq!(
        evaluator.evaluate::<f64>("f()"),
        Err(ExprError::FunctionNotFound("f".to_string()))
    );
}

#[test]
fn test_literal_only_convenience_entry_point() {
    let result: f64 = sorrel::evaluate("2 + 3 * 4").unwrap();
    assert_eq!(result, 14.0);
}

// ============================================================================
// CLI Evaluation Path
// ============================================================================

#[cfg(feature = "cli")]
mod cli {
    use sorrel::cli::{execute_eval, CliError, CoerceType, EvalOptions};

    fn options(expression: &str, vars: Option<&str>) -> EvalOptions {
        EvalOptions {
            expression: expression.to_string(),
            vars: vars.map(str::to_string),
            coerce: None,
        }
    }

    #[test]
    fn test_literal_expression() {
        let result = execute_eval(&options("2 + 3 * 4", None)).unwrap();
        assert_eq!(result, serde_json::json!(14.0));
    }

    #[test]
    fn test_variables_from_json() {
        let result = execute_eval(&options(
            "#price * 2",
            Some(r#"{"price": 10.5}"#),
        ))
        .unwrap();
        assert_eq!(result, serde_json::json!(21.0));
    }

    #[test]
    fn test_dotted_names_walk_nested_objects() {
        let result = execute_eval(&options(
            "$user.address.city + '!'",
            Some(r#"{"user": {"address": {"city": "Oslo"}}}"#),
        ))
        .unwrap();
        assert_eq!(result, serde_json::json!("Oslo!"));
    }

    #[test]
    fn test_array_variable_from_json() {
        let result = execute_eval(&options(
            "$scores[1]",
            Some(r#"{"scores": [10, 20, 30]}"#),
        ))
        .unwrap();
        assert_eq!(result, serde_json::json!(20.0));
    }

    #[test]
    fn test_math_library_is_installed() {
        let result = execute_eval(&options("max(1, 2)", None)).unwrap();
        assert_eq!(result, serde_json::json!(2.0));
    }

    #[test]
    fn test_missing_variable() {
        let result = execute_eval(&options("#absent", Some("{}")));
        assert!(matches!(result, Err(CliError::Expr(_))));
    }

    #[test]
    fn test_vars_must_be_an_object() {
        let result = execute_eval(&options("1", Some("[1, 2]")));
        assert!(matches!(result, Err(CliError::VarsNotObject)));
    }

    #[test]
    fn test_invalid_vars_json() {
        let result = execute_eval(&options("1", Some("{not json")));
        assert!(matches!(result, Err(CliError::Json(_))));
    }

    #[test]
    fn test_coercion_to_int() {
        let mut opts = options("10 / 2", None);
        opts.coerce = Some(CoerceType::Int);
        assert_eq!(execute_eval(&opts).unwrap(), serde_json::json!(5));
    }

    #[test]
    fn test_coercion_failure() {
        let mut opts = options("7 / 2", None);
        opts.coerce = Some(CoerceType::Int);
        assert!(matches!(execute_eval(&opts), Err(CliError::Expr(_))));
    }

    #[test]
    fn test_coercion_to_string_and_bool() {
        let mut opts = options("1 + 1", None);
        opts.coerce = Some(CoerceType::String);
        assert_eq!(execute_eval(&opts).unwrap(), serde_json::json!("2"));

        let mut opts = options("2 > 1", None);
        opts.coerce = Some(CoerceType::Bool);
        assert_eq!(execute_eval(&opts).unwrap(), serde_json::json!(true));
    }
}
