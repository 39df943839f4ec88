//! Optional default function library.
//!
//! A plain name-to-behavior lookup over [`Arguments`], usable directly as a
//! function resolver. Nothing installs it implicitly: hosts opt in with
//! [`Evaluator::with_functions`].
//!
//! [`Evaluator::with_functions`]: crate::evaluator::Evaluator::with_functions
//!
//! # Examples
//!
//! ```
//! use sorrel::{functions::math_functions, Evaluator};
//!
//! let evaluator = Evaluator::new().with_functions(&math_functions);
//! let result: f64 = evaluator.evaluate("sqrt(9) + pow(2, 3)").unwrap();
//! assert_eq!(result, 11.0);
//! ```

use crate::{args::Arguments, error::ExprError, value::Value};

/// The default math library: single-argument `f64` functions, `pow`,
/// `atan2`, and the variadic `max`/`min`. `log` is the natural logarithm.
pub fn math_functions(name: &str, args: Arguments) -> Result<Value, ExprError> {
    let result = match name {
        "sqrt" => single(&args)?.sqrt(),
        "floor" => single(&args)?.floor(),
        "ceil" => single(&args)?.ceil(),
        "round" => single(&args)?.round(),
        "cos" => single(&args)?.cos(),
        "acos" => single(&args)?.acos(),
        "sin" => single(&args)?.sin(),
        "asin" => single(&args)?.asin(),
        "tan" => single(&args)?.tan(),
        "atan" => single(&args)?.atan(),
        "abs" => single(&args)?.abs(),
        "log" => single(&args)?.ln(),
        "pow" => {
            args.ensure_exactly(2)?;
            args.get_double(0)?.powf(args.get_double(1)?)
        }
        "atan2" => {
            args.ensure_exactly(2)?;
            args.get_double(0)?.atan2(args.get_double(1)?)
        }
        "max" => fold_extremum(&args, f64::max)?,
        "min" => fold_extremum(&args, f64::min)?,
        _ => return Err(ExprError::FunctionNotFound(name.to_string())),
    };
    Ok(Value::Number(result))
}

fn single(args: &Arguments) -> Result<f64, ExprError> {
    args.ensure_exactly(1)?;
    args.get_double(0)
}

fn fold_extremum(args: &Arguments, pick: fn(f64, f64) -> f64) -> Result<f64, ExprError> {
    args.ensure_at_least(2)?;
    let mut result = args.get_double(0)?;
    for i in 1..args.len() {
        result = pick(result, args.get_double(i)?);
    }
    Ok(result)
}
