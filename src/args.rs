use crate::error::ExprError;
use crate::value::Value;

/// One function call's evaluated arguments.
///
/// Handed to the function resolver for every call, already evaluated
/// left-to-right. The accessors pair an arity check with a capability
/// conversion so that resolver bodies stay one line per argument.
///
/// # Examples
///
/// ```
/// use sorrel::{Arguments, ExprError, Value};
///
/// fn hypot(args: &Arguments) -> Result<Value, ExprError> {
///     args.ensure_exactly(2)?;
///     let x = args.get_double(0)?;
///     let y = args.get_double(1)?;
///     Ok(Value::Number(x.hypot(y)))
/// }
///
/// let args = Arguments::new(vec![Value::Number(3.0), Value::Number(4.0)]);
/// assert_eq!(hypot(&args), Ok(Value::Number(5.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    pub fn new(values: Vec<Value>) -> Self {
        Arguments { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails unless exactly `n` arguments were supplied.
    pub fn ensure_exactly(&self, n: usize) -> Result<(), ExprError> {
        if self.values.len() != n {
            return Err(ExprError::InvalidArity(format!(
                "expected exactly {} argument(s), got {}",
                n,
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Fails unless at least `n` arguments were supplied.
    pub fn ensure_at_least(&self, n: usize) -> Result<(), ExprError> {
        if self.values.len() < n {
            return Err(ExprError::InvalidArity(format!(
                "expected at least {} argument(s), got {}",
                n,
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Fails unless at most `n` arguments were supplied.
    pub fn ensure_at_most(&self, n: usize) -> Result<(), ExprError> {
        if self.values.len() > n {
            return Err(ExprError::InvalidArity(format!(
                "expected at most {} argument(s), got {}",
                n,
                self.values.len()
            )));
        }
        Ok(())
    }

    /// The raw argument at `index`.
    pub fn get(&self, index: usize) -> Result<&Value, ExprError> {
        self.ensure_at_least(index + 1)?;
        Ok(&self.values[index])
    }

    /// Argument at `index` through the to-double capability.
    pub fn get_double(&self, index: usize) -> Result<f64, ExprError> {
        let value = self.get(index)?;
        value.as_double().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "argument {} is {} and has no numeric conversion",
                index,
                value.kind()
            ))
        })
    }

    /// Argument at `index` through the to-int capability.
    pub fn get_int(&self, index: usize) -> Result<i64, ExprError> {
        let value = self.get(index)?;
        value.as_int().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "argument {} is {} and has no integer conversion",
                index,
                value.kind()
            ))
        })
    }

    /// Argument at `index` through the to-string capability.
    pub fn get_string(&self, index: usize) -> Result<String, ExprError> {
        let value = self.get(index)?;
        value.as_text().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "argument {} is {} and has no string conversion",
                index,
                value.kind()
            ))
        })
    }

    /// Argument at `index` through the to-bool capability.
    pub fn get_bool(&self, index: usize) -> Result<bool, ExprError> {
        let value = self.get(index)?;
        value.as_bool().ok_or_else(|| {
            ExprError::TypeMismatch(format!(
                "argument {} is {} and has no boolean conversion",
                index,
                value.kind()
            ))
        })
    }

    /// Argument at `index` as the exact host type `T`.
    ///
    /// Unlike the capability accessors this performs no conversion: the
    /// argument must be a host object whose concrete type is `T`.
    pub fn get_object<T: 'static>(&self, index: usize) -> Result<&T, ExprError> {
        let value = self.get(index)?;
        match value {
            Value::Object(obj) => obj.as_any().downcast_ref::<T>().ok_or_else(|| {
                ExprError::TypeMismatch(format!(
                    "argument {} is not the requested host type",
                    index
                ))
            }),
            other => Err(ExprError::TypeMismatch(format!(
                "argument {} is {}, not a host object",
                index,
                other.kind()
            ))),
        }
    }
}
