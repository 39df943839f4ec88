use std::any::Any;
use std::rc::Rc;

use crate::error::ExprError;

/// A runtime value flowing through expression evaluation.
///
/// Literals produce the three native scalar kinds. Hosts additionally
/// supply arrays (the only integer-indexable collection) and opaque
/// objects through their variable and function resolvers.
///
/// # Numbers
///
/// Every number is an `f64`; there is no integer kind. Whether a number
/// can act as an integer is decided at conversion time: [`Value::as_int`]
/// succeeds only when the fractional part is zero.
///
/// # Capability Conversions
///
/// A value participates in numeric, string, or boolean contexts through
/// four independent conversions (`as_double`, `as_int`, `as_text`,
/// `as_bool`). Native kinds implement a fixed subset; host objects opt
/// into any subset via [`HostObject`].
///
/// | kind    | as_double | as_int        | as_text | as_bool |
/// |---------|-----------|---------------|---------|---------|
/// | Number  | yes       | when integral | yes     | no      |
/// | String  | no        | no            | yes     | no      |
/// | Boolean | no        | no            | no      | yes     |
/// | Array   | no        | no            | no      | no      |
/// | Object  | host      | host          | host    | host    |
///
/// Strings are never reparsed as numbers, so `'2' + '2'` concatenates.
///
/// # Examples
///
/// ```
/// use sorrel::Value;
///
/// let n = Value::Number(5.0);
/// assert_eq!(n.as_double(), Some(5.0));
/// assert_eq!(n.as_int(), Some(5));
/// assert_eq!(n.as_text().as_deref(), Some("5"));
///
/// let fractional = Value::Number(5.5);
/// assert_eq!(fractional.as_int(), None);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Number literal or numeric result (always `f64`)
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Boolean
    Boolean(bool),

    /// Ordered, integer-indexable collection of values
    Array(Vec<Value>),

    /// Opaque host-supplied object
    Object(Rc<dyn HostObject>),
}

/// Conversion capabilities a host-defined value may implement.
///
/// This is the sole extension point for host types: each of the four
/// conversions defaults to unimplemented, and an object participates in
/// exactly the contexts whose conversion it overrides. `as_any` supports
/// exact-type recovery through [`Arguments::get_object`].
///
/// [`Arguments::get_object`]: crate::args::Arguments::get_object
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use std::rc::Rc;
/// use sorrel::{HostObject, Value};
///
/// #[derive(Debug)]
/// struct Celsius(f64);
///
/// impl HostObject for Celsius {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn to_double(&self) -> Option<f64> {
///         Some(self.0)
///     }
/// }
///
/// let v = Value::Object(Rc::new(Celsius(21.5)));
/// assert_eq!(v.as_double(), Some(21.5));
/// assert_eq!(v.as_bool(), None);
/// ```
pub trait HostObject: std::fmt::Debug {
    /// The concrete object, for exact-type downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Numeric view of the object, if it has one.
    fn to_double(&self) -> Option<f64> {
        None
    }

    /// Integer view of the object. Must fail for fractional values.
    fn to_int(&self) -> Option<i64> {
        None
    }

    /// String view of the object, if it has one.
    fn to_text(&self) -> Option<String> {
        None
    }

    /// Boolean view of the object, if it has one.
    fn to_bool(&self) -> Option<bool> {
        None
    }
}

impl Value {
    /// Human-readable name of the value's native kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// The to-double capability.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Object(obj) => obj.to_double(),
            _ => None,
        }
    }

    /// The to-int capability.
    ///
    /// Fails for numbers with a non-zero fractional part; NaN and the
    /// infinities never convert.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            Value::Object(obj) => obj.to_int(),
            _ => None,
        }
    }

    /// The to-string capability.
    ///
    /// Numbers render through `f64`'s `Display`, so `5.0` becomes `"5"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(obj) => obj.to_text(),
            _ => None,
        }
    }

    /// The to-bool capability.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Object(obj) => obj.to_bool(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Conversion from an evaluated [`Value`] to a caller-requested type.
///
/// This is the final-coercion step behind [`Evaluator::evaluate`]: integer
/// widths convert through the to-int capability (with a range check),
/// floats through to-double, `bool` through to-bool, and `String` through
/// to-string. Requesting [`Value`] itself returns the dynamic result
/// untouched.
///
/// [`Evaluator::evaluate`]: crate::evaluator::Evaluator::evaluate
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ExprError>;
}

macro_rules! from_value_int {
    ($($ty:ty),*) => {
        $(impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ExprError> {
                let n = value.as_int().ok_or_else(|| {
                    ExprError::TypeMismatch(format!(
                        "cannot convert {} to an integer",
                        value.kind()
                    ))
                })?;
                <$ty>::try_from(n).map_err(|_| {
                    ExprError::TypeMismatch(format!(
                        "{} is out of range for {}",
                        n,
                        stringify!($ty)
                    ))
                })
            }
        })*
    };
}

from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ExprError> {
        value.as_double().ok_or_else(|| {
            ExprError::TypeMismatch(format!("cannot convert {} to a number", value.kind()))
        })
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ExprError> {
        f64::from_value(value).map(|n| n as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ExprError> {
        value.as_bool().ok_or_else(|| {
            ExprError::TypeMismatch(format!("cannot convert {} to a boolean", value.kind()))
        })
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ExprError> {
        match value {
            Value::String(s) => Ok(s),
            other => other.as_text().ok_or_else(|| {
                ExprError::TypeMismatch(format!("cannot convert {} to a string", other.kind()))
            }),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ExprError> {
        Ok(value)
    }
}
