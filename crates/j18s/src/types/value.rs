use std::fmt::{Display, Formatter, Result as FmtResult};

/// A replacement value for `%s`, `%d` and `%N$s` placeholders.
///
/// Values are substituted through their `Display` form. `%d` applies no
/// numeric coercion, so a string passed for `%d` is inserted unchanged.
///
/// # Example
///
/// ```
/// use j18s::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
///
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// The integer, for `Number` values.
    pub fn as_number(&self) -> Option<i64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// The text, for `String` values.
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

/// Placeholders substitute this form.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => Display::fmt(n, f),
            Value::Float(x) => Display::fmt(x, f),
            Value::String(s) => f.write_str(s),
        }
    }
}

macro_rules! lossless_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(i64::from(n))
                }
            }
        )*
    };
}

macro_rules! saturating_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                /// Counts beyond `i64::MAX` saturate.
                fn from(n: $ty) -> Self {
                    Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

lossless_number!(i8, i16, i32, i64, u8, u16, u32);
saturating_number!(u64, usize);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}
