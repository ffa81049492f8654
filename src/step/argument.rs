//! Captured step arguments and their printed form.

use std::fmt;

/// Printable value of a captured argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// An absent value, printed as `'null'`.
    Null,
    /// A single value in its display form.
    Scalar(String),
    /// A sequence, printed as its flattened elements separated by `, `.
    List(Vec<Self>),
}

impl ArgValue {
    /// Build a scalar from anything displayable.
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self::Scalar(value.to_string())
    }

    /// The printed form used in step titles.
    #[must_use]
    pub fn flattened(&self) -> String {
        match self {
            Self::Null => String::from("'null'"),
            Self::Scalar(text) => text.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::flattened)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flattened())
    }
}

/// Conversion of a captured argument into its printable form.
///
/// Implemented for primitives, strings, options and sequences. Implement it
/// for domain types that should appear in step titles.
pub trait ToArgValue {
    /// Capture `self` for step titles.
    fn to_arg_value(&self) -> ArgValue;
}

macro_rules! display_arg_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToArgValue for $ty {
                fn to_arg_value(&self) -> ArgValue {
                    ArgValue::scalar(self)
                }
            }
        )*
    };
}

display_arg_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: ToArgValue + ?Sized> ToArgValue for &T {
    fn to_arg_value(&self) -> ArgValue {
        (**self).to_arg_value()
    }
}

impl<T: ToArgValue> ToArgValue for Option<T> {
    fn to_arg_value(&self) -> ArgValue {
        self.as_ref().map_or(ArgValue::Null, ToArgValue::to_arg_value)
    }
}

impl<T: ToArgValue> ToArgValue for [T] {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::List(self.iter().map(ToArgValue::to_arg_value).collect())
    }
}

impl<T: ToArgValue, const N: usize> ToArgValue for [T; N] {
    fn to_arg_value(&self) -> ArgValue {
        self.as_slice().to_arg_value()
    }
}

impl<T: ToArgValue> ToArgValue for Vec<T> {
    fn to_arg_value(&self) -> ArgValue {
        self.as_slice().to_arg_value()
    }
}

/// A named argument captured from a step declaration.
///
/// An empty name hides the argument from generated titles; it still fills
/// positional placeholders of a title template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepArgument {
    name: String,
    value: ArgValue,
}

impl StepArgument {
    /// Create a named argument.
    pub fn new(name: impl Into<String>, value: ArgValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parameter name, empty when hidden.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Captured value.
    #[must_use]
    pub const fn value(&self) -> &ArgValue {
        &self.value
    }

    /// Whether the argument is shown when inputs are appended to a title.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.name.is_empty()
    }
}
