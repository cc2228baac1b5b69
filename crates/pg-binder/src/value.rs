//! Bound SQL values.
//!
//! Values are never rendered into the statement text; they travel alongside
//! it so the database client can send them as positional parameters.

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// NULL. Also bound for parameter names absent from the substitutions.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl BindValue {
    /// Returns `true` if this is [`BindValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Trait for types that can be converted to a bound value.
pub trait ToBindValue {
    /// Converts the value to a [`BindValue`].
    fn to_bind_value(self) -> BindValue;
}

impl ToBindValue for BindValue {
    fn to_bind_value(self) -> BindValue {
        self
    }
}

impl ToBindValue for bool {
    fn to_bind_value(self) -> BindValue {
        BindValue::Bool(self)
    }
}

impl ToBindValue for i64 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Int(self)
    }
}

impl ToBindValue for i32 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Int(i64::from(self))
    }
}

impl ToBindValue for i16 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Int(i64::from(self))
    }
}

impl ToBindValue for u32 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Int(i64::from(self))
    }
}

impl ToBindValue for f64 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Float(self)
    }
}

impl ToBindValue for f32 {
    fn to_bind_value(self) -> BindValue {
        BindValue::Float(f64::from(self))
    }
}

impl ToBindValue for &str {
    fn to_bind_value(self) -> BindValue {
        BindValue::Text(String::from(self))
    }
}

impl ToBindValue for String {
    fn to_bind_value(self) -> BindValue {
        BindValue::Text(self)
    }
}

impl ToBindValue for Vec<u8> {
    fn to_bind_value(self) -> BindValue {
        BindValue::Blob(self)
    }
}

impl ToBindValue for &[u8] {
    fn to_bind_value(self) -> BindValue {
        BindValue::Blob(self.to_vec())
    }
}

impl<T: ToBindValue> ToBindValue for Option<T> {
    fn to_bind_value(self) -> BindValue {
        self.map_or(BindValue::Null, ToBindValue::to_bind_value)
    }
}
