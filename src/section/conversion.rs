// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::{Color, ValueType, Vector4};

impl Section {
    /// Get a value converted to `T` using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use harbol_cfg::parse_str;
    /// let doc = parse_str(r#""window": { "width": 640, "title": "demo" }"#).document;
    /// let width: u32 = doc.get_as("window.width").unwrap();
    /// let title: String = doc.get_as("window.title").unwrap();
    /// assert_eq!((width, title.as_str()), (640, "demo"));
    /// ```
    pub fn get_as<'a, T>(&'a self, path: &str) -> Result<T, CfgError>
    where
        T: TryFrom<&'a Value, Error = CfgError>,
    {
        let value = self.resolve(path).ok_or_else(|| CfgError::path_not_found(path))?;
        T::try_from(value).map_err(|e| e.at_path(path))
    }

    /// Like [`Section::get_as`], falling back to `default` on any failure.
    pub fn get_as_or<'a, T>(&'a self, path: &str, default: T) -> T
    where
        T: TryFrom<&'a Value, Error = CfgError>,
    {
        self.get_as(path).unwrap_or(default)
    }
}

fn mismatch(expected: ValueType, value: &Value) -> CfgError {
    CfgError::type_mismatch("", expected, value.value_type())
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = CfgError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| mismatch(ValueType::String, value))
    }
}

impl TryFrom<&Value> for String {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(ValueType::String, value))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch(ValueType::Int, value))
    }
}

/// Integers also convert to floats.
impl TryFrom<&Value> for f64 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            _ => Err(mismatch(ValueType::Float, value)),
        }
    }
}

impl TryFrom<&Value> for f32 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<&Value> for bool {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch(ValueType::Bool, value))
    }
}

impl TryFrom<&Value> for Color {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_color().ok_or_else(|| mismatch(ValueType::Color, value))
    }
}

impl TryFrom<&Value> for Vector4 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_vector4().ok_or_else(|| mismatch(ValueType::Vector4, value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Section {
    type Error = CfgError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_section().ok_or_else(|| mismatch(ValueType::Section, value))
    }
}

macro_rules! narrow_int {
    ($($ty:ty),*) => {$(
        impl TryFrom<&Value> for $ty {
            type Error = CfgError;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                let n = i64::try_from(value)?;
                <$ty>::try_from(n).map_err(|_| CfgError::OutOfRange {
                    path: String::new(),
                    value: n.to_string(),
                    target: stringify!($ty),
                    hint: None,
                    code: Some(403),
                })
            }
        }
    )*};
}

narrow_int!(i8, i16, i32, u8, u16, u32, u64, usize);
