use super::*;
use crate::ast::{Color, ValueType, Vector4};
use crate::resolver;

impl Section {
    /// Value at a dot path. See [`resolver::resolve`] for the `Null` rule.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        resolver::resolve(self, path)
    }

    pub fn resolve_mut(&mut self, path: &str) -> Option<&mut Value> {
        resolver::resolve_mut(self, path)
    }

    /// Whether anything, `Null` included, is stored at `path`.
    pub fn has(&self, path: &str) -> bool {
        resolver::locate(self, path).is_some()
    }

    /// Variant stored at `path`. Unlike the typed getters this also reports
    /// entries that were set to `Null`.
    pub fn get_type(&self, path: &str) -> Result<ValueType, CfgError> {
        resolver::locate(self, path)
            .map(Value::value_type)
            .ok_or_else(|| CfgError::path_not_found(path))
    }

    fn typed<'a, T>(
        &'a self,
        path: &str,
        expected: ValueType,
        pick: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, CfgError> {
        let value = self.resolve(path).ok_or_else(|| CfgError::path_not_found(path))?;
        pick(value).ok_or_else(|| CfgError::type_mismatch(path, expected, value.value_type()))
    }

    pub fn get_section(&self, path: &str) -> Result<&Section, CfgError> {
        self.typed(path, ValueType::Section, Value::as_section)
    }

    pub fn get_section_mut(&mut self, path: &str) -> Result<&mut Section, CfgError> {
        let value = self
            .resolve_mut(path)
            .ok_or_else(|| CfgError::path_not_found(path))?;
        let found = value.value_type();
        value
            .as_section_mut()
            .ok_or_else(|| CfgError::type_mismatch(path, ValueType::Section, found))
    }

    pub fn get_string(&self, path: &str) -> Result<&str, CfgError> {
        self.typed(path, ValueType::String, Value::as_str)
    }

    pub fn get_int(&self, path: &str) -> Result<i64, CfgError> {
        self.typed(path, ValueType::Int, Value::as_int)
    }

    pub fn get_float(&self, path: &str) -> Result<f64, CfgError> {
        self.typed(path, ValueType::Float, Value::as_float)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, CfgError> {
        self.typed(path, ValueType::Bool, Value::as_bool)
    }

    pub fn get_color(&self, path: &str) -> Result<Color, CfgError> {
        self.typed(path, ValueType::Color, Value::as_color)
    }

    pub fn get_vector4(&self, path: &str) -> Result<Vector4, CfgError> {
        self.typed(path, ValueType::Vector4, Value::as_vector4)
    }

    /// Stores `new` at an existing `path`. A value of another variant is only
    /// replaced when `override_type` is set.
    fn assign(&mut self, path: &str, new: Value, override_type: bool) -> Result<(), CfgError> {
        let slot = self
            .resolve_mut(path)
            .ok_or_else(|| CfgError::path_not_found(path))?;
        let found = slot.value_type();
        if found != new.value_type() && !override_type {
            return Err(CfgError::type_mismatch(path, new.value_type(), found));
        }
        *slot = new;
        Ok(())
    }

    pub fn set_string(&mut self, path: &str, value: &str, override_type: bool) -> Result<(), CfgError> {
        if let Some(Value::String(existing)) = self.resolve_mut(path) {
            existing.clear();
            existing.push_str(value);
            return Ok(());
        }
        self.assign(path, Value::String(value.to_string()), override_type)
    }

    pub fn set_int(&mut self, path: &str, value: i64, override_type: bool) -> Result<(), CfgError> {
        self.assign(path, Value::Int(value), override_type)
    }

    pub fn set_float(&mut self, path: &str, value: f64, override_type: bool) -> Result<(), CfgError> {
        self.assign(path, Value::Float(value), override_type)
    }

    pub fn set_bool(&mut self, path: &str, value: bool, override_type: bool) -> Result<(), CfgError> {
        self.assign(path, Value::Bool(value), override_type)
    }

    pub fn set_color(&mut self, path: &str, value: Color, override_type: bool) -> Result<(), CfgError> {
        self.assign(path, Value::Color(value), override_type)
    }

    pub fn set_vector4(
        &mut self,
        path: &str,
        value: Vector4,
        override_type: bool,
    ) -> Result<(), CfgError> {
        self.assign(path, Value::Vector4(value), override_type)
    }

    /// Drops whatever is stored at `path` and leaves `Null` in its place.
    pub fn set_key_to_null(&mut self, path: &str) -> Result<(), CfgError> {
        self.assign(path, Value::Null, true)
    }
}
