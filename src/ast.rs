use serde::Serialize;

use crate::HppError;

/// A coerced variable value: a quoted string, a number, or a flat array
/// of the former two.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Array(Vec<Value>),
}

/// One class in the parsed tree. The root node has an empty name and
/// represents the whole file; only its children are meaningful pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub name: String,
    pub variables: Vec<(String, Value)>, // insertion order, unique per case-insensitive name
    pub classes: Vec<ClassNode>,         // insertion order = source order
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self { Some(*n) } else { None }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self { Some(items) } else { None }
    }
}

impl ClassNode {
    pub(crate) fn root() -> Self {
        Self::named(String::new())
    }

    pub(crate) fn named(name: String) -> Self {
        ClassNode {
            name,
            variables: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Names of the variables held by this class, in declaration order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Names of the child classes, in declaration order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|class| class.name.as_str()).collect()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a child class by case-insensitive name. With duplicate
    /// sibling names the most recently declared one wins.
    pub fn class(&self, name: &str) -> Result<&ClassNode, HppError> {
        self.classes
            .iter()
            .rev()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| HppError::UnknownClass {
                name: name.to_string(),
                hint: Some("Check the class name against class_names()".into()),
                code: Some(401),
            })
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Look up a variable by case-insensitive name.
    pub fn variable(&self, name: &str) -> Result<&Value, HppError> {
        self.variables
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
            .ok_or_else(|| HppError::UnknownVariable {
                name: name.to_string(),
                hint: Some("Check the variable name against variable_names()".into()),
                code: Some(402),
            })
    }

    /// Insert or overwrite a variable. A reassignment under a
    /// case-insensitive match keeps the first spelling and list position.
    pub(crate) fn set_variable(&mut self, name: String, value: Value) {
        if let Some(slot) = self
            .variables
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            slot.1 = value;
        } else {
            self.variables.push((name, value));
        }
    }
}
