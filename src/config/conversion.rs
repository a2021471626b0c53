use crate::{HppError, Value};

impl TryFrom<Value> for String {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(HppError::TypeError {
                message: format!("Expected string, got {:?}", value),
                hint: Some("Use a quoted value in your config".into()),
                code: Some(411),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(HppError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(412),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for i32 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as i32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as i64)
    }
}

impl TryFrom<Value> for u8 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        if n >= 0.0 && n <= u8::MAX as f64 {
            Ok(n as u8)
        } else {
            Err(HppError::TypeError {
                message: format!("Number {} out of range for u8", n),
                hint: Some("Use a number between 0 and 255".into()),
                code: Some(413),
            })
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        if n >= 0.0 && n <= u16::MAX as f64 {
            Ok(n as u16)
        } else {
            Err(HppError::TypeError {
                message: format!("Number {} out of range for u16", n),
                hint: Some("Use a number between 0 and 65535".into()),
                code: Some(413),
            })
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        if n >= 0.0 && n <= u32::MAX as f64 {
            Ok(n as u32)
        } else {
            Err(HppError::TypeError {
                message: format!("Number {} out of range for u32", n),
                hint: Some("Use a number between 0 and 4294967295".into()),
                code: Some(413),
            })
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        if n >= 0.0 && n <= u64::MAX as f64 {
            Ok(n as u64)
        } else {
            Err(HppError::TypeError {
                message: format!("Number {} out of range for u64", n),
                hint: Some("Use a positive number within u64 range".into()),
                code: Some(413),
            })
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = f64::try_from(value)?;
        if n >= 0.0 {
            Ok(n as usize)
        } else {
            Err(HppError::TypeError {
                message: format!("Number {} out of range for usize", n),
                hint: Some("Use a positive integer".into()),
                code: Some(413),
            })
        }
    }
}

/// The source language writes flags as `0` and `1`.
impl TryFrom<Value> for bool {
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) if n == 0.0 => Ok(false),
            Value::Number(n) if n == 1.0 => Ok(true),
            _ => Err(HppError::TypeError {
                message: format!("Expected flag (0 or 1), got {:?}", value),
                hint: Some("Flags are written as 0 and 1 in this format".into()),
                code: Some(414),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = HppError>,
{
    type Error = HppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::new();
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(HppError::TypeError {
                message: format!("Expected array, got {:?}", value),
                hint: Some("Use an array variable (`name[] = {...};`) in your config".into()),
                code: Some(415),
            }),
        }
    }
}
