use super::color::Vec4Color;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use std::collections::HashMap;
use tinyjson::InnerAsRef;
use tinyjson::JsonValue;

pub fn read_value<T>(data: &HashMap<String, JsonValue>, name: &str) -> Result<T>
where
    T: Clone + Default + InnerAsRef,
{
    let value = data.get(name).ok_or_else(|| anyhow!("Failed to read {}", name))?;
    if value.is_null() {
        return Ok(Default::default());
    }

    Ok(value.get::<T>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone())
}

/// Like `read_value`, but a missing key is treated the same as `null`.
pub fn read_value_nullable<T>(data: &HashMap<String, JsonValue>, name: &str) -> Result<Option<T>>
where
    T: Clone + Default + InnerAsRef,
{
    let value = match data.get(name) {
        Some(value) => value,
        None => return Ok(None),
    };

    if value.is_null() {
        return Ok(None);
    }

    Ok(Some(value.get::<T>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone()))
}

pub fn read_color(data: &HashMap<String, JsonValue>, name: &str) -> Result<Vec4> {
    let value = data.get(name).ok_or_else(|| anyhow!("Failed to read {}", name))?;
    if value.is_null() {
        return Ok(Vec4::new(0.0, 0.0, 0.0, 1.0));
    }
    let parsed = value.get::<String>().ok_or_else(|| anyhow!("Failed to parse {}", name))?;

    Vec4::from_hex(parsed)
}

pub fn read_position(data: &HashMap<String, JsonValue>, name: &str) -> Result<Vec2> {
    let position = match data.get(name) {
        Some(JsonValue::Array(array)) => array,
        _ => bail!("Failed to read {}", name),
    };

    let x = match position.first() {
        Some(JsonValue::Number(value)) => *value as f32,
        _ => bail!("Failed to parse {}", name),
    };
    let y = match position.get(1) {
        Some(JsonValue::Number(value)) => *value as f32,
        _ => bail!("Failed to parse {}", name),
    };

    Ok(Vec2::new(x, y))
}
