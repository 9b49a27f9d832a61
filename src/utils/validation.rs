use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(DemoError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Supported values: {}", allowed.join(", ")),
    })
}

pub fn validate_max_len<T>(field_name: &str, items: &[T], max: usize) -> Result<()> {
    if items.len() > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} items", items.len()),
            reason: format!("At most {} items are allowed", max),
        });
    }
    Ok(())
}

/// `true` when `min <= value <= max`.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
