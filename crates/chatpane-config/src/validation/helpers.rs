//! Shared validation helpers used by the section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `path` does not start with `/`.
pub(crate) fn validate_path(errors: &mut Vec<String>, name: &str, path: &str) {
    if !path.starts_with('/') {
        errors.push(format!("{name} = {path:?} must start with '/'"));
    }
}
