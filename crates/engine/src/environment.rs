//! Process environment writes.
//!
//! Invariants:
//! - Every write goes through `export_variable`.
//! - Names and values that the platform cannot store are rejected, not panicked on.
//! - Values are never logged.

/// Check that `name=value` can be stored in the process environment.
pub fn validate(name: &str, value: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("variable name is empty");
    }
    if name.contains('=') {
        return Err("variable name contains '='");
    }
    if name.contains('\0') {
        return Err("variable name contains a NUL byte");
    }
    if value.contains('\0') {
        return Err("value contains a NUL byte");
    }
    Ok(())
}

/// Set `name=value` in the process environment.
pub fn export_variable(name: &str, value: &str) -> Result<(), &'static str> {
    validate(name, value)?;
    // SAFETY: activation runs on a single thread before any child process
    // or SDK runtime worker reads the environment concurrently.
    unsafe {
        std::env::set_var(name, value);
    }
    tracing::debug!(variable = %name, "Exported variable");
    Ok(())
}
