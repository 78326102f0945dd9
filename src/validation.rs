//! Boundary validation for simulation input.
//!
//! Rejects malformed process sets and algorithm parameters before any
//! simulation begins. Clamping inside the engines would silently corrupt
//! the reported averages, so the boundary is the only place these checks
//! run. Detects:
//! - Duplicate process ids
//! - The reserved id 0 (idle sentinel)
//! - Zero burst times
//! - Non-positive algorithm parameters (quantum, queue count)
//!
//! An empty process list is valid input and yields an empty, zero-metric
//! result.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same id.
    DuplicateId,
    /// A process uses id 0, which marks idle slices in timelines.
    ReservedId,
    /// A process has a zero burst time.
    ZeroBurst,
    /// An algorithm parameter is outside its valid range.
    InvalidConfig,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set for simulation.
///
/// Checks:
/// 1. No process uses the reserved id 0
/// 2. No duplicate ids
/// 3. Every burst time is at least 1
///
/// Negative arrival and burst times are unrepresentable at the type
/// level and need no check.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                "Process id 0 is reserved for idle timeline slices",
            ));
        } else if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 3, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_reserved_id() {
        let processes = vec![Process::new(0, 0, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ReservedId));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let processes = vec![Process::new(0, 0, 0), Process::new(2, 1, 4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
