//! Status messages for operations that return no resource.

use std::fmt;

/// A one-line success message, used for reorders and compactions.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let status = OperationStatus::success("Reordered 3 sections");
        assert_eq!(format!("{status}"), "Success: Reordered 3 sections\n");
    }
}
