//! Status and confirmation message types.

use std::fmt;

/// A simple success or failure message for operations whose result
/// needs no resource display.
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    /// Creates a success status with the given message.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Creates a failure status with the given message.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            writeln!(f, "{}", self.message)
        } else {
            writeln!(f, "Error: {}", self.message)
        }
    }
}
