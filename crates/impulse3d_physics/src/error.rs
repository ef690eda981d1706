//! Physics error types
//!
//! Errors are limited to invalid physical parameters handed to constructors
//! and setters. Simulation steps themselves never fail.

use std::fmt;

/// Error type for invalid physical parameters
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass was negative or not a finite number
    InvalidMass(f32),
    /// Shape dimensions were zero, negative or not finite
    InvalidShape(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass(mass) => {
                write!(f, "Invalid mass {}: must be finite and >= 0", mass)
            }
            PhysicsError::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
        }
    }
}

impl std::error::Error for PhysicsError {}
