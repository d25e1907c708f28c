//! Error types and handling
//!
//! This module contains the closed set of failures raised by facility
//! construction and registry operations.

use crate::types::{FacilityId, FacilityKind, Status};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What a failed lookup was searching for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchCriteria {
    /// Position in the registry
    Index(usize),
    /// Case-insensitive facility name
    Name(String),
    /// Facility identifier
    Id(FacilityId),
    /// Facility kind
    Kind(FacilityKind),
    /// Lifecycle status
    Status(Status),
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCriteria::Index(index) => write!(f, "index {}", index),
            SearchCriteria::Name(name) => write!(f, "name '{}'", name),
            SearchCriteria::Id(id) => write!(f, "id {}", id),
            SearchCriteria::Kind(kind) => write!(f, "kind {}", kind),
            SearchCriteria::Status(status) => write!(f, "status {}", status),
        }
    }
}

/// Operation that requires a usable facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuardedOperation {
    /// Checking an occupancy against capacity
    OccupancyCheck,
    /// Requesting a service
    ServiceRequest,
}

impl fmt::Display for GuardedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardedOperation::OccupancyCheck => write!(f, "occupancy-check"),
            GuardedOperation::ServiceRequest => write!(f, "service-request"),
        }
    }
}

/// Why a service request could not be met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnavailableReason {
    /// The facility offers no services at all
    NoServiceCapability,
    /// The facility offers services, but not this one
    NotOffered,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NoServiceCapability => write!(f, "facility offers no services"),
            UnavailableReason::NotOffered => write!(f, "service not offered"),
        }
    }
}

/// Errors raised by facility construction and registry operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Registry already holds its maximum number of facilities
    #[error("City has reached maximum facility capacity ({current}/{max})")]
    CapacityExceeded {
        /// Facilities currently held
        current: usize,
        /// Registry bound
        max: usize,
    },

    /// Lookup or removal matched nothing
    #[error("Facility not found for {criteria}")]
    NotFound {
        /// What was searched for
        criteria: SearchCriteria,
    },

    /// Facility status does not permit the operation
    #[error("Facility is {current} and cannot perform {operation}")]
    StatusInvalid {
        /// Status at the time of the call
        current: Status,
        /// Operation that was attempted
        operation: GuardedOperation,
    },

    /// Occupancy is above the facility capacity
    #[error("Occupancy {occupancy} exceeds facility capacity {capacity}")]
    CapacityViolation {
        /// Requested occupancy
        occupancy: u32,
        /// Facility capacity
        capacity: u32,
    },

    /// Requested service is not available at the facility
    #[error("Service '{service}' unavailable at {facility}: {reason}")]
    ServiceUnavailable {
        /// Requested service
        service: String,
        /// Facility name
        facility: String,
        /// Why it is unavailable
        reason: UnavailableReason,
    },

    /// Input value is out of range or clashes with registry state
    #[error("Invalid {field}: '{value}'")]
    InvalidData {
        /// Offending field
        field: &'static str,
        /// Offending value, rendered
        value: String,
    },
}

impl RegistryError {
    /// Create a not-found error
    pub fn not_found(criteria: SearchCriteria) -> Self {
        Self::NotFound { criteria }
    }

    /// Create an invalid-data error
    pub fn invalid_data(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidData { field, value: value.to_string() }
    }

    /// Check if the caller can reasonably retry after changing registry state
    pub fn is_recoverable(&self) -> bool {
        match self {
            RegistryError::CapacityExceeded { .. } => true,
            RegistryError::NotFound { .. } => true,
            RegistryError::StatusInvalid { .. } => true,
            RegistryError::CapacityViolation { .. } => true,
            RegistryError::ServiceUnavailable { reason, .. } => {
                *reason == UnavailableReason::NotOffered
            }
            RegistryError::InvalidData { .. } => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            RegistryError::CapacityExceeded { .. } => "City Capacity",
            RegistryError::NotFound { .. } => "Lookup",
            RegistryError::StatusInvalid { .. } => "Facility Status",
            RegistryError::CapacityViolation { .. } => "Facility Capacity",
            RegistryError::ServiceUnavailable { .. } => "Service",
            RegistryError::InvalidData { .. } => "Data Validation",
        }
    }

    /// Multi-line diagnostic for operators
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        match self {
            RegistryError::CapacityExceeded { current, max } => {
                message.push_str(&format!("\nCurrent Facilities: {}", current));
                message.push_str(&format!("\nMaximum Allowed: {}", max));
            }
            RegistryError::NotFound { criteria } => {
                message.push_str(&format!("\nSearch Criteria: {}", criteria));
            }
            RegistryError::StatusInvalid { current, operation } => {
                message.push_str(&format!("\nCurrent Status: {}", current));
                message.push_str(&format!("\nAttempted Operation: {}", operation));
                message.push_str(&format!("\nRecommendation: {}", current.recommended_action()));
            }
            RegistryError::CapacityViolation { occupancy, capacity } => {
                message.push_str(&format!("\nCurrent Occupancy: {}", occupancy));
                message.push_str(&format!("\nMaximum Capacity: {}", capacity));
                message.push_str(&format!(
                    "\nOvercapacity: {}",
                    occupancy.saturating_sub(*capacity)
                ));
            }
            RegistryError::ServiceUnavailable { service, facility, .. } => {
                message.push_str(&format!("\nService Requested: {}", service));
                message.push_str(&format!("\nFacility: {}", facility));
            }
            RegistryError::InvalidData { field, value } => {
                message.push_str(&format!("\nField: {}", field));
                message.push_str(&format!("\nInvalid Value: {}", value));
            }
        }
        message
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
