//! Registry management
//!
//! This module holds the facility registry together with its error taxonomy,
//! reports and logging setup.
//!
//! # Overview
//!
//! - **FacilityRegistry**: bounded, ordered collection with CRUD and queries
//! - **RegistryError**: closed set of typed failures
//! - **Reports**: statistics, maintenance, accessibility and priority views
//! - **LoggingConfig**: subscriber setup for front ends
//!
//! # Usage Example
//!
//! ```rust
//! use smart_city_registry::facility::*;
//! use smart_city_registry::manager::*;
//! use smart_city_registry::types::*;
//!
//! let mut registry = FacilityRegistry::with_max_facilities(10);
//! let park = registry
//!     .factory()
//!     .park(SiteSpec::new("Riverside", 1, 1200.0, 300), ParkPlan::new("Urban"))
//!     .unwrap();
//! let id = registry.add(park).unwrap();
//!
//! registry.change_status_by_id(id, Status::Closed).unwrap();
//! assert!(matches!(
//!     registry.find_all_by_status(Status::Operational),
//!     Err(RegistryError::NotFound { .. })
//! ));
//! assert_eq!(registry.statistics().non_usable, 1);
//! ```

pub mod error;
pub mod logging;
pub mod registry;
pub mod statistics;

// Re-export all public types for convenience
pub use error::{
    GuardedOperation, RegistryError, RegistryResult, SearchCriteria, UnavailableReason,
};
pub use logging::{LoggingConfig, LoggingError};
pub use registry::{FacilityRegistry, ServiceQuote};
pub use statistics::{
    AccessibilityEntry, AccessibilityReport, MaintenanceReport, PriorityStatistics,
    RegistryStatistics,
};
