//! Smart City Registry
//!
//! An in-memory registry of city facilities (hospitals, schools, offices and
//! parks) with typed CRUD, filtered queries, polymorphic maintenance and service
//! costing, and a lifecycle status model.
//!
//! # Overview
//!
//! Facilities share a common set of fields and differ in their variant data.
//! Each facility may carry a service catalog and an accessibility profile;
//! callers ask for a capability at runtime instead of relying on the kind.
//! Every operation returns a typed [`RegistryError`] on failure and leaves the
//! registry untouched.
//!
//! ## Key Features
//!
//! - **Typed Entities**: one [`Facility`] struct over four variants
//! - **Optional Capabilities**: [`Serviceable`] and [`Accessible`] per instance
//! - **Status Lifecycle**: operational levels drive occupancy and service checks
//! - **Bounded Registry**: insertion order, index and id lookups, filtered queries
//! - **Reports**: statistics, maintenance, accessibility and priority summaries
//! - **Manifests**: JSON descriptions of facilities to load at start-up
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_city_registry::*;
//!
//! let mut registry = FacilityRegistry::new();
//! let hospital = registry
//!     .factory()
//!     .hospital(SiteSpec::new("City General", 2, 500.0, 200), HospitalPlan::default())?;
//! let id = registry.add(hospital)?;
//!
//! assert_eq!(registry.total_maintenance_cost(), 3000.0);
//!
//! let hospital = registry.find_by_id(id)?;
//! let quote = registry.request_service(hospital, "Emergency Care", 2)?;
//! assert_eq!(quote.total, 850.0 * 2.0 * 1.5);
//!
//! registry.change_status_by_id(id, Status::UnderConstruction)?;
//! let hospital = registry.find_by_id(id)?;
//! assert!(registry.validate_occupancy(hospital, 10).is_err());
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, classification enums and configuration
//! - [`facility`]: Facility entity, variants, capabilities, factory and manifests
//! - [`manager`]: Registry, errors, reports and logging setup
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod manager;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    FacilityId,
    // Enums
    FacilityKind,
    IdSequence,
    OutputFormat,
    RegistryConfig,
    Status,
};

// Facility types and functionality
pub use facility::{
    Accessible, Facility, FacilityDetails, FacilityFactory, FacilityPlan, HospitalPlan, Manifest,
    ManifestError, OfficePlan, ParkPlan, SchoolPlan, Serviceable, SiteSpec, SpecificInfo,
    StatusChange,
};

// Registry types and functionality
pub use manager::{
    FacilityRegistry, LoggingConfig, RegistryError, RegistryResult, RegistryStatistics,
    ServiceQuote,
};
