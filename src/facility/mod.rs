//! Facility entities and their construction
//!
//! This module models the facilities a city registry manages.
//!
//! # Overview
//!
//! - **Facility**: common fields, lifecycle status and variant data
//! - **Variants**: hospital, school, office and park details with their
//!   per-variant maintenance, info listing and special operation
//! - **Capabilities**: optional [`Serviceable`] and [`Accessible`] contracts
//! - **FacilityFactory**: validates site data and issues ids and credentials
//! - **Manifest**: JSON description of facilities to load at start-up
//!
//! # Usage Example
//!
//! ```rust
//! use smart_city_registry::facility::*;
//! use smart_city_registry::types::*;
//!
//! let mut factory = FacilityFactory::with_seed(7);
//! let mut hospital = factory
//!     .hospital(SiteSpec::new("City General", 2, 500.0, 200), HospitalPlan::default())
//!     .unwrap();
//!
//! assert_eq!(hospital.maintenance_cost(), 3000.0);
//! assert!(hospital.serviceable().unwrap().supports_service("pharmacy"));
//!
//! let change = hospital.change_status(Status::UnderMaintenance);
//! assert_eq!(change.previous, Status::Operational);
//! assert!(hospital.is_usable());
//! ```

pub mod building;
pub mod capability;
pub mod generator;
pub mod manifest;
pub mod operation;
pub mod variants;

// Re-export all public types for convenience
pub use building::Facility;
pub use capability::{AccessibilityProfile, Accessible, ServiceCatalog, Serviceable};
pub use generator::{
    CapabilityOptions, FacilityFactory, HospitalPlan, OfficePlan, ParkPlan, SchoolPlan, SiteSpec,
};
pub use manifest::{FacilityPlan, Manifest, ManifestError};
pub use operation::{
    ChecklistItem, EventDecision, InfoField, InfoValue, OperationReport, Outcome, SpecificInfo,
    StatusChange,
};
pub use variants::{
    FacilityDetails, HospitalDetails, OfficeDetails, ParkDetails, SchoolDetails, VariantBehavior,
};
