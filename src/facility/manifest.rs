//! JSON facility manifests
//!
//! A manifest lists the facilities to load into a registry at start-up. Each
//! entry is tagged with its kind and carries the site data, optional overrides
//! of the variant defaults, and an optional initial status.
//!
//! ```json
//! {
//!   "facilities": [
//!     { "kind": "hospital", "name": "City General", "floors": 2,
//!       "area_per_floor": 500.0, "capacity": 200 },
//!     { "kind": "park", "name": "Riverside", "area_per_floor": 1200.0,
//!       "capacity": 300, "park_type": "Urban", "status": "UnderMaintenance" }
//!   ]
//! }
//! ```

use super::building::Facility;
use super::generator::{FacilityFactory, HospitalPlan, OfficePlan, ParkPlan, SchoolPlan, SiteSpec};
use crate::manager::error::{RegistryError, RegistryResult};
use crate::types::Status;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One facility to build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FacilityPlan {
    /// A hospital
    Hospital {
        /// Site data
        #[serde(flatten)]
        site: SiteSpec,
        /// Variant overrides
        #[serde(flatten)]
        plan: HospitalPlan,
        /// Initial status (default operational)
        #[serde(default)]
        status: Option<Status>,
    },
    /// A school
    School {
        /// Site data
        #[serde(flatten)]
        site: SiteSpec,
        /// Variant overrides
        #[serde(flatten)]
        plan: SchoolPlan,
        /// Initial status (default operational)
        #[serde(default)]
        status: Option<Status>,
    },
    /// An office
    Office {
        /// Site data
        #[serde(flatten)]
        site: SiteSpec,
        /// Variant overrides
        #[serde(flatten)]
        plan: OfficePlan,
        /// Initial status (default operational)
        #[serde(default)]
        status: Option<Status>,
    },
    /// A park
    Park {
        /// Site data
        #[serde(flatten)]
        site: SiteSpec,
        /// Variant overrides
        #[serde(flatten)]
        plan: ParkPlan,
        /// Initial status (default operational)
        #[serde(default)]
        status: Option<Status>,
    },
}

impl FacilityPlan {
    /// Build the facility through `factory` and apply the initial status
    pub fn build(&self, factory: &mut FacilityFactory) -> RegistryResult<Facility> {
        let (mut facility, status) = match self {
            FacilityPlan::Hospital { site, plan, status } => {
                (factory.hospital(site.clone(), plan.clone())?, *status)
            }
            FacilityPlan::School { site, plan, status } => {
                (factory.school(site.clone(), plan.clone())?, *status)
            }
            FacilityPlan::Office { site, plan, status } => {
                (factory.office(site.clone(), plan.clone())?, *status)
            }
            FacilityPlan::Park { site, plan, status } => {
                (factory.park(site.clone(), plan.clone())?, *status)
            }
        };

        if let Some(status) = status {
            facility.change_status(status);
        }
        Ok(facility)
    }

    /// Name of the planned facility
    pub fn name(&self) -> &str {
        match self {
            FacilityPlan::Hospital { site, .. }
            | FacilityPlan::School { site, .. }
            | FacilityPlan::Office { site, .. }
            | FacilityPlan::Park { site, .. } => &site.name,
        }
    }
}

/// Facilities to load into a registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Facilities in load order
    #[serde(default)]
    pub facilities: Vec<FacilityPlan>,
}

/// Manifest loading errors
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest file not found: {0}")]
    FileNotFound(String),

    /// Manifest file read error
    #[error("Failed to read manifest file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse manifest: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A planned facility was rejected
    #[error("Failed to load facility '{name}': {source}")]
    Rejected {
        /// Name of the rejected facility
        name: String,
        /// Registry error that rejected it
        #[source]
        source: RegistryError,
    },
}

impl Manifest {
    /// Parse a manifest from JSON text
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ManifestError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of planned facilities
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether the manifest plans nothing
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacilityKind;

    const SAMPLE: &str = r#"{
        "facilities": [
            { "kind": "hospital", "name": "City General", "floors": 2,
              "area_per_floor": 500.0, "capacity": 200, "doctor_count": 30 },
            { "kind": "school", "name": "North High", "floors": 3,
              "area_per_floor": 700.0, "capacity": 600, "education_level": "High School" },
            { "kind": "office", "name": "Tower One", "floors": 12,
              "area_per_floor": 900.0, "capacity": 1500,
              "company_name": "Acme", "business_type": "Finance", "has_parking_lot": false },
            { "kind": "park", "name": "Riverside", "area_per_floor": 1200.0,
              "capacity": 300, "park_type": "Urban", "status": "UnderMaintenance",
              "capabilities": { "accessibility": false } }
        ]
    }"#;

    #[test]
    fn test_parse_tagged_plans() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.len(), 4);
        assert_eq!(manifest.facilities[0].name(), "City General");

        match &manifest.facilities[0] {
            FacilityPlan::Hospital { plan, .. } => assert_eq!(plan.doctor_count, Some(30)),
            other => panic!("Expected hospital plan, got {:?}", other),
        }
        match &manifest.facilities[3] {
            FacilityPlan::Park { site, status, .. } => {
                assert_eq!(site.floors, 1);
                assert!(site.capabilities.services);
                assert!(!site.capabilities.accessibility);
                assert_eq!(*status, Some(Status::UnderMaintenance));
            }
            other => panic!("Expected park plan, got {:?}", other),
        }
    }

    #[test]
    fn test_build_applies_status() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        let mut factory = FacilityFactory::with_seed(1);

        let park = manifest.facilities[3].build(&mut factory).unwrap();
        assert_eq!(park.kind(), FacilityKind::Park);
        assert_eq!(park.status(), Status::UnderMaintenance);
        assert!(park.accessible().is_none());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "facilities": [ { "kind": "castle", "name": "X",
            "area_per_floor": 1.0, "capacity": 1 } ] }"#;
        assert!(matches!(Manifest::from_json(json), Err(ManifestError::JsonError(_))));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_json("{}").unwrap();
        assert!(manifest.is_empty());
    }
}
