//! Facility construction
//!
//! This module contains the [`FacilityFactory`], which validates site data,
//! applies variant defaults, issues identifiers from its own sequence and
//! draws random credential numbers.

use super::building::Facility;
use super::variants::{
    FacilityDetails, HospitalDetails, OfficeDetails, ParkDetails, SchoolDetails, VariantBehavior,
};
use crate::manager::error::{RegistryError, RegistryResult};
use crate::types::{FacilityId, IdSequence};
use chrono::{Local, NaiveDate};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

fn enabled() -> bool {
    true
}

/// Which optional capabilities a new facility carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityOptions {
    /// Attach the variant's service catalog (ignored for parks)
    #[serde(default = "enabled")]
    pub services: bool,
    /// Attach the variant's accessibility profile
    #[serde(default = "enabled")]
    pub accessibility: bool,
}

impl Default for CapabilityOptions {
    fn default() -> Self {
        Self { services: true, accessibility: true }
    }
}

/// Common site data for a new facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    /// Facility name
    pub name: String,
    /// Number of floors (parks are always built with one)
    #[serde(default = "SiteSpec::default_floors")]
    pub floors: u32,
    /// Area of a single floor in square meters
    pub area_per_floor: f64,
    /// Maximum occupancy
    pub capacity: u32,
    /// Optional capabilities
    #[serde(default)]
    pub capabilities: CapabilityOptions,
}

impl SiteSpec {
    /// Create site data with every capability enabled
    pub fn new(name: impl Into<String>, floors: u32, area_per_floor: f64, capacity: u32) -> Self {
        Self {
            name: name.into(),
            floors,
            area_per_floor,
            capacity,
            capabilities: CapabilityOptions::default(),
        }
    }

    /// Omit the service catalog
    pub fn without_services(mut self) -> Self {
        self.capabilities.services = false;
        self
    }

    /// Omit the accessibility profile
    pub fn without_accessibility(mut self) -> Self {
        self.capabilities.accessibility = false;
        self
    }

    fn default_floors() -> u32 {
        1
    }

    fn validate(&self) -> RegistryResult<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::invalid_data("name", &self.name));
        }
        if self.floors == 0 {
            return Err(RegistryError::invalid_data("floors", self.floors));
        }
        if !self.area_per_floor.is_finite() || self.area_per_floor <= 0.0 {
            return Err(RegistryError::invalid_data("area_per_floor", self.area_per_floor));
        }
        if self.capacity == 0 {
            return Err(RegistryError::invalid_data("capacity", self.capacity));
        }
        Ok(())
    }
}

/// Hospital fields; anything left unset takes the hospital default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitalPlan {
    /// Medical specialization (default "General")
    pub specialization: Option<String>,
    /// Emergency beds (default 20)
    pub emergency_beds: Option<u32>,
    /// Doctors on staff (default 15)
    pub doctor_count: Option<u32>,
    /// Emergency room (default available)
    pub has_emergency_room: Option<bool>,
}

/// School fields; anything left unset takes the school default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolPlan {
    /// Education level taught
    pub education_level: String,
    /// Classrooms (default 15)
    #[serde(default)]
    pub classroom_count: Option<u32>,
    /// Teachers (default 20)
    #[serde(default)]
    pub teacher_count: Option<u32>,
    /// Laboratory (default available)
    #[serde(default)]
    pub has_lab: Option<bool>,
    /// Library (default available)
    #[serde(default)]
    pub has_library: Option<bool>,
}

impl SchoolPlan {
    /// Plan a school with every default
    pub fn new(education_level: impl Into<String>) -> Self {
        Self { education_level: education_level.into(), ..Default::default() }
    }
}

/// Office fields; anything left unset takes the office default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficePlan {
    /// Tenant company
    pub company_name: String,
    /// Line of business
    pub business_type: String,
    /// Employees (default 100)
    #[serde(default)]
    pub employee_count: Option<u32>,
    /// Own parking lot (default yes)
    #[serde(default)]
    pub has_parking_lot: Option<bool>,
    /// Parking spaces (default 50)
    #[serde(default)]
    pub parking_spaces: Option<u32>,
}

impl OfficePlan {
    /// Plan an office with every default
    pub fn new(company_name: impl Into<String>, business_type: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            business_type: business_type.into(),
            ..Default::default()
        }
    }
}

/// Park fields; anything left unset is derived from the site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkPlan {
    /// Type of park
    pub park_type: String,
    /// Green space (default 80% of the area)
    #[serde(default)]
    pub green_space_area: Option<f64>,
    /// Benches (default one per ten visitors of capacity)
    #[serde(default)]
    pub bench_count: Option<u32>,
    /// Playground (default available)
    #[serde(default)]
    pub has_playground: Option<bool>,
    /// Fountain (default available)
    #[serde(default)]
    pub has_fountain: Option<bool>,
}

impl ParkPlan {
    /// Plan a park with every default
    pub fn new(park_type: impl Into<String>) -> Self {
        Self { park_type: park_type.into(), ..Default::default() }
    }
}

/// Builds facilities for one registry
///
/// Owns the identifier sequence, so ids are unique per factory and never
/// reissued. Validation runs before an id is drawn; a rejected plan does not
/// consume one.
pub struct FacilityFactory {
    ids: IdSequence,
    rng: Box<dyn RngCore>,
    construction_date: Option<NaiveDate>,
}

impl fmt::Debug for FacilityFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacilityFactory")
            .field("ids", &self.ids)
            .field("construction_date", &self.construction_date)
            .finish()
    }
}

impl Default for FacilityFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityFactory {
    /// Create a factory with random credentials
    pub fn new() -> Self {
        Self { ids: IdSequence::new(), rng: Box::new(thread_rng()), construction_date: None }
    }

    /// Create a factory whose credentials are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            ids: IdSequence::new(),
            rng: Box::new(StdRng::seed_from_u64(seed)),
            construction_date: None,
        }
    }

    /// Stamp every new facility with `date` instead of today
    pub fn with_construction_date(mut self, date: NaiveDate) -> Self {
        self.construction_date = Some(date);
        self
    }

    /// Number of identifiers issued so far
    pub fn issued(&self) -> u64 {
        self.ids.issued()
    }

    /// Build a hospital
    pub fn hospital(&mut self, site: SiteSpec, plan: HospitalPlan) -> RegistryResult<Facility> {
        site.validate()?;
        let specialization = plan.specialization.unwrap_or_else(|| "General".to_string());
        if specialization.trim().is_empty() {
            return Err(RegistryError::invalid_data("specialization", specialization));
        }

        let details = HospitalDetails {
            license_number: self.rng.gen_range(0..100_000),
            specialization,
            emergency_beds: plan.emergency_beds.unwrap_or(20),
            doctor_count: plan.doctor_count.unwrap_or(15),
            has_emergency_room: plan.has_emergency_room.unwrap_or(true),
        };
        Ok(self.assemble(site, FacilityDetails::Hospital(details)))
    }

    /// Build a school
    pub fn school(&mut self, site: SiteSpec, plan: SchoolPlan) -> RegistryResult<Facility> {
        site.validate()?;
        if plan.education_level.trim().is_empty() {
            return Err(RegistryError::invalid_data("education_level", plan.education_level));
        }

        let details = SchoolDetails {
            accreditation_id: format!("EDU-{}", self.rng.gen_range(0..10_000)),
            education_level: plan.education_level,
            classroom_count: plan.classroom_count.unwrap_or(15),
            teacher_count: plan.teacher_count.unwrap_or(20),
            has_lab: plan.has_lab.unwrap_or(true),
            has_library: plan.has_library.unwrap_or(true),
        };
        Ok(self.assemble(site, FacilityDetails::School(details)))
    }

    /// Build an office
    pub fn office(&mut self, site: SiteSpec, plan: OfficePlan) -> RegistryResult<Facility> {
        site.validate()?;
        if plan.company_name.trim().is_empty() {
            return Err(RegistryError::invalid_data("company_name", plan.company_name));
        }
        if plan.business_type.trim().is_empty() {
            return Err(RegistryError::invalid_data("business_type", plan.business_type));
        }

        let has_parking_lot = plan.has_parking_lot.unwrap_or(true);
        let details = OfficeDetails {
            business_license_id: format!("BIZ-{}", self.rng.gen_range(0..100_000)),
            company_name: plan.company_name,
            business_type: plan.business_type,
            employee_count: plan.employee_count.unwrap_or(100),
            has_parking_lot,
            parking_spaces: if has_parking_lot { plan.parking_spaces.unwrap_or(50) } else { 0 },
        };
        Ok(self.assemble(site, FacilityDetails::Office(details)))
    }

    /// Build a park; the site is forced to a single floor
    pub fn park(&mut self, mut site: SiteSpec, plan: ParkPlan) -> RegistryResult<Facility> {
        site.floors = 1;
        site.validate()?;
        if plan.park_type.trim().is_empty() {
            return Err(RegistryError::invalid_data("park_type", plan.park_type));
        }

        let green_space_area = plan.green_space_area.unwrap_or(site.area_per_floor * 0.8);
        if !green_space_area.is_finite() || green_space_area < 0.0 {
            return Err(RegistryError::invalid_data("green_space_area", green_space_area));
        }

        let details = ParkDetails {
            registration_id: format!("PARK-{}", self.rng.gen_range(0..10_000)),
            park_type: plan.park_type,
            green_space_area,
            bench_count: plan.bench_count.unwrap_or(site.capacity / 10),
            has_playground: plan.has_playground.unwrap_or(true),
            has_fountain: plan.has_fountain.unwrap_or(true),
        };
        Ok(self.assemble(site, FacilityDetails::Park(details)))
    }

    fn assemble(&mut self, site: SiteSpec, details: FacilityDetails) -> Facility {
        let id: FacilityId = self.ids.next_id();
        let behavior = details.behavior();
        let services =
            if site.capabilities.services { behavior.default_services() } else { None };
        let accessibility = if site.capabilities.accessibility {
            Some(behavior.default_accessibility(site.floors))
        } else {
            None
        };
        let construction_date =
            self.construction_date.unwrap_or_else(|| Local::now().date_naive());

        trace!(facility_id = %id, kind = %details.kind(), name = %site.name, "Facility built");

        Facility::new(
            id,
            site.name,
            site.floors,
            site.area_per_floor,
            site.capacity,
            construction_date,
            details,
            services,
            accessibility,
        )
    }
}
