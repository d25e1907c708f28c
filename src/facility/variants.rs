//! Variant-specific facility data and behaviour
//!
//! Each variant stores its own fields in a details struct. The
//! [`VariantBehavior`] trait supplies the per-variant part of maintenance
//! costing, the specific-info listing, the special operation checklist and the
//! default capabilities.

use super::capability::{AccessibilityProfile, ServiceCatalog};
use super::operation::{InfoField, InfoValue, OperationReport, Outcome};
use crate::types::FacilityKind;
use serde::Serialize;

/// Behaviour that differs between facility variants
pub trait VariantBehavior {
    /// Kind this variant belongs to
    fn kind(&self) -> FacilityKind;

    /// Variant addition on top of the area-based maintenance cost
    fn maintenance_surcharge(&self) -> f64;

    /// Labelled variant-only fields, in display order
    fn info_fields(&self) -> Vec<InfoField>;

    /// Variant checklist
    fn special_operation(&self) -> OperationReport;

    /// Service catalog the variant offers by default, if any
    fn default_services(&self) -> Option<ServiceCatalog>;

    /// Accessibility profile the variant provides by default
    fn default_accessibility(&self, floors: u32) -> AccessibilityProfile;
}

/// Hospital-only data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalDetails {
    /// Licence number issued at construction
    pub license_number: u32,
    /// Medical specialization
    pub specialization: String,
    /// Emergency beds
    pub emergency_beds: u32,
    /// Doctors on staff
    pub doctor_count: u32,
    /// Whether an emergency room is available
    pub has_emergency_room: bool,
}

impl VariantBehavior for HospitalDetails {
    fn kind(&self) -> FacilityKind {
        FacilityKind::Hospital
    }

    fn maintenance_surcharge(&self) -> f64 {
        f64::from(self.emergency_beds) * 50.0 + f64::from(self.doctor_count) * 100.0
    }

    fn info_fields(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("License Number", InfoValue::Text(self.license_number.to_string())),
            InfoField::new("Specialization", InfoValue::Text(self.specialization.clone())),
            InfoField::new("Emergency Beds", InfoValue::Count(self.emergency_beds)),
            InfoField::new("Number of Doctors", InfoValue::Count(self.doctor_count)),
            InfoField::new("Emergency Room", InfoValue::Available(self.has_emergency_room)),
        ]
    }

    fn special_operation(&self) -> OperationReport {
        OperationReport::new("Hospital Special Operation")
            .step("Conducting emergency drill", Outcome::Completed)
            .step("Testing medical equipment", Outcome::Completed)
            .step("Verifying emergency protocols", Outcome::Verified)
            .step_if(self.has_emergency_room, "Emergency room readiness", Outcome::Confirmed)
    }

    fn default_services(&self) -> Option<ServiceCatalog> {
        let services = vec![
            "Emergency Care".to_string(),
            format!("{} Treatment", self.specialization),
            "Diagnostic Services".to_string(),
            "Pharmacy".to_string(),
            "Laboratory Tests".to_string(),
            "Outpatient Consultation".to_string(),
        ];
        Some(ServiceCatalog::new(services, 100.0 + f64::from(self.doctor_count) * 50.0))
    }

    fn default_accessibility(&self, _floors: u32) -> AccessibilityProfile {
        AccessibilityProfile::new(true, true, 10)
    }
}

/// School-only data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolDetails {
    /// Accreditation identifier issued at construction
    pub accreditation_id: String,
    /// Education level taught
    pub education_level: String,
    /// Classrooms
    pub classroom_count: u32,
    /// Teachers on staff
    pub teacher_count: u32,
    /// Whether a laboratory is available
    pub has_lab: bool,
    /// Whether a library is available
    pub has_library: bool,
}

impl VariantBehavior for SchoolDetails {
    fn kind(&self) -> FacilityKind {
        FacilityKind::School
    }

    fn maintenance_surcharge(&self) -> f64 {
        let mut cost =
            f64::from(self.classroom_count) * 30.0 + f64::from(self.teacher_count) * 20.0;
        if self.has_lab {
            cost += 500.0;
        }
        if self.has_library {
            cost += 300.0;
        }
        cost
    }

    fn info_fields(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("Accreditation ID", InfoValue::Text(self.accreditation_id.clone())),
            InfoField::new("Education Level", InfoValue::Text(self.education_level.clone())),
            InfoField::new("Classrooms", InfoValue::Count(self.classroom_count)),
            InfoField::new("Teachers", InfoValue::Count(self.teacher_count)),
            InfoField::new("Laboratory", InfoValue::Available(self.has_lab)),
            InfoField::new("Library", InfoValue::Available(self.has_library)),
        ]
    }

    fn special_operation(&self) -> OperationReport {
        OperationReport::new("School Special Operation")
            .step("Conducting safety drill", Outcome::Completed)
            .step("Checking educational equipment", Outcome::Completed)
            .step("Reviewing curriculum materials", Outcome::Completed)
            .step_if(self.has_lab, "Laboratory safety check", Outcome::Completed)
            .step_if(self.has_library, "Library inventory", Outcome::Verified)
    }

    fn default_services(&self) -> Option<ServiceCatalog> {
        let services = vec![
            format!("{} Education", self.education_level),
            "Classroom Teaching".to_string(),
            "Library Access".to_string(),
            "Laboratory Sessions".to_string(),
            "Sports Activities".to_string(),
            "Counseling Services".to_string(),
        ];
        Some(ServiceCatalog::new(services, 50.0 + f64::from(self.teacher_count) * 30.0))
    }

    fn default_accessibility(&self, floors: u32) -> AccessibilityProfile {
        // Single-storey schools have no elevator
        AccessibilityProfile::new(true, floors > 1, 5)
    }
}

/// Office-only data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeDetails {
    /// Business licence identifier issued at construction
    pub business_license_id: String,
    /// Tenant company
    pub company_name: String,
    /// Line of business
    pub business_type: String,
    /// Employees on site
    pub employee_count: u32,
    /// Whether the office has its own parking lot
    pub has_parking_lot: bool,
    /// Spaces in the parking lot
    pub parking_spaces: u32,
}

impl VariantBehavior for OfficeDetails {
    fn kind(&self) -> FacilityKind {
        FacilityKind::Office
    }

    fn maintenance_surcharge(&self) -> f64 {
        let mut cost = f64::from(self.employee_count) * 15.0;
        if self.has_parking_lot {
            cost += f64::from(self.parking_spaces) * 10.0;
        }
        cost
    }

    fn info_fields(&self) -> Vec<InfoField> {
        let parking = if self.has_parking_lot {
            InfoValue::Text(format!("{} spaces", self.parking_spaces))
        } else {
            InfoValue::Available(false)
        };

        vec![
            InfoField::new("Business License", InfoValue::Text(self.business_license_id.clone())),
            InfoField::new("Company", InfoValue::Text(self.company_name.clone())),
            InfoField::new("Business Type", InfoValue::Text(self.business_type.clone())),
            InfoField::new("Employees", InfoValue::Count(self.employee_count)),
            InfoField::new("Parking", parking),
        ]
    }

    fn special_operation(&self) -> OperationReport {
        OperationReport::new("Office Special Operation")
            .step("Running network diagnostics", Outcome::Completed)
            .step("Testing HVAC systems", Outcome::Completed)
            .step("Checking security systems", Outcome::Completed)
            .step_if(self.has_parking_lot, "Parking lot maintenance", Outcome::Scheduled)
    }

    fn default_services(&self) -> Option<ServiceCatalog> {
        let services = vec![
            format!("{} Services", self.business_type),
            "Office Space Rental".to_string(),
            "Meeting Rooms".to_string(),
            "High-Speed Internet".to_string(),
            "Parking Services".to_string(),
            "Reception Services".to_string(),
        ];
        Some(ServiceCatalog::new(services, 75.0 + f64::from(self.employee_count) * 10.0))
    }

    fn default_accessibility(&self, _floors: u32) -> AccessibilityProfile {
        AccessibilityProfile::new(true, true, 5)
    }
}

/// Park-only data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkDetails {
    /// Registration identifier issued at construction
    pub registration_id: String,
    /// Type of park
    pub park_type: String,
    /// Green space in square meters
    pub green_space_area: f64,
    /// Benches
    pub bench_count: u32,
    /// Whether a playground is available
    pub has_playground: bool,
    /// Whether a fountain is available
    pub has_fountain: bool,
}

impl VariantBehavior for ParkDetails {
    fn kind(&self) -> FacilityKind {
        FacilityKind::Park
    }

    fn maintenance_surcharge(&self) -> f64 {
        let mut cost = self.green_space_area * 0.3 + f64::from(self.bench_count) * 5.0;
        if self.has_playground {
            cost += 200.0;
        }
        if self.has_fountain {
            cost += 150.0;
        }
        cost
    }

    fn info_fields(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("Registration ID", InfoValue::Text(self.registration_id.clone())),
            InfoField::new("Park Type", InfoValue::Text(self.park_type.clone())),
            InfoField::new("Green Space", InfoValue::Area(self.green_space_area)),
            InfoField::new("Playground", InfoValue::Available(self.has_playground)),
            InfoField::new("Fountain", InfoValue::Available(self.has_fountain)),
            InfoField::new("Benches", InfoValue::Count(self.bench_count)),
        ]
    }

    fn special_operation(&self) -> OperationReport {
        OperationReport::new("Park Special Operation")
            .step("Organizing community event", Outcome::InProgress)
            .step("Landscape maintenance", Outcome::InProgress)
            .step_if(self.has_playground, "Playground safety inspection", Outcome::Completed)
            .step_if(self.has_fountain, "Fountain maintenance", Outcome::Completed)
    }

    fn default_services(&self) -> Option<ServiceCatalog> {
        None
    }

    fn default_accessibility(&self, _floors: u32) -> AccessibilityProfile {
        // Parks are single level
        AccessibilityProfile::new(true, false, 3)
    }
}

/// Variant data of a facility
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityDetails {
    /// Hospital variant
    Hospital(HospitalDetails),
    /// School variant
    School(SchoolDetails),
    /// Office variant
    Office(OfficeDetails),
    /// Park variant
    Park(ParkDetails),
}

impl FacilityDetails {
    /// Behaviour table entry for this variant
    pub fn behavior(&self) -> &dyn VariantBehavior {
        match self {
            FacilityDetails::Hospital(details) => details,
            FacilityDetails::School(details) => details,
            FacilityDetails::Office(details) => details,
            FacilityDetails::Park(details) => details,
        }
    }

    /// Kind this variant belongs to
    pub fn kind(&self) -> FacilityKind {
        self.behavior().kind()
    }
}
