//! Tests for optional capabilities and variant behaviour
//!
//! These tests verify per-variant service catalogs, accessibility profiles,
//! special operations and the service request flow.

use smart_city_registry::facility::{
    Accessible, FacilityFactory, HospitalPlan, InfoValue, OfficePlan, ParkPlan, SchoolPlan,
    Serviceable, SiteSpec,
};
use smart_city_registry::manager::{FacilityRegistry, RegistryError, UnavailableReason};
use smart_city_registry::types::Status;

fn factory() -> FacilityFactory {
    FacilityFactory::with_seed(5)
}

/// Test hospital services and accessibility
#[test]
fn test_hospital_capabilities() {
    let plan = HospitalPlan {
        specialization: Some("Cardiology".to_string()),
        doctor_count: Some(10),
        ..Default::default()
    };
    let hospital = factory().hospital(SiteSpec::new("Heart Center", 3, 400.0, 150), plan).unwrap();

    let services = hospital.serviceable().unwrap();
    assert_eq!(
        services.list_services(),
        vec![
            "Emergency Care",
            "Cardiology Treatment",
            "Diagnostic Services",
            "Pharmacy",
            "Laboratory Tests",
            "Outpatient Consultation",
        ]
    );
    assert_eq!(services.base_service_cost(), 600.0);
    assert!(services.supports_service("CARDIOLOGY TREATMENT"));

    let access = hospital.accessible().unwrap();
    assert!(access.fully_accessible());
    assert_eq!(access.accessible_parking_spots(), 10);
    assert_eq!(access.accessibility_standard(), "ADA Compliant");
}

/// Test school services and floor-dependent elevator
#[test]
fn test_school_capabilities() {
    let mut factory = factory();
    let single = factory.school(SiteSpec::new("Little Oaks", 1, 300.0, 80), SchoolPlan::new("Primary")).unwrap();
    let tall = factory.school(SiteSpec::new("North High", 3, 600.0, 500), SchoolPlan::new("High School")).unwrap();

    assert!(!single.accessible().unwrap().has_elevator());
    assert!(tall.accessible().unwrap().fully_accessible());

    let services = tall.serviceable().unwrap();
    assert_eq!(services.list_services()[0], "High School Education");
    assert_eq!(services.base_service_cost(), 50.0 + 20.0 * 30.0);
}

/// Test office services honour the business type
#[test]
fn test_office_capabilities() {
    let office = factory()
        .office(SiteSpec::new("Tower One", 10, 500.0, 800), OfficePlan::new("Acme", "Legal"))
        .unwrap();

    let services = office.serviceable().unwrap();
    assert!(services.supports_service("legal services"));
    assert!(services.supports_service("Meeting Rooms"));
    assert_eq!(services.base_service_cost(), 75.0 + 100.0 * 10.0);
    assert_eq!(office.accessible().unwrap().accessible_parking_spots(), 5);
}

/// Test that parks are accessible but never serviceable
#[test]
fn test_park_capabilities() {
    let park = factory().park(SiteSpec::new("Riverside", 1, 1000.0, 200), ParkPlan::new("Urban")).unwrap();

    assert!(park.serviceable().is_none());
    let access = park.accessible().unwrap();
    assert!(access.wheelchair_accessible());
    assert!(!access.has_elevator());
    assert!(!access.fully_accessible());
}

/// Test specific info listings end with the maintenance cost
#[test]
fn test_specific_info_listing() {
    let school = factory()
        .school(
            SiteSpec::new("North High", 2, 500.0, 400),
            SchoolPlan { has_library: Some(false), ..SchoolPlan::new("High School") },
        )
        .unwrap();

    let info = school.specific_info();
    assert_eq!(
        info.labels(),
        vec![
            "Accreditation ID",
            "Education Level",
            "Classrooms",
            "Teachers",
            "Laboratory",
            "Library",
            "Maintenance Cost",
        ]
    );
    assert_eq!(info.get("Library"), Some(&InfoValue::Available(false)));
    // 1000 * 0.5 + 15 * 30 + 20 * 20 + 500
    assert_eq!(info.get("Maintenance Cost"), Some(&InfoValue::Money(1850.0)));
    assert!(info.to_string().contains("Library: Not Available"));
}

/// Test special operation checklists follow the variant features
#[test]
fn test_special_operations() {
    let mut factory = factory();
    let park = factory
        .park(
            SiteSpec::new("Pocket Park", 1, 200.0, 30),
            ParkPlan { has_fountain: Some(false), ..ParkPlan::new("Pocket") },
        )
        .unwrap();
    let report = park.special_operation();
    assert_eq!(report.title, "Park Special Operation");
    assert!(report.has_step("Playground safety inspection"));
    assert!(!report.has_step("Fountain maintenance"));

    let office = factory
        .office(
            SiteSpec::new("Garage-free", 2, 200.0, 40),
            OfficePlan { has_parking_lot: Some(false), ..OfficePlan::new("Acme", "Design") },
        )
        .unwrap();
    assert!(!office.special_operation().has_step("Parking lot maintenance"));
}

/// Test park event approval against capacity
#[test]
fn test_park_events() {
    let park = factory().park(SiteSpec::new("Riverside", 1, 1000.0, 200), ParkPlan::new("Urban")).unwrap();

    let approved = park.organize_event("Summer Concert", 200).unwrap();
    assert!(approved.approved);
    assert_eq!(approved.park, "Riverside");

    let denied = park.organize_event("Marathon", 5000).unwrap();
    assert!(!denied.approved);
    assert_eq!(denied.capacity, 200);
}

/// Test the full service request flow through the registry
#[test]
fn test_service_requests() {
    let mut registry = FacilityRegistry::with_factory(factory(), 10);
    let hospital = registry
        .factory()
        .hospital(SiteSpec::new("City General", 2, 500.0, 200), HospitalPlan::default())
        .unwrap();
    let park = registry
        .factory()
        .park(SiteSpec::new("Riverside", 1, 1000.0, 200), ParkPlan::new("Urban"))
        .unwrap();
    let hospital_id = registry.add(hospital).unwrap();
    let park_id = registry.add(park).unwrap();

    let hospital = registry.find_by_id(hospital_id).unwrap();
    let quote = registry.request_service(hospital, "Laboratory Tests", 3).unwrap();
    assert_eq!(quote.total, 850.0 * 3.0 * 1.5);
    assert_eq!(quote.quantity, 3);

    let err = registry.request_service(hospital, "Plastic Surgery", 1).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::ServiceUnavailable { reason: UnavailableReason::NotOffered, .. }
    ));

    let park = registry.find_by_id(park_id).unwrap();
    let err = registry.request_service(park, "Laboratory Tests", 1).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::ServiceUnavailable { reason: UnavailableReason::NoServiceCapability, .. }
    ));

    registry.change_status_by_id(hospital_id, Status::Closed).unwrap();
    let hospital = registry.find_by_id(hospital_id).unwrap();
    assert!(matches!(
        registry.request_service(hospital, "Pharmacy", 1),
        Err(RegistryError::StatusInvalid { current: Status::Closed, .. })
    ));
}

/// Test that omitted capabilities are absent rather than empty
#[test]
fn test_omitted_capabilities() {
    let mut registry = FacilityRegistry::with_factory(factory(), 10);
    let office = registry
        .factory()
        .office(
            SiteSpec::new("Back Office", 1, 100.0, 20).without_services(),
            OfficePlan::new("Acme", "Payroll"),
        )
        .unwrap();
    let id = registry.add(office).unwrap();

    let office = registry.find_by_id(id).unwrap();
    assert!(office.serviceable().is_none());
    assert!(office.accessible().is_some());
    assert!(registry.serviceable_facilities().is_empty());
    assert!(matches!(
        registry.request_service(office, "Payroll Services", 1),
        Err(RegistryError::ServiceUnavailable { reason: UnavailableReason::NoServiceCapability, .. })
    ));
}

/// Test that service names match regardless of non-ASCII case
#[test]
fn test_service_request_unicode_case() {
    let mut registry = FacilityRegistry::with_factory(factory(), 10);
    let office = registry
        .factory()
        .office(SiteSpec::new("Tower", 2, 200.0, 40), OfficePlan::new("Acme", "Café"))
        .unwrap();
    let id = registry.add(office).unwrap();

    let office = registry.find_by_id(id).unwrap();
    assert!(registry.request_service(office, "Café Services", 1).is_ok());
    let quote = registry.request_service(office, "CAFÉ SERVICES", 1).unwrap();
    assert_eq!(quote.service, "CAFÉ SERVICES");
    assert!(registry.find_by_name("TOWER").is_ok());
}
