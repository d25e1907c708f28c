//! Optional capability contracts
//!
//! A facility may carry a service catalog, an accessibility profile, both or
//! neither. Presence is decided per instance when the facility is built.

use serde::{Deserialize, Serialize};

/// Label attached to every accessibility profile
pub const ACCESSIBILITY_STANDARD: &str = "ADA Compliant";

/// Multiplier applied to the base cost when quoting a service request
pub const SERVICE_QUOTE_FACTOR: f64 = 1.5;

/// A facility that offers services to the public
pub trait Serviceable {
    /// Services offered, in catalog order
    fn list_services(&self) -> Vec<String>;

    /// Base cost of a single unit of service
    fn base_service_cost(&self) -> f64;

    /// Case-insensitive catalog membership
    fn supports_service(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.list_services().iter().any(|service| service.to_lowercase() == needle)
    }

    /// Price of `quantity` units of service
    fn quote(&self, quantity: u32) -> f64 {
        self.base_service_cost() * f64::from(quantity) * SERVICE_QUOTE_FACTOR
    }
}

/// A facility with accessibility attributes
pub trait Accessible {
    /// Step-free wheelchair access
    fn wheelchair_accessible(&self) -> bool;

    /// Elevator between floors
    fn has_elevator(&self) -> bool;

    /// Number of reserved accessible parking spots
    fn accessible_parking_spots(&self) -> u32;

    /// Wheelchair access, an elevator and at least one accessible spot
    fn fully_accessible(&self) -> bool {
        self.wheelchair_accessible() && self.has_elevator() && self.accessible_parking_spots() > 0
    }

    /// Accessibility standard the profile is assessed against
    fn accessibility_standard(&self) -> &'static str {
        ACCESSIBILITY_STANDARD
    }
}

/// Service catalog attached to a facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    services: Vec<String>,
    base_cost: f64,
}

impl ServiceCatalog {
    /// Create a catalog from its services and base cost
    pub fn new(services: Vec<String>, base_cost: f64) -> Self {
        Self { services, base_cost }
    }

    /// Services in catalog order
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Whether the catalog lists nothing
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Serviceable for ServiceCatalog {
    fn list_services(&self) -> Vec<String> {
        self.services.clone()
    }

    fn base_service_cost(&self) -> f64 {
        self.base_cost
    }
}

/// Accessibility attributes attached to a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityProfile {
    /// Step-free wheelchair access
    pub wheelchair: bool,
    /// Elevator between floors
    pub elevator: bool,
    /// Reserved accessible parking spots
    pub parking_spots: u32,
}

impl AccessibilityProfile {
    /// Create a profile
    pub fn new(wheelchair: bool, elevator: bool, parking_spots: u32) -> Self {
        Self { wheelchair, elevator, parking_spots }
    }
}

impl Accessible for AccessibilityProfile {
    fn wheelchair_accessible(&self) -> bool {
        self.wheelchair
    }

    fn has_elevator(&self) -> bool {
        self.elevator
    }

    fn accessible_parking_spots(&self) -> u32 {
        self.parking_spots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(
            vec!["Emergency Care".to_string(), "Pharmacy".to_string(), "Café Services".to_string()],
            850.0,
        )
    }

    #[test]
    fn test_supports_service_is_case_insensitive() {
        let catalog = catalog();
        assert!(catalog.supports_service("emergency care"));
        assert!(catalog.supports_service("PHARMACY"));
        assert!(catalog.supports_service("CAFÉ SERVICES"));
        assert!(catalog.supports_service("café services"));
        assert!(!catalog.supports_service("Dentistry"));
        assert!(!catalog.supports_service(""));
    }

    #[test]
    fn test_quote() {
        let catalog = catalog();
        assert_eq!(catalog.quote(2), 850.0 * 2.0 * 1.5);
        assert_eq!(catalog.quote(0), 0.0);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ServiceCatalog::new(Vec::new(), 0.0);
        assert!(catalog.is_empty());
        assert!(!catalog.supports_service("anything"));
    }

    #[test]
    fn test_fully_accessible() {
        assert!(AccessibilityProfile::new(true, true, 10).fully_accessible());
        assert!(!AccessibilityProfile::new(true, false, 3).fully_accessible());
        assert!(!AccessibilityProfile::new(true, true, 0).fully_accessible());
        assert!(!AccessibilityProfile::new(false, true, 5).fully_accessible());
        assert_eq!(AccessibilityProfile::new(true, true, 1).accessibility_standard(), "ADA Compliant");
    }
}
