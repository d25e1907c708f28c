//! Enumeration types for the facility registry
//!
//! This module contains the classification enums used throughout the registry:
//! facility kinds, lifecycle statuses, status colour codes and output formats.
//! Kind and status metadata live in static tables indexed by the enum value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static metadata attached to each [`FacilityKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    /// Human-readable name of the kind
    pub display_name: &'static str,
    /// Broad category the kind belongs to
    pub category: &'static str,
    /// Priority level (higher is more critical)
    pub priority_level: u8,
    /// Whether the kind counts as critical infrastructure
    pub critical: bool,
}

const KIND_TABLE: [KindInfo; 6] = [
    KindInfo {
        display_name: "Hospital",
        category: "Healthcare Facility",
        priority_level: 100,
        critical: true,
    },
    KindInfo {
        display_name: "School",
        category: "Educational Institution",
        priority_level: 80,
        critical: true,
    },
    KindInfo {
        display_name: "Office",
        category: "Commercial Building",
        priority_level: 60,
        critical: false,
    },
    KindInfo { display_name: "Park", category: "Recreation Area", priority_level: 50, critical: false },
    KindInfo {
        display_name: "Residential",
        category: "Housing Complex",
        priority_level: 70,
        critical: false,
    },
    KindInfo {
        display_name: "Shopping Mall",
        category: "Retail Center",
        priority_level: 90,
        critical: false,
    },
];

/// Classification of a facility, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityKind {
    /// Healthcare facility
    Hospital,
    /// Educational institution
    School,
    /// Commercial building
    Office,
    /// Recreation area
    Park,
    /// Housing complex
    Residential,
    /// Retail center
    ShoppingMall,
}

impl FacilityKind {
    /// Every kind, in table order
    pub const ALL: [FacilityKind; 6] = [
        FacilityKind::Hospital,
        FacilityKind::School,
        FacilityKind::Office,
        FacilityKind::Park,
        FacilityKind::Residential,
        FacilityKind::ShoppingMall,
    ];

    /// Look up the metadata row for this kind
    pub fn info(self) -> &'static KindInfo {
        &KIND_TABLE[self as usize]
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Broad category
    pub fn category(self) -> &'static str {
        self.info().category
    }

    /// Priority level (higher is more critical)
    pub fn priority_level(self) -> u8 {
        self.info().priority_level
    }

    /// True exactly for hospitals and schools
    pub fn is_critical_infrastructure(self) -> bool {
        self.info().critical
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FacilityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hospital" => Ok(FacilityKind::Hospital),
            "school" => Ok(FacilityKind::School),
            "office" => Ok(FacilityKind::Office),
            "park" => Ok(FacilityKind::Park),
            "residential" => Ok(FacilityKind::Residential),
            "shopping mall" | "shoppingmall" | "mall" => Ok(FacilityKind::ShoppingMall),
            _ => Err(format!("Unknown facility kind: {}", s)),
        }
    }
}

/// Colour code used by status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCode {
    /// Fully functional
    Green,
    /// Partially functional
    Yellow,
    /// Being built
    Blue,
    /// Out of service
    Red,
    /// Emergency mode
    Orange,
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Green => write!(f, "GREEN"),
            ColorCode::Yellow => write!(f, "YELLOW"),
            ColorCode::Blue => write!(f, "BLUE"),
            ColorCode::Red => write!(f, "RED"),
            ColorCode::Orange => write!(f, "ORANGE"),
        }
    }
}

/// Static metadata attached to each [`Status`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    /// Human-readable name of the status
    pub display_name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Operational level in `[0, 1]`
    pub operational_level: f64,
    /// Colour code for displays
    pub color_code: ColorCode,
    /// Action recommended to operators
    pub recommended_action: &'static str,
}

const STATUS_TABLE: [StatusInfo; 5] = [
    StatusInfo {
        display_name: "Operational",
        description: "Building is fully functional",
        operational_level: 1.0,
        color_code: ColorCode::Green,
        recommended_action: "Continue normal operations",
    },
    StatusInfo {
        display_name: "Under Maintenance",
        description: "Building is being maintained",
        operational_level: 0.5,
        color_code: ColorCode::Yellow,
        recommended_action: "Complete maintenance and resume operations",
    },
    StatusInfo {
        display_name: "Under Construction",
        description: "Building is being built",
        operational_level: 0.0,
        color_code: ColorCode::Blue,
        recommended_action: "Complete construction work",
    },
    StatusInfo {
        display_name: "Closed",
        description: "Building is closed",
        operational_level: 0.0,
        color_code: ColorCode::Red,
        recommended_action: "Review closure reasons and plan reopening",
    },
    StatusInfo {
        display_name: "Emergency",
        description: "Building is in emergency mode",
        operational_level: 0.8,
        color_code: ColorCode::Orange,
        recommended_action: "Address emergency and restore normal status",
    },
];

/// Lifecycle status of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    /// Fully functional
    #[default]
    Operational,
    /// Being maintained, partially usable
    UnderMaintenance,
    /// Being built, not usable
    UnderConstruction,
    /// Closed, not usable
    Closed,
    /// Emergency mode, mostly usable
    Emergency,
}

impl Status {
    /// Every status, in table order
    pub const ALL: [Status; 5] = [
        Status::Operational,
        Status::UnderMaintenance,
        Status::UnderConstruction,
        Status::Closed,
        Status::Emergency,
    ];

    /// Look up the metadata row for this status
    pub fn info(self) -> &'static StatusInfo {
        &STATUS_TABLE[self as usize]
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Operational level in `[0, 1]`
    pub fn operational_level(self) -> f64 {
        self.info().operational_level
    }

    /// Colour code for displays
    pub fn color_code(self) -> ColorCode {
        self.info().color_code
    }

    /// Action recommended to operators
    pub fn recommended_action(self) -> &'static str {
        self.info().recommended_action
    }

    /// A facility is usable while its operational level is above zero
    pub fn is_usable(self) -> bool {
        self.operational_level() > 0.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operational" => Ok(Status::Operational),
            "under maintenance" | "undermaintenance" | "maintenance" => {
                Ok(Status::UnderMaintenance)
            }
            "under construction" | "underconstruction" | "construction" => {
                Ok(Status::UnderConstruction)
            }
            "closed" => Ok(Status::Closed),
            "emergency" => Ok(Status::Emergency),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// Output format options for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_table_lookup() {
        assert_eq!(FacilityKind::Hospital.display_name(), "Hospital");
        assert_eq!(FacilityKind::Hospital.category(), "Healthcare Facility");
        assert_eq!(FacilityKind::Hospital.priority_level(), 100);
        assert_eq!(FacilityKind::ShoppingMall.display_name(), "Shopping Mall");
        assert_eq!(FacilityKind::ShoppingMall.priority_level(), 90);
        assert_eq!(FacilityKind::Park.category(), "Recreation Area");
    }

    #[test]
    fn test_critical_infrastructure() {
        for kind in FacilityKind::ALL {
            let expected = matches!(kind, FacilityKind::Hospital | FacilityKind::School);
            assert_eq!(kind.is_critical_infrastructure(), expected, "{kind}");
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("hospital".parse::<FacilityKind>().unwrap(), FacilityKind::Hospital);
        assert_eq!("Shopping Mall".parse::<FacilityKind>().unwrap(), FacilityKind::ShoppingMall);
        assert_eq!("shoppingmall".parse::<FacilityKind>().unwrap(), FacilityKind::ShoppingMall);

        // Test error case
        assert!("castle".parse::<FacilityKind>().is_err());
    }

    #[test]
    fn test_status_operational_levels() {
        assert_eq!(Status::Operational.operational_level(), 1.0);
        assert_eq!(Status::UnderMaintenance.operational_level(), 0.5);
        assert_eq!(Status::UnderConstruction.operational_level(), 0.0);
        assert_eq!(Status::Closed.operational_level(), 0.0);
        assert_eq!(Status::Emergency.operational_level(), 0.8);
    }

    #[test]
    fn test_status_usable_iff_level_positive() {
        for status in Status::ALL {
            assert_eq!(status.is_usable(), status.operational_level() > 0.0, "{status}");
        }
        assert!(!Status::Closed.is_usable());
        assert!(Status::Emergency.is_usable());
    }

    #[test]
    fn test_status_color_and_action() {
        assert_eq!(Status::Operational.color_code(), ColorCode::Green);
        assert_eq!(Status::UnderMaintenance.color_code(), ColorCode::Yellow);
        assert_eq!(Status::UnderConstruction.color_code(), ColorCode::Blue);
        assert_eq!(Status::Closed.color_code(), ColorCode::Red);
        assert_eq!(Status::Emergency.color_code(), ColorCode::Orange);
        assert_eq!(Status::Operational.recommended_action(), "Continue normal operations");
        assert_eq!(format!("{}", ColorCode::Orange), "ORANGE");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Under Maintenance".parse::<Status>().unwrap(), Status::UnderMaintenance);
        assert_eq!("underconstruction".parse::<Status>().unwrap(), Status::UnderConstruction);
        assert_eq!("CLOSED".parse::<Status>().unwrap(), Status::Closed);

        // Unknown input is an error, not a silent default
        assert!("demolished".parse::<Status>().is_err());
    }

    #[test]
    fn test_default_status_is_operational() {
        assert_eq!(Status::default(), Status::Operational);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let kind = FacilityKind::ShoppingMall;
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: FacilityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);

        let status = Status::Emergency;
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
