//! The facility entity
//!
//! This module contains the [`Facility`] struct: the common fields every
//! facility carries, its variant data, and its optional capabilities.

use super::capability::{AccessibilityProfile, Accessible, ServiceCatalog, Serviceable};
use super::operation::{EventDecision, InfoField, InfoValue, OperationReport, SpecificInfo, StatusChange};
use super::variants::{FacilityDetails, VariantBehavior};
use crate::types::{FacilityId, FacilityKind, Status};
use chrono::NaiveDate;
use serde::Serialize;

/// Maintenance charged per square meter of total area
pub const MAINTENANCE_RATE_PER_SQM: f64 = 0.5;

/// A managed city facility
///
/// Facilities are built by a [`FacilityFactory`](super::FacilityFactory), which
/// validates the site data and issues the identifier. After construction only
/// the status can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    id: FacilityId,
    name: String,
    kind: FacilityKind,
    status: Status,
    floors: u32,
    area_per_floor: f64,
    capacity: u32,
    construction_date: NaiveDate,
    details: FacilityDetails,
    services: Option<ServiceCatalog>,
    accessibility: Option<AccessibilityProfile>,
}

impl Facility {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: FacilityId,
        name: String,
        floors: u32,
        area_per_floor: f64,
        capacity: u32,
        construction_date: NaiveDate,
        details: FacilityDetails,
        services: Option<ServiceCatalog>,
        accessibility: Option<AccessibilityProfile>,
    ) -> Self {
        Self {
            id,
            name,
            kind: details.kind(),
            status: Status::default(),
            floors,
            area_per_floor,
            capacity,
            construction_date,
            details,
            services,
            accessibility,
        }
    }

    /// Unique identifier within the owning registry
    pub fn id(&self) -> FacilityId {
        self.id
    }

    /// Facility name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind, fixed by the variant
    pub fn kind(&self) -> FacilityKind {
        self.kind
    }

    /// Current lifecycle status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of floors
    pub fn floors(&self) -> u32 {
        self.floors
    }

    /// Area of a single floor in square meters
    pub fn area_per_floor(&self) -> f64 {
        self.area_per_floor
    }

    /// Maximum occupancy
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Date the facility was recorded as built
    pub fn construction_date(&self) -> NaiveDate {
        self.construction_date
    }

    /// Variant data
    pub fn details(&self) -> &FacilityDetails {
        &self.details
    }

    /// Floors times area per floor
    pub fn total_area(&self) -> f64 {
        f64::from(self.floors) * self.area_per_floor
    }

    /// Yearly maintenance cost
    pub fn maintenance_cost(&self) -> f64 {
        self.total_area() * MAINTENANCE_RATE_PER_SQM + self.details.behavior().maintenance_surcharge()
    }

    /// Variant-only fields followed by the maintenance cost
    pub fn specific_info(&self) -> SpecificInfo {
        let mut fields = self.details.behavior().info_fields();
        fields.push(InfoField::new("Maintenance Cost", InfoValue::Money(self.maintenance_cost())));
        SpecificInfo { kind: self.kind, fields }
    }

    /// Run the variant checklist
    pub fn special_operation(&self) -> OperationReport {
        self.details.behavior().special_operation()
    }

    /// Service capability, if this facility has one
    pub fn serviceable(&self) -> Option<&dyn Serviceable> {
        self.services.as_ref().map(|catalog| catalog as &dyn Serviceable)
    }

    /// Accessibility capability, if this facility has one
    pub fn accessible(&self) -> Option<&dyn Accessible> {
        self.accessibility.as_ref().map(|profile| profile as &dyn Accessible)
    }

    /// Whether the current status allows the facility to be used
    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }

    /// Overwrite the status; any status may follow any other
    pub fn change_status(&mut self, target: Status) -> StatusChange {
        let previous = self.status;
        self.status = target;
        StatusChange { facility: self.id, previous, current: target }
    }

    /// Ask a park to host an event; `None` for every other variant
    pub fn organize_event(&self, event_name: &str, expected_visitors: u32) -> Option<EventDecision> {
        match &self.details {
            FacilityDetails::Park(_) => Some(EventDecision {
                event_name: event_name.to_string(),
                park: self.name.clone(),
                expected_visitors,
                capacity: self.capacity,
                approved: expected_visitors <= self.capacity,
            }),
            _ => None,
        }
    }
}
