//! Registry reports
//!
//! Summary views over a [`FacilityRegistry`]: counts and areas, maintenance
//! totals, kind breakdown, accessibility compliance and infrastructure
//! priority.

use super::registry::FacilityRegistry;
use crate::facility::{Accessible, EventDecision, Facility, OperationReport};
use crate::types::{FacilityId, FacilityKind};
use serde::Serialize;

/// Counts and totals over every facility
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryStatistics {
    /// Facilities held
    pub total: usize,
    /// Facilities whose status allows use
    pub usable: usize,
    /// Facilities whose status forbids use
    pub non_usable: usize,
    /// Sum of total areas in square meters
    pub total_area: f64,
    /// Sum of capacities
    pub total_capacity: u64,
}

impl RegistryStatistics {
    /// Mean total area per facility
    pub fn average_area(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.total_area / self.total as f64
        }
    }

    /// Percentage of facilities that are usable
    pub fn usable_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.usable as f64 / self.total as f64) * 100.0
        }
    }
}

/// Maintenance totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaintenanceReport {
    /// Facilities costed
    pub facility_count: usize,
    /// Sum of maintenance costs
    pub total_cost: f64,
}

impl MaintenanceReport {
    /// Mean maintenance cost per facility
    pub fn average_cost(&self) -> f64 {
        if self.facility_count == 0 {
            0.0
        } else {
            self.total_cost / self.facility_count as f64
        }
    }
}

/// Accessibility assessment of one facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityEntry {
    /// Facility id
    pub id: FacilityId,
    /// Facility name
    pub name: String,
    /// Wheelchair, elevator and parking all present
    pub fully_accessible: bool,
}

/// Accessibility compliance across facilities with an accessibility profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessibilityReport {
    /// One entry per facility with an accessibility profile, in registry order
    pub entries: Vec<AccessibilityEntry>,
    /// Facilities assessed
    pub total_accessible: usize,
    /// Facilities assessed as fully accessible
    pub fully_accessible: usize,
}

impl AccessibilityReport {
    /// Percentage of assessed facilities that are fully accessible
    ///
    /// `None` when no facility has an accessibility profile.
    pub fn compliance_rate(&self) -> Option<f64> {
        if self.total_accessible == 0 {
            None
        } else {
            Some((self.fully_accessible as f64 / self.total_accessible as f64) * 100.0)
        }
    }
}

/// Critical infrastructure versus everything else
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityStatistics {
    /// Hospitals and schools
    pub critical: usize,
    /// Every other kind
    pub regular: usize,
}

impl PriorityStatistics {
    /// Percentage of facilities that are critical infrastructure
    pub fn critical_percentage(&self) -> f64 {
        let total = self.critical + self.regular;
        if total == 0 {
            0.0
        } else {
            (self.critical as f64 / total as f64) * 100.0
        }
    }
}

impl FacilityRegistry {
    /// Counts and totals over every facility
    pub fn statistics(&self) -> RegistryStatistics {
        let mut stats = RegistryStatistics::default();
        for facility in self.iter() {
            stats.total += 1;
            if facility.is_usable() {
                stats.usable += 1;
            } else {
                stats.non_usable += 1;
            }
            stats.total_area += facility.total_area();
            stats.total_capacity += u64::from(facility.capacity());
        }
        stats
    }

    /// Maintenance totals
    pub fn maintenance_report(&self) -> MaintenanceReport {
        MaintenanceReport { facility_count: self.len(), total_cost: self.total_maintenance_cost() }
    }

    /// Number of facilities per kind, for kinds present, in table order
    pub fn kind_breakdown(&self) -> Vec<(FacilityKind, usize)> {
        FacilityKind::ALL
            .iter()
            .map(|&kind| (kind, self.iter().filter(|facility| facility.kind() == kind).count()))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Accessibility compliance across facilities with an accessibility profile
    pub fn accessibility_report(&self) -> AccessibilityReport {
        let entries: Vec<AccessibilityEntry> = self
            .iter()
            .filter_map(|facility: &Facility| {
                facility.accessible().map(|profile| AccessibilityEntry {
                    id: facility.id(),
                    name: facility.name().to_string(),
                    fully_accessible: profile.fully_accessible(),
                })
            })
            .collect();
        let fully_accessible = entries.iter().filter(|entry| entry.fully_accessible).count();

        AccessibilityReport { total_accessible: entries.len(), fully_accessible, entries }
    }

    /// Critical infrastructure versus everything else
    pub fn priority_statistics(&self) -> PriorityStatistics {
        let critical =
            self.iter().filter(|facility| facility.kind().is_critical_infrastructure()).count();
        PriorityStatistics { critical, regular: self.len() - critical }
    }

    /// Special operation checklist of every facility, in registry order
    pub fn special_operations(&self) -> Vec<OperationReport> {
        self.iter().map(Facility::special_operation).collect()
    }

    /// Ask every park to host the event; one decision per park
    pub fn park_event_decisions(
        &self,
        event_name: &str,
        expected_visitors: u32,
    ) -> Vec<EventDecision> {
        self.iter().filter_map(|facility| facility.organize_event(event_name, expected_visitors)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{FacilityFactory, HospitalPlan, OfficePlan, ParkPlan, SchoolPlan, SiteSpec};
    use crate::types::Status;

    fn populated() -> FacilityRegistry {
        let mut registry = FacilityRegistry::with_factory(FacilityFactory::with_seed(3), 10);
        let hospital = registry
            .factory()
            .hospital(SiteSpec::new("City General", 2, 500.0, 200), HospitalPlan::default())
            .unwrap();
        let school = registry
            .factory()
            .school(SiteSpec::new("Little Oaks", 1, 400.0, 100), SchoolPlan::new("Primary"))
            .unwrap();
        let office = registry
            .factory()
            .office(
                SiteSpec::new("Tower One", 4, 250.0, 300).without_accessibility(),
                OfficePlan::new("Acme", "Finance"),
            )
            .unwrap();
        let park = registry
            .factory()
            .park(SiteSpec::new("Riverside", 1, 1000.0, 50), ParkPlan::new("Urban"))
            .unwrap();

        for facility in [hospital, school, office, park] {
            registry.add(facility).unwrap();
        }
        registry
    }

    #[test]
    fn test_registry_statistics() {
        let mut registry = populated();
        registry.change_status_at(3, Status::Closed).unwrap();

        let stats = registry.statistics();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.usable, 3);
        assert_eq!(stats.non_usable, 1);
        assert_eq!(stats.total_area, 1000.0 + 400.0 + 1000.0 + 1000.0);
        assert_eq!(stats.total_capacity, 650);
        assert_eq!(stats.average_area(), 850.0);
        assert_eq!(stats.usable_percentage(), 75.0);
    }

    #[test]
    fn test_empty_reports() {
        let registry = FacilityRegistry::new();
        assert_eq!(registry.statistics().average_area(), 0.0);
        assert_eq!(registry.statistics().usable_percentage(), 0.0);
        assert_eq!(registry.maintenance_report().average_cost(), 0.0);
        assert!(registry.kind_breakdown().is_empty());
        assert_eq!(registry.accessibility_report().compliance_rate(), None);
        assert_eq!(registry.priority_statistics().critical_percentage(), 0.0);
    }

    #[test]
    fn test_maintenance_report() {
        let registry = populated();
        let report = registry.maintenance_report();
        assert_eq!(report.facility_count, 4);
        assert_eq!(report.total_cost, registry.total_maintenance_cost());
        assert_eq!(report.average_cost(), report.total_cost / 4.0);
    }

    #[test]
    fn test_kind_breakdown_in_table_order() {
        let registry = populated();
        assert_eq!(
            registry.kind_breakdown(),
            vec![
                (FacilityKind::Hospital, 1),
                (FacilityKind::School, 1),
                (FacilityKind::Office, 1),
                (FacilityKind::Park, 1),
            ]
        );
    }

    #[test]
    fn test_accessibility_report() {
        let report = populated().accessibility_report();

        // The office was built without a profile
        assert_eq!(report.total_accessible, 3);
        // Single-storey school and the park have no elevator
        assert_eq!(report.fully_accessible, 1);
        assert_eq!(report.entries[0].name, "City General");
        let rate = report.compliance_rate().unwrap();
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_special_operations_in_registry_order() {
        let reports = populated().special_operations();
        let titles: Vec<&str> = reports.iter().map(|report| report.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Hospital Special Operation",
                "School Special Operation",
                "Office Special Operation",
                "Park Special Operation",
            ]
        );
    }

    #[test]
    fn test_park_event_decisions() {
        let registry = populated();

        let decisions = registry.park_event_decisions("Food Fair", 50);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].park, "Riverside");
        assert!(decisions[0].approved);

        assert!(!registry.park_event_decisions("Food Fair", 51)[0].approved);
        assert!(FacilityRegistry::new().park_event_decisions("Food Fair", 1).is_empty());
    }

    #[test]
    fn test_priority_statistics() {
        let stats = populated().priority_statistics();
        assert_eq!(stats, PriorityStatistics { critical: 2, regular: 2 });
        assert_eq!(stats.critical_percentage(), 50.0);
    }
}
