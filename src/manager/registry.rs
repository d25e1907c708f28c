//! Facility registry and query engine
//!
//! This module contains the [`FacilityRegistry`]: an insertion-ordered,
//! bounded collection of facilities with CRUD, filtered queries and the
//! occupancy and service checks. Every failed operation leaves the registry
//! exactly as it was.

use super::error::{
    GuardedOperation, RegistryError, RegistryResult, SearchCriteria, UnavailableReason,
};
use crate::facility::{
    Facility, FacilityFactory, Manifest, ManifestError, Serviceable, StatusChange,
};
use crate::types::{FacilityId, FacilityKind, RegistryConfig, Status, DEFAULT_MAX_FACILITIES};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Price quoted for a service request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceQuote {
    /// Facility providing the service
    pub facility: FacilityId,
    /// Facility name
    pub facility_name: String,
    /// Requested service
    pub service: String,
    /// Units requested
    pub quantity: u32,
    /// Base cost of one unit
    pub unit_cost: f64,
    /// Quoted total
    pub total: f64,
}

/// Bounded, ordered collection of city facilities
#[derive(Debug)]
pub struct FacilityRegistry {
    facilities: Vec<Facility>,
    max_facilities: usize,
    factory: FacilityFactory,
    // Ids that were held and then removed or displaced; never accepted again
    retired: HashSet<FacilityId>,
}

impl Default for FacilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityRegistry {
    /// Create an empty registry holding at most 50 facilities
    pub fn new() -> Self {
        Self::with_max_facilities(DEFAULT_MAX_FACILITIES)
    }

    /// Create an empty registry with a custom bound
    pub fn with_max_facilities(max_facilities: usize) -> Self {
        Self::with_factory(FacilityFactory::new(), max_facilities)
    }

    /// Create an empty registry around an existing factory
    pub fn with_factory(factory: FacilityFactory, max_facilities: usize) -> Self {
        Self { facilities: Vec::new(), max_facilities, factory, retired: HashSet::new() }
    }

    /// Create an empty registry from a validated configuration
    pub fn from_config(config: &RegistryConfig) -> Self {
        let factory = match config.seed {
            Some(seed) => FacilityFactory::with_seed(seed),
            None => FacilityFactory::new(),
        };
        Self::with_factory(factory, config.max_facilities)
    }

    /// Factory that builds facilities for this registry
    pub fn factory(&mut self) -> &mut FacilityFactory {
        &mut self.factory
    }

    /// Number of facilities held
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether the registry holds nothing
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Registry bound
    pub fn max_facilities(&self) -> usize {
        self.max_facilities
    }

    /// Facilities that can still be added
    pub fn remaining_capacity(&self) -> usize {
        self.max_facilities.saturating_sub(self.facilities.len())
    }

    /// Facilities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    /// Append a facility
    ///
    /// Rejects an id that is live or that this registry has already removed,
    /// whichever factory built the facility.
    pub fn add(&mut self, facility: Facility) -> RegistryResult<FacilityId> {
        if self.facilities.len() >= self.max_facilities {
            debug!(
                facility_id = %facility.id(),
                current = self.facilities.len(),
                max = self.max_facilities,
                "Rejected add: registry full"
            );
            return Err(RegistryError::CapacityExceeded {
                current: self.facilities.len(),
                max: self.max_facilities,
            });
        }
        if self.position_of(facility.id()).is_some() {
            debug!(facility_id = %facility.id(), "Rejected add: id already registered");
            return Err(RegistryError::invalid_data("id", facility.id()));
        }
        if self.retired.contains(&facility.id()) {
            debug!(facility_id = %facility.id(), "Rejected add: id was retired");
            return Err(RegistryError::invalid_data("id", facility.id()));
        }

        let id = facility.id();
        debug!(facility_id = %id, kind = %facility.kind(), name = facility.name(), "Facility added");
        self.facilities.push(facility);
        Ok(id)
    }

    /// Facility at `index`
    pub fn get_at(&self, index: usize) -> RegistryResult<&Facility> {
        self.facilities
            .get(index)
            .ok_or_else(|| RegistryError::not_found(SearchCriteria::Index(index)))
    }

    /// Mutable facility at `index`; only its status can be changed
    pub fn get_mut_at(&mut self, index: usize) -> RegistryResult<&mut Facility> {
        self.facilities
            .get_mut(index)
            .ok_or_else(|| RegistryError::not_found(SearchCriteria::Index(index)))
    }

    /// Remove the facility at `index`; later facilities shift down by one
    pub fn remove_at(&mut self, index: usize) -> RegistryResult<Facility> {
        if index >= self.facilities.len() {
            return Err(RegistryError::not_found(SearchCriteria::Index(index)));
        }

        let removed = self.facilities.remove(index);
        self.retired.insert(removed.id());
        debug!(facility_id = %removed.id(), index, "Facility removed");
        Ok(removed)
    }

    /// Put `facility` at `index` and return the facility it displaced
    ///
    /// The displaced id is retired unless `facility` carries the same id.
    pub fn replace_at(&mut self, index: usize, facility: Facility) -> RegistryResult<Facility> {
        if index >= self.facilities.len() {
            return Err(RegistryError::not_found(SearchCriteria::Index(index)));
        }
        if let Some(existing) = self.position_of(facility.id()) {
            if existing != index {
                debug!(facility_id = %facility.id(), index, existing, "Rejected replace: id live elsewhere");
                return Err(RegistryError::invalid_data("id", facility.id()));
            }
        }
        if self.retired.contains(&facility.id()) {
            debug!(facility_id = %facility.id(), index, "Rejected replace: id was retired");
            return Err(RegistryError::invalid_data("id", facility.id()));
        }

        debug!(facility_id = %facility.id(), index, "Facility replaced");
        let id = facility.id();
        let displaced = std::mem::replace(&mut self.facilities[index], facility);
        if displaced.id() != id {
            self.retired.insert(displaced.id());
        }
        Ok(displaced)
    }

    /// Remove the registered facility with the same id as `facility`
    pub fn remove(&mut self, facility: &Facility) -> RegistryResult<Facility> {
        self.remove_by_id(facility.id())
    }

    /// Remove the facility with `id`
    pub fn remove_by_id(&mut self, id: FacilityId) -> RegistryResult<Facility> {
        let index =
            self.position_of(id).ok_or_else(|| RegistryError::not_found(SearchCriteria::Id(id)))?;
        self.remove_at(index)
    }

    /// First facility whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> RegistryResult<&Facility> {
        let needle = name.to_lowercase();
        self.facilities
            .iter()
            .find(|facility| facility.name().to_lowercase() == needle)
            .ok_or_else(|| RegistryError::not_found(SearchCriteria::Name(name.to_string())))
    }

    /// Facility with `id`
    pub fn find_by_id(&self, id: FacilityId) -> RegistryResult<&Facility> {
        self.facilities
            .iter()
            .find(|facility| facility.id() == id)
            .ok_or_else(|| RegistryError::not_found(SearchCriteria::Id(id)))
    }

    /// Every facility of `kind`, in order; `NotFound` when there are none
    pub fn find_all_by_kind(&self, kind: FacilityKind) -> RegistryResult<Vec<&Facility>> {
        let matches: Vec<&Facility> =
            self.facilities.iter().filter(|facility| facility.kind() == kind).collect();
        if matches.is_empty() {
            return Err(RegistryError::not_found(SearchCriteria::Kind(kind)));
        }
        Ok(matches)
    }

    /// Every facility with `status`, in order; `NotFound` when there are none
    pub fn find_all_by_status(&self, status: Status) -> RegistryResult<Vec<&Facility>> {
        let matches: Vec<&Facility> =
            self.facilities.iter().filter(|facility| facility.status() == status).collect();
        if matches.is_empty() {
            return Err(RegistryError::not_found(SearchCriteria::Status(status)));
        }
        Ok(matches)
    }

    /// Facilities whose status allows use
    pub fn usable_facilities(&self) -> Vec<&Facility> {
        self.facilities.iter().filter(|facility| facility.is_usable()).collect()
    }

    /// Facilities that offer services
    pub fn serviceable_facilities(&self) -> Vec<&Facility> {
        self.facilities.iter().filter(|facility| facility.serviceable().is_some()).collect()
    }

    /// Sum of every facility's maintenance cost
    pub fn total_maintenance_cost(&self) -> f64 {
        self.facilities.iter().map(Facility::maintenance_cost).sum()
    }

    /// Change the status of the facility at `index`
    pub fn change_status_at(
        &mut self,
        index: usize,
        status: Status,
    ) -> RegistryResult<StatusChange> {
        let change = self.get_mut_at(index)?.change_status(status);
        debug!(facility_id = %change.facility, previous = %change.previous, current = %change.current, "Status changed");
        Ok(change)
    }

    /// Change the status of the facility with `id`
    pub fn change_status_by_id(
        &mut self,
        id: FacilityId,
        status: Status,
    ) -> RegistryResult<StatusChange> {
        let index =
            self.position_of(id).ok_or_else(|| RegistryError::not_found(SearchCriteria::Id(id)))?;
        self.change_status_at(index, status)
    }

    /// Occupancy as a fraction of capacity, if the facility can take it
    pub fn validate_occupancy(&self, facility: &Facility, occupancy: u32) -> RegistryResult<f64> {
        if !facility.is_usable() {
            return Err(RegistryError::StatusInvalid {
                current: facility.status(),
                operation: GuardedOperation::OccupancyCheck,
            });
        }
        if occupancy > facility.capacity() {
            return Err(RegistryError::CapacityViolation {
                occupancy,
                capacity: facility.capacity(),
            });
        }

        Ok(f64::from(occupancy) / f64::from(facility.capacity()))
    }

    /// Quote `quantity` units of `service` at `facility`
    pub fn request_service(
        &self,
        facility: &Facility,
        service: &str,
        quantity: u32,
    ) -> RegistryResult<ServiceQuote> {
        if !facility.is_usable() {
            return Err(RegistryError::StatusInvalid {
                current: facility.status(),
                operation: GuardedOperation::ServiceRequest,
            });
        }

        let unavailable = |reason| RegistryError::ServiceUnavailable {
            service: service.to_string(),
            facility: facility.name().to_string(),
            reason,
        };
        let catalog =
            facility.serviceable().ok_or_else(|| unavailable(UnavailableReason::NoServiceCapability))?;
        if !catalog.supports_service(service) {
            return Err(unavailable(UnavailableReason::NotOffered));
        }
        if quantity == 0 {
            return Err(RegistryError::invalid_data("quantity", quantity));
        }

        Ok(ServiceQuote {
            facility: facility.id(),
            facility_name: facility.name().to_string(),
            service: service.to_string(),
            quantity,
            unit_cost: catalog.base_service_cost(),
            total: catalog.quote(quantity),
        })
    }

    /// Remove everything and return how many facilities were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.facilities.len();
        self.retired.extend(self.facilities.drain(..).map(|facility| facility.id()));
        debug!(removed, "Registry cleared");
        removed
    }

    /// Build and add every facility in `manifest`
    ///
    /// Either every planned facility is added or none is. Facilities are built
    /// through this registry's factory, so a rejected manifest still consumes
    /// the ids drawn before the failure.
    pub fn load_manifest(&mut self, manifest: &Manifest) -> Result<usize, ManifestError> {
        let mut staged = Vec::with_capacity(manifest.len());

        for plan in &manifest.facilities {
            let current = self.facilities.len() + staged.len();
            if current >= self.max_facilities {
                return Err(ManifestError::Rejected {
                    name: plan.name().to_string(),
                    source: RegistryError::CapacityExceeded { current, max: self.max_facilities },
                });
            }

            let facility = plan
                .build(&mut self.factory)
                .map_err(|source| ManifestError::Rejected { name: plan.name().to_string(), source })?;
            staged.push(facility);
        }

        let loaded = staged.len();
        self.facilities.extend(staged);
        info!(loaded, total = self.facilities.len(), "Manifest loaded");
        Ok(loaded)
    }

    fn position_of(&self, id: FacilityId) -> Option<usize> {
        self.facilities.iter().position(|facility| facility.id() == id)
    }
}
