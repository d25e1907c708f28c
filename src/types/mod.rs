//! Core types and identifiers for the facility registry
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the registry.
//!
//! # Overview
//!
//! - **Identifiers**: sequence-issued facility identifiers (`BLD-<n>`)
//! - **Enums**: facility kinds and lifecycle statuses backed by static metadata tables
//! - **Configuration**: registry configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use smart_city_registry::types::*;
//!
//! let mut ids = IdSequence::new();
//! let id = ids.next_id();
//! assert_eq!(id.to_string(), "BLD-1");
//!
//! assert!(FacilityKind::Hospital.is_critical_infrastructure());
//! assert!(!Status::Closed.is_usable());
//!
//! let config = RegistryConfig { max_facilities: 10, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
