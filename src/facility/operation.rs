//! Value types returned by facility operations
//!
//! Facilities never print. Variant details, checklists, status changes and
//! event decisions come back as data for the caller to render.

use crate::types::{FacilityId, FacilityKind, Status};
use serde::Serialize;
use std::fmt;

/// A single rendered value in a [`SpecificInfo`] listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    /// Free text
    Text(String),
    /// Whole-number quantity
    Count(u32),
    /// Area in square meters
    Area(f64),
    /// Amount of money
    Money(f64),
    /// Facility feature that is either present or absent
    Available(bool),
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Text(text) => f.write_str(text),
            InfoValue::Count(count) => write!(f, "{}", count),
            InfoValue::Area(area) => write!(f, "{:.2} sq meters", area),
            InfoValue::Money(amount) => write!(f, "${:.2}", amount),
            InfoValue::Available(true) => f.write_str("Available"),
            InfoValue::Available(false) => f.write_str("Not Available"),
        }
    }
}

/// Labelled value in a [`SpecificInfo`] listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoField {
    /// Field label
    pub label: &'static str,
    /// Field value
    pub value: InfoValue,
}

impl InfoField {
    /// Create a labelled field
    pub fn new(label: &'static str, value: InfoValue) -> Self {
        Self { label, value }
    }
}

/// Ordered variant-only fields of a facility, including its maintenance cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificInfo {
    /// Kind the listing describes
    pub kind: FacilityKind,
    /// Fields in display order
    pub fields: Vec<InfoField>,
}

impl SpecificInfo {
    /// Look up a field value by label
    pub fn get(&self, label: &str) -> Option<&InfoValue> {
        self.fields.iter().find(|field| field.label == label).map(|field| &field.value)
    }

    /// Field labels in display order
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.label).collect()
    }
}

impl fmt::Display for SpecificInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} Specific Information ===", self.kind)?;
        for field in &self.fields {
            writeln!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

/// Result of one checklist step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Step is under way
    InProgress,
    /// Step finished
    Completed,
    /// Readiness confirmed
    Confirmed,
    /// Inventory or record verified
    Verified,
    /// Work booked for later
    Scheduled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "IN PROGRESS"),
            Outcome::Completed => write!(f, "COMPLETED"),
            Outcome::Confirmed => write!(f, "CONFIRMED"),
            Outcome::Verified => write!(f, "VERIFIED"),
            Outcome::Scheduled => write!(f, "SCHEDULED"),
        }
    }
}

/// One step of a special operation checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// What was done
    pub task: String,
    /// How it ended
    pub outcome: Outcome,
}

impl ChecklistItem {
    /// Create a checklist step
    pub fn new(task: impl Into<String>, outcome: Outcome) -> Self {
        Self { task: task.into(), outcome }
    }
}

/// Checklist produced by a facility's special operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    /// Operation title
    pub title: String,
    /// Steps in execution order
    pub steps: Vec<ChecklistItem>,
}

impl OperationReport {
    /// Start an empty report
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), steps: Vec::new() }
    }

    /// Append a step
    pub fn step(mut self, task: impl Into<String>, outcome: Outcome) -> Self {
        self.steps.push(ChecklistItem::new(task, outcome));
        self
    }

    /// Append a step only when `condition` holds
    pub fn step_if(self, condition: bool, task: impl Into<String>, outcome: Outcome) -> Self {
        if condition {
            self.step(task, outcome)
        } else {
            self
        }
    }

    /// Whether a step with the given task was recorded
    pub fn has_step(&self, task: &str) -> bool {
        self.steps.iter().any(|item| item.task == task)
    }
}

impl fmt::Display for OperationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        for item in &self.steps {
            writeln!(f, "{}: {}", item.task, item.outcome)?;
        }
        Ok(())
    }
}

/// Status before and after a [`change_status`](crate::facility::Facility::change_status) call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    /// Facility whose status changed
    pub facility: FacilityId,
    /// Status before the call
    pub previous: Status,
    /// Status after the call
    pub current: Status,
}

impl StatusChange {
    /// Whether the call actually moved the facility to a different status
    pub fn is_transition(&self) -> bool {
        self.previous != self.current
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.facility, self.previous, self.current)
    }
}

/// Outcome of asking a park to host an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDecision {
    /// Event name
    pub event_name: String,
    /// Hosting park
    pub park: String,
    /// Visitors the organisers expect
    pub expected_visitors: u32,
    /// Park capacity at the time of the request
    pub capacity: u32,
    /// Approved iff the expected visitors fit the capacity
    pub approved: bool,
}
