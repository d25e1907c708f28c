// Smart City Registry - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-city --manifest city.json
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/smart-city --config config.json --manifest city.json --output-format json --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use smart_city_registry::facility::{
    EventDecision, Facility, Manifest, OperationReport, Serviceable,
};
use smart_city_registry::manager::{
    AccessibilityReport, FacilityRegistry, LoggingConfig, MaintenanceReport, PriorityStatistics,
    RegistryError, RegistryStatistics,
};
use smart_city_registry::types::{CliArgs, FacilityKind, OutputFormat, RegistryConfig};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match RegistryConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Kept alive until exit so buffered file logs are flushed
    let _log_guard = match LoggingConfig::from_flags(args.verbose, args.debug).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Smart City Registry");

    let config = match RegistryConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no facilities will be loaded.");
        print_configuration_summary(&config, args.manifest.as_deref());
        return;
    }

    let event = args.event.as_deref().zip(args.visitors);
    if let Err(e) = run(&config, args.manifest.as_deref(), event) {
        error!("Registry run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        if let Some(registry_error) = e.chain().find_map(|cause| cause.downcast_ref::<RegistryError>()) {
            eprintln!("{}", registry_error.detailed_message());
        }
        process::exit(1);
    }

    info!("Smart City Registry completed successfully");
}

/// Facility row in the rendered report
#[derive(Debug, Serialize)]
struct FacilitySummary<'a> {
    #[serde(flatten)]
    facility: &'a Facility,
    total_area: f64,
    maintenance_cost: f64,
}

/// Everything the front end renders
#[derive(Debug, Serialize)]
struct CityReport<'a> {
    city_name: &'a str,
    max_facilities: usize,
    facilities: Vec<FacilitySummary<'a>>,
    statistics: RegistryStatistics,
    maintenance: MaintenanceReport,
    kind_breakdown: Vec<(FacilityKind, usize)>,
    accessibility: AccessibilityReport,
    priority: PriorityStatistics,
    special_operations: Vec<OperationReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    park_events: Vec<EventDecision>,
}

impl<'a> CityReport<'a> {
    fn new(
        config: &'a RegistryConfig,
        registry: &'a FacilityRegistry,
        event: Option<(&str, u32)>,
    ) -> Self {
        let facilities = registry
            .iter()
            .map(|facility| FacilitySummary {
                facility,
                total_area: facility.total_area(),
                maintenance_cost: facility.maintenance_cost(),
            })
            .collect();

        Self {
            city_name: &config.city_name,
            max_facilities: registry.max_facilities(),
            facilities,
            statistics: registry.statistics(),
            maintenance: registry.maintenance_report(),
            kind_breakdown: registry.kind_breakdown(),
            accessibility: registry.accessibility_report(),
            priority: registry.priority_statistics(),
            special_operations: registry.special_operations(),
            park_events: event
                .map(|(name, visitors)| registry.park_event_decisions(name, visitors))
                .unwrap_or_default(),
        }
    }
}

/// Build the registry and print its report
fn run(
    config: &RegistryConfig,
    manifest_path: Option<&str>,
    event: Option<(&str, u32)>,
) -> Result<()> {
    let mut registry = FacilityRegistry::from_config(config);

    if let Some(path) = manifest_path {
        let manifest = Manifest::from_file(path)
            .with_context(|| format!("Failed to read manifest {}", path))?;
        let loaded = registry
            .load_manifest(&manifest)
            .with_context(|| format!("Failed to load manifest {}", path))?;
        info!(loaded, path, "Facilities loaded from manifest");
    } else {
        info!("No manifest given, reporting on an empty registry");
    }

    let report = CityReport::new(config, &registry, event);
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print_text_report(&report, &registry),
    }

    Ok(())
}

fn print_text_report(report: &CityReport<'_>, registry: &FacilityRegistry) {
    println!("{} - Facility Registry", report.city_name);
    println!("{}", "=".repeat(report.city_name.len() + 20));
    println!();

    if registry.is_empty() {
        println!("No facilities registered.");
    }

    for (index, facility) in registry.iter().enumerate() {
        println!(
            "{}. [{}] {} - {} ({}, {})",
            index + 1,
            facility.id(),
            facility.name(),
            facility.kind(),
            facility.status(),
            facility.status().color_code()
        );
        println!(
            "   Floors: {}  Total Area: {:.2} sq meters  Capacity: {}  Built: {}",
            facility.floors(),
            facility.total_area(),
            facility.capacity(),
            facility.construction_date()
        );
        for field in facility.specific_info().fields {
            println!("   {}: {}", field.label, field.value);
        }
        if let Some(services) = facility.serviceable() {
            println!("   Services: {}", services.list_services().join(", "));
        }
        println!();
    }

    let stats = &report.statistics;
    println!("Statistics");
    println!("----------");
    println!("  Facilities: {}/{}", stats.total, report.max_facilities);
    println!("  Usable: {} ({:.1}%)", stats.usable, stats.usable_percentage());
    println!("  Non-usable: {}", stats.non_usable);
    println!("  Total Area: {:.2} sq meters", stats.total_area);
    println!("  Average Area: {:.2} sq meters", stats.average_area());
    println!("  Total Capacity: {}", stats.total_capacity);
    for (kind, count) in &report.kind_breakdown {
        println!("  {}: {}", kind, count);
    }
    println!(
        "  Critical Infrastructure: {} ({:.1}%)",
        report.priority.critical,
        report.priority.critical_percentage()
    );
    println!();

    println!("Maintenance");
    println!("-----------");
    println!("  Total Cost: ${:.2}", report.maintenance.total_cost);
    println!("  Average Cost: ${:.2}", report.maintenance.average_cost());
    println!();

    println!("Accessibility");
    println!("-------------");
    for entry in &report.accessibility.entries {
        let verdict = if entry.fully_accessible { "Fully Accessible" } else { "Partial" };
        println!("  [{}] {}: {}", entry.id, entry.name, verdict);
    }
    match report.accessibility.compliance_rate() {
        Some(rate) => println!("  Compliance Rate: {:.1}%", rate),
        None => println!("  Compliance Rate: n/a"),
    }

    if !report.special_operations.is_empty() {
        println!();
        println!("Special Operations");
        println!("------------------");
        for operation in &report.special_operations {
            print!("{}", operation);
        }
    }

    if !report.park_events.is_empty() {
        println!();
        println!("Park Events");
        println!("-----------");
        for decision in &report.park_events {
            if decision.approved {
                println!(
                    "  {}: '{}' approved ({} of {} visitors)",
                    decision.park, decision.event_name, decision.expected_visitors, decision.capacity
                );
            } else {
                println!(
                    "  {}: '{}' exceeds park capacity ({} > {})",
                    decision.park, decision.event_name, decision.expected_visitors, decision.capacity
                );
            }
        }
    }
}

fn print_configuration_summary(config: &RegistryConfig, manifest_path: Option<&str>) {
    eprintln!("Configuration:");
    eprintln!("  City Name: {}", config.city_name);
    eprintln!("  Max Facilities: {}", config.max_facilities);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(path) = manifest_path {
        eprintln!("  Manifest: {}", path);
    }
    eprintln!();
}
