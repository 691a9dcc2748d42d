// ABOUTME: VitalPath CLI - exercises the health core against the JSON file store
// ABOUTME: Connect platforms, manage consent, refresh vitals, and print the care report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

//! VitalPath demo CLI.
//!
//! Usage:
//! ```bash
//! # Log in and grant data consent
//! vitalpath-cli login
//! vitalpath-cli consent --grant
//!
//! # Connect a platform (triggers a vitals sync when consented)
//! vitalpath-cli connect apple-health
//!
//! # Re-sync and print the derived care report
//! vitalpath-cli refresh
//! vitalpath-cli report
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use vitalpath::auth::SessionGate;
use vitalpath::catalog::{seed_recommendations, CarePlanner};
use vitalpath::config::ServiceConfig;
use vitalpath::intelligence::{derive_care, merge_derived, sort_recommendations};
use vitalpath::logging::{init_logging, LoggingConfig};
use vitalpath::models::HealthPlatform;
use vitalpath::providers::default_providers;
use vitalpath::storage::JsonFileStore;
use vitalpath::HealthDataService;

#[derive(Parser)]
#[command(
    name = "vitalpath-cli",
    about = "VitalPath health core demo CLI",
    long_about = "Exercises the VitalPath health core: platform connection, consent, vitals sync, and the derived care report."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// State file override
    #[arg(long, global = true)]
    state_path: Option<PathBuf>,

    /// Simulated provider latency in milliseconds (connect and fetch)
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Fixed RNG seed for deterministic vitals
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    AppleHealth,
    GoogleFit,
    Fhir,
}

impl From<PlatformArg> for HealthPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::AppleHealth => Self::AppleHealth,
            PlatformArg::GoogleFit => Self::GoogleFit,
            PlatformArg::Fhir => Self::Fhir,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show connection, consent, and vitals state
    Status,
    /// Connect a health platform
    Connect {
        /// Platform to connect
        platform: PlatformArg,
    },
    /// Disconnect the current platform and clear vitals
    Disconnect,
    /// Grant or revoke health data consent
    Consent {
        /// Grant consent (revokes when absent)
        #[arg(long)]
        grant: bool,
    },
    /// Refresh vitals from the connected platform
    Refresh,
    /// Print recommendations and upcoming care derived from current vitals
    Report,
    /// Start a demo session
    Login,
    /// End the demo session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServiceConfig::from_env()?;
    if let Some(path) = cli.state_path {
        config.state_path = path;
    }
    if let Some(latency) = cli.latency_ms {
        config.connect_ms = latency;
        config.latency_ms = latency;
    }
    if let Some(seed) = cli.seed {
        config.rng_seed = Some(seed);
    }

    init_logging(&LoggingConfig {
        level: config.log_level,
        ..LoggingConfig::default()
    })?;

    let store = Arc::new(JsonFileStore::open(&config.state_path)?);
    let gate = SessionGate::new(store.clone());
    let service = HealthDataService::new(store, default_providers(&config))?;

    match cli.command {
        Command::Status => print_status(&gate, &service)?,
        Command::Connect { platform } => {
            let platform = HealthPlatform::from(platform);
            service.connect(platform).await?;
            println!("connected to {}", platform.display_name());
            if !service.has_consented()? {
                println!("note: consent not granted, vitals will not sync");
            }
        }
        Command::Disconnect => {
            service.disconnect()?;
            println!("disconnected");
        }
        Command::Consent { grant } => {
            service.update_consent(grant).await?;
            println!("consent {}", if grant { "granted" } else { "revoked" });
        }
        Command::Refresh => match service.refresh_vitals().await? {
            Some(vitals) => println!("vitals synced at {}", vitals.last_synced),
            None => println!("nothing to sync: connect a platform and grant consent first"),
        },
        Command::Report => print_report(&service)?,
        Command::Login => {
            gate.log_in()?;
            println!("logged in");
        }
        Command::Logout => {
            gate.log_out()?;
            println!("logged out");
        }
    }
    Ok(())
}

fn print_status(gate: &SessionGate, service: &HealthDataService) -> Result<()> {
    println!(
        "session:   {}",
        if gate.is_authenticated()? { "active" } else { "none" }
    );
    match service.connected_platform()? {
        Some(platform) => println!("platform:  {}", platform.display_name()),
        None => println!("platform:  none"),
    }
    println!(
        "consent:   {}",
        if service.has_consented()? { "granted" } else { "not granted" }
    );
    match service.vitals()? {
        Some(vitals) => {
            println!("synced:    {}", vitals.last_synced);
            if let Some(steps) = vitals.steps {
                println!("steps:     {steps}");
            }
            if let Some(hr) = vitals.heart_rate {
                println!("heart:     {} avg / {} resting bpm", hr.average, hr.resting);
            }
            if let Some(sleep) = vitals.sleep_hours {
                println!("sleep:     {sleep:.1} h");
            }
            if let Some(bp) = vitals.blood_pressure {
                println!("bp:        {}/{} mmHg", bp.systolic, bp.diastolic);
            }
            if let Some(chol) = vitals.cholesterol {
                println!(
                    "lipids:    {} total / {} hdl / {} ldl mg/dL",
                    chol.total, chol.hdl, chol.ldl
                );
            }
        }
        None => println!("synced:    never"),
    }
    Ok(())
}

fn print_report(service: &HealthDataService) -> Result<()> {
    let now = Utc::now();
    let mut recommendations = seed_recommendations();
    let mut planner = CarePlanner::seeded(now);

    if let Some(vitals) = service.vitals()? {
        let derived = derive_care(&vitals, now);
        merge_derived(&mut recommendations, derived.recommendations.clone());
        planner.apply_derived(&derived);
    } else {
        println!("(no vitals synced - showing profile-based entries only)\n");
    }

    sort_recommendations(&mut recommendations);
    println!("recommendations:");
    for rec in &recommendations {
        println!(
            "  [{:?}] {} ({}% confidence)",
            rec.urgency, rec.title, rec.confidence
        );
    }

    println!("\nupcoming care:");
    for event in planner.upcoming() {
        println!(
            "  {}  {} ({}% covered)",
            event.date.format("%Y-%m-%d"),
            event.title,
            event.insurance_coverage
        );
    }
    Ok(())
}
