use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser as _;
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use weekgrid_core::config::load_config;
use weekgrid_engine::date::first_weekday;
use weekgrid_engine::{Event, Geometry, layout_week_containing};

/// Lay out one week of calendar events as JSON.
#[derive(Debug, Clone, clap::Parser)]
struct Cli {
    /// JSON file holding an array of events.
    path: PathBuf,
    /// Any date inside the week to lay out (defaults to today).
    #[clap(long)]
    week_of: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let geometry = Geometry::from_layout(&config.layout)?;
    let first_day = first_weekday(&config.layout)?;

    let source = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse events in {}", cli.path.display()))?;
    tracing::info!(events = events.len(), path = %cli.path.display(), "Events loaded");

    let week_of = cli.week_of.unwrap_or_else(|| Local::now().date_naive());
    let layout = layout_week_containing(&events, week_of, first_day, &geometry);

    let days: Vec<_> = layout
        .days
        .iter()
        .map(|day| {
            day.iter()
                .map(|placed| {
                    json!({
                        "occurrence": placed,
                        "text_color": placed.occurrence.text_color().map(|c| c.as_hex()),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let output = json!({
        "week_start": layout.week_start,
        "week_end": layout.week_end,
        "days": days,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
