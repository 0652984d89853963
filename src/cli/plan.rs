use chrono::{Local, NaiveTime, Timelike};
use clap::Parser;

use crate::{
    cli::services::{GeminiArgs, ServiceArgs},
    core::{
        planner::{Endpoint, Planner, resolve},
        preferences::{Preference, UserPreferences},
        request::TripRequest,
        settings::SimulationSettings,
    },
    prelude::*,
    quantity::{distance::Kilometers, percent::Percent},
    tables::{build_route_table, build_stops_table, build_timeline_table},
};

#[derive(Parser)]
pub struct PlanArgs {
    /// Starting point: a place name or `latitude,longitude`.
    #[clap(long)]
    pub from: String,

    /// Destination: a place name or `latitude,longitude`.
    #[clap(long)]
    pub to: String,

    /// Current battery level.
    #[clap(long = "battery-percent", env = "BATTERY_PERCENT")]
    pub battery_percent: Percent,

    /// Driving range on a full battery.
    #[clap(long = "range-km", env = "EV_RANGE_KM")]
    pub range: Kilometers,

    /// Departure time like `08:30`. Defaults to now.
    #[clap(long, value_parser = parse_departure)]
    pub departure: Option<NaiveTime>,

    #[clap(long, env = "PREFERENCES", value_delimiter = ',', num_args = 1..)]
    pub preferences: Vec<Preference>,

    /// Print the plan as JSON instead of the tables.
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub settings: SimulationSettings,

    #[clap(flatten)]
    pub services: ServiceArgs,

    #[clap(flatten)]
    pub gemini: GeminiArgs,
}

impl PlanArgs {
    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        self.preferences.iter().copied().collect()
    }

    /// Departure time, defaulting to the current minute.
    #[must_use]
    pub fn departure(&self) -> NaiveTime {
        self.departure.unwrap_or_else(|| {
            let now = Local::now().time();
            now.with_second(0).and_then(|now| now.with_nanosecond(0)).unwrap_or(now)
        })
    }
}

fn parse_departure(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .with_context(|| format!("`{value}` is not a time like `08:30`"))
}

#[instrument(skip_all, fields(from = %args.from, to = %args.to))]
pub async fn plan(args: &PlanArgs) -> Result {
    let client = args.services.client()?;
    let resolver = args.services.location_resolver(client.clone());
    let source = resolve(&resolver, Endpoint::Source, &args.from).await?;
    let destination = resolve(&resolver, Endpoint::Destination, &args.to).await?;

    let request = TripRequest::builder()
        .source(source)
        .destination(destination)
        .battery_percent(args.battery_percent)
        .range(args.range)
        .departure(args.departure())
        .preferences(args.preferences())
        .build();
    let route_provider = args.services.route_provider(client.clone());
    let advisor = args.gemini.advisor(client);
    let planner = Planner {
        route_provider: &route_provider,
        advisor: advisor.as_ref(),
        settings: &args.settings,
    };
    let plan = planner.plan(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }
    println!("{}", build_route_table(&plan.route_summary));
    if plan.charging_stops.is_empty() {
        println!("No charging stops needed.");
    } else {
        println!("{}", build_stops_table(&plan.charging_stops));
    }
    println!("{}", build_timeline_table(&plan.timeline));
    for notice in &plan.notices {
        println!("{notice}");
    }
    Ok(())
}
