mod plan;
mod route;
mod search;
mod services;

use clap::{Parser, Subcommand};

pub use self::{plan::plan, route::route, search::search};
use self::{plan::PlanArgs, route::RouteArgs, search::SearchArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: route the trip, place the charging stops, and print the timeline.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Look up the locations matching the query.
    #[clap(name = "search")]
    Search(Box<SearchArgs>),

    /// Print the route summary without simulating the battery.
    #[clap(name = "route")]
    Route(Box<RouteArgs>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::preferences::Preference,
        quantity::{distance::Kilometers, efficiency::KilometersPerKilowattHour, percent::Percent},
    };

    #[test]
    fn parse_plan() {
        let args = Args::try_parse_from([
            "evtrip",
            "plan",
            "--from",
            "Amsterdam",
            "--to",
            "52.09,5.12",
            "--battery-percent",
            "85",
            "--range-km",
            "420",
            "--departure",
            "07:45",
            "--preferences",
            "food-options,pet-friendly",
            "--km-per-kwh",
            "5.5",
            "--json",
        ])
        .unwrap();
        let Command::Plan(args) = args.command else {
            panic!("expected `plan`");
        };
        assert_eq!(args.battery_percent, Percent(85.0));
        assert_eq!(args.range, Kilometers(420.0));
        assert_eq!(args.departure(), chrono::NaiveTime::from_hms_opt(7, 45, 0).unwrap());
        assert_eq!(args.preferences(), Preference::FoodOptions | Preference::PetFriendly);
        assert_eq!(args.settings.efficiency, KilometersPerKilowattHour(5.5));
        assert!(args.json);
    }

    #[test]
    fn reject_bad_departure() {
        assert!(
            Args::try_parse_from([
                "evtrip",
                "plan",
                "--from",
                "Amsterdam",
                "--to",
                "Utrecht",
                "--battery-percent",
                "85",
                "--range-km",
                "420",
                "--departure",
                "25:00",
            ])
            .is_err()
        );
    }

    #[test]
    fn parse_search() {
        let args = Args::try_parse_from(["evtrip", "search", "Utrecht", "--limit", "3"]).unwrap();
        let Command::Search(args) = args.command else {
            panic!("expected `search`");
        };
        assert_eq!(args.query, "Utrecht");
        assert_eq!(args.limit, 3);
    }
}
