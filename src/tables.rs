use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        location::ResolvedLocation,
        plan::ChargingStop,
        route::RouteSummary,
        timeline::{Event, EventKind},
    },
    fmt::FormattedClock,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_route_table(summary: &RouteSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["From", "To", "Distance", "Driving time", "Via"]);
    table.add_row(vec![
        Cell::new(&summary.actual_source_address),
        Cell::new(&summary.actual_destination_address),
        Cell::new(summary.distance).set_alignment(CellAlignment::Right),
        Cell::new(&summary.duration).set_alignment(CellAlignment::Right),
        Cell::new(summary.major_waypoints.join("\n")).add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_stops_table(stops: &[ChargingStop]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Station", "ETA", "Charging", "Energy", "Before", "After", "Activities"]);
    for stop in stops {
        table.add_row(vec![
            Cell::new(&stop.station),
            Cell::new(&stop.eta),
            Cell::new(&stop.charging_time).set_alignment(CellAlignment::Right),
            Cell::new(stop.energy).set_alignment(CellAlignment::Right),
            Cell::new(stop.range_on_arrival).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(stop.range_on_departure).set_alignment(CellAlignment::Right).fg(Color::Green),
            Cell::new(stop.activities_nearby.join("\n")),
        ]);
    }
    table
}

pub fn build_timeline_table(timeline: &[Event]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Event"]);
    for event in timeline {
        let (text, color) = match &event.kind {
            EventKind::Depart { from } => (format!("Depart from {from}"), Color::Reset),
            EventKind::StopAt { station } => (format!("Stop at {station}"), Color::DarkYellow),
            EventKind::ResumeFrom { station } => {
                (format!("Resume drive from {station}"), Color::Reset)
            }
            EventKind::ArriveAt { destination } => {
                (format!("Arrive at {destination}"), Color::Green)
            }
        };
        table.add_row(vec![
            Cell::new(FormattedClock(event.at)).set_alignment(CellAlignment::Right),
            Cell::new(text).fg(color),
        ]);
    }
    table
}

pub fn build_locations_table(locations: &[ResolvedLocation]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Coordinates", "OSM"]);
    for location in locations {
        table.add_row(vec![
            Cell::new(&location.display_name),
            Cell::new(location.coordinates).add_attribute(Attribute::Dim),
            Cell::new(
                location
                    .osm_reference
                    .as_ref()
                    .map(|reference| format!("{}/{}", reference.kind, reference.id))
                    .unwrap_or_default(),
            )
            .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
