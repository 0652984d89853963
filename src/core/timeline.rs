use std::fmt::{Display, Formatter};

use chrono::NaiveTime;

use crate::fmt::FormattedClock;

/// Timeline entry.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub at: NaiveTime,
    pub kind: EventKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Depart { from: String },
    StopAt { station: String },
    ResumeFrom { station: String },
    ArriveAt { destination: String },
}

impl Event {
    pub fn depart(at: NaiveTime, from: impl Into<String>) -> Self {
        Self { at, kind: EventKind::Depart { from: from.into() } }
    }

    pub fn stop_at(at: NaiveTime, station: impl Into<String>) -> Self {
        Self { at, kind: EventKind::StopAt { station: station.into() } }
    }

    pub fn resume_from(at: NaiveTime, station: impl Into<String>) -> Self {
        Self { at, kind: EventKind::ResumeFrom { station: station.into() } }
    }

    pub fn arrive_at(at: NaiveTime, destination: impl Into<String>) -> Self {
        Self { at, kind: EventKind::ArriveAt { destination: destination.into() } }
    }

    #[must_use]
    pub fn is_arrival_at(&self, name: &str) -> bool {
        matches!(&self.kind, EventKind::ArriveAt { destination } if destination == name)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let at = FormattedClock(self.at);
        match &self.kind {
            EventKind::Depart { from } => write!(f, "{at} - Depart from {from}"),
            EventKind::StopAt { station } => {
                write!(f, "{at} - Stop at {station} (Charge & Explore)")
            }
            EventKind::ResumeFrom { station } => write!(f, "{at} - Resume drive from {station}"),
            EventKind::ArriveAt { destination } => write!(f, "{at} - Arrive at {destination}"),
        }
    }
}
