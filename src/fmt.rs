use std::fmt::{Debug, Display, Formatter};

use chrono::{NaiveTime, TimeDelta};

/// Driving time like `6 hr 40 min`.
pub struct FormattedDuration(pub TimeDelta);

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hours = self.0.num_hours();
        let minutes = self.0.num_minutes() % 60;
        match (hours, minutes) {
            (0, 0) if self.0 > TimeDelta::zero() => {
                // Anything under a minute is rounded up to a minute:
                write!(f, "{:.0} min", (self.0.as_seconds_f64() / 60.0).ceil())
            }
            (0, 0) => write!(f, "0 min"),
            (0, minutes) => write!(f, "{minutes} min"),
            (hours, 0) => write!(f, "{hours} hr"),
            (hours, minutes) => write!(f, "{hours} hr {minutes} min"),
        }
    }
}

impl Debug for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Wall clock time like `9:05 AM`.
#[derive(Copy, Clone)]
pub struct FormattedClock(pub NaiveTime);

impl Display for FormattedClock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

impl Debug for FormattedClock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
