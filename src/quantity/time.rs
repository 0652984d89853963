use chrono::TimeDelta;

quantity!(Hours, suffix: "h", precision: 2);

impl Hours {
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes / 60.0)
    }

    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds / 3600.0)
    }

    #[must_use]
    pub const fn as_minutes(self) -> f64 {
        self.0 * 60.0
    }
}

impl From<Hours> for TimeDelta {
    /// Millisecond resolution is more than enough for the clock labels.
    #[expect(clippy::cast_possible_truncation)]
    fn from(hours: Hours) -> Self {
        Self::milliseconds((hours.0 * 3_600_000.0).round() as i64)
    }
}

impl From<TimeDelta> for Hours {
    fn from(delta: TimeDelta) -> Self {
        Self::from_seconds(delta.as_seconds_f64())
    }
}
