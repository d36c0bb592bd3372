use chrono::{DateTime, Utc};
use conduit::application::ports::time::Clock;
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-14T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp shared by every mock.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct MockClock;

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
