// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct FixedClock;

impl grant_cms::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}
