//! Time source abstraction.
//!
//! Everything that reads "now" (block timestamps, challenge issuance,
//! freshness checks) goes through a [`Clock`], so tests can swap in a
//! deterministic implementation such as `notary_nullables::NullClock`.

use notary_types::Timestamp;

/// A source of the current time in whole epoch seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
