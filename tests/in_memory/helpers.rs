//! Shared test helpers for in-memory store integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use missive::message::{
    adapters::memory::InMemoryMessageRepository,
    services::{Listing, MessageStore},
};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Store service over the in-memory repository and the system clock.
pub type TestStore = MessageStore<InMemoryMessageRepository, DefaultClock>;

/// Store service over the in-memory repository and a manual clock.
pub type ManualStore = MessageStore<InMemoryMessageRepository, ManualClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh store service for each test.
#[fixture]
pub fn store() -> TestStore {
    MessageStore::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a fresh store service whose clock only moves when told to.
#[fixture]
pub fn manual_store() -> (ManualStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::fixed());
    let service = MessageStore::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::clone(&clock),
    );
    (service, clock)
}

/// Polls the listing until it reaches the expected size or a deadline
/// passes, tolerating the store's bounded indexing delay.
pub fn wait_until_listed(rt: &Runtime, service: &TestStore, expected: usize) -> Listing {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let listing = rt
            .block_on(service.list_all())
            .expect("listing should succeed");
        if listing.len() >= expected || Instant::now() >= deadline {
            return listing;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at an arbitrary fixed instant.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 1, 15, 9, 30, 0)
            .single()
            .expect("valid fixed instant");
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}
