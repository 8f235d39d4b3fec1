use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::filter;
use super::generator::JobGenerator;
use super::models::{CriteriaUpdate, FilterCriteria, JobListing};

/// The collection keeps only the 50 most-recently-added listings
pub const DEFAULT_CAPACITY: usize = 50;

/// Point-in-time view handed to the presentation layer for the
/// "showing X of Y" indicator and the live-feed badge.
#[derive(Debug, Serialize, Clone)]
pub struct BoardSnapshot {
    /// `None` until the first filter computation has run; a zero-match
    /// result is `Some` with an empty vec, which is a different state
    pub visible: Option<Vec<JobListing>>,
    pub total: usize,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Single owner of all process-wide board state: the bounded listing
/// collection, the current filter criteria, and the derived visible subset.
///
/// All mutation goes through the methods here; the collection is never
/// touched directly by the worker or the presentation layer.
pub struct JobBoard<R: Rng = StdRng> {
    generator: JobGenerator<R>,
    listings: Vec<JobListing>,
    criteria: FilterCriteria,
    visible: Option<Vec<JobListing>>,
    last_refreshed: Option<DateTime<Utc>>,
    capacity: usize,
}

impl JobBoard<StdRng> {
    pub fn new(capacity: usize) -> Self {
        Self::with_generator(JobGenerator::new(), capacity)
    }

    /// Deterministic board for tests
    pub fn seeded(seed: u64, capacity: usize) -> Self {
        Self::with_generator(JobGenerator::seeded(seed), capacity)
    }
}

impl<R: Rng> JobBoard<R> {
    pub fn with_generator(generator: JobGenerator<R>, capacity: usize) -> Self {
        Self {
            generator,
            listings: Vec::new(),
            criteria: FilterCriteria::default(),
            visible: None,
            last_refreshed: None,
            capacity,
        }
    }

    /// Replace the collection with a freshly generated batch.
    /// The batch arrives sorted descending by `posted_at`.
    pub fn seed(&mut self, count: usize) {
        self.listings = self.generator.generate(count);
        self.last_refreshed = Some(Utc::now());
        self.recompute();
        info!("Seeded board with {} listings", self.listings.len());
    }

    /// One live-feed tick: generate a single listing, prepend it, and
    /// truncate to capacity so the oldest-added listing falls off.
    ///
    /// Prepend-and-truncate only. The collection is deliberately NOT
    /// re-sorted, so a freshly injected listing whose random `posted_at`
    /// lands earlier than a resident one perturbs the descending order.
    /// That drift matches the reference feed and stays uncorrected.
    pub fn refresh(&mut self) -> JobListing {
        let mut batch = self.generator.generate(1);
        let listing = batch.remove(0);

        self.listings.insert(0, listing.clone());
        self.listings.truncate(self.capacity);
        self.last_refreshed = Some(Utc::now());
        self.recompute();

        debug!(
            "Injected listing {} ({} at {})",
            listing.id, listing.title, listing.company
        );
        listing
    }

    /// Merge a partial criteria change and recompute the visible subset
    pub fn set_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.apply(update);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = Some(filter::visible(&self.listings, &self.criteria));
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    /// `None` means the pipeline has not run yet, as opposed to a
    /// computed-but-empty result
    pub fn visible_listings(&self) -> Option<&[JobListing]> {
        self.visible.as_deref()
    }

    pub fn total_count(&self) -> usize {
        self.listings.len()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            visible: self.visible.clone(),
            total: self.listings.len(),
            last_refreshed: self.last_refreshed,
        }
    }
}

/// Cloneable handle sharing one [`JobBoard`] between the feed worker and
/// the presentation layer.
///
/// The reference model is a single logical thread of control; the mutex
/// is only the ownership mapping onto the tokio runtime. Every operation
/// is O(collection size) and nothing awaits while holding the lock.
#[derive(Clone)]
pub struct BoardHandle {
    inner: Arc<Mutex<JobBoard>>,
}

impl BoardHandle {
    pub fn new(board: JobBoard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    pub fn seed(&self, count: usize) {
        self.lock().seed(count);
    }

    pub fn refresh(&self) -> JobListing {
        self.lock().refresh()
    }

    pub fn set_criteria(&self, update: CriteriaUpdate) {
        self.lock().set_criteria(update);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot()
    }

    pub fn total_count(&self) -> usize {
        self.lock().total_count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, JobBoard> {
        // A poisoned lock means a panic already killed the board's only
        // writer; nothing sensible is left to salvage
        self.inner.lock().expect("job board lock poisoned")
    }
}
