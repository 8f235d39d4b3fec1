use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::models::JobListing;
use super::tables;

const BACKDATE_WINDOW_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;
const FEATURED_PROBABILITY: f64 = 0.15;
const REMOTE_PROBABILITY: f64 = 0.5;

/// Synthetic job listing generator.
///
/// All sampling goes through the owned rng so tests can construct a
/// deterministic generator via [`JobGenerator::seeded`] instead of
/// asserting on truly random output.
pub struct JobGenerator<R: Rng = StdRng> {
    rng: R,
}

impl JobGenerator<StdRng> {
    /// Entropy-seeded generator for production use
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for JobGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> JobGenerator<R> {
    /// Wrap an arbitrary rng
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce exactly `count` listings with fresh unique ids, sorted
    /// descending by `posted_at` (most recent first).
    ///
    /// Every field is drawn independently from the reference tables in
    /// [`tables`]; `count = 0` yields an empty vec. The sort is local to
    /// the returned batch.
    pub fn generate(&mut self, count: usize) -> Vec<JobListing> {
        let now = Utc::now();
        let mut listings: Vec<JobListing> =
            (0..count).map(|i| self.generate_one(i, now)).collect();

        listings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));

        debug!("Generated {} synthetic listings", listings.len());
        listings
    }

    fn generate_one(&mut self, index: usize, now: DateTime<Utc>) -> JobListing {
        let category = *pick(&mut self.rng, &tables::CATEGORIES);
        let title = *pick(&mut self.rng, tables::titles_for(category));
        let (company, logo) = *pick(&mut self.rng, &tables::COMPANIES);
        let location = *pick(&mut self.rng, &tables::LOCATIONS);

        // Backdate by a uniform fraction of the 7-day window, so the
        // batch skews recent but can reach a week back
        let backdate_ms = (self.rng.gen::<f64>() * BACKDATE_WINDOW_MS) as i64;

        JobListing {
            id: self.fresh_id(now, index),
            title: title.to_string(),
            company: company.to_string(),
            logo: logo.to_string(),
            location: location.to_string(),
            employment_type: *pick(&mut self.rng, &tables::EMPLOYMENT_TYPES),
            category,
            salary: pick(&mut self.rng, &tables::SALARY_RANGES).to_string(),
            tags: self.pick_tags(),
            posted_at: now - Duration::milliseconds(backdate_ms),
            source: pick(&mut self.rng, &tables::SOURCES).to_string(),
            featured: self.rng.gen_bool(FEATURED_PROBABILITY),
            remote: location == "Remote" || self.rng.gen_bool(REMOTE_PROBABILITY),
        }
    }

    /// `job-{epoch millis}-{batch index}-{random suffix}`. The batch index
    /// keeps ids distinct within a batch even if the clock doesn't move.
    fn fresh_id(&mut self, now: DateTime<Utc>, index: usize) -> String {
        let suffix: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(9)
            .map(char::from)
            .collect();
        format!(
            "job-{}-{}-{}",
            now.timestamp_millis(),
            index,
            suffix.to_lowercase()
        )
    }

    /// 2-4 tags drawn without replacement from the vocabulary
    fn pick_tags(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(2..=4);
        tables::TAGS
            .choose_multiple(&mut self.rng, count)
            .map(|tag| tag.to_string())
            .collect()
    }
}

/// Uniform draw from a fixed non-empty table
fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
