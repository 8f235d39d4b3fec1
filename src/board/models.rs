use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job category, one of the six fixed board sections
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Engineering,
    Design,
    Marketing,
    Community,
    Product,
    Operations,
}

/// Employment type of a listing
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

/// A single job listing. Immutable once generated; listings are dropped
/// when evicted past the board's capacity, never mutated in place.
#[derive(Debug, Serialize, Clone)]
pub struct JobListing {
    /// Unique across the whole collection for the listing's lifetime
    pub id: String,
    pub title: String,
    pub company: String,
    /// Short ticker-style abbreviation shown in place of a real logo
    pub logo: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub category: Category,
    pub salary: String,
    /// 2-4 short skill/topic tags, no duplicates within a listing
    pub tags: Vec<String>,
    pub posted_at: DateTime<Utc>,
    /// Which job board the listing pretends to have been scraped from
    pub source: String,
    pub featured: bool,
    /// Always true when `location` is "Remote"
    pub remote: bool,
}

impl PartialEq for JobListing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for JobListing {}

/// Filter sentinel: either everything, or one specific value.
///
/// Stands in for the UI's "all" option so the criteria can hold
/// "no restriction" without a magic string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

// Hand-written so `Selection<T>: Default` doesn't demand `T: Default`
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// True if `value` passes this selection
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

/// Mutable filter state driven by user interaction. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Selection<Category>,
    pub employment_type: Selection<EmploymentType>,
    /// Case-insensitive substring match against title, company and tags
    pub search: String,
}

/// Partial criteria change merged into the current state.
///
/// Mirrors the presentation layer's `onCriteriaChange` contract: only the
/// fields present in the update are touched.
#[derive(Debug, Clone, Default)]
pub struct CriteriaUpdate {
    pub category: Option<Selection<Category>>,
    pub employment_type: Option<Selection<EmploymentType>>,
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Merge a partial update into the current criteria in place
    pub fn apply(&mut self, update: CriteriaUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(employment_type) = update.employment_type {
            self.employment_type = employment_type;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_all_matches_everything() {
        let all: Selection<Category> = Selection::All;
        assert!(all.matches(&Category::Engineering));
        assert!(all.matches(&Category::Operations));
    }

    #[test]
    fn selection_only_matches_its_value() {
        let only = Selection::Only(EmploymentType::Contract);
        assert!(only.matches(&EmploymentType::Contract));
        assert!(!only.matches(&EmploymentType::FullTime));
    }

    #[test]
    fn criteria_default_is_all_sentinel() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.category, Selection::All);
        assert_eq!(criteria.employment_type, Selection::All);
        assert!(criteria.search.is_empty());
    }

    #[test]
    fn criteria_update_touches_only_named_fields() {
        let mut criteria = FilterCriteria {
            category: Selection::Only(Category::Design),
            employment_type: Selection::Only(EmploymentType::Freelance),
            search: "rust".to_string(),
        };

        criteria.apply(CriteriaUpdate {
            search: Some(String::new()),
            ..CriteriaUpdate::default()
        });

        assert_eq!(criteria.category, Selection::Only(Category::Design));
        assert_eq!(
            criteria.employment_type,
            Selection::Only(EmploymentType::Freelance)
        );
        assert!(criteria.search.is_empty());

        criteria.apply(CriteriaUpdate {
            category: Some(Selection::All),
            employment_type: Some(Selection::All),
            search: None,
        });
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn employment_type_serializes_kebab_case() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, "\"full-time\"");
        let json = serde_json::to_string(&Category::Engineering).unwrap();
        assert_eq!(json, "\"engineering\"");
    }
}
