use super::models::{FilterCriteria, JobListing};

/// Derive the visible subset of `listings` under `criteria`.
///
/// Pure and stable: the output preserves the input's relative order and
/// never re-sorts. The three predicates apply conjunctively; an all-sentinel
/// criteria returns the collection unchanged. Full recomputation on every
/// change is fine at the board's 50-listing bound.
pub fn visible(listings: &[JobListing], criteria: &FilterCriteria) -> Vec<JobListing> {
    let search = criteria.search.to_lowercase();

    listings
        .iter()
        .filter(|listing| criteria.category.matches(&listing.category))
        .filter(|listing| criteria.employment_type.matches(&listing.employment_type))
        .filter(|listing| search.is_empty() || matches_search(listing, &search))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against title, company, or any tag.
/// `search` must already be lowercased.
fn matches_search(listing: &JobListing, search: &str) -> bool {
    listing.title.to_lowercase().contains(search)
        || listing.company.to_lowercase().contains(search)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::models::{Category, CriteriaUpdate, EmploymentType, Selection};
    use chrono::Utc;

    fn listing(id: &str, title: &str, company: &str, tags: &[&str]) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            logo: "ETH".to_string(),
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            category: Category::Engineering,
            salary: "$120k - $180k".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            posted_at: Utc::now(),
            source: "web3.career".to_string(),
            featured: false,
            remote: true,
        }
    }

    fn with_category(mut listing: JobListing, category: Category) -> JobListing {
        listing.category = category;
        listing
    }

    #[test]
    fn all_sentinel_criteria_returns_the_collection_unchanged() {
        let listings = vec![
            listing("a", "Blockchain Engineer", "Aave", &["Rust"]),
            listing("b", "Design Lead", "Blur", &["NFT", "Web3"]),
        ];

        let result = visible(&listings, &FilterCriteria::default());
        assert_eq!(result, listings);
    }

    #[test]
    fn filtering_is_idempotent() {
        let listings = vec![
            listing("a", "ZK Engineer", "Polygon Labs", &["ZK-Proofs"]),
            listing("b", "Protocol Engineer", "Lido", &["DeFi", "Ethereum"]),
            listing("c", "Cairo Developer", "dYdX", &["L2", "Startup"]),
        ];
        let criteria = FilterCriteria {
            search: "engineer".to_string(),
            ..FilterCriteria::default()
        };

        let first = visible(&listings, &criteria);
        let second = visible(&first, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn category_filter_keeps_only_that_category_in_order() {
        let listings = vec![
            with_category(listing("a", "Design Lead", "Blur", &[]), Category::Design),
            listing("b", "DevOps Engineer", "Coinbase", &[]),
            with_category(listing("c", "Brand Designer", "Aave", &[]), Category::Design),
            listing("d", "ZK Engineer", "Lido", &[]),
        ];
        let criteria = FilterCriteria {
            category: Selection::Only(Category::Design),
            ..FilterCriteria::default()
        };

        let result = visible(&listings, &criteria);
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(result.iter().all(|l| l.category == Category::Design));
    }

    #[test]
    fn search_matches_title_company_and_tags_case_insensitively() {
        let listings = vec![
            listing("title", "Senior Solidity Developer", "Aave", &["DeFi"]),
            listing("tag", "Community Manager", "Blur", &["Solana", "DAO"]),
            listing("none", "Brand Designer", "Magic Eden", &["NFT"]),
        ];
        let criteria = FilterCriteria {
            search: "SOL".to_string(),
            ..FilterCriteria::default()
        };

        let result = visible(&listings, &criteria);
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["title", "tag"]);
    }

    #[test]
    fn predicates_apply_conjunctively() {
        let mut contract = listing("contract", "ZK Engineer", "Lido", &["ZK-Proofs"]);
        contract.employment_type = EmploymentType::Contract;
        let listings = vec![
            contract,
            listing("fulltime", "ZK Engineer", "Lido", &["ZK-Proofs"]),
        ];

        let criteria = FilterCriteria {
            category: Selection::Only(Category::Engineering),
            employment_type: Selection::Only(EmploymentType::Contract),
            search: "zk".to_string(),
        };

        let result = visible(&listings, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "contract");
    }

    #[test]
    fn design_scenario_returns_exactly_the_design_listings() {
        let mut listings = Vec::new();
        for i in 0..3 {
            listings.push(with_category(
                listing(&format!("design-{i}"), "Visual Designer", "OpenSea", &[]),
                Category::Design,
            ));
        }
        for i in 0..5 {
            listings.push(listing(
                &format!("eng-{i}"),
                "Backend Engineer (Node.js)",
                "Binance",
                &[],
            ));
        }

        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaUpdate {
            category: Some(Selection::Only(Category::Design)),
            ..CriteriaUpdate::default()
        });

        let result = visible(&listings, &criteria);
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["design-0", "design-1", "design-2"]);
    }

    #[test]
    fn zero_matches_is_an_ordinary_empty_result() {
        let listings = vec![listing("a", "Protocol Engineer", "Uniswap", &["DeFi"])];
        let criteria = FilterCriteria {
            search: "no such thing".to_string(),
            ..FilterCriteria::default()
        };

        assert!(visible(&listings, &criteria).is_empty());
    }
}
