//! Fixed reference tables the generator samples from.
//!
//! These stand in for a real data source: every synthetic listing is
//! assembled from uniform draws over these lists.

use super::models::{Category, EmploymentType};

/// Company name paired with its ticker-style logo abbreviation
pub const COMPANIES: [(&str, &str); 20] = [
    ("Ethereum Foundation", "ETH"),
    ("Polygon Labs", "POLY"),
    ("Chainlink", "LINK"),
    ("Uniswap", "UNI"),
    ("Aave", "AAVE"),
    ("OpenSea", "OS"),
    ("Coinbase", "CB"),
    ("Binance", "BNB"),
    ("Solana Labs", "SOL"),
    ("Avalanche", "AVAX"),
    ("Arbitrum", "ARB"),
    ("Optimism", "OP"),
    ("dYdX", "DYDX"),
    ("Lido", "LDO"),
    ("MakerDAO", "MKR"),
    ("Compound", "COMP"),
    ("Curve Finance", "CRV"),
    ("SushiSwap", "SUSHI"),
    ("Blur", "BLUR"),
    ("Magic Eden", "ME"),
];

pub const ENGINEERING_TITLES: [&str; 15] = [
    "Senior Solidity Developer",
    "Blockchain Engineer",
    "Smart Contract Auditor",
    "Protocol Engineer",
    "Full Stack Web3 Developer",
    "Rust Blockchain Developer",
    "ZK Engineer",
    "DeFi Protocol Developer",
    "NFT Platform Engineer",
    "Layer 2 Systems Engineer",
    "Security Researcher",
    "Backend Engineer (Node.js)",
    "Frontend Engineer (React)",
    "DevOps Engineer",
    "Cairo Developer",
];

pub const DESIGN_TITLES: [&str; 6] = [
    "Senior Product Designer",
    "UI/UX Designer - Web3",
    "Brand Designer",
    "Visual Designer",
    "Design Lead",
    "Motion Designer",
];

pub const MARKETING_TITLES: [&str; 6] = [
    "Growth Marketing Manager",
    "Content Marketing Lead",
    "Social Media Manager",
    "Community Marketing",
    "Web3 Marketing Strategist",
    "Influencer Relations",
];

pub const COMMUNITY_TITLES: [&str; 6] = [
    "Community Manager",
    "Discord Moderator",
    "Developer Relations",
    "Community Lead",
    "Ecosystem Lead",
    "Ambassador Program Manager",
];

pub const PRODUCT_TITLES: [&str; 5] = [
    "Product Manager - DeFi",
    "Senior Product Manager",
    "Technical Product Manager",
    "Product Lead",
    "Product Analyst",
];

pub const OPERATIONS_TITLES: [&str; 6] = [
    "Operations Manager",
    "People Operations",
    "Finance Manager",
    "Legal Counsel - Crypto",
    "Compliance Officer",
    "Business Development",
];

pub const LOCATIONS: [&str; 12] = [
    "Remote",
    "San Francisco, CA",
    "New York, NY",
    "London, UK",
    "Singapore",
    "Dubai, UAE",
    "Berlin, Germany",
    "Lisbon, Portugal",
    "Miami, FL",
    "Austin, TX",
    "Zurich, Switzerland",
    "Hong Kong",
];

pub const SOURCES: [&str; 8] = [
    "LinkedIn",
    "crypto.jobs",
    "web3.career",
    "cryptocurrencyjobs.co",
    "remote3.co",
    "angellist.com",
    "Indeed",
    "Company Website",
];

pub const TAGS: [&str; 22] = [
    "Solidity",
    "Rust",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "DeFi",
    "NFT",
    "DAO",
    "L2",
    "ZK-Proofs",
    "Smart Contracts",
    "Web3",
    "Ethereum",
    "Polygon",
    "Solana",
    "Arbitrum",
    "Optimism",
    "Remote-First",
    "Startup",
    "Token Compensation",
    "Equity",
];

pub const SALARY_RANGES: [&str; 8] = [
    "$80k - $120k",
    "$100k - $150k",
    "$120k - $180k",
    "$150k - $220k",
    "$180k - $280k",
    "$200k - $350k",
    "$250k - $400k+",
    "Competitive + Tokens",
];

pub const EMPLOYMENT_TYPES: [EmploymentType; 4] = [
    EmploymentType::FullTime,
    EmploymentType::PartTime,
    EmploymentType::Contract,
    EmploymentType::Freelance,
];

pub const CATEGORIES: [Category; 6] = [
    Category::Engineering,
    Category::Design,
    Category::Marketing,
    Category::Community,
    Category::Product,
    Category::Operations,
];

/// Title list for a given category. Categories are drawn uniformly but
/// titles are only uniform within their category's list.
pub fn titles_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Engineering => &ENGINEERING_TITLES,
        Category::Design => &DESIGN_TITLES,
        Category::Marketing => &MARKETING_TITLES,
        Category::Community => &COMMUNITY_TITLES,
        Category::Product => &PRODUCT_TITLES,
        Category::Operations => &OPERATIONS_TITLES,
    }
}
