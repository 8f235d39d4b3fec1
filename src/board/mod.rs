pub mod filter;
pub mod generator;
pub mod models;
pub mod state;
pub mod tables;

// Re-export commonly used types
pub use generator::JobGenerator;
pub use models::{Category, CriteriaUpdate, EmploymentType, FilterCriteria, JobListing, Selection};
pub use state::{BoardHandle, BoardSnapshot, JobBoard, DEFAULT_CAPACITY};
