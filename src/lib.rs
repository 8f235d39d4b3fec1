pub mod board;
pub mod config;
pub mod shutdown;
pub mod worker;
