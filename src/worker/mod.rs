pub mod feed_worker;

pub use feed_worker::FeedWorker;
