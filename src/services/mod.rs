// Service exports
pub mod cache;
pub mod distribution;

pub use cache::QuestionnaireCache;
pub use distribution::{DistributionClient, DistributionError};
