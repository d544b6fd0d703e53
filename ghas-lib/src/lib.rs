mod config;
mod error;
mod filter;
mod ghas_client;
mod headers;
mod json_lookup;
mod logging_middleware;
mod object_model;
mod query;
mod rate_limit;
mod result;

pub use self::config::ClientConfig;
pub use self::error::GhasError;
pub use self::filter::RepositoryFilter;
pub use self::ghas_client::{GhasClient, ListingStop, RepositoryListing};
pub use self::headers::github_headers;
pub use self::json_lookup::{lookup, lookup_enabled, lookup_str};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{
    FeatureSetting, FeatureStatus, GhasTarget, Repository, SecurityAndAnalysis,
};
pub use self::query::RepositoryType;
pub use self::rate_limit::is_rate_limited;
pub use self::result::GhasResult;
