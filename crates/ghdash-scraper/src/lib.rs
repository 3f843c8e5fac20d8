pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod selectors;
pub mod types;

pub use client::ProfileClient;
pub use error::ScraperError;
pub use types::{Profile, ProfileDetails, RepoCard, AVATAR_FALLBACK, BIO_FALLBACK};
