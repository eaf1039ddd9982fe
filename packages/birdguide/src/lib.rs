//! Species-guide scraper.
//!
//! Fetches a species page from All About Birds and turns its loosely structured
//! markup into a [`SpeciesProfile`]. Parsing happens in two steps: the page is
//! flattened into an ordered list of typed [`Element`]s, then a small
//! sequential extractor walks that list. The extractor never touches the HTML
//! library, so it can be tested with hand-built element lists.
//!
//! # Usage
//!
//! ```rust,ignore
//! use birdguide::ProfileScraper;
//!
//! let scraper = ProfileScraper::new()?;
//! let profile = scraper.lookup("american robin").await?;
//! if profile.found {
//!     println!("{} ({})", profile.name, profile.scientific_name);
//! }
//! ```
//!
//! # Modules
//!
//! - [`elements`] - HTML to typed element sequence
//! - [`extract`] - Pending-cursor extractor over the sequence
//! - [`fetch`] - Page fetching trait and HTTP implementation
//! - [`testing`] - Mock fetcher

pub mod elements;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod guide;
pub mod profile;
pub mod slug;
pub mod testing;

pub use elements::{tokenize, Element};
pub use error::{GuideError, Result};
pub use extract::extract;
pub use fetch::{http_client, HttpFetcher, PageFetcher};
pub use guide::{ProfileScraper, DEFAULT_BASE_URL};
pub use profile::SpeciesProfile;
pub use slug::species_slug;
