//! FlaminGo core: answers birding commands with eBird sightings and
//! All About Birds species profiles.
//!
//! - [`observations`] - merge, sort, filter and bound sighting lists
//! - [`render`] - embeds for profiles, not-found and help
//! - [`commands`] - the [`Flamingo`] facade a dispatcher calls into

pub mod commands;
pub mod config;
pub mod error;
pub mod observations;
pub mod render;

pub use commands::Flamingo;
pub use config::Config;
pub use error::{FlamingoError, Result};
pub use render::{Embed, EmbedField};
