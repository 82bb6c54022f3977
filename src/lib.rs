pub mod config;
pub mod contexts;
pub mod error;
pub mod frontmatter;
pub mod image;
pub mod listing;
pub mod post;
pub mod social;
pub mod summary;
pub mod templates;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use image::{SizeVariant, SizedImage};
pub use summary::{render, PostSummary, SummaryView};
