use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::frontmatter::{self, Frontmatter};
use crate::summary::PostSummary;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug)]
pub struct Post {
    pub source: PathBuf,
    pub frontmatter: Frontmatter,
    pub date: NaiveDate,
}

impl Post {
    pub fn from_source(source_path: &Path) -> Result<Post> {
        let contents =
            fs::read_to_string(source_path).map_err(|e| Error::io(source_path, e))?;
        Post::parse(source_path, &contents)
    }

    /// Parses a post's front matter. `source_path` is only used to name the
    /// file in errors.
    pub fn parse(source_path: &Path, contents: &str) -> Result<Post> {
        let (header, _body) = frontmatter::split(contents).ok_or_else(|| Error::NoFrontmatter {
            path: source_path.to_path_buf(),
        })?;

        let frontmatter: Frontmatter =
            toml::from_str(header).map_err(|source| Error::Frontmatter {
                path: source_path.to_path_buf(),
                source,
            })?;

        let date = NaiveDate::parse_from_str(&frontmatter.date, DATE_FORMAT).map_err(|_| {
            Error::BadDate {
                path: source_path.to_path_buf(),
                date: frontmatter.date.clone(),
            }
        })?;
        debug!("[{}] {} ({})", source_path.display(), frontmatter.title, date);

        Ok(Post {
            source: source_path.to_path_buf(),
            frontmatter,
            date,
        })
    }

    /// Builds the view model, resolving the slug against the path prefix.
    pub fn to_summary(&self, config: &SiteConfig) -> PostSummary {
        PostSummary::new(
            self.frontmatter.date.clone(),
            self.frontmatter.title.clone(),
            config.link_to(&self.frontmatter.slug),
            self.frontmatter.image.clone(),
        )
    }
}
