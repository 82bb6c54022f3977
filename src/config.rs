use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Site wide settings, read once before anything is rendered.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    author: String,
    description: String,
    primary_color: String,
    show_header_image: bool,
    show_share_buttons: bool,
    posts_per_page: usize,
    social: BTreeMap<String, String>,
    path_prefix: String,
    site_url: String,
}

// Mirrors the file layout. Required keys are optional here so a missing one
// is reported by name instead of as a generic parse failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    title: Option<String>,
    author: Option<String>,
    #[serde(default)]
    description: String,
    primary_color: Option<String>,
    #[serde(default)]
    show_header_image: bool,
    #[serde(default)]
    show_share_buttons: bool,
    posts_per_page: Option<i64>,
    #[serde(default)]
    social: BTreeMap<String, String>,
    path_prefix: Option<String>,
    #[serde(default)]
    site_url: String,
}

fn required(key: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingKey(key)),
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> Result<SiteConfig> {
        let raw: RawConfig = toml::from_str(contents)?;

        let title = required("title", raw.title)?;
        let author = required("author", raw.author)?;
        let primary_color = required("primaryColor", raw.primary_color)?;
        let posts_per_page = match raw.posts_per_page {
            None => return Err(Error::MissingKey("postsPerPage")),
            Some(n) if n < 1 => {
                return Err(Error::InvalidKey {
                    key: "postsPerPage",
                    reason: format!("expected a positive integer, got {}", n),
                })
            }
            Some(n) => n as usize,
        };

        let path_prefix = raw.path_prefix.unwrap_or_else(|| "/".to_string());
        if !path_prefix.starts_with('/') {
            return Err(Error::InvalidKey {
                key: "pathPrefix",
                reason: format!("`{}` must start with '/'", path_prefix),
            });
        }

        Ok(SiteConfig {
            title,
            author,
            description: raw.description,
            primary_color,
            show_header_image: raw.show_header_image,
            show_share_buttons: raw.show_share_buttons,
            posts_per_page,
            social: raw.social,
            path_prefix,
            site_url: raw.site_url,
        })
    }

    pub fn load(path: &Path) -> Result<SiteConfig> {
        debug!("Reading config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        SiteConfig::from_toml(&contents)
    }

    /// Resolves which config file to use: an explicit path wins, otherwise
    /// `config.toml` under the XDG config home for `devblog`.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(p.to_path_buf());
        }
        xdg::BaseDirectories::with_prefix("devblog")
            .ok()?
            .find_config_file("config.toml")
    }

    /// Joins the path prefix and a post slug with a single separator.
    pub fn link_to(&self, slug: &str) -> String {
        format!(
            "{}/{}",
            self.path_prefix.trim_end_matches('/'),
            slug.trim_start_matches('/')
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn show_header_image(&self) -> bool {
        self.show_header_image
    }

    pub fn show_share_buttons(&self) -> bool {
        self.show_share_buttons
    }

    pub fn posts_per_page(&self) -> usize {
        self.posts_per_page
    }

    pub fn social(&self) -> &BTreeMap<String, String> {
        &self.social
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }
}
