use serde::Deserialize;

use crate::image::SizedImage;

pub const DELIMITER: &str = "+++";

#[derive(Clone, Debug, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub slug: String,
    pub date: String,
    #[serde(default)]
    pub image: Option<SizedImage>,
}

/// Splits a post into its front matter and body. The front matter sits
/// between two `+++` lines at the very top of the file.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let rest = text.trim_start().strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
