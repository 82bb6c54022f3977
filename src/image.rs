use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One pre-rendered resolution of an image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub src: String,
    pub width: u32,
}

/// A featured image with one or more responsive size variants.
///
/// Variants are kept sorted by width, and there is always at least one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImage")]
pub struct SizedImage {
    variants: Vec<SizeVariant>,
    sizes: Option<String>,
    alt: Option<String>,
}

#[derive(Deserialize)]
struct RawImage {
    #[serde(default)]
    variants: Vec<SizeVariant>,
    sizes: Option<String>,
    alt: Option<String>,
}

impl TryFrom<RawImage> for SizedImage {
    type Error = Error;

    fn try_from(raw: RawImage) -> Result<SizedImage> {
        let mut image = SizedImage::new(raw.variants)?;
        image.sizes = raw.sizes;
        image.alt = raw.alt;
        Ok(image)
    }
}

impl SizedImage {
    pub fn new(mut variants: Vec<SizeVariant>) -> Result<SizedImage> {
        if variants.is_empty() {
            return Err(Error::NoVariants);
        }
        if let Some(bad) = variants
            .iter()
            .find(|v| v.src.trim().is_empty() || v.width == 0)
        {
            return Err(Error::InvalidVariant {
                src: bad.src.clone(),
                width: bad.width,
            });
        }
        variants.sort_by_key(|v| v.width);
        Ok(SizedImage {
            variants,
            sizes: None,
            alt: None,
        })
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> SizedImage {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> SizedImage {
        self.alt = Some(alt.into());
        self
    }

    pub fn variants(&self) -> &[SizeVariant] {
        &self.variants
    }

    /// Fallback source for browsers without `srcset`: the widest variant.
    pub fn src(&self) -> &str {
        // `new` guarantees at least one variant.
        self.variants.last().map(|v| v.src.as_str()).unwrap_or_default()
    }

    pub fn srcset(&self) -> String {
        self.variants
            .iter()
            .map(|v| format!("{} {}w", v.src, v.width))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn sizes(&self) -> Option<&str> {
        self.sizes.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }
}
