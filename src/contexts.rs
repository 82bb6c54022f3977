use serde::Serialize;

use crate::image::SizedImage;
use crate::summary::PostSummary;

// Contexts for template rendering.
#[derive(Serialize)]
pub struct SummaryContext<'a> {
    pub date: &'a str,
    pub title: &'a str,
    pub slug: &'a str,
    pub image: Option<ImageContext<'a>>,
}

#[derive(Serialize)]
pub struct ImageContext<'a> {
    pub src: &'a str,
    pub srcset: String,
    pub sizes: Option<&'a str>,
    pub alt: &'a str,
}

#[derive(Serialize)]
pub struct ListingContext<'a> {
    pub page: usize,
    pub pages: usize,
    pub posts: Vec<SummaryContext<'a>>,
}

#[derive(Serialize)]
pub struct SocialContext<'a> {
    pub links: Vec<SocialLink<'a>>,
}

#[derive(Serialize)]
pub struct SocialLink<'a> {
    pub platform: &'a str,
    pub url: &'a str,
}

impl<'a> SummaryContext<'a> {
    pub fn new(summary: &'a PostSummary) -> SummaryContext<'a> {
        SummaryContext {
            date: &summary.date,
            title: &summary.title,
            slug: &summary.slug,
            image: summary
                .image
                .as_ref()
                .map(|image| ImageContext::new(image, &summary.title)),
        }
    }
}

impl<'a> ImageContext<'a> {
    fn new(image: &'a SizedImage, title: &'a str) -> ImageContext<'a> {
        ImageContext {
            src: image.src(),
            srcset: image.srcset(),
            sizes: image.sizes(),
            alt: image.alt().unwrap_or(title),
        }
    }
}
