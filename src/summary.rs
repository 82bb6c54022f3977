use serde::{Deserialize, Serialize};
use tinytemplate::TinyTemplate;

use crate::contexts::SummaryContext;
use crate::error::Result;
use crate::image::SizedImage;
use crate::templates;

/// View model for one post in a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub date: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<SizedImage>,
}

impl PostSummary {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        image: Option<SizedImage>,
    ) -> PostSummary {
        PostSummary {
            date: date.into(),
            title: title.into(),
            slug: slug.into(),
            image,
        }
    }
}

/// Holds the compiled templates so many summaries can be rendered without
/// reparsing them.
pub struct SummaryView {
    tt: TinyTemplate<'static>,
}

impl SummaryView {
    pub fn new() -> Result<SummaryView> {
        Ok(SummaryView {
            tt: templates::engine()?,
        })
    }

    pub fn render(&self, summary: &PostSummary) -> Result<String> {
        let context = SummaryContext::new(summary);
        Ok(self.tt.render(templates::SUMMARY, &context)?)
    }
}

/// Renders a single post summary: the featured image (when there is one),
/// the title linking to the post, then the date.
pub fn render(summary: &PostSummary) -> Result<String> {
    SummaryView::new()?.render(summary)
}
