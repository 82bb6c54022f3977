use tinytemplate::TinyTemplate;

use crate::error::Result;

pub const SUMMARY: &str = "summary";
pub const LISTING: &str = "listing";
pub const SOCIAL: &str = "social";

/// Builds the template engine with every built-in template registered.
/// Values are written through tinytemplate's default, HTML escaping formatter.
pub fn engine() -> Result<TinyTemplate<'static>> {
    let mut tt = TinyTemplate::new();
    tt.add_template(SUMMARY, include_str!("templates/summary.html"))?;
    tt.add_template(LISTING, include_str!("templates/listing.html"))?;
    tt.add_template(SOCIAL, include_str!("templates/social.html"))?;
    Ok(tt)
}
