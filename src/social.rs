use crate::config::SiteConfig;
use crate::contexts::{SocialContext, SocialLink};
use crate::error::Result;
use crate::templates;

/// Renders the configured social profiles as a link list, in platform name
/// order. Nothing is rendered when no profiles are configured.
pub fn render_links(config: &SiteConfig) -> Result<String> {
    if config.social().is_empty() {
        return Ok(String::new());
    }

    let context = SocialContext {
        links: config
            .social()
            .iter()
            .map(|(platform, url)| SocialLink { platform, url })
            .collect(),
    };
    let tt = templates::engine()?;
    Ok(tt.render(templates::SOCIAL, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::FULL;

    #[test]
    fn renders_links_in_order() {
        let config = SiteConfig::from_toml(FULL).unwrap();
        let html = render_links(&config).unwrap();
        assert!(html.starts_with(r#"<ul class="social">"#));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains(r#"<a href="https://github.com/ajurasz" rel="me">github</a>"#));
        assert!(html.find(">github<").unwrap() < html.find(">twitter<").unwrap());
    }

    #[test]
    fn empty_without_profiles() {
        let config = SiteConfig::from_toml(
            "title = \"t\"\nauthor = \"a\"\nprimaryColor = \"red\"\npostsPerPage = 3\n",
        )
        .unwrap();
        assert_eq!(render_links(&config).unwrap(), "");
    }
}
