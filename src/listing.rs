use std::ffi::OsStr;
use std::fs::read_dir;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::SiteConfig;
use crate::contexts::{ListingContext, SummaryContext};
use crate::error::{Error, Result};
use crate::post::Post;
use crate::summary::PostSummary;
use crate::templates;

/// Loads every `*.md` post in `dir`, newest first. Posts sharing a date are
/// ordered by title.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let entries = read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut posts = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension() != Some(OsStr::new("md")) {
            warn!("Skipping {}", path.display());
            continue;
        }
        posts.push(Post::from_source(&path)?);
    }
    posts.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.frontmatter.title.cmp(&b.frontmatter.title))
    });

    info!("Loaded {} posts from {}", posts.len(), dir.display());
    Ok(posts)
}

/// Chunks `items` into pages of at most `per_page`, keeping their order.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if per_page == 0 {
        return Vec::new();
    }
    items.chunks(per_page).collect()
}

/// Renders the 1-based `page` of the listing as a section of summaries.
/// A listing always has a first page, even with no posts.
pub fn render_page(config: &SiteConfig, posts: &[Post], page: usize) -> Result<String> {
    let mut pages = paginate(posts, config.posts_per_page());
    if pages.is_empty() {
        pages.push(&[]);
    }
    let chunk = page
        .checked_sub(1)
        .and_then(|i| pages.get(i))
        .ok_or(Error::PageOutOfRange {
            page,
            pages: pages.len(),
        })?;
    debug!("Rendering page {} of {} ({} posts)", page, pages.len(), chunk.len());

    let summaries: Vec<PostSummary> = chunk.iter().map(|p| p.to_summary(config)).collect();
    let context = ListingContext {
        page,
        pages: pages.len(),
        posts: summaries.iter().map(SummaryContext::new).collect(),
    };

    let tt = templates::engine()?;
    Ok(tt.render(templates::LISTING, &context)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::tests::FULL;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        let text = format!(
            "+++\ntitle = \"{}\"\nslug = \"{}\"\ndate = \"{}\"\n+++\nbody\n",
            title, name, date
        );
        fs::write(dir.join(format!("{}.md", name)), text).unwrap();
    }

    fn config(per_page: usize) -> SiteConfig {
        SiteConfig::from_toml(&FULL.replace(
            "postsPerPage = 5",
            &format!("postsPerPage = {}", per_page),
        ))
        .unwrap()
    }

    #[test]
    fn paginate_chunks_in_order() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2);
        assert_eq!(pages, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert!(paginate::<u8>(&[], 3).is_empty());
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn loads_newest_first_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "old", "Old", "2017-06-01");
        write_post(dir.path(), "new", "New", "2018-03-01");
        write_post(dir.path(), "b", "B", "2018-01-01");
        write_post(dir.path(), "a", "A", "2018-01-01");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let posts = load_posts(dir.path()).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.frontmatter.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "A", "B", "Old"]);
    }

    #[test]
    fn bad_post_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.md"), "no front matter").unwrap();
        assert!(matches!(
            load_posts(dir.path()),
            Err(Error::NoFrontmatter { .. })
        ));
    }

    #[test]
    fn renders_requested_page() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "one", "One", "2018-01-01");
        write_post(dir.path(), "two", "Two", "2018-01-02");
        write_post(dir.path(), "three", "Three", "2018-01-03");
        let posts = load_posts(dir.path()).unwrap();

        let config = config(2);
        let first = render_page(&config, &posts, 1).unwrap();
        assert!(first.starts_with(r#"<section class="listing" data-page="1" data-pages="2">"#));
        assert_eq!(first.matches(r#"<article class="summary">"#).count(), 2);
        assert!(first.find(">Three</a>").unwrap() < first.find(">Two</a>").unwrap());
        assert!(first.contains(r#"<a href="/three">"#));

        let second = render_page(&config, &posts, 2).unwrap();
        assert_eq!(second.matches(r#"<article class="summary">"#).count(), 1);
        assert!(second.contains(">One</a>"));
    }

    #[test]
    fn empty_listing_has_one_empty_page() {
        let html = render_page(&config(5), &[], 1).unwrap();
        assert!(html.starts_with(r#"<section class="listing" data-page="1" data-pages="1">"#));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn out_of_range_pages() {
        for page in [0, 2] {
            assert!(matches!(
                render_page(&config(5), &[], page),
                Err(Error::PageOutOfRange { pages: 1, .. })
            ));
        }
    }

    #[test]
    fn skips_directories_named_like_posts() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "real", "Real", "2018-01-01");
        fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let posts = load_posts(dir.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].frontmatter.title, "Real");
    }
}
