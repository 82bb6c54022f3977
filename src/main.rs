use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};

use devblog::post::Post;
use devblog::{listing, social, PostSummary, SiteConfig, SummaryView};

#[derive(Parser)]
#[clap(author, version, about)]
/// Site configuration and post summaries for a static blog
struct Args {
    /// Path to the site config, defaults to $XDG_CONFIG_HOME/devblog/config.toml
    #[clap(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the site config and print it as JSON
    Check,
    /// Render the summary of each post (front matter .md or view model .json)
    Summary {
        #[clap(required = true, parse(from_os_str))]
        files: Vec<PathBuf>,
    },
    /// Render one page of the post listing
    List {
        #[clap(parse(from_os_str))]
        dir: PathBuf,
        #[clap(short, long, default_value = "1")]
        page: usize,
    },
    /// Render the social profile links
    Social,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let stdout = io::stdout();
    if let Err(e) = run(args, &mut stdout.lock()) {
        error!("{:#}", e);
        exit(1);
    }
}

fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    // The config is validated before anything is rendered.
    let config_path = SiteConfig::discover(args.config.as_deref())
        .context("could not find config file")?;
    let config = SiteConfig::load(&config_path)
        .with_context(|| format!("invalid config {}", config_path.display()))?;
    info!("Loaded config for \"{}\" by {}", config.title(), config.author());

    match args.command {
        Command::Check => {
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        Command::Summary { files } => {
            let view = SummaryView::new()?;
            for file in &files {
                let summary = load_summary(&config, file)?;
                info!("Rendering \"{}\"", summary.title);
                writeln!(out, "{}", view.render(&summary)?)?;
            }
        }
        Command::List { dir, page } => {
            let posts = listing::load_posts(&dir)?;
            write!(out, "{}", listing::render_page(&config, &posts, page)?)?;
        }
        Command::Social => {
            write!(out, "{}", social::render_links(&config)?)?;
        }
    }
    Ok(())
}

fn load_summary(config: &SiteConfig, path: &Path) -> anyhow::Result<PostSummary> {
    if path.extension() == Some(OsStr::new("json")) {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let summary = serde_json::from_str(&contents)
            .with_context(|| format!("could not parse {}", path.display()))?;
        Ok(summary)
    } else {
        Ok(Post::from_source(path)?.to_summary(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "+++\ntitle = \"Hello World\"\nslug = \"/hello-world\"\ndate = \"2018-01-01\"\n+++\n";

    fn site(config: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), config).unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/hello-world.md"), POST).unwrap();
        dir
    }

    fn list(dir: &Path) -> Args {
        Args {
            config: Some(dir.join("config.toml")),
            command: Command::List {
                dir: dir.join("posts"),
                page: 1,
            },
        }
    }

    #[test]
    fn invalid_config_stops_before_rendering() {
        let dir = site("title = \"t\"\nauthor = \"a\"\nprimaryColor = \"red\"\n");
        let mut out = Vec::new();

        let err = run(list(dir.path()), &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("postsPerPage"));
        assert!(out.is_empty());
    }

    #[test]
    fn valid_config_renders_listing() {
        let dir = site("title = \"t\"\nauthor = \"a\"\nprimaryColor = \"red\"\npostsPerPage = 5\n");
        let mut out = Vec::new();

        run(list(dir.path()), &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(r#"<h1><a href="/hello-world">Hello World</a></h1>"#));
    }
}
