use scraper::Html;
use tracing::info;

pub mod config;
pub mod fetch;
pub mod projects;
pub mod team;

mod error;
mod extract;

pub use config::Config;
pub use error::ScrapeError;
pub use fetch::HttpSource;

/// Fetches raw page bodies. The HTTP implementation lives in [`fetch`];
/// tests substitute canned bodies so extraction never touches the network.
#[async_trait::async_trait]
pub trait PageSource {
    async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError>;
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Turns one parsed page into its printable report.
pub trait Extractor {
    type Page: std::fmt::Display;

    fn extract(&self, doc: &Html) -> Result<Self::Page, ScrapeError>;
}

/// The whole program: team page, projects page, then the image. Each page
/// tree only lives inside its own block; nothing is retained between steps.
pub async fn run<S: PageSource>(config: &Config, source: &S) -> Result<(), ScrapeError> {
    let html = source.fetch_text(&config.team_url).await?;
    let team = {
        let doc = Html::parse_document(&html);
        team::TeamExtractor.extract(&doc)?
    };
    info!("Extracted {} officer cards", team.officers.len());
    print!("{}", team);

    let html = source.fetch_text(&config.projects_url).await?;
    let projects = {
        let doc = Html::parse_document(&html);
        projects::ProjectsExtractor.extract(&doc)?
    };
    info!("Extracted {} question/answer pairs", projects.faqs.len());
    print!("{}", projects);

    fetch::download_image(source, &config.image_url, &config.image_path).await?;

    println!("\nDone!");
    Ok(())
}
