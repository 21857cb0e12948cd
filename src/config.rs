use clap::Parser;
use std::path::PathBuf;

/// Scrape a chapter website: the officer roster, the projects FAQ, and one
/// image. Defaults target acmutd.co.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Config {
    /// URL of the team roster page
    #[arg(long, default_value = "https://www.acmutd.co/team.html")]
    pub team_url: String,

    /// URL of the projects page
    #[arg(long, default_value = "https://www.acmutd.co/projects")]
    pub projects_url: String,

    /// URL of the image to download
    #[arg(long, default_value = "https://www.acmutd.co/png/team-education-eduardo.jpg")]
    pub image_url: String,

    /// Path the downloaded image is written to
    #[arg(long, default_value = "ed.jpg")]
    pub image_path: PathBuf,
}
