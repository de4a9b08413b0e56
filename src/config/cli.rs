use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "artwork-table")]
#[command(about = "Browse and select artworks from the Art Institute of Chicago API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Artwork listing endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Records per page (sent as `limit`)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Page to load first
    #[arg(long, allow_negative_numbers = true)]
    pub start_page: Option<i64>,

    /// Apply every response as it arrives, even if a newer page was requested
    #[arg(long)]
    pub allow_stale_responses: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
