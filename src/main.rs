use artwork_table::core::ConfigProvider;
use artwork_table::utils::{logger, validation::Validate};
use artwork_table::{ArticClient, ArtworkTable, CliConfig, Session, Settings};
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(settings.verbose());
    } else {
        logger::init_cli_logger(settings.verbose());
    }

    tracing::info!("Starting artwork-table");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = ArticClient::from_config(&settings);
    tracing::info!("🔗 Using endpoint {}", client.endpoint());

    let table = ArtworkTable::new(settings.start_page(), settings.response_ordering());
    let session = Session::new(Arc::new(client), table);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session.run(stdin, &mut stdout).await?;

    Ok(())
}
