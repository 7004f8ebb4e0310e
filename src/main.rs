use clap::Parser;
use blood_group_rust::{cli, client, config, error, report, session};
use cli::{Cli, Commands};
use client::PredictClient;
use config::{Config, SERVER_ENV};
use error::Result;
use log::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let env_server = std::env::var(SERVER_ENV).ok();

    match cli.command {
        Commands::Predict { image, server, json } => {
            let base_url = config.resolve_server(server.as_deref(), env_server.as_deref());
            let client = PredictClient::new(base_url, config.timeout())?;

            let result = session::predict_image(&client, &image).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result.response)?);
            } else {
                println!("📄 {} ({} bytes)\n", result.file.file_name, result.file.size);
                print!("{}", report::render_result(&result.view));
            }
        }

        Commands::Check { image } => {
            let meta = session::check_image(&image)?;
            println!("✔ {} ({}, {} bytes) は送信可能です", meta.file_name, meta.mime_type, meta.size);
        }

        Commands::Health { server } => {
            let base_url = config.resolve_server(server.as_deref(), env_server.as_deref());
            let client = PredictClient::new(base_url, config.timeout())?;

            let health = client.health().await?;
            println!("サーバ: {}", client.base_url());
            println!("  状態: {}", health.status);
            println!("  モデル: {}", if health.model_loaded { "読込済み" } else { "未読込" });

            if !health.is_ready() {
                return Err(error::BloodGroupError::Health("モデルが読み込まれていません".into()));
            }
        }

        Commands::Config { set_server, set_timeout, show } => {
            let mut changed = false;

            if let Some(url) = set_server {
                config.set_server(url)?;
                changed = true;
                println!("✔ サーバURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds);
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  サーバURL: {}", config.server_url);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                if let Some(url) = env_server {
                    println!("  ({} で上書き中: {})", SERVER_ENV, url);
                }
            }
        }
    }

    Ok(())
}
