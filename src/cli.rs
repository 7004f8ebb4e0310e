use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blood-group")]
#[command(about = "血液サンプル画像から血液型を判定するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を送信して血液型を判定
    Predict {
        /// 画像ファイル (PNG/JPG/JPEG/BMP, 16MBまで)
        #[arg(required = true)]
        image: PathBuf,

        /// サーバURL（例: http://localhost:5000）
        #[arg(short, long)]
        server: Option<String>,

        /// レスポンスJSONをそのまま出力
        #[arg(long)]
        json: bool,
    },

    /// 送信せずに画像を検証
    Check {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,
    },

    /// サーバの状態を確認
    Health {
        /// サーバURL
        #[arg(short, long)]
        server: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// サーバURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// タイムアウト秒数を設定（0で無制限）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
