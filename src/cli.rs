use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plant-doctor")]
#[command(about = "植物の写真から病害を診断するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真を分類サービスに送って診断
    Diagnose {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 分類サービスのURL（設定・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// タイムアウト秒数（省略時は設定値）
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 病害カタログを表示
    Diseases {
        /// 病害名（大文字小文字は区別しない）
        #[arg(short, long)]
        name: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 分類サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
