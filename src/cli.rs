use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "microspotter")]
#[command(about = "微生物観察カタログ - 発見した微生物に写真を登録する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 画像ストアの保存先ディレクトリ
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログ一覧（発見済みに印を付ける）
    Catalog,

    /// 発見数と進捗率を表示
    Status,

    /// 微生物の詳細を表示
    Show {
        /// 微生物名（大文字小文字は区別しない）
        name: String,
    },

    /// 写真を登録して発見済みにする（登録済みなら差し替え）
    Spot {
        /// 微生物名
        name: String,

        /// 画像ファイル
        image: PathBuf,
    },

    /// 登録した写真を削除
    Unspot {
        /// 微生物名
        name: String,
    },

    /// 登録した写真をすべて削除
    Reset,

    /// 設定を管理
    Config {
        /// 画像ストアの保存先を設定
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
