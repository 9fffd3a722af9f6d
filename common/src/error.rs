//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 保存済みデータが壊れている（JSONとして読めない）
    #[error("Corrupt store entry '{key}': {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// ストレージ自体へのアクセス失敗（localStorage無効、容量超過など）
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown organism: {0}")]
    UnknownOrganism(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
