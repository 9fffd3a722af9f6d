use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("画像ファイルが見つかりません: {0}")]
    ImageNotFound(String),

    #[error("カタログに存在しない微生物です: {0}（`microspotter catalog` で一覧を確認してください）")]
    UnknownOrganism(String),

    #[error("保存データが壊れています（`microspotter reset` で初期化できます）: {0}")]
    CorruptStore(String),

    #[error("ストア操作エラー: {0}")]
    Store(microspotter_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<microspotter_common::Error> for SpotterError {
    fn from(err: microspotter_common::Error) -> Self {
        match err {
            microspotter_common::Error::UnknownOrganism(name) => Self::UnknownOrganism(name),
            corrupt @ microspotter_common::Error::CorruptStore { .. } => {
                Self::CorruptStore(corrupt.to_string())
            }
            other => Self::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpotterError>;
