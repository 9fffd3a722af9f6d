//! CLIコマンドの本体
//!
//! Web版と同じ `ImageStore` をファイルバックエンドで使う。
//! 表示用の行を返し、出力は main 側で行う。

use crate::error::{Result, SpotterError};
use crate::file_store::FileStorage;
use microspotter_common::{catalog, data_url, progress, ImageStore, Organism, CATALOG};
use std::path::Path;

pub type FileImageStore = ImageStore<FileStorage>;

const BAR_WIDTH: usize = 20;

/// ストアを開く。保存データが壊れている場合はエラー
pub fn open_store(dir: &Path) -> Result<FileImageStore> {
    log::debug!("Opening image store in {}", dir.display());
    Ok(ImageStore::load(FileStorage::new(dir))?)
}

/// 全削除。壊れた保存データも空として扱い上書きする
pub fn reset(dir: &Path) -> Result<usize> {
    let mut store = ImageStore::load_or_empty(FileStorage::new(dir));
    Ok(store.clear_all()?)
}

/// カタログから微生物を探す
pub fn lookup(name: &str) -> Result<&'static Organism> {
    catalog::find_ignore_case(name)
        .ok_or_else(|| microspotter_common::Error::UnknownOrganism(name.to_string()).into())
}

/// 画像を登録する。新規発見なら `true`
pub fn spot(store: &mut FileImageStore, name: &str, image: &Path) -> Result<(&'static Organism, bool)> {
    let organism = lookup(name)?;
    if !image.is_file() {
        return Err(SpotterError::ImageNotFound(image.display().to_string()));
    }

    let bytes = std::fs::read(image)?;
    let media_type = data_url::media_type_for_path(image);
    log::debug!("Encoding {} ({} bytes, {})", image.display(), bytes.len(), media_type);

    let newly_spotted = store.set_image(organism.name, data_url::encode(media_type, &bytes))?;
    Ok((organism, newly_spotted))
}

/// 画像を削除する。登録が無ければ `false`
pub fn unspot(store: &mut FileImageStore, name: &str) -> Result<(&'static Organism, bool)> {
    let organism = lookup(name)?;
    let removed = store.clear_image(organism.name)?;
    Ok((organism, removed))
}

pub fn catalog_lines<S>(store: &ImageStore<S>) -> Vec<String> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, organism)| {
            let mark = if store.is_spotted(organism.name) { "✔" } else { " " };
            format!("{:>2}. [{}] {:<11} {}", i + 1, mark, organism.name, organism.description)
        })
        .collect()
}

pub fn status_lines<S>(store: &ImageStore<S>) -> Vec<String> {
    let spotted = store.spotted_count();
    let total = catalog::total();
    let mut lines = vec![
        progress::label(spotted, total),
        format!(
            "{} {:.0}%",
            progress::text_bar(spotted, total, BAR_WIDTH),
            store.progress_percent(total)
        ),
    ];

    // カタログ外のキー（手編集など）は件数に含まれるので明示する
    let unknown: Vec<&str> = store
        .images()
        .keys()
        .map(String::as_str)
        .filter(|name| catalog::find(name).is_none())
        .collect();
    if !unknown.is_empty() {
        lines.push(format!("カタログ外のエントリ: {}", unknown.join(", ")));
    }
    lines
}

pub fn show_lines<S>(store: &ImageStore<S>, organism: &Organism) -> Vec<String> {
    let image = match store.image_for(organism.name) {
        Some(data) => format!(
            "登録済み ({}, 約{}バイト)",
            data_url::media_type(data).unwrap_or("不明な形式"),
            data_url::payload_len(data).unwrap_or(0)
        ),
        None => organism.image.to_string(),
    };

    vec![
        organism.name.to_string(),
        organism.description.to_string(),
        format!("Habitat: {}", organism.habitat),
        format!("Size: {}", organism.size),
        format!("Fun Fact: {}", organism.fun_fact),
        format!("画像: {}", image),
    ]
}
