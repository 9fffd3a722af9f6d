//! アップロード画像ストア
//!
//! 微生物名 → Data URL のマップを保持し、変更のたびにマップ全体を
//! バックエンド（ブラウザのlocalStorage、CLIではファイル）へ書き戻す。
//! 読み込みはマウント時の一度だけで、外部からの変更は監視しない。

use crate::catalog::Organism;
use crate::error::{Error, Result};
use crate::progress;
use std::collections::{BTreeMap, HashMap};

/// 永続化に使うキー
pub const STORAGE_KEY: &str = "uploadedImages";

/// 微生物名 → Data URL
pub type UploadedImages = BTreeMap<String, String>;

/// キー → 文字列 の永続ストレージ
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストレージ（テスト・非永続用途）
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生の値を直接入れる（壊れたデータの再現など）
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// アップロード画像の状態と、その永続化先
///
/// 変更は `set_image` / `clear_image` のみで行い、どちらもメモリを更新した直後に
/// マップ全体を同期的に保存する。保存に失敗した場合もメモリ上の変更は残る
/// （そのセッション中は表示される）。
#[derive(Debug, Clone)]
pub struct ImageStore<S> {
    backend: S,
    images: UploadedImages,
}

impl<S: KeyValueStore> ImageStore<S> {
    /// 保存済みマップを読み込む。エントリが無い・空文字列なら空。
    /// JSONとして壊れている場合は `Error::CorruptStore`
    pub fn load(backend: S) -> Result<Self> {
        let images = match read_entry(&backend)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| Error::CorruptStore {
                key: STORAGE_KEY.to_string(),
                source,
            })?,
            None => UploadedImages::new(),
        };
        log::debug!("Loaded {} uploaded image(s) from storage", images.len());
        Ok(Self { backend, images })
    }

    /// `load` と同じだが、読み込み失敗時は警告を出して空マップから始める。
    /// 壊れたエントリは次の変更時に上書きされる
    pub fn load_or_empty(backend: S) -> Self {
        match read_entry(&backend) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(images) => Self { backend, images },
                Err(e) => {
                    log::warn!("Ignoring corrupt '{}' entry: {}", STORAGE_KEY, e);
                    Self::empty(backend)
                }
            },
            Ok(None) => Self::empty(backend),
            Err(e) => {
                log::warn!("Failed to read '{}': {}", STORAGE_KEY, e);
                Self::empty(backend)
            }
        }
    }

    fn empty(backend: S) -> Self {
        Self {
            backend,
            images: UploadedImages::new(),
        }
    }

    /// 画像を追加・上書きする。新たに発見済みになった場合は `true`
    pub fn set_image(&mut self, name: &str, data_url: String) -> Result<bool> {
        let newly_spotted = self.images.insert(name.to_string(), data_url).is_none();
        self.persist()?;
        Ok(newly_spotted)
    }

    /// 画像を削除する。エントリが無ければ何もせず `false`
    pub fn clear_image(&mut self, name: &str) -> Result<bool> {
        if self.images.remove(name).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// 全エントリを削除して空マップを保存
    pub fn clear_all(&mut self) -> Result<usize> {
        let removed = self.images.len();
        self.images.clear();
        self.persist()?;
        Ok(removed)
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.images)?;
        self.backend.set_item(STORAGE_KEY, &json)?;
        log::debug!("Persisted {} uploaded image(s)", self.images.len());
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// 空文字列のエントリは未保存と同じ扱い
fn read_entry<S: KeyValueStore>(backend: &S) -> Result<Option<String>> {
    Ok(backend.get_item(STORAGE_KEY)?.filter(|json| !json.is_empty()))
}

impl<S> ImageStore<S> {
    pub fn images(&self) -> &UploadedImages {
        &self.images
    }

    pub fn image_for(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }

    pub fn is_spotted(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// 表示用画像: アップロード済みならそれ、無ければプレースホルダ
    pub fn display_image<'a>(&'a self, organism: &'a Organism) -> &'a str {
        self.image_for(organism.name).unwrap_or(organism.image)
    }

    pub fn spotted_count(&self) -> usize {
        self.images.len()
    }

    pub fn progress_percent(&self, total: usize) -> f64 {
        progress::percent(self.spotted_count(), total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CATALOG};

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";
    const JPEG: &str = "data:image/jpeg;base64,/9j/4AAQ";

    fn fresh() -> ImageStore<MemoryStorage> {
        ImageStore::load(MemoryStorage::new()).expect("load failed")
    }

    #[test]
    fn test_initially_nothing_spotted() {
        let store = fresh();
        assert_eq!(store.spotted_count(), 0);
        for organism in CATALOG.iter() {
            assert!(!store.is_spotted(organism.name));
            assert_eq!(store.display_image(organism), organism.image);
        }
    }

    #[test]
    fn test_set_image_spots_organism() {
        let mut store = fresh();
        let hydra = catalog::find("Hydra").unwrap();

        assert!(store.set_image("Hydra", PNG.to_string()).unwrap());
        assert_eq!(store.spotted_count(), 1);
        assert!(store.is_spotted("Hydra"));
        assert_eq!(store.display_image(hydra), PNG);
    }

    #[test]
    fn test_set_image_overwrites_without_counting_twice() {
        let mut store = fresh();
        store.set_image("Volvox", PNG.to_string()).unwrap();
        assert!(!store.set_image("Volvox", JPEG.to_string()).unwrap());
        assert_eq!(store.spotted_count(), 1);
        assert_eq!(store.image_for("Volvox"), Some(JPEG));
    }

    #[test]
    fn test_clear_image_reverts_to_placeholder() {
        let mut store = fresh();
        let amoeba = catalog::find("Amoeba").unwrap();
        store.set_image("Amoeba", PNG.to_string()).unwrap();

        assert!(store.clear_image("Amoeba").unwrap());
        assert_eq!(store.spotted_count(), 0);
        assert_eq!(store.display_image(amoeba), amoeba.image);
    }

    #[test]
    fn test_clear_image_without_upload_is_noop() {
        let mut store = fresh();
        assert!(!store.clear_image("Diatom").unwrap());
        // 何も書き込まれていない
        assert!(store.backend().get_item(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_every_mutation_persists_full_map() {
        let mut store = fresh();
        store.set_image("Rotifer", PNG.to_string()).unwrap();
        store.set_image("Stentor", JPEG.to_string()).unwrap();

        let raw = store.backend().get_item(STORAGE_KEY).unwrap().unwrap();
        let saved: UploadedImages = serde_json::from_str(&raw).unwrap();
        assert_eq!(&saved, store.images());

        store.clear_image("Rotifer").unwrap();
        let raw = store.backend().get_item(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, format!(r#"{{"Stentor":"{}"}}"#, JPEG));
    }

    #[test]
    fn test_reload_reproduces_mapping() {
        let mut store = fresh();
        store.set_image("Euglena", PNG.to_string()).unwrap();
        store.set_image("Tardigrade", JPEG.to_string()).unwrap();

        let reloaded = ImageStore::load(store.backend().clone()).unwrap();
        assert_eq!(reloaded.images(), store.images());
    }

    #[test]
    fn test_scenario_hydra_amoeba() {
        let mut store = fresh();
        let total = catalog::total();

        store.set_image("Hydra", PNG.to_string()).unwrap();
        assert_eq!(store.spotted_count(), 1);
        assert_eq!(store.progress_percent(total), 10.0);

        store.set_image("Amoeba", JPEG.to_string()).unwrap();
        assert_eq!(store.spotted_count(), 2);
        assert_eq!(store.progress_percent(total), 20.0);

        store.clear_image("Hydra").unwrap();
        assert_eq!(store.spotted_count(), 1);
        assert_eq!(store.progress_percent(total), 10.0);
    }

    #[test]
    fn test_unknown_names_are_accepted_but_progress_is_clamped() {
        let mut store = fresh();
        for organism in CATALOG.iter() {
            store.set_image(organism.name, PNG.to_string()).unwrap();
        }
        store.set_image("Plankton", PNG.to_string()).unwrap();
        assert_eq!(store.spotted_count(), 11);
        assert_eq!(store.progress_percent(catalog::total()), 100.0);
    }

    #[test]
    fn test_load_existing_entry() {
        let backend = MemoryStorage::new().with_item(STORAGE_KEY, r#"{"Hydra":"data:image/gif;base64,R0lG"}"#);
        let store = ImageStore::load(backend).unwrap();
        assert_eq!(store.image_for("Hydra"), Some("data:image/gif;base64,R0lG"));
    }

    #[test]
    fn test_load_empty_entry_is_empty_map() {
        let backend = MemoryStorage::new().with_item(STORAGE_KEY, "");
        let store = ImageStore::load(backend).unwrap();
        assert_eq!(store.spotted_count(), 0);

        let backend = MemoryStorage::new().with_item(STORAGE_KEY, "");
        assert_eq!(ImageStore::load_or_empty(backend).spotted_count(), 0);
    }

    #[test]
    fn test_load_corrupt_entry_is_error() {
        let backend = MemoryStorage::new().with_item(STORAGE_KEY, "{\"Hydra\":");
        let err = ImageStore::load(backend).unwrap_err();
        assert!(matches!(err, Error::CorruptStore { .. }));
    }

    #[test]
    fn test_load_or_empty_recovers_from_corrupt_entry() {
        let backend = MemoryStorage::new().with_item(STORAGE_KEY, "[1, 2, 3]");
        let mut store = ImageStore::load_or_empty(backend);
        assert_eq!(store.spotted_count(), 0);

        store.set_image("Hydra", PNG.to_string()).unwrap();
        let raw = store.backend().get_item(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.starts_with("{\"Hydra\""));
    }

    #[test]
    fn test_clear_all() {
        let mut store = fresh();
        store.set_image("Hydra", PNG.to_string()).unwrap();
        store.set_image("Amoeba", PNG.to_string()).unwrap();
        assert_eq!(store.clear_all().unwrap(), 2);
        assert_eq!(store.backend().get_item(STORAGE_KEY).unwrap().as_deref(), Some("{}"));
    }

    /// 書き込みに失敗するストレージ
    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_persist_failure_keeps_session_state() {
        let mut store = ImageStore::load(FullStorage).unwrap();
        let err = store.set_image("Hydra", PNG.to_string()).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert!(store.is_spotted("Hydra"));
    }
}
