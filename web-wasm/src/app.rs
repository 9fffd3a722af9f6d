//! メインアプリケーションコンポーネント
//!
//! ギャラリー画面がルート。画像ストアとダイアログ状態を所有し、
//! 子コンポーネントからのイベント（選択・アップロード・削除・閉じる）で更新する。

use leptos::prelude::*;
use microspotter_common::{catalog, DialogState, ImageStore, Organism};
use crate::browser_storage::BrowserStorage;
use crate::components::{
    detail_dialog::DetailDialog,
    organism_gallery::OrganismGallery,
    progress_bar::ProgressBar,
};

/// localStorage に同期される画像ストア
pub type Store = ImageStore<BrowserStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // マウント時に一度だけ読み込む。壊れたデータは空として扱う
    let store = RwSignal::new(Store::load_or_empty(BrowserStorage));
    let dialog = RwSignal::new(DialogState::default());

    let spotted = Memo::new(move |_| store.with(|s| s.spotted_count()));
    // ダイアログを閉じても選択は残る（最後に見たカードを強調表示）
    let selected = Memo::new(move |_| dialog.with(|d| d.selected().map(|o| o.name)));

    let on_select = move |organism: &'static Organism| {
        dialog.update(|d| d.select(organism));
    };

    // 読み込み完了時に呼ばれる。nameはファイル選択時点の対象
    let on_upload = move |name: String, data_url: String| {
        store.update(|s| match s.set_image(&name, data_url) {
            Ok(true) => log::info!("Spotted {}", name),
            Ok(false) => log::info!("Replaced image for {}", name),
            Err(e) => log::error!("Failed to save image for {}: {}", name, e),
        });
    };

    let on_remove = move |name: String| {
        store.update(|s| {
            if let Err(e) = s.clear_image(&name) {
                log::error!("Failed to remove image for {}: {}", name, e);
            }
        });
    };

    let on_close = move |_: ()| {
        dialog.update(|d| d.close());
    };

    view! {
        <div class="page">
            <div class="container">
                <header class="header">
                    <h1>"MicroSpotter"</h1>
                </header>

                <ProgressBar spotted=spotted total=catalog::total() />

                <OrganismGallery store=store selected=selected on_select=on_select />
            </div>

            <DetailDialog
                dialog=dialog
                store=store
                on_upload=on_upload
                on_remove=on_remove
                on_close=on_close
            />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use microspotter_common::{KeyValueStore, STORAGE_KEY};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    /// localStorage を指定内容で初期化して App をマウント
    fn mount_app(spotted: &[&str]) -> HtmlElement {
        let mut backend = BrowserStorage;
        backend.set_item(STORAGE_KEY, "{}").unwrap();
        let mut store = Store::load(BrowserStorage).unwrap();
        for name in spotted {
            store.set_image(name, PNG.to_string()).unwrap();
        }

        let document = web_sys::window().unwrap().document().unwrap();
        let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        leptos::mount::mount_to(host.clone(), App).forget();
        host
    }

    /// 描画エフェクトが反映されるまで待つ
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn find(host: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        host.query_selector(selector)
            .unwrap()
            .map(|el| el.dyn_into().unwrap())
    }

    fn card(host: &HtmlElement, name: &str) -> HtmlElement {
        find(host, &format!(".organism-card[data-name={}]", name)).unwrap()
    }

    fn progress_style(host: &HtmlElement) -> String {
        find(host, ".progress-fill")
            .unwrap()
            .get_attribute("style")
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn wasm_fresh_gallery_has_no_badges() {
        let host = mount_app(&[]);
        next_tick().await;

        assert_eq!(host.query_selector_all(".organism-card").unwrap().length(), 10);
        assert!(find(&host, ".spotted-badge").is_none());
        assert_eq!(progress_style(&host), "width: 0%");
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_badge_and_progress_for_stored_image() {
        let host = mount_app(&["Hydra"]);
        next_tick().await;

        assert!(find(&host, ".organism-card[data-name=Hydra] .spotted-badge").is_some());
        assert!(find(&host, ".organism-card[data-name=Amoeba] .spotted-badge").is_none());
        assert_eq!(progress_style(&host), "width: 10%");
        assert_eq!(
            find(&host, ".progress-text").unwrap().text_content().as_deref(),
            Some("Microorganisms Spotted: 1 / 10")
        );
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_card_click_opens_and_close_keeps_selection() {
        let host = mount_app(&[]);
        next_tick().await;
        assert!(find(&host, ".dialog").is_none());

        card(&host, "Volvox").click();
        next_tick().await;
        let title = find(&host, ".dialog-title").unwrap().text_content();
        assert_eq!(title.as_deref(), Some("Volvox"));

        find(&host, ".dialog-actions .btn").unwrap().click();
        next_tick().await;
        assert!(find(&host, ".dialog").is_none());
        // 選択は解除されない
        assert!(card(&host, "Volvox").class_list().contains("selected"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_remove_button_only_with_upload() {
        let host = mount_app(&["Hydra"]);
        next_tick().await;

        card(&host, "Amoeba").click();
        next_tick().await;
        assert!(find(&host, ".remove-upload").is_none());
        assert_eq!(
            find(&host, ".upload-actions label").unwrap().text_content().as_deref(),
            Some("Upload Image")
        );

        card(&host, "Hydra").click();
        next_tick().await;
        assert_eq!(
            find(&host, ".upload-actions label").unwrap().text_content().as_deref(),
            Some("Update Image")
        );

        find(&host, ".remove-upload").unwrap().click();
        next_tick().await;
        assert!(find(&host, ".remove-upload").is_none());
        assert!(find(&host, ".spotted-badge").is_none());
        assert_eq!(progress_style(&host), "width: 0%");
        assert_eq!(Store::load(BrowserStorage).unwrap().spotted_count(), 0);
        host.remove();
    }
}
