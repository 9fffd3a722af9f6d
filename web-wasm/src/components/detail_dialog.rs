//! 詳細ダイアログコンポーネント
//!
//! 選択中の微生物の詳細表示と、画像のアップロード・差し替え・削除。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement, ProgressEvent};
use microspotter_common::{DialogState, Organism};
use crate::app::Store;

#[component]
pub fn DetailDialog<FU, FR, FC>(
    dialog: RwSignal<DialogState>,
    store: RwSignal<Store>,
    on_upload: FU,
    on_remove: FR,
    on_close: FC,
) -> impl IntoView
where
    FU: Fn(String, String) + 'static + Clone + Send + Sync,
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        dialog.with(|d| d.visible_target()).map(|organism| {
            let on_upload = on_upload.clone();
            let on_remove = on_remove.clone();
            let on_close = on_close.clone();
            view! {
                <DialogBody
                    organism=organism
                    store=store
                    on_upload=on_upload
                    on_remove=on_remove
                    on_close=on_close
                />
            }
        })
    }
}

#[component]
fn DialogBody<FU, FR, FC>(
    organism: &'static Organism,
    store: RwSignal<Store>,
    on_upload: FU,
    on_remove: FR,
    on_close: FC,
) -> impl IntoView
where
    FU: Fn(String, String) + 'static + Clone + Send + Sync,
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let name = organism.name;
    let has_upload = move || store.with(|s| s.is_spotted(name));
    let image = move || store.with(|s| s.display_image(organism).to_string());

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            // 保存先はこの時点の微生物で固定（読み込み中に選択が変わっても変えない）
            read_as_data_url(file, name.to_string(), on_upload.clone());
        }
        // 同じファイルを再選択しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class="dialog-backdrop"
            on:click={
                let on_close = on_close.clone();
                move |_| on_close(())
            }
        >
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog-title">{name}</h2>

                <div class="dialog-content">
                    <div class="dialog-media">
                        <img src=image alt=name />
                        <Show when=has_upload>
                            <button
                                class="icon-button remove-upload"
                                title="Remove image"
                                on:click={
                                    let on_remove = on_remove.clone();
                                    move |_| on_remove(name.to_string())
                                }
                            >
                                "✕"
                            </button>
                        </Show>
                    </div>

                    <div class="dialog-details">
                        <p class="description">{organism.description}</p>
                        <p class="detail"><strong>"Habitat: "</strong>{organism.habitat}</p>
                        <p class="detail"><strong>"Size: "</strong>{organism.size}</p>
                        <p class="detail"><strong>"Fun Fact: "</strong>{organism.fun_fact}</p>

                        <div class="upload-actions">
                            <input
                                type="file"
                                id="file-upload"
                                class="hidden-input"
                                accept="image/*"
                                on:change=on_file_change
                            />
                            <label for="file-upload" class="btn btn-primary">
                                {move || upload_label(has_upload())}
                            </label>
                        </div>
                    </div>
                </div>

                <div class="dialog-actions">
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn upload_label(has_upload: bool) -> &'static str {
    if has_upload {
        "Update Image"
    } else {
        "Upload Image"
    }
}

/// ファイルをData URLとして非同期に読み込み、完了時に `on_loaded(target, data_url)` を呼ぶ。
/// キャンセルはできず、失敗時はログのみ
fn read_as_data_url<F>(file: File, target: String, on_loaded: F)
where
    F: Fn(String, String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        match reader_clone.result().ok().and_then(|result| result.as_string()) {
            Some(data_url) => on_loaded(target.clone(), data_url),
            None => log::warn!("FileReader returned no data for {}", target),
        }
    }) as Box<dyn FnMut(_)>);

    let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
        log::warn!("Failed to read {}", file_name);
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("Failed to start reading file: {:?}", e);
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn wasm_read_delivers_to_target_captured_at_selection() {
        let bits = js_sys::Array::of1(&JsValue::from_str("abc"));
        let file = File::new_with_str_sequence(&bits, "hydra.txt").unwrap();

        let received: Rc<RefCell<Option<(String, String)>>> = Rc::default();
        let sink = received.clone();
        let mut target = "Hydra".to_string();
        read_as_data_url(file, target.clone(), move |name, data_url| {
            *sink.borrow_mut() = Some((name, data_url));
        });
        // 読み込み中に選択が変わっても保存先は変わらない
        target.replace_range(.., "Amoeba");

        for _ in 0..50 {
            if received.borrow().is_some() {
                break;
            }
            next_tick().await;
        }

        let (name, data_url) = received.borrow().clone().expect("read did not complete");
        assert_eq!(name, "Hydra");
        assert_ne!(name, target);
        assert!(data_url.ends_with(";base64,YWJj"));
    }
}
