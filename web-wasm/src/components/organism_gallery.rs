//! 微生物ギャラリーコンポーネント

use leptos::prelude::*;
use microspotter_common::{Organism, CATALOG};
use crate::app::Store;

#[component]
pub fn OrganismGallery<F>(
    store: RwSignal<Store>,
    selected: Memo<Option<&'static str>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(&'static Organism) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="organism-grid">
            <For
                each=move || CATALOG.iter()
                key=|organism| organism.name
                children=move |organism| {
                    let on_select = on_select.clone();
                    view! {
                        <OrganismCard
                            organism=organism
                            store=store
                            selected=selected
                            on_select=on_select
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn OrganismCard<F>(
    organism: &'static Organism,
    store: RwSignal<Store>,
    selected: Memo<Option<&'static str>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(&'static Organism) + 'static + Clone + Send + Sync,
{
    let name = organism.name;
    let image = move || store.with(|s| s.display_image(organism).to_string());
    let is_spotted = move || store.with(|s| s.is_spotted(name));
    let is_selected = move || selected.get() == Some(name);

    view! {
        <div
            class="organism-card"
            class:spotted=is_spotted
            class:selected=is_selected
            data-name=name
            on:click=move |_| on_select(organism)
        >
            <div class="card-media">
                <img src=image alt=name />
            </div>
            <div class="card-content">
                <h2>{name}</h2>
                // 3行で省略表示（CSS側）
                <p class="card-description">{organism.description}</p>
            </div>
            <Show when=is_spotted>
                <div class="spotted-badge" title="Spotted">"✔"</div>
            </Show>
        </div>
    }
}
