//! Index Document - View Component

use super::state::UploadStatus;
use super::view_model::UploadPanelVm;
use crate::shared::icons::icon;
use contracts::usecases::u601_index_document::PDF_MEDIA_TYPE;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(
    /// Вызывается после успешной индексации с числом чанков
    #[prop(optional)]
    on_indexed: Option<Callback<u64>>,
) -> impl IntoView {
    let vm = UploadPanelVm::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.select(file);
            }
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        vm.drop_file(file);
    };

    let zone_class = move || {
        let state = vm.state.get();
        let mut class = String::from("drop-zone");
        if state.is_dragging() {
            class.push_str(" drop-zone--dragging");
        }
        if state.file().is_some() {
            class.push_str(" drop-zone--selected");
        }
        class
    };

    view! {
        <div class="upload-panel">
            <div
                class=zone_class
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.set_dragging(true);
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.set_dragging(false);
                }
                on:drop=handle_drop
            >
                <input
                    type="file"
                    accept=PDF_MEDIA_TYPE
                    class="drop-zone__input"
                    on:change=handle_file_select
                />

                <div class="drop-zone__content">
                    {move || match vm.state.get().file().cloned() {
                        Some(file) => view! {
                            <div class="drop-zone__icon drop-zone__icon--success">{icon("file-text")}</div>
                            <div>
                                <p class="drop-zone__title">{file.name.clone()}</p>
                                <p class="drop-zone__hint">{file.size_label()}</p>
                            </div>
                        }.into_any(),
                        None => view! {
                            <div class="drop-zone__icon">{icon("upload")}</div>
                            <div>
                                <p class="drop-zone__title">"Drop your PDF here"</p>
                                <p class="drop-zone__hint">"or click to browse files"</p>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>

            <Show when=move || vm.state.get().show_submit()>
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="width: 100%;"
                    disabled=Signal::derive(move || vm.state.get().submit_disabled())
                    on_click=move |_| vm.submit(on_indexed)
                >
                    {move || if vm.state.get().status() == UploadStatus::Uploading {
                        view! { {icon("loader")} " Indexing..." }.into_any()
                    } else {
                        view! { {icon("upload")} " Upload & Index" }.into_any()
                    }}
                </Button>
            </Show>

            {move || {
                let state = vm.state.get();
                if state.message().is_empty() {
                    return None;
                }
                let status = state.status();
                Some(view! {
                    <div class=format!("upload-status {}", status.css_class())>
                        {status.icon_name().map(icon)}
                        <span>{state.message().to_string()}</span>
                    </div>
                })
            }}
        </div>
    }
}
