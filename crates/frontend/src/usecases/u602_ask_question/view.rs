//! Ask Question - View Component

use super::state::PLACEHOLDER_WIDTHS;
use super::view_model::QueryPanelVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn QueryPanel() -> impl IntoView {
    let vm = QueryPanelVm::new();

    view! {
        <div class="query-panel">
            <div class="query-panel__input">
                <textarea
                    class="query-panel__textarea"
                    placeholder="Ask something about your uploaded document..."
                    prop:value=move || vm.state.get().question().to_string()
                    on:input=move |ev| vm.set_question(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| vm.handle_keydown(&ev)
                ></textarea>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="query-panel__send"
                    disabled=Signal::derive(move || !vm.state.get().can_submit())
                    on_click=move |_| vm.handle_ask()
                >
                    {move || if vm.state.get().is_loading() { icon("loader") } else { icon("send") }}
                </Button>
            </div>

            <Show when=move || vm.state.get().show_answer_panel()>
                <div class="answer-card">
                    <div class="answer-card__header">
                        {icon("sparkles")}
                        <span>"AI Response"</span>
                    </div>
                    {move || {
                        let state = vm.state.get();
                        if state.is_loading() {
                            view! {
                                <div class="answer-card__placeholder">
                                    {PLACEHOLDER_WIDTHS
                                        .iter()
                                        .map(|w| view! {
                                            <div class="shimmer-bar" style=format!("width: {};", w)></div>
                                        })
                                        .collect_view()}
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <p class="answer-card__text" style="white-space: pre-wrap;">
                                    {state.answer().to_string()}
                                </p>
                            }.into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
