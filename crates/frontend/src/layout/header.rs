use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__pill">
                {icon("zap")}
                <span>"RAG-Powered Intelligence"</span>
            </div>
            <h1 class="page-header__title">
                <span>"Document "</span>
                <span class="gradient-text">"Intelligence"</span>
            </h1>
            <p class="page-header__subtitle">
                "Upload your PDF documents and ask questions. Our AI-powered RAG system \
                 will provide accurate, contextual answers in seconds."
            </p>
        </header>
    }
}
