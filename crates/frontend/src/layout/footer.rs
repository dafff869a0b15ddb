use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="page-footer">
            <p>"RAG Microservices • Powered by Vector Search & AI"</p>
        </footer>
    }
}
