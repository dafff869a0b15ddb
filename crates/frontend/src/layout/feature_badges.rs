use crate::shared::icons::icon;
use leptos::prelude::*;

/// (icon, label)
pub const FEATURES: [(&str, &str); 3] = [
    ("file-text", "PDF Support"),
    ("database", "Vector Search"),
    ("zap", "Fast Retrieval"),
];

#[component]
pub fn FeatureBadges() -> impl IntoView {
    view! {
        <div class="feature-badges">
            {FEATURES
                .iter()
                .map(|(icon_name, label)| view! {
                    <div class="feature-badge">
                        {icon(icon_name)}
                        <span>{*label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
