pub mod feature_badges;
pub mod footer;
pub mod header;

use crate::shared::components::GlassCard;
use crate::usecases::u601_index_document::UploadPanel;
use crate::usecases::u602_ask_question::QueryPanel;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_index_document::IndexDocument;
use contracts::usecases::u602_ask_question::AskQuestion;
use feature_badges::FeatureBadges;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Single-page shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// |              FeatureBadges               |
/// |  [1] Upload Document   (UploadPanel)     |
/// |  [2] Ask a Question    (QueryPanel)      |
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// Stateless: each panel owns its own view model. `UploadPanel`'s
/// `on_indexed` is left unwired, the query panel is usable at any time.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-backdrop"></div>
            <div class="app-main">
                <Header />
                <FeatureBadges />

                <div class="app-sections">
                    <GlassCard title=IndexDocument::display_name() step=1 delay_ms=200>
                        <UploadPanel />
                    </GlassCard>
                    <GlassCard title=AskQuestion::display_name() step=2 delay_ms=300>
                        <QueryPanel />
                    </GlassCard>
                </div>

                <Footer />
            </div>
        </div>
    }
}
