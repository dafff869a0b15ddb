//! GlassCard — обёртка над Thaw Card с заголовком, номером шага и анимацией появления.
//!
//! Анимация определена в `app.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```rust,ignore
//! <GlassCard title="Upload Document" step=1 delay_ms=200>
//!     <UploadPanel />
//! </GlassCard>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Карточка секции страницы.
///
/// # Props
/// - `title`    — заголовок карточки (необязательный).
/// - `step`     — номер шага в бейдже слева от заголовка.
/// - `delay_ms` — задержка анимации в мс для stagger-эффекта.
#[component]
pub fn GlassCard(
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional)]
    step: Option<u32>,
    /// Задержка анимации в миллисекундах.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class="glass-card" attr:style=style>
            {title.map(|title| view! {
                <div class="glass-card__header">
                    {step.map(|step| view! {
                        <span class="glass-card__step">{step}</span>
                    })}
                    <h3 class="glass-card__title">{title}</h3>
                </div>
            })}
            <div class="glass-card__body">
                {children()}
            </div>
        </Card>
    }
}
