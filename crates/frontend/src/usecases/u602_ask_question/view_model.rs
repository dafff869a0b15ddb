//! Ask Question - View Model

use super::model::ask;
use super::state::{KeyAction, QueryState};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_ask_question::{AskQuestion, QueryRequest};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct QueryPanelVm {
    pub state: RwSignal<QueryState>,
}

impl QueryPanelVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(QueryState::new()),
        }
    }

    pub fn set_question(&self, question: String) {
        self.state.update(|s| s.set_question(question));
    }

    pub fn handle_ask(&self) {
        // сигнал пишем только когда запрос действительно уходит
        if !self.state.with_untracked(|s| s.can_submit()) {
            return;
        }
        if let Some(request) = self.state.try_update(|s| s.begin()).flatten() {
            self.send(request);
        }
    }

    pub fn handle_keydown(&self, ev: &web_sys::KeyboardEvent) {
        if KeyAction::from_key(&ev.key(), ev.shift_key()) == KeyAction::Ask {
            ev.prevent_default();
            self.handle_ask();
        }
    }

    fn send(&self, request: QueryRequest) {
        log::debug!("{}: '{}'", AskQuestion::full_name(), request.question);
        let state = self.state;
        leptos::task::spawn_local(async move {
            let outcome = ask(&request).await;
            match &outcome {
                Ok(resp) => log::info!("{}: {} chars", AskQuestion::full_name(), resp.answer.len()),
                Err(e) => log::warn!("{}: {}", AskQuestion::full_name(), e),
            }
            // try_update: панель могла быть удалена, пока шёл запрос
            state.try_update(|s| s.finish(outcome));
        });
    }
}
