//! Index Document - View Model

use super::model::ingest_document;
use super::state::{SelectedFile, UploadState};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_index_document::IndexDocument;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UploadPanelVm {
    pub state: RwSignal<UploadState>,
    /// Browser handle for the selected file; `web_sys::File` is not `Send`.
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl UploadPanelVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UploadState::new()),
            file: StoredValue::new_local(None),
        }
    }

    fn describe(file: &web_sys::File) -> SelectedFile {
        SelectedFile::new(file.name(), file.size() as u64)
    }

    pub fn set_dragging(&self, dragging: bool) {
        self.state.update(|s| s.set_dragging(dragging));
    }

    /// Выбор через file picker
    pub fn select(&self, file: web_sys::File) {
        let selected = Self::describe(&file);
        self.file.set_value(Some(file));
        self.state.update(|s| s.select(selected));
    }

    /// Drop на зону загрузки
    pub fn drop_file(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.set_dragging(false);
            return;
        };
        let selected = Self::describe(&file);
        let media_type = file.type_();
        let accepted = self
            .state
            .try_update(|s| s.accept_drop(selected, &media_type))
            .unwrap_or(false);
        if accepted {
            self.file.set_value(Some(file));
        } else {
            log::debug!("{}: ignored drop of type '{}'", IndexDocument::full_name(), media_type);
        }
    }

    pub fn submit(&self, on_indexed: Option<Callback<u64>>) {
        let Some(file) = self.file.get_value() else {
            return;
        };
        let Some(ticket) = self.state.try_update(|s| s.begin()).flatten() else {
            return;
        };

        log::debug!("{}: uploading '{}'", IndexDocument::full_name(), file.name());
        let state = self.state;
        leptos::task::spawn_local(async move {
            let outcome = ingest_document(file).await;
            match &outcome {
                Ok(resp) => log::info!("{}: {} chunks", IndexDocument::full_name(), resp.chunks),
                Err(e) => log::warn!("{}: {}", IndexDocument::full_name(), e),
            }
            // try_update: панель могла быть удалена, пока шёл запрос
            let chunks = state.try_update(|s| s.finish(ticket, outcome)).flatten();
            if let (Some(chunks), Some(cb)) = (chunks, on_indexed) {
                cb.run(chunks);
            }
        });
    }
}
