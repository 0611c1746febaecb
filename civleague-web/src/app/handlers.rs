//! Callback builders wiring the UI to the session store. Every mutation
//! clones the store, applies the operation, and swaps the handle so Yew
//! re-renders from the fresh snapshot.

use yew::prelude::*;

use civleague_core::SessionDraft;

use crate::app::Tab;
use crate::app::state::AppState;

pub fn build_create_session(state: &AppState) -> Callback<SessionDraft> {
    let store_handle = state.store.clone();
    let tab_handle = state.tab.clone();
    Callback::from(move |draft: SessionDraft| {
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        match store.create_session(draft) {
            Ok(id) => log::info!("registered session {id}"),
            Err(err) => log::error!("failed to persist new session: {err}"),
        }
        store_handle.set(Some(store));
        tab_handle.set(Tab::Ongoing);
    })
}

pub fn build_mark_completed(state: &AppState) -> Callback<String> {
    let store_handle = state.store.clone();
    Callback::from(move |session_id: String| {
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        match store.mark_completed(&session_id) {
            Ok(true) => log::info!("completed session {session_id}"),
            Ok(false) => log::warn!("session {session_id} was already completed or missing"),
            Err(err) => log::error!("failed to persist completion: {err}"),
        }
        store_handle.set(Some(store));
    })
}

pub fn build_delete_session(state: &AppState) -> Callback<String> {
    let store_handle = state.store.clone();
    Callback::from(move |session_id: String| {
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        if let Err(err) = store.delete_session(&session_id) {
            log::error!("failed to persist session deletion: {err}");
        }
        store_handle.set(Some(store));
    })
}

pub fn build_delete_entry(state: &AppState) -> Callback<String> {
    let store_handle = state.store.clone();
    Callback::from(move |entry_id: String| {
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        if let Err(err) = store.delete_entry(&entry_id) {
            log::error!("failed to persist entry deletion: {err}");
        }
        store_handle.set(Some(store));
    })
}

pub fn build_clear_history(state: &AppState) -> Callback<()> {
    let store_handle = state.store.clone();
    let tab_handle = state.tab.clone();
    Callback::from(move |()| {
        if !confirm_clear() {
            return;
        }
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        if let Err(err) = store.clear_history() {
            log::error!("failed to persist history wipe: {err}");
        }
        store_handle.set(Some(store));
        tab_handle.set(Tab::NewSession);
    })
}

pub fn build_save_rules(state: &AppState) -> Callback<String> {
    let store_handle = state.store.clone();
    Callback::from(move |text: String| {
        let Some(mut store) = (*store_handle).clone() else {
            return;
        };
        if let Err(err) = store.set_house_rules(text) {
            log::error!("failed to persist house rules: {err}");
        }
        store_handle.set(Some(store));
    })
}

pub fn build_set_language(state: &AppState) -> Callback<String> {
    let language_handle = state.language.clone();
    Callback::from(move |lang: String| {
        crate::i18n::set_lang(&lang);
        language_handle.set(lang);
    })
}

fn confirm_clear() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::window()
            .confirm_with_message(&crate::i18n::t("app.clear-confirm"))
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
