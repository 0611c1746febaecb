use yew::prelude::*;

use civleague_core::SessionStore;

use crate::app::Tab;
use crate::storage::BrowserStorage;

pub type Store = SessionStore<BrowserStorage>;

#[derive(Clone)]
pub struct AppState {
    /// `None` until the browser storage could be opened.
    pub store: UseStateHandle<Option<Store>>,
    pub tab: UseStateHandle<Tab>,
    pub language: UseStateHandle<String>,
}

fn open_store() -> Option<Store> {
    #[cfg(target_arch = "wasm32")]
    {
        let entropy = js_sys::Date::now().to_bits();
        match SessionStore::open(BrowserStorage, entropy) {
            Ok(store) => Some(store),
            Err(err) => {
                log::error!("failed to open league storage: {err}");
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_state(open_store),
        tab: use_state(|| Tab::NewSession),
        language: use_state(crate::i18n::current_lang),
    }
}
