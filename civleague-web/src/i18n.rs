//! Translation bundles for the shell.
//!
//! Tables are embedded JSON, one file per locale, looked up by dotted key
//! with English as the fallback. The chosen locale persists in
//! localStorage so the league keeps its language between visits.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("sv", include_str!("../i18n/sv.json")),
];

/// Locale codes with their display names, for the language picker.
pub const LOCALES: &[(&str, &str)] = &[("en", "English"), ("sv", "Svenska")];

const STORAGE_KEY: &str = "civleague.locale";
const DEFAULT_LANG: &str = "sv";

struct Bundle {
    lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    LOCALE_TABLE
        .iter()
        .find(|(code, _)| *code == lang)
        .and_then(|(_, json)| serde_json::from_str(json).ok())
}

fn build_bundle(lang: &str) -> Bundle {
    let fallback =
        load_translations("en").unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    let translations = load_translations(lang).unwrap_or_else(|| fallback.clone());
    Bundle {
        lang: lang.to_string(),
        translations,
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<Bundle> = RefCell::new(build_bundle(&saved_lang()));
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

/// Switch the active locale and persist the choice for future sessions.
pub fn set_lang(lang: &str) {
    CURRENT.with(|cell| *cell.borrow_mut() = build_bundle(lang));

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(storage)) = win.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, lang);
            }
            if let Some(root) = win.document().and_then(|doc| doc.document_element()) {
                let _ = root.set_attribute("lang", lang);
            }
        }
    }
}

fn get_nested<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key to the current language.
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{placeholder}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    CURRENT
        .with(|cell| {
            let bundle = cell.borrow();
            get_nested(&bundle.translations, key)
                .and_then(|v| render_value(v, args))
                .or_else(|| get_nested(&bundle.fallback, key).and_then(|v| render_value(v, args)))
        })
        .unwrap_or_else(|| key.to_string())
}
