use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::card::Card;
use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct RulesPageProps {
    pub rules: String,
    /// Fired on every edit; the store persists each keystroke.
    pub on_save: Callback<String>,
}

#[function_component(RulesPage)]
pub fn rules_page(props: &RulesPageProps) -> Html {
    let oninput = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_save.emit(area.value());
            }
        })
    };

    html! {
        <Card title={t("rules.title")}>
            <textarea
                class="textarea"
                rows="10"
                placeholder={t("rules.placeholder")}
                value={props.rules.clone()}
                {oninput}
            />
            <div class="muted small">{ t("rules.hint") }</div>
        </Card>
    }
}
