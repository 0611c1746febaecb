use yew::prelude::*;

use crate::app::Tab;
use crate::i18n::t;

#[derive(Properties, Clone, PartialEq)]
pub struct TabsBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabsBar)]
pub fn tabs_bar(props: &TabsBarProps) -> Html {
    html! {
        <div class="tabs" role="tablist">
            { for Tab::ALL.iter().map(|&tab| {
                let on_select = props.on_select.clone();
                let class = if tab == props.active { "tab active" } else { "tab" };
                html! {
                    <button
                        {class}
                        role="tab"
                        aria-selected={(tab == props.active).to_string()}
                        onclick={Callback::from(move |_| on_select.emit(tab))}
                    >
                        { t(tab.label_key()) }
                    </button>
                }
            }) }
        </div>
    }
}
