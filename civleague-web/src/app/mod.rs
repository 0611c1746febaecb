#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod state;
pub mod tab;
pub mod view;

pub use tab::Tab;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<crate::router::Route>();

    // Land on the tab the URL names, once, on first render.
    {
        let tab_handle = app_state.tab.clone();
        let initial = route.as_ref().and_then(crate::router::Route::to_tab);
        use_effect_with((), move |_| {
            if let Some(tab) = initial {
                tab_handle.set(tab);
            }
            || {}
        });
    }

    let on_select_tab = {
        let tab_handle = app_state.tab.clone();
        Callback::from(move |tab: Tab| {
            if let Some(nav) = navigator.clone() {
                nav.push(&crate::router::Route::from_tab(tab));
            }
            tab_handle.set(tab);
        })
    };

    view::render_app(&app_state, on_select_tab)
}
