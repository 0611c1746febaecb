use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card">
            <div class="card-head">{ props.title.clone() }</div>
            <div class="card-body">{ props.children.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn card_renders_title_and_children() {
        let props = CardProps {
            title: AttrValue::from("Standings"),
            children: Children::new(vec![html! { <p>{ "body text" }</p> }]),
        };
        let html = block_on(LocalServerRenderer::<Card>::with_props(props).render());
        assert!(html.contains("Standings"));
        assert!(html.contains("body text"));
    }
}
