use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Native `<details>` accordion; the browser owns the open/closed toggle.
#[function_component(Disclosure)]
pub fn disclosure(props: &Props) -> Html {
    html! {
        <details class="collapse" open={props.open}>
            <summary class="collapse-summary">{ props.title.clone() }</summary>
            <div class="collapse-content">
                { for props.children.iter() }
            </div>
        </details>
    }
}
