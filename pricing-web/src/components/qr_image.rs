use pricing_core::QrImageState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// URL encoded into the QR code
    pub target: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::from("QR code"))]
    pub alt: AttrValue,
}

/// QR `<img>` that retries once against the fallback service.
#[function_component(QrImage)]
pub fn qr_image(props: &Props) -> Html {
    let state = use_state(|| QrImageState::new(props.target.as_str()));

    // A new target restarts on the primary service.
    let current = if state.target() == props.target.as_str() {
        (*state).clone()
    } else {
        QrImageState::new(props.target.as_str())
    };

    let on_error = {
        let state = state.clone();
        let current = current.clone();
        Callback::from(move |_: Event| {
            let mut next = current.clone();
            if next.on_error() {
                state.set(next);
            }
        })
    };

    html! {
        <img
            id={props.id.clone()}
            src={current.src()}
            alt={props.alt.clone()}
            width="220"
            height="220"
            onerror={on_error}
        />
    }
}
