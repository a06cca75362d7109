use crate::components::qr_image::QrImage;
use pricing_core::ModalEvent;
use pricing_core::constants::{MODAL_CLOSE_LABEL, MODAL_OPEN_LABEL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// URL currently shown; the modal is hidden when `None`
    pub target: Option<AttrValue>,
    /// Close button, backdrop, content clicks and document key presses
    pub on_event: Callback<ModalEvent>,
}

/// Suspend page scrolling while `open`; the lock is released on close and
/// on unmount.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_scroll_lock(open: bool) {
    use_effect_with(open, |open| {
        if let Err(err) = crate::dom::set_scroll_locked(*open) {
            log::warn!("scroll lock not applied: {err}");
        }
        let locked = *open;
        move || {
            if locked && let Err(err) = crate::dom::set_scroll_locked(false) {
                log::warn!("scroll lock not released: {err}");
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_scroll_lock(open: bool) {
    let _ = open;
}

/// Forward document key presses while `open`, whatever has focus.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_escape_listener(open: bool, on_event: Callback<ModalEvent>) {
    use_effect_with((open, on_event), |(open, on_event)| {
        let guard = if *open {
            let on_event = on_event.clone();
            crate::dom::ListenerGuard::on_document("keydown", move |e: web_sys::Event| {
                use wasm_bindgen::JsCast;
                if let Some(key_event) = e.dyn_ref::<web_sys::KeyboardEvent>() {
                    on_event.emit(ModalEvent::Key(key_event.key()));
                }
            })
            .map_err(|err| log::warn!("escape listener not registered: {err}"))
            .ok()
        } else {
            None
        };
        move || drop(guard)
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_escape_listener(open: bool, on_event: Callback<ModalEvent>) {
    let _ = (open, on_event);
}

/// QR modal. Always mounted so the `qr-*` ids exist; hidden via a class.
///
/// The backdrop is a sibling of the content, so clicks inside the dialog
/// never reach it.
///
/// While open it suspends page scrolling and listens for keys on the whole
/// document, so Escape works whatever has focus.
#[function_component(QrModal)]
pub fn qr_modal(props: &Props) -> Html {
    let open = props.target.is_some();

    use_scroll_lock(open);
    use_escape_listener(open, props.on_event.clone());

    let on_backdrop = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(ModalEvent::Backdrop))
    };
    let on_content = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(ModalEvent::Content))
    };
    let on_close = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_event.emit(ModalEvent::CloseButton);
        })
    };

    let href = props.target.clone().unwrap_or_default();

    html! {
        <div
            id="qr-modal"
            class={classes!("modal", (!open).then_some("hidden"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!open).to_string()}
        >
            <div class="modal-backdrop" role="presentation" onclick={on_backdrop}></div>
            <div class="modal-content" onclick={on_content}>
                <button id="qr-close" type="button" class="modal-close" aria-label={MODAL_CLOSE_LABEL} onclick={on_close}>
                    {"×"}
                </button>
                { props.target.as_ref().map(|target| html! {
                    <QrImage id={AttrValue::from("qr-img")} target={target.clone()} />
                }).unwrap_or_default() }
                <a id="qr-open-link" class="btn" href={href} target="_blank" rel="noopener">
                    { MODAL_OPEN_LABEL }
                </a>
            </div>
        </div>
    }
}
