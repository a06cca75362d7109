use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, EventTarget, HtmlElement, Response, Window};

/// Class on `<body>` that suspends page scrolling while a modal is open.
pub const NO_SCROLL_CLASS: &str = "no-scroll";

#[derive(Debug, Error)]
pub enum DomError {
    #[error("`window` unavailable")]
    NoWindow,
    #[error("`document` unavailable")]
    NoDocument,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the request fails, or the result
/// is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    Ok(resp_value.dyn_into::<Response>()?)
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, DomError> {
    let text_js = JsFuture::from(response.text()?).await?;
    text_js
        .as_string()
        .ok_or_else(|| DomError::Js("response body was not text".to_string()))
}

/// Add or remove the scroll lock on `<body>`.
///
/// # Errors
/// Returns an error if the document or its body is unavailable.
pub fn set_scroll_locked(locked: bool) -> Result<(), DomError> {
    let body: HtmlElement = document()
        .ok_or(DomError::NoDocument)?
        .body()
        .ok_or(DomError::NoDocument)?;
    let classes = body.class_list();
    if locked {
        classes.add_1(NO_SCROLL_CLASS)?;
    } else {
        classes.remove_1(NO_SCROLL_CLASS)?;
    }
    Ok(())
}

/// An event listener that is removed again when dropped.
///
/// Used for document-level listeners owned by a component effect, which must
/// not pile up across re-renders.
pub struct ListenerGuard {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Register `handler` for `event_type` on `target`.
    ///
    /// # Errors
    /// Returns an error if the browser rejects the registration.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    /// Listen on the current document.
    ///
    /// # Errors
    /// Returns an error if there is no document or registration fails.
    pub fn on_document<F>(event_type: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let doc = document().ok_or(DomError::NoDocument)?;
        let target: &EventTarget = doc.as_ref();
        Self::new(target, event_type, handler)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
