use pricing_core::PriceRow;
use pricing_core::constants::{OPEN_LINK_LABEL, SHOW_QR_LABEL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rows: Vec<PriceRow>,
    /// Emits the row's QR target when its QR control is clicked
    pub on_show_qr: Callback<String>,
}

/// One `<li>` per price row with its "open" and "QR" controls.
///
/// The "open" control is rendered without a click handler.
#[function_component(PriceList)]
pub fn price_list(props: &Props) -> Html {
    html! {
        <ul class="price-list">
            { for props.rows.iter().enumerate().map(|(idx, row)| price_line(idx, row, &props.on_show_qr)) }
        </ul>
    }
}

fn price_line(idx: usize, row: &PriceRow, on_show_qr: &Callback<String>) -> Html {
    let on_qr = row.qr_target.clone().map(|url| {
        let on_show_qr = on_show_qr.clone();
        Callback::from(move |_: MouseEvent| on_show_qr.emit(url.clone()))
    });
    html! {
        <li class="price-item" key={format!("{idx}-{}", row.key)}>
            <span>{ row.label.clone() }</span>
            <button
                type="button"
                class="btn"
                data-card={row.card_id.clone()}
                data-key={row.key.clone()}
                data-action="open"
            >
                { OPEN_LINK_LABEL }
            </button>
            <button
                type="button"
                class="btn"
                data-card={row.card_id.clone()}
                data-key={row.key.clone()}
                data-action="qr"
                disabled={!row.qr_enabled()}
                onclick={on_qr}
            >
                { SHOW_QR_LABEL }
            </button>
        </li>
    }
}
