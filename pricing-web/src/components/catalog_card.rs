use crate::components::disclosure::Disclosure;
use crate::components::hero::CardHero;
use crate::components::price_list::PriceList;
use pricing_core::CardView;
use pricing_core::constants::COLLAPSE_PROMPT;
use std::rc::Rc;
use yew::prelude::*;

/// How a card presents its price list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// Price list always visible under the hero
    Full,
    /// Price list behind a "Ver parcelas" disclosure
    Collapsed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Rc<CardView>,
    pub layout: CardLayout,
    pub on_show_qr: Callback<String>,
}

#[function_component(CatalogCard)]
pub fn catalog_card(props: &Props) -> Html {
    let card = &props.card;
    let list = html! {
        <PriceList rows={card.rows.clone()} on_show_qr={props.on_show_qr.clone()} />
    };
    let body = match props.layout {
        CardLayout::Full => list,
        CardLayout::Collapsed => html! {
            <Disclosure title={AttrValue::from(COLLAPSE_PROMPT)}>{ list }</Disclosure>
        },
    };

    html! {
        <div class="card" data-card={card.id.clone()}>
            <CardHero hero={card.hero.clone()} />
            { body }
        </div>
    }
}
