use crate::app::state::LoadState;
use crate::components::catalog_card::{CardLayout, CatalogCard};
use crate::components::nav::{CategoryNav, PageNav};
use crate::components::qr_modal::QrModal;
use pricing_core::{CardView, Category, ModalEvent, Page, ViewState, compose_page};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub load: LoadState,
    pub view: ViewState,
    /// Receives the next view state after any navigation or modal action
    pub on_change: Callback<ViewState>,
}

fn grid(cards: Vec<CardView>, layout: CardLayout, on_show_qr: &Callback<String>) -> Html {
    html! {
        <>
            { for cards.into_iter().enumerate().map(|(idx, card)| {
                // Order lists may name a card twice; keys must stay unique.
                let key = format!("{idx}-{}", card.id);
                html! {
                    <CatalogCard
                        key={key}
                        card={Rc::new(card)}
                        layout={layout}
                        on_show_qr={on_show_qr.clone()}
                    />
                }
            }) }
        </>
    }
}

/// Both grids, their navigation and the QR modal for one view state.
///
/// The grids are rebuilt from the catalog on every render.
#[function_component(CatalogPage)]
pub fn catalog_page(props: &Props) -> Html {
    let view = &props.view;

    let on_category = {
        let view = view.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |cat: Category| on_change.emit(view.clone().with_category(cat)))
    };
    let on_page = {
        let view = view.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |page: Page| on_change.emit(view.clone().with_page(page)))
    };
    let on_show_qr = {
        let view = view.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |url: String| on_change.emit(view.clone().show_qr(url)))
    };
    let on_modal = {
        let view = view.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: ModalEvent| {
            if event.closes_modal() && view.is_modal_open() {
                on_change.emit(view.clone().on_modal_event(&event));
            }
        })
    };

    let (full, collapsed) = match &props.load {
        LoadState::Ready(catalog) => {
            let layout = compose_page(catalog, view.category);
            (
                grid(layout.full, CardLayout::Full, &on_show_qr),
                grid(layout.collapsed, CardLayout::Collapsed, &on_show_qr),
            )
        }
        LoadState::Failed(message) => (html! { <>{ message.clone() }</> }, Html::default()),
        LoadState::Loading => (Html::default(), Html::default()),
    };

    let hidden_unless = |page: Page| (view.page != page).then_some("hidden");

    html! {
        <>
            <header class="topbar">
                <CategoryNav active={view.category} on_select={on_category} />
                <PageNav active={view.page} on_select={on_page} />
            </header>
            <main id="main">
                <section id="page-full" class={classes!("page", hidden_unless(Page::Full))}>
                    <div id="grid" class="grid">{ full }</div>
                </section>
                <section id="page-collapsed" class={classes!("page", hidden_unless(Page::Collapsed))}>
                    <div id="grid-collapsed" class="grid">{ collapsed }</div>
                </section>
            </main>
            <QrModal
                target={view.qr_target.clone().map(AttrValue::from)}
                on_event={on_modal}
            />
        </>
    }
}
