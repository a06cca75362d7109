use pricing_core::{Category, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryNavProps {
    pub active: Category,
    pub on_select: Callback<Category>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageNavProps {
    pub active: Page,
    pub on_select: Callback<Page>,
}

fn select_handler<T: Copy + 'static>(target: T, on_select: &Callback<T>) -> Callback<MouseEvent> {
    let on_select = on_select.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_select.emit(target);
    })
}

/// Category switcher; links carry `data-cat`.
#[function_component(CategoryNav)]
pub fn category_nav(props: &CategoryNavProps) -> Html {
    html! {
        <nav class="nav-cats" aria-label="Categorias">
            { for Category::ALL.into_iter().map(|cat| html! {
                <a
                    href="#"
                    class={classes!("nav-link-cat", (cat == props.active).then_some("active"))}
                    data-cat={cat.as_str()}
                    onclick={select_handler(cat, &props.on_select)}
                >
                    { cat.label() }
                </a>
            }) }
        </nav>
    }
}

/// Full / collapsed switcher; links carry `data-page`.
#[function_component(PageNav)]
pub fn page_nav(props: &PageNavProps) -> Html {
    html! {
        <nav class="nav-pages" aria-label="Visualização">
            { for Page::ALL.into_iter().map(|page| html! {
                <a
                    href="#"
                    class={classes!("nav-link-page", (page == props.active).then_some("active"))}
                    data-page={page.as_str()}
                    onclick={select_handler(page, &props.on_select)}
                >
                    { page.label() }
                </a>
            }) }
        </nav>
    }
}
