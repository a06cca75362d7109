use crate::components::qr_image::QrImage;
use pricing_core::HeroView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub hero: HeroView,
}

#[function_component(CardHero)]
pub fn card_hero(props: &Props) -> Html {
    let hero = &props.hero;
    html! {
        <section class="hero">
            <div class="hero-header">{ hero.header.clone() }</div>
            <div class="qr">
                { hero.qr_target.as_ref().map(|target| html! {
                    <QrImage target={AttrValue::from(target.clone())} />
                }).unwrap_or_default() }
            </div>
            <h1 class="title">{ hero.title.clone() }</h1>
            <h2 class="subtitle">{ hero.subtitle.clone() }</h2>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn hero(qr_target: Option<&str>) -> HeroView {
        HeroView {
            header: "Plano Legado".into(),
            qr_target: qr_target.map(str::to_string),
            title: "R$ 100".into(),
            subtitle: "ou 2x".into(),
        }
    }

    #[test]
    fn renders_text_and_optional_qr() {
        let html = block_on(
            LocalServerRenderer::<CardHero>::with_props(Props {
                hero: hero(Some("https://hero")),
            })
            .render(),
        );
        assert!(html.contains("Plano Legado"));
        assert!(html.contains("R$ 100"));
        assert!(html.contains("ou 2x"));
        assert!(html.contains("<img"), "{html}");

        let html = block_on(
            LocalServerRenderer::<CardHero>::with_props(Props { hero: hero(None) }).render(),
        );
        assert!(!html.contains("<img"), "{html}");
        assert!(html.contains(r#"class="qr""#));
    }
}
