use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PromoCardProps {
    pub titulo: AttrValue,
    pub detalle: AttrValue,
    /// Cards without a tag keep their title on hover.
    #[prop_or_default]
    pub etiqueta: Option<AttrValue>,
}

/// Promotion card. While the pointer is over a tagged card the title swaps
/// to a teaser built from its tag; leaving restores the original.
#[function_component(PromoCard)]
pub fn promo_card(props: &PromoCardProps) -> Html {
    let resaltada = use_state(|| false);

    let onmouseenter = {
        let resaltada = resaltada.clone();
        Callback::from(move |_: MouseEvent| resaltada.set(true))
    };
    let onmouseleave = {
        let resaltada = resaltada.clone();
        Callback::from(move |_: MouseEvent| resaltada.set(false))
    };

    let titulo = match (&props.etiqueta, *resaltada) {
        (Some(etiqueta), true) if !etiqueta.is_empty() => {
            format!("👀 {} disponible", etiqueta)
        }
        _ => props.titulo.to_string(),
    };

    html! {
        <article
            class="promo-card reveal"
            data-promo-tag={props.etiqueta.clone()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <h3>{ titulo }</h3>
            <p>{ props.detalle.clone() }</p>
        </article>
    }
}
