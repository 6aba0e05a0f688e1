use yew::prelude::*;

/// The page carries a single FAQ block; clicking the question toggles it,
/// with no sibling bookkeeping.
#[function_component(Faq)]
pub fn faq() -> Html {
    let abierta = use_state(|| false);

    let toggle = {
        let abierta = abierta.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            abierta.set(!*abierta);
        })
    };

    html! {
        <div class={classes!("faq", if *abierta { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{"¿Qué debo llevar a la primera consulta?"}</span>
                <span class="toggle-icon">{ if *abierta { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>
                    {"Trae el carnet de vacunación de tu mascota si lo tienes, una correa o \
                      guacal para su seguridad y, si es posible, una lista de los alimentos y \
                      medicamentos que consume. Si es la primera vez que visitas VetBQ, llega \
                      unos diez minutos antes para crear su historia clínica."}
                </p>
                <p>
                    {"Para urgencias no necesitas cita previa: llámanos o escríbenos por \
                      WhatsApp y prepara su llegada mientras vienes en camino."}
                </p>
            </div>
        </div>
    }
}
