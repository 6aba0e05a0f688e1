use chrono::{Local, Utc};
use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::dom;
use crate::state::citas;
use crate::state::form::{self, Campo, SolicitudCita, Tono, MSG_ENVIANDO, MSG_GRACIAS, MSG_REVISA};

const TEXTO_CITAS: &str = "Cuéntanos de tu mascota y te confirmamos la cita por WhatsApp \
     en el transcurso del día.";

const MOTIVOS: [(&str, &str); 5] = [
    ("consulta", "Consulta general"),
    ("vacunacion", "Vacunación"),
    ("urgencia", "Urgencia"),
    ("peluqueria", "Peluquería y baño"),
    ("laboratorio", "Exámenes de laboratorio"),
];

fn quitar_error(
    errores: &UseStateHandle<Vec<Campo>>,
    estado: &UseStateHandle<Option<(Tono, &'static str)>>,
    campo: Campo,
) {
    let (restantes, mensaje) = form::al_editar(errores, **estado, campo);
    errores.set(restantes);
    estado.set(mensaje);
}

fn refrescar_aviso(aviso: &UseStateHandle<Option<&'static str>>) {
    if let Some(valor) = dom::storage_get(config::CITA_KEY) {
        if citas::solicitada_hoy(&valor, Local::now().date_naive()) {
            aviso.set(Some(citas::MSG_CITA_HOY));
        }
    }
}

/// Appointment request form. Validation marks every failing field at once;
/// a valid submit simulates the server round-trip with a cancellable
/// timeout, then records the request instant for the same-day advisory.
#[function_component(CitaForm)]
pub fn cita_form() -> Html {
    let nombre = use_state(String::new);
    let mascota = use_state(String::new);
    let telefono = use_state(String::new);
    let motivo = use_state(String::new);
    let mensaje = use_state(String::new);

    let errores = use_state(Vec::<Campo>::new);
    let estado = use_state(|| None::<(Tono, &'static str)>);
    let aviso = use_state(|| None::<&'static str>);
    let pendiente = use_mut_ref(|| None::<Timeout>);

    {
        let aviso = aviso.clone();
        use_effect_with_deps(
            move |_| {
                refrescar_aviso(&aviso);
                || ()
            },
            (),
        );
    }

    let oninput_nombre = {
        let nombre = nombre.clone();
        let errores = errores.clone();
        let estado = estado.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nombre.set(input.value());
            quitar_error(&errores, &estado, Campo::Nombre);
        })
    };

    let oninput_mascota = {
        let mascota = mascota.clone();
        let errores = errores.clone();
        let estado = estado.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            mascota.set(input.value());
            quitar_error(&errores, &estado, Campo::Mascota);
        })
    };

    let oninput_telefono = {
        let telefono = telefono.clone();
        let errores = errores.clone();
        let estado = estado.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            telefono.set(input.value());
            quitar_error(&errores, &estado, Campo::Telefono);
        })
    };

    let oninput_motivo = {
        let motivo = motivo.clone();
        let errores = errores.clone();
        let estado = estado.clone();
        Callback::from(move |e: InputEvent| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            motivo.set(select.value());
            quitar_error(&errores, &estado, Campo::Motivo);
        })
    };

    let oninput_mensaje = {
        let mensaje = mensaje.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            mensaje.set(area.value());
        })
    };

    let onsubmit = {
        let nombre = nombre.clone();
        let mascota = mascota.clone();
        let telefono = telefono.clone();
        let motivo = motivo.clone();
        let mensaje = mensaje.clone();
        let errores = errores.clone();
        let estado = estado.clone();
        let aviso = aviso.clone();
        let pendiente = pendiente.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let solicitud = SolicitudCita {
                nombre: (*nombre).clone(),
                mascota: (*mascota).clone(),
                telefono: (*telefono).clone(),
                motivo: (*motivo).clone(),
                mensaje: (*mensaje).clone(),
            };

            let invalidos = solicitud.validar();
            if !invalidos.is_empty() {
                errores.set(invalidos);
                estado.set(Some((Tono::Error, MSG_REVISA)));
                return;
            }

            errores.set(Vec::new());
            estado.set(Some((Tono::Exito, MSG_ENVIANDO)));

            if let Ok(cuerpo) = serde_json::to_string(&solicitud) {
                info!("solicitud de cita simulada: {}", cuerpo);
            }

            // A valid re-submit replaces the pending one, so exactly one
            // confirmation ever fires.
            pendiente.borrow_mut().take();

            let confirmacion = Timeout::new(config::SUBMIT_DELAY_MS, {
                let nombre = nombre.clone();
                let mascota = mascota.clone();
                let telefono = telefono.clone();
                let motivo = motivo.clone();
                let mensaje = mensaje.clone();
                let estado = estado.clone();
                let aviso = aviso.clone();
                let pendiente = pendiente.clone();
                move || {
                    estado.set(Some((Tono::Exito, MSG_GRACIAS)));
                    nombre.set(String::new());
                    mascota.set(String::new());
                    telefono.set(String::new());
                    motivo.set(String::new());
                    mensaje.set(String::new());

                    dom::storage_set(config::CITA_KEY, &Utc::now().to_rfc3339());
                    refrescar_aviso(&aviso);

                    pendiente.borrow_mut().take();
                }
            });
            *pendiente.borrow_mut() = Some(confirmacion);
        })
    };

    html! {
        <div class="citas-box reveal">
            <h2>{"Agenda tu cita"}</h2>
            <p id="cita-texto" class="cita-texto">
                { (*aviso).unwrap_or(TEXTO_CITAS) }
            </p>

            <form class="cita-form" onsubmit={onsubmit}>
                <div class="form-field">
                    <label for="nombre">{"Tu nombre"}</label>
                    <input
                        id="nombre"
                        type="text"
                        placeholder="Ej: Laura Gómez"
                        value={(*nombre).clone()}
                        oninput={oninput_nombre}
                        class={classes!(errores.contains(&Campo::Nombre).then(|| "field-error"))}
                    />
                </div>

                <div class="form-field">
                    <label for="mascota">{"Nombre de tu mascota"}</label>
                    <input
                        id="mascota"
                        type="text"
                        placeholder="Ej: Rocky"
                        value={(*mascota).clone()}
                        oninput={oninput_mascota}
                        class={classes!(errores.contains(&Campo::Mascota).then(|| "field-error"))}
                    />
                </div>

                <div class="form-field">
                    <label for="telefono">{"Teléfono o WhatsApp"}</label>
                    <input
                        id="telefono"
                        type="tel"
                        placeholder="Ej: 300 123 4567"
                        value={(*telefono).clone()}
                        oninput={oninput_telefono}
                        class={classes!(errores.contains(&Campo::Telefono).then(|| "field-error"))}
                    />
                </div>

                <div class="form-field">
                    <label for="motivo">{"Motivo de la visita"}</label>
                    <select
                        id="motivo"
                        value={(*motivo).clone()}
                        oninput={oninput_motivo}
                        class={classes!(errores.contains(&Campo::Motivo).then(|| "field-error"))}
                    >
                        <option value="" selected={motivo.is_empty()}>{"Selecciona un motivo"}</option>
                        {
                            MOTIVOS.iter().map(|(valor, etiqueta)| html! {
                                <option value={*valor} selected={*motivo == *valor}>{ *etiqueta }</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-field">
                    <label for="mensaje">{"Mensaje (opcional)"}</label>
                    <textarea
                        id="mensaje"
                        rows="3"
                        placeholder="Cuéntanos qué le pasa o qué necesitas"
                        value={(*mensaje).clone()}
                        oninput={oninput_mensaje}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Enviar solicitud"}</button>

                <p class={classes!("form-message", (*estado).map(|(tono, _)| tono.class()))}>
                    { (*estado).map(|(_, texto)| texto).unwrap_or("") }
                </p>
            </form>
        </div>
    }
}
