use log::info;
use yew::prelude::*;

use crate::components::cita_form::CitaForm;
use crate::components::faq::Faq;
use crate::components::promos::PromoCard;
use crate::components::scroll_link::ScrollLink;
use crate::config;
use crate::dom;
use crate::state::scroll;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Fired with a section id every time the section observer hands the
    /// nav highlight to it.
    pub on_section_change: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Section highlighting. Batches go through ActiveSection so the last
    // intersecting entry wins.
    {
        let on_section_change = props.on_section_change.clone();
        use_effect_with_deps(
            move |_| {
                let mut secciones = scroll::ActiveSection::new();
                let handle =
                    dom::observe_intersections(config::SECTION_THRESHOLD, move |entry, _| {
                        let id = entry.target().id();
                        if let Some(actual) = secciones.observe(&id, entry.is_intersecting()) {
                            on_section_change.emit(actual);
                        }
                    });

                if let Some(handle) = &handle {
                    let objetivos = dom::query_all("main section[id]");
                    info!("highlighting {} sections in the nav", objetivos.len());
                    for seccion in &objetivos {
                        handle.observe(seccion);
                    }
                }

                move || {
                    if let Some(handle) = handle {
                        handle.disconnect();
                    }
                }
            },
            (),
        );
    }

    // Reveal-on-scroll. Each element fires once; browsers without an
    // IntersectionObserver get everything visible immediately.
    use_effect_with_deps(
        move |_| {
            let mut revelados = scroll::RevealSet::new();
            let handle =
                dom::observe_intersections(config::REVEAL_THRESHOLD, move |entry, observer| {
                    if !entry.is_intersecting() {
                        return;
                    }
                    let objetivo = entry.target();
                    if let Some(idx) = objetivo
                        .get_attribute("data-reveal-idx")
                        .and_then(|v| v.parse::<usize>().ok())
                    {
                        if revelados.mark(idx) {
                            let _ = objetivo.class_list().add_1("reveal-visible");
                        }
                    }
                    observer.unobserve(&objetivo);
                });

            match &handle {
                Some(handle) => {
                    let objetivos = dom::query_all(".reveal");
                    info!("watching {} reveal elements", objetivos.len());
                    for (idx, el) in objetivos.iter().enumerate() {
                        let _ = el.set_attribute("data-reveal-idx", &idx.to_string());
                        handle.observe(el);
                    }
                }
                None => {
                    for el in dom::query_all(".reveal") {
                        let _ = el.class_list().add_1("reveal-visible");
                    }
                }
            }

            move || {
                if let Some(handle) = handle {
                    handle.disconnect();
                }
            }
        },
        (),
    );

    html! {
        <>
        <main>
            <section id="top" class="hero">
                <div class="hero-inner reveal">
                    <p class="hero-eyebrow">{"Clínica veterinaria en Barranquilla"}</p>
                    <h1>{"Cuidamos a tu mascota como parte de la familia"}</h1>
                    <p class="hero-lead">
                        {"Consulta general, vacunación, urgencias y peluquería en un solo \
                          lugar, con un equipo que conoce a tu mascota por su nombre."}
                    </p>
                    <div class="hero-actions">
                        <ScrollLink target="citas" class={classes!("btn", "btn-primary")}>
                            {"Agendar cita"}
                        </ScrollLink>
                        <ScrollLink target="servicios" class={classes!("btn", "btn-ghost")}>
                            {"Ver servicios"}
                        </ScrollLink>
                    </div>
                </div>
            </section>

            <section id="servicios">
                <h2 class="reveal">{"Servicios"}</h2>
                <div class="service-grid">
                    <article class="service-card reveal">
                        <span class="service-icon">{"🩺"}</span>
                        <h3>{"Consulta general"}</h3>
                        <p>{"Revisión completa, diagnóstico y plan de tratamiento con \
                             historia clínica digital."}</p>
                    </article>
                    <article class="service-card reveal">
                        <span class="service-icon">{"💉"}</span>
                        <h3>{"Vacunación y desparasitación"}</h3>
                        <p>{"Esquemas al día para perros y gatos, con recordatorios para \
                             la próxima dosis."}</p>
                    </article>
                    <article class="service-card reveal">
                        <span class="service-icon">{"🚑"}</span>
                        <h3>{"Urgencias"}</h3>
                        <p>{"Atención prioritaria para accidentes e intoxicaciones. \
                             Llámanos mientras vienes en camino."}</p>
                    </article>
                    <article class="service-card reveal">
                        <span class="service-icon">{"✂️"}</span>
                        <h3>{"Peluquería y baño"}</h3>
                        <p>{"Baño medicado, corte de uñas y arreglo de la raza, con \
                             productos suaves para su piel."}</p>
                    </article>
                </div>
            </section>

            <section id="promos">
                <h2 class="reveal">{"Promociones del mes"}</h2>
                <div class="promo-grid">
                    <PromoCard
                        titulo="Baño y peluquería"
                        detalle="Lleva a tu peludo un martes o miércoles y el segundo baño del mes va por nuestra cuenta."
                        etiqueta="2x1 entre semana"
                    />
                    <PromoCard
                        titulo="Esquema de vacunación"
                        detalle="Veinte por ciento de descuento completando el esquema anual durante agosto."
                        etiqueta="Descuento en vacunas"
                    />
                    <PromoCard
                        titulo="Plan cachorro"
                        detalle="Primera consulta, desparasitación y carnet incluidos para menores de seis meses."
                    />
                </div>
            </section>

            <section id="citas">
                <CitaForm />
            </section>

            <section id="faq">
                <h2 class="reveal">{"Preguntas frecuentes"}</h2>
                <div class="reveal">
                    <Faq />
                </div>
            </section>

            <section id="contacto">
                <h2 class="reveal">{"Contacto"}</h2>
                <div class="contact-grid">
                    <div class="contact-card reveal">
                        <h3>{"Dirección"}</h3>
                        <p>{"Cra. 43 #79-120, Barranquilla"}</p>
                        <p>{"Barrio El Prado, a una cuadra del parque"}</p>
                    </div>
                    <div class="contact-card reveal">
                        <h3>{"Horario"}</h3>
                        <p>{"Lunes a sábado: 8:00 a. m. – 7:00 p. m."}</p>
                        <p>{"Urgencias: todos los días, a cualquier hora"}</p>
                    </div>
                    <div class="contact-card reveal">
                        <h3>{"Escríbenos"}</h3>
                        <p><a href="https://wa.me/573001234567">{"WhatsApp: 300 123 4567"}</a></p>
                        <p><a href="mailto:hola@vetbq.co">{"hola@vetbq.co"}</a></p>
                    </div>
                </div>
            </section>
        </main>

        <footer class="site-footer">
            <p>{"© 2026 VetBQ. Hecho con cariño en Barranquilla."}</p>
            <ScrollLink target="top" class={classes!("footer-top-link")}>
                {"Volver arriba"}
            </ScrollLink>
        </footer>

        <style>
            {r#"
            :root {
                --bg: #0f1720;
                --bg-card: #18222e;
                --texto: #edf2f7;
                --texto-suave: #9db0c3;
                --acento: #2dd4a7;
                --acento-fuerte: #1fb58d;
                --borde: rgba(255, 255, 255, 0.08);
                --error: #f87171;
                --exito: #34d399;
                --sombra: rgba(0, 0, 0, 0.35);
            }

            body[data-theme='light'] {
                --bg: #f7fafc;
                --bg-card: #ffffff;
                --texto: #1a202c;
                --texto-suave: #5a6b7d;
                --acento: #0e9f77;
                --acento-fuerte: #0b8261;
                --borde: rgba(16, 24, 32, 0.12);
                --error: #b91c1c;
                --exito: #047857;
                --sombra: rgba(16, 24, 32, 0.12);
            }

            * {
                box-sizing: border-box;
            }

            body {
                margin: 0;
                background: var(--bg);
                color: var(--texto);
                font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Roboto,
                    Helvetica, Arial, sans-serif;
                line-height: 1.6;
                transition: background 0.3s ease, color 0.3s ease;
            }

            h1, h2, h3 {
                line-height: 1.2;
            }

            a {
                color: var(--acento);
                text-decoration: none;
            }

            main section {
                max-width: 1040px;
                margin: 0 auto;
                padding: 4.5rem 1.5rem;
                scroll-margin-top: 84px;
            }

            main section > h2 {
                font-size: 2rem;
                margin: 0 0 2rem;
            }

            /* ---------- header ---------- */

            .site-header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                background: var(--bg);
                border-bottom: 1px solid var(--borde);
            }

            .navbar {
                max-width: 1040px;
                margin: 0 auto;
                padding: 0.9rem 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
            }

            .brand {
                font-size: 1.3rem;
                font-weight: 700;
                color: var(--texto);
                letter-spacing: 0.02em;
            }

            .nav-links {
                display: flex;
                align-items: center;
                gap: 1.1rem;
            }

            .nav-link {
                color: var(--texto-suave);
                font-size: 0.95rem;
                padding: 0.2rem 0;
                border-bottom: 2px solid transparent;
                transition: color 0.2s ease, border-color 0.2s ease;
            }

            .nav-link:hover {
                color: var(--texto);
            }

            .nav-link.is-active {
                color: var(--acento);
                border-bottom-color: var(--acento);
            }

            .theme-toggle {
                background: none;
                border: 1px solid var(--borde);
                border-radius: 999px;
                color: var(--texto-suave);
                padding: 0.35rem 0.9rem;
                font-size: 0.85rem;
                cursor: pointer;
                transition: color 0.2s ease, border-color 0.2s ease;
            }

            .theme-toggle:hover {
                color: var(--texto);
                border-color: var(--acento);
            }

            .nav-toggle {
                display: none;
                flex-direction: column;
                justify-content: center;
                gap: 5px;
                width: 42px;
                height: 38px;
                background: none;
                border: 1px solid var(--borde);
                border-radius: 8px;
                padding: 8px;
                cursor: pointer;
            }

            .nav-toggle span {
                display: block;
                height: 2px;
                background: var(--texto);
                border-radius: 2px;
                transition: transform 0.25s ease, opacity 0.25s ease;
            }

            body.nav-open .nav-toggle span:nth-child(1) {
                transform: translateY(7px) rotate(45deg);
            }

            body.nav-open .nav-toggle span:nth-child(2) {
                opacity: 0;
            }

            body.nav-open .nav-toggle span:nth-child(3) {
                transform: translateY(-7px) rotate(-45deg);
            }

            /* ---------- hero ---------- */

            .hero {
                min-height: 88vh;
                display: flex;
                align-items: center;
                padding-top: 7rem;
            }

            .hero-eyebrow {
                color: var(--acento);
                text-transform: uppercase;
                letter-spacing: 0.14em;
                font-size: 0.8rem;
                margin: 0 0 0.8rem;
            }

            .hero h1 {
                font-size: 2.8rem;
                margin: 0 0 1rem;
                max-width: 620px;
            }

            .hero-lead {
                color: var(--texto-suave);
                max-width: 540px;
                margin: 0 0 2rem;
            }

            .hero-actions {
                display: flex;
                gap: 1rem;
                flex-wrap: wrap;
            }

            .btn {
                display: inline-block;
                padding: 0.75rem 1.6rem;
                border-radius: 10px;
                font-weight: 600;
                transition: transform 0.2s ease, background 0.2s ease;
            }

            .btn-primary {
                background: var(--acento);
                color: #08121a;
            }

            .btn-primary:hover {
                background: var(--acento-fuerte);
                transform: translateY(-2px);
            }

            .btn-ghost {
                border: 1px solid var(--borde);
                color: var(--texto);
            }

            .btn-ghost:hover {
                border-color: var(--acento);
                transform: translateY(-2px);
            }

            /* ---------- servicios ---------- */

            .service-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 1.2rem;
            }

            .service-card {
                background: var(--bg-card);
                border: 1px solid var(--borde);
                border-radius: 14px;
                padding: 1.5rem;
            }

            .service-icon {
                font-size: 1.8rem;
            }

            .service-card h3 {
                margin: 0.8rem 0 0.5rem;
                font-size: 1.1rem;
            }

            .service-card p {
                color: var(--texto-suave);
                font-size: 0.95rem;
                margin: 0;
            }

            /* ---------- promos ---------- */

            .promo-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.2rem;
            }

            .promo-card {
                background: var(--bg-card);
                border: 1px solid var(--borde);
                border-radius: 14px;
                padding: 1.6rem;
                transition: transform 0.25s ease, border-color 0.25s ease,
                    box-shadow 0.25s ease;
            }

            .promo-card:hover {
                transform: translateY(-4px);
                border-color: var(--acento);
                box-shadow: 0 14px 30px var(--sombra);
            }

            .promo-card h3 {
                margin: 0 0 0.6rem;
                font-size: 1.15rem;
            }

            .promo-card p {
                color: var(--texto-suave);
                margin: 0;
                font-size: 0.95rem;
            }

            /* ---------- citas ---------- */

            .citas-box {
                background: var(--bg-card);
                border: 1px solid var(--borde);
                border-radius: 16px;
                padding: 2.2rem;
                max-width: 640px;
                margin: 0 auto;
            }

            .citas-box h2 {
                margin: 0 0 0.6rem;
            }

            .cita-texto {
                color: var(--texto-suave);
                margin: 0 0 1.6rem;
            }

            .cita-form {
                display: grid;
                gap: 1.1rem;
            }

            .form-field {
                display: grid;
                gap: 0.35rem;
            }

            .form-field label {
                font-size: 0.85rem;
                color: var(--texto-suave);
            }

            .form-field input,
            .form-field select,
            .form-field textarea {
                background: var(--bg);
                border: 1px solid var(--borde);
                border-radius: 10px;
                color: var(--texto);
                padding: 0.7rem 0.9rem;
                font-size: 0.95rem;
                font-family: inherit;
                transition: border-color 0.2s ease;
            }

            .form-field input:focus,
            .form-field select:focus,
            .form-field textarea:focus {
                outline: none;
                border-color: var(--acento);
            }

            .form-field .field-error {
                border-color: var(--error);
            }

            .cita-form .btn-primary {
                border: none;
                font-size: 1rem;
                cursor: pointer;
                justify-self: start;
            }

            .form-message {
                min-height: 1.4rem;
                margin: 0;
                font-size: 0.92rem;
            }

            .form-message.error {
                color: var(--error);
            }

            .form-message.success {
                color: var(--exito);
            }

            /* ---------- faq ---------- */

            .faq {
                background: var(--bg-card);
                border: 1px solid var(--borde);
                border-radius: 14px;
                overflow: hidden;
            }

            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 1rem;
                background: none;
                border: none;
                color: var(--texto);
                font-size: 1.05rem;
                text-align: left;
                padding: 1.3rem 1.5rem;
                cursor: pointer;
            }

            .toggle-icon {
                color: var(--acento);
                font-size: 1.4rem;
                transition: transform 0.3s ease;
            }

            .faq.open .toggle-icon {
                transform: rotate(180deg);
            }

            .faq-answer {
                max-height: 0;
                overflow: hidden;
                padding: 0 1.5rem;
                transition: max-height 0.4s ease;
            }

            .faq.open .faq-answer {
                max-height: 600px;
                padding: 0 1.5rem 1.3rem;
            }

            .faq-answer p {
                color: var(--texto-suave);
                margin: 0 0 1rem;
            }

            /* ---------- contacto ---------- */

            .contact-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.2rem;
            }

            .contact-card {
                background: var(--bg-card);
                border: 1px solid var(--borde);
                border-radius: 14px;
                padding: 1.5rem;
            }

            .contact-card h3 {
                margin: 0 0 0.6rem;
                font-size: 1.05rem;
            }

            .contact-card p {
                color: var(--texto-suave);
                margin: 0 0 0.4rem;
                font-size: 0.95rem;
            }

            /* ---------- footer ---------- */

            .site-footer {
                border-top: 1px solid var(--borde);
                padding: 1.6rem 1.5rem 5rem;
                max-width: 1040px;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 1rem;
                color: var(--texto-suave);
                font-size: 0.9rem;
            }

            /* ---------- reveal ---------- */

            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }

            .reveal-visible {
                opacity: 1;
                transform: none;
            }

            /* ---------- back to top ---------- */

            .back-to-top {
                position: fixed;
                right: 1.4rem;
                bottom: 1.4rem;
                z-index: 40;
                width: 46px;
                height: 46px;
                border-radius: 50%;
                border: none;
                background: var(--acento);
                color: #08121a;
                font-size: 1.2rem;
                cursor: pointer;
                opacity: 0;
                visibility: hidden;
                transform: translateY(8px);
                transition: opacity 0.25s ease, transform 0.25s ease,
                    visibility 0.25s ease;
            }

            .back-to-top.is-visible {
                opacity: 1;
                visibility: visible;
                transform: none;
            }

            /* ---------- mobile ---------- */

            @media (max-width: 820px) {
                .nav-toggle {
                    display: flex;
                }

                .nav-links {
                    position: fixed;
                    top: 62px;
                    left: 0;
                    right: 0;
                    flex-direction: column;
                    align-items: stretch;
                    background: var(--bg);
                    border-bottom: 1px solid var(--borde);
                    padding: 1rem 1.5rem 1.4rem;
                    gap: 0.4rem;
                    opacity: 0;
                    visibility: hidden;
                    transform: translateY(-8px);
                    transition: opacity 0.25s ease, transform 0.25s ease,
                        visibility 0.25s ease;
                }

                body.nav-open .nav-links {
                    opacity: 1;
                    visibility: visible;
                    transform: none;
                }

                .nav-link {
                    padding: 0.55rem 0;
                    border-bottom: none;
                    font-size: 1.05rem;
                }

                .theme-toggle {
                    align-self: flex-start;
                    margin-top: 0.6rem;
                }

                .hero h1 {
                    font-size: 2.1rem;
                }

                main section {
                    padding: 3.2rem 1.2rem;
                }

                .site-footer {
                    flex-direction: column;
                    text-align: center;
                }
            }
            "#}
        </style>
        </>
    }
}
