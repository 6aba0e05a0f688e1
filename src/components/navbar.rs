use yew::prelude::*;

use crate::components::scroll_link::ScrollLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::dom;

const NAV_LINKS: [(&str, &str); 6] = [
    ("Inicio", "top"),
    ("Servicios", "servicios"),
    ("Promos", "promos"),
    ("Citas", "citas"),
    ("Preguntas", "faq"),
    ("Contacto", "contacto"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Id of the section currently owning the highlight, fed from the
    /// section observer.
    #[prop_or_default]
    pub active_section: Option<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let toggle_menu = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::toggle_mobile_menu();
    });

    html! {
        <header class="site-header">
            <nav class="navbar">
                <ScrollLink target="top" class={classes!("brand")}>
                    {"VetBQ"}
                </ScrollLink>

                <button class="nav-toggle" onclick={toggle_menu} aria-label="Abrir o cerrar el menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(etiqueta, destino)| {
                            let activo = props.active_section.as_deref() == Some(*destino);
                            html! {
                                <ScrollLink
                                    target={*destino}
                                    class={classes!("nav-link", activo.then(|| "is-active"))}
                                >
                                    { *etiqueta }
                                </ScrollLink>
                            }
                        }).collect::<Html>()
                    }
                    <ThemeToggle />
                </div>
            </nav>
        </header>
    }
}
