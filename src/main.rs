use log::{info, Level};
use yew::prelude::*;

mod config;
mod dom;
mod state {
    pub mod citas;
    pub mod form;
    pub mod scroll;
    pub mod theme;
}
mod components {
    pub mod back_to_top;
    pub mod cita_form;
    pub mod faq;
    pub mod navbar;
    pub mod promos;
    pub mod scroll_link;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
}

use components::back_to_top::BackToTop;
use components::navbar::Navbar;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    // The section observer lives in Home, where the sections render; the
    // highlight it picks flows back up and into the nav as a prop.
    let active_section = use_state_eq(|| None::<String>);

    let on_section_change = {
        let active_section = active_section.clone();
        Callback::from(move |id: String| {
            active_section.set(Some(id));
        })
    };

    html! {
        <>
            <Navbar active_section={(*active_section).clone()} />
            <Home on_section_change={on_section_change} />
            <BackToTop />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
