use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::state::theme::Theme;

/// Light/dark switch. The stored preference is applied on load but only an
/// explicit click ever writes to storage, so first visits leave it clean.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| Theme::from_stored(dom::storage_get(config::THEME_KEY).as_deref()));

    use_effect_with_deps(
        |theme: &Theme| {
            dom::set_body_theme(theme.as_str());
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let siguiente = theme.toggled();
            dom::storage_set(config::THEME_KEY, siguiente.as_str());
            theme.set(siguiente);
        })
    };

    html! {
        <button class="theme-toggle" onclick={onclick}>
            { theme.toggle_label() }
        </button>
    }
}
