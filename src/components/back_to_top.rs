use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::state::scroll;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    visible.set(scroll::back_to_top_visible(dom::scroll_y()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        dom::scroll_to_id("top");
    });

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "is-visible"))}
            onclick={onclick}
            aria-label="Volver arriba"
        >
            {"↑"}
        </button>
    }
}
