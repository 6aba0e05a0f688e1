use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    /// Section id, without the `#`.
    pub target: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// In-page anchor. Clicking closes the mobile menu, then smooth-scrolls to
/// the target section; if the id is not on the page the click falls through
/// to the browser's default anchor handling.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        Callback::from(move |e: MouseEvent| {
            dom::close_mobile_menu();
            if let Some(el) = dom::element_by_id(&target) {
                e.prevent_default();
                dom::smooth_scroll_to(&el);
            }
        })
    };

    html! {
        <a
            href={format!("#{}", props.target)}
            class={classes!("js-scroll", props.class.clone())}
            onclick={onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
