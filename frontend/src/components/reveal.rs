use crate::config;
use crate::motion::in_view::{use_in_view, InViewOptions};
use yew::prelude::*;

/// True when the user agent asks for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn reveal_style(animated: bool, in_view: bool) -> String {
    if !animated {
        return String::new();
    }
    let (opacity, offset) = if in_view { (1.0, 0.0) } else { (0.0, config::REVEAL_OFFSET_PX) };
    format!(
        "opacity: {}; transform: translateY({}px); transition: opacity {d}s ease-out, transform {d}s ease-out;",
        opacity,
        offset,
        d = config::REVEAL_DURATION_S,
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInUpProps {
    #[prop_or(true)]
    pub animated: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content in and up the first time it is fully on screen.
#[function_component(FadeInUp)]
pub fn fade_in_up(props: &FadeInUpProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(
        node.clone(),
        InViewOptions { amount: config::REVEAL_AMOUNT, once: true },
    );

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(props.animated, in_view)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_variant_has_no_motion_styles() {
        assert_eq!(reveal_style(false, false), "");
    }

    #[test]
    fn hidden_until_in_view() {
        assert_eq!(
            reveal_style(true, false),
            "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease-out, transform 0.6s ease-out;"
        );
        assert!(reveal_style(true, true).starts_with("opacity: 1; transform: translateY(0px);"));
    }
}
