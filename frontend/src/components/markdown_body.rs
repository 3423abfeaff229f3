use web_sys::Element;
use yew::prelude::*;

use crate::utils::markdown_to_html;

#[derive(Properties, Clone, PartialEq)]
pub struct MarkdownBodyProps {
    /// Markdown source of the article body.
    pub markdown: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Article body rendered from Markdown.
///
/// The sanitized HTML is written straight into the host element; Yew never
/// diffs its children, so only a change of `markdown` touches the DOM.
#[function_component(MarkdownBody)]
pub fn markdown_body(props: &MarkdownBodyProps) -> Html {
    let host = use_node_ref();
    let rendered = use_memo(props.markdown.clone(), |markdown| markdown_to_html(markdown));

    {
        let host = host.clone();
        use_effect_with(rendered, move |rendered| {
            if let Some(element) = host.cast::<Element>() {
                element.set_inner_html(rendered.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host} class={classes!("markdown-body", props.class.clone())} />
    }
}
