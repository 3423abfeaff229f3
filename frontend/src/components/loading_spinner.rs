use yew::prelude::*;

use crate::i18n::current::{common as common_text, loading_spinner as t};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Text under the spinner; screen readers always get one.
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <div
            class="loading"
            role="status"
            aria-live="polite"
            aria-busy="true"
            aria-label={t::ARIA_LABEL}
        >
            <div style={spinner_style} class="loading__ring" />
            {
                match props.label.clone() {
                    Some(label) => html! { <p class="loading__label">{ label }</p> },
                    None => html! { <span class="sr-only">{ common_text::LOADING }</span> },
                }
            }
        </div>
    }
}
