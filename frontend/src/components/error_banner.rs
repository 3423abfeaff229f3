use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerTone {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or(BannerTone::Error)]
    pub tone: BannerTone,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
    #[prop_or(true)]
    pub dismissible: bool,
}

/// Inline notice. Errors get a title and a close button; success notices are
/// short-lived confirmations.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let (tone_class, icon) = match props.tone {
        BannerTone::Error => ("banner--error", "⚠️"),
        BannerTone::Success => ("banner--success", "✓"),
    };

    let title = props.title.clone().or_else(|| match props.tone {
        BannerTone::Error => Some(AttrValue::from(t::TITLE)),
        BannerTone::Success => None,
    });

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={classes!("banner", tone_class)} role="alert" aria-live="assertive">
            <span class="banner__icon" aria-hidden="true">{ icon }</span>
            <div class="banner__content">
                if let Some(title) = title {
                    <p class="banner__title">{ title }</p>
                }
                <p>{ props.message.clone() }</p>
            </div>
            if props.dismissible {
                <button
                    type="button"
                    class="banner__close"
                    aria-label={t::ARIA_CLOSE}
                    onclick={close_button}
                >
                    {"×"}
                </button>
            }
        </div>
    }
}
