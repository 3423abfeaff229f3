use post_viewer_shared::avatar::AvatarSource;
use yew::prelude::*;

use crate::config::{asset_path, DEFAULT_AVATAR};

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarProps {
    pub src: Option<AttrValue>,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Author avatar that swaps to the bundled default in place when the image
/// fails to load.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let source = {
        let src = props.src.clone();
        use_state(move || AvatarSource::new(src.as_deref(), &asset_path(DEFAULT_AVATAR)))
    };

    {
        let source = source.clone();
        use_effect_with(props.src.clone(), move |src| {
            let next = AvatarSource::new(src.as_deref(), &asset_path(DEFAULT_AVATAR));
            if *source != next {
                source.set(next);
            }
            || ()
        });
    }

    let on_error = {
        let source = source.clone();
        Callback::from(move |_: Event| {
            let mut next = (*source).clone();
            if next.mark_failed() {
                source.set(next);
            }
        })
    };

    html! {
        <img
            class={classes!("avatar", props.class.clone())}
            src={source.src().to_string()}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={on_error}
        />
    }
}
