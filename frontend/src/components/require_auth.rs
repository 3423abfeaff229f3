use post_viewer_shared::{
    guard::{guard, GuardDecision},
    SessionSource,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::loading_spinner::LoadingSpinner,
    i18n::current::require_auth as t,
    router::Route,
    session::use_session,
};

/// Location the sign-in page should send the user back to, carried in the
/// history state of the redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTo {
    pub from: String,
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Html,
}

/// Renders children for logged-in users and redirects everyone else to
/// sign-in.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();

    let current = location
        .as_ref()
        .map(|loc| format!("{}{}", loc.path(), loc.query_str()))
        .unwrap_or_default();
    let decision = if session.is_restoring() {
        None
    } else {
        Some(guard(session.is_logged_in(), &current))
    };

    {
        let decision = decision.clone();
        use_effect_with(decision, move |decision| {
            if let Some(GuardDecision::Redirect {
                to,
                from,
            }) = decision
            {
                let target = Route::recognize(to).unwrap_or(Route::SignIn);
                if let Some(nav) = navigator.as_ref() {
                    nav.replace_with_state(&target, ReturnTo {
                        from: from.clone(),
                    });
                }
            }
            || ()
        });
    }

    match decision {
        Some(GuardDecision::Render) => props.children.clone(),
        Some(GuardDecision::Redirect {
            ..
        }) => Html::default(),
        None => html! { <LoadingSpinner label={t::CHECKING} /> },
    }
}
