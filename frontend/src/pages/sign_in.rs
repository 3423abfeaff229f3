use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::require_auth::ReturnTo,
    i18n::{current::sign_in_page as t, fill_one},
};

/// Redirect target of `RequireAuth`. Shows where the visitor will be sent
/// back to once the identity service has signed them in.
#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let location = use_location();
    let return_to = location
        .as_ref()
        .and_then(|loc| loc.state::<ReturnTo>())
        .map(|state: Rc<ReturnTo>| state.from.clone());

    html! {
        <section class="placeholder">
            <h2 class="placeholder__title">{ t::TITLE }</h2>
            <p class="placeholder__text">{ t::DESCRIPTION }</p>
            if let Some(from) = return_to {
                <p class="placeholder__text">{ fill_one(t::RETURN_TEMPLATE, &from) }</p>
                <a class="placeholder__link" href={from.clone()}>{ t::RETURN_LINK }</a>
            }
        </section>
    }
}
