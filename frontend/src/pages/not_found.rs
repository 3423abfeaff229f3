use yew::prelude::*;

use crate::i18n::current::not_found_page as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="placeholder">
            <h2 class="placeholder__title">{ t::TITLE }</h2>
            <p class="placeholder__text">{ t::DESCRIPTION }</p>
        </section>
    }
}
