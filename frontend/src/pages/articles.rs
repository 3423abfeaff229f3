use yew::prelude::*;

use crate::i18n::current::articles_page as t;

/// Landing page after a post is deleted.
#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    html! {
        <section class="placeholder">
            <h2 class="placeholder__title">{ t::TITLE }</h2>
            <p class="placeholder__text">{ t::DESCRIPTION }</p>
        </section>
    }
}
