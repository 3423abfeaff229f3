use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::edit_page as t, fill_one},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleEditProps {
    pub slug: String,
}

/// Guarded target of the Edit button; the editor itself lives elsewhere.
#[function_component(ArticleEditPage)]
pub fn article_edit_page(props: &ArticleEditProps) -> Html {
    html! {
        <section class="placeholder">
            <h2 class="placeholder__title">{ fill_one(t::TITLE_TEMPLATE, &props.slug) }</h2>
            <p class="placeholder__text">{ t::DESCRIPTION }</p>
            <Link<Route>
                to={Route::ArticleDetail { slug: props.slug.clone() }}
                classes="placeholder__link"
            >
                <Icon name={IconName::ArrowLeft} size={16} />
                { t::BACK }
            </Link<Route>>
        </section>
    }
}
