use post_viewer_shared::SessionSource;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::{
        current::{common as common_text, header as t},
        fill_one,
    },
    router::Route,
    session::use_session,
};

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();

    let account = match session.current_user() {
        Some(user) => html! {
            <span class="site-header__user">{ fill_one(t::SIGNED_IN_AS_TEMPLATE, &user.username) }</span>
        },
        None if session.is_restoring() => Html::default(),
        None => html! {
            <Link<Route> to={Route::SignIn} classes="site-header__link">{ t::SIGN_IN }</Link<Route>>
        },
    };

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Articles} classes="site-header__brand">
                { common_text::APP_NAME }
            </Link<Route>>
            <nav class="site-header__nav">
                <Link<Route> to={Route::Articles} classes="site-header__link">{ t::ARTICLES }</Link<Route>>
                { account }
            </nav>
        </header>
    }
}
