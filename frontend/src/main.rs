//! Post viewer: a Yew single-page app rendering one article by slug.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod session;
mod utils;

use yew::prelude::*;

use crate::{api::ApiClient, session::SessionProvider};

#[function_component(App)]
fn app() -> Html {
    let api = use_state(ApiClient::for_build);

    html! {
        <ContextProvider<ApiClient> context={(*api).clone()}>
            <SessionProvider>
                <router::AppRouter />
            </SessionProvider>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
