use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{header::Header, require_auth::RequireAuth},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/articles")]
    Articles,

    #[at("/articles/:slug")]
    ArticleDetail { slug: String },

    #[at("/articles/:slug/edit")]
    ArticleEdit { slug: String },

    #[at("/sign-in")]
    SignIn,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Articles} /> },
        Route::Articles => html! { <pages::articles::ArticlesPage /> },
        Route::ArticleDetail {
            slug,
        } => {
            html! { <pages::article_detail::ArticleDetailPage slug={slug} /> }
        },
        Route::ArticleEdit {
            slug,
        } => {
            html! {
                <RequireAuth>
                    <pages::article_edit::ArticleEditPage slug={slug} />
                </RequireAuth>
            }
        },
        Route::SignIn => html! { <pages::sign_in::SignInPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let basename = crate::config::BASE_URL.trim_end_matches('/');
    let basename = (!basename.is_empty()).then(|| AttrValue::from(basename.to_string()));

    html! {
        <BrowserRouter {basename}>
            <div class="app">
                <Header />
                <main class="app__main">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
