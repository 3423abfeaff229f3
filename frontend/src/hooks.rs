use std::{ops::Deref, rc::Rc};

use post_viewer_shared::detail::{PostDetailAction, PostDetailState};
use yew::prelude::*;

use crate::{api::ApiClient, utils::log_error};

/// `PostDetailState` wrapped for `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDetail(PostDetailState);

impl Deref for PostDetail {
    type Target = PostDetailState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for PostDetail {
    type Action = PostDetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

/// Page state for the article behind `slug`.
///
/// The article is requested on mount and again every time `slug` changes;
/// a response for a slug the page already left is dropped by the reducer.
#[hook]
pub fn use_post_detail(slug: String, api: ApiClient) -> UseReducerHandle<PostDetail> {
    let detail = use_reducer(PostDetail::default);

    {
        let dispatcher = detail.dispatcher();
        use_effect_with(slug, move |slug| {
            let slug = slug.clone();
            dispatcher.dispatch(PostDetailAction::Load {
                slug: slug.clone(),
            });
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.0.fetch_article(&slug).await;
                if let Err(e) = &result {
                    log_error("Failed to fetch article", e);
                }
                dispatcher.dispatch(PostDetailAction::Loaded {
                    slug,
                    result,
                });
            });
            || ()
        });
    }

    detail
}
