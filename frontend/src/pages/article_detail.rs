use post_viewer_shared::{
    delete::{delete_request, send_delete},
    detail::{ArticleView, DetailView, PostDetailAction},
    favorite::{send_toggle, ToggleOutcome},
    routes::edit_path,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, use_route, Routable};

use crate::{
    api::use_api,
    components::{
        avatar::Avatar,
        confirm_popover::ConfirmPopover,
        error_banner::{BannerTone, ErrorBanner},
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        markdown_body::MarkdownBody,
    },
    hooks::use_post_detail,
    i18n::current::post_detail as t,
    router::Route,
    session::use_session,
    utils::log_error,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    #[prop_or_default]
    pub slug: String,
}

/// Transient answer feedback for the delete prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Notice {
    tone: BannerTone,
    text: &'static str,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let api = use_api();
    let session = use_session();

    let slug = route
        .as_ref()
        .and_then(|r| match r {
            Route::ArticleDetail {
                slug,
            } => Some(slug.clone()),
            _ => None,
        })
        .unwrap_or_else(|| props.slug.clone());

    let detail = use_post_detail(slug.clone(), api.clone());
    let notice = use_state(|| None::<Notice>);

    // Leave the page once per successful delete.
    {
        let navigator = navigator.clone();
        let dispatcher = detail.dispatcher();
        use_effect_with(detail.delete.pending_navigation(), move |target| {
            if let Some(target) = target {
                let route = Route::recognize(target).unwrap_or(Route::Articles);
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&route);
                }
                dispatcher.dispatch(PostDetailAction::NavigationConsumed);
            }
            || ()
        });
    }

    let on_like = {
        let detail = detail.clone();
        let session = session.clone();
        let slug = slug.clone();
        let api = api.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = detail.favorite.prepare(&session, &slug) else {
                return;
            };
            let dispatcher = detail.dispatcher();
            dispatcher.dispatch(PostDetailAction::LikeStarted);
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = send_toggle(&*api.0, &request).await;
                if let ToggleOutcome::Failed(e) = &outcome {
                    log_error("Failed to toggle favorite", e);
                }
                dispatcher.dispatch(PostDetailAction::LikeSettled {
                    slug: request.slug,
                    outcome,
                });
            });
        })
    };

    let on_delete = {
        let dispatcher = detail.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PostDetailAction::DeletePrompted))
    };

    let on_cancel = {
        let dispatcher = detail.dispatcher();
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(PostDetailAction::DeleteDeclined);
            notice.set(Some(Notice {
                tone: BannerTone::Error,
                text: t::NOTICE_NO,
            }));
        })
    };

    let on_confirm = {
        let dispatcher = detail.dispatcher();
        let notice = notice.clone();
        let session = session.clone();
        let slug = slug.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            notice.set(Some(Notice {
                tone: BannerTone::Success,
                text: t::NOTICE_YES,
            }));
            match delete_request(&session, &slug) {
                Ok(request) => {
                    dispatcher.dispatch(PostDetailAction::DeleteStarted);
                    let dispatcher = dispatcher.clone();
                    let api = api.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = send_delete(&*api.0, &request).await;
                        if let Err(e) = &result {
                            log_error("Failed to delete article", e);
                        }
                        dispatcher.dispatch(PostDetailAction::DeleteSettled {
                            slug: request.slug,
                            result,
                        });
                    });
                },
                Err(e) => {
                    log_error("Failed to delete article", &e);
                    dispatcher.dispatch(PostDetailAction::DeleteSettled {
                        slug: slug.clone(),
                        result: Err(e),
                    });
                },
            }
        })
    };

    let on_edit = {
        let navigator = navigator.clone();
        let slug = slug.clone();
        Callback::from(move |_: MouseEvent| {
            let route = Route::recognize(&edit_path(&slug)).unwrap_or(Route::NotFound);
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let notice_banner = match *notice {
        Some(Notice {
            tone,
            text,
        }) => html! {
            <div class="post-detail__notice">
                <ErrorBanner message={text} {tone} on_close={close_notice} />
            </div>
        },
        None => Html::default(),
    };

    let content = match detail.view(&session) {
        DetailView::Loading => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        DetailView::Error(message) => html! {
            <div class="post-detail post-detail--error">
                <ErrorBanner
                    {message}
                    title={t::LOAD_FAILED}
                    auto_dismiss={false}
                    dismissible={false}
                />
            </div>
        },
        DetailView::NotFound => html! {
            <p class="post-detail post-detail--missing">{ t::NOT_FOUND }</p>
        },
        DetailView::Article(view) => render_article(&view, Handlers {
            on_like,
            on_delete,
            on_confirm,
            on_cancel,
            on_edit,
        }),
    };

    html! {
        <>
            { notice_banner }
            { content }
        </>
    }
}

struct Handlers {
    on_like: Callback<MouseEvent>,
    on_delete: Callback<MouseEvent>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    on_edit: Callback<MouseEvent>,
}

fn render_article(view: &ArticleView, handlers: Handlers) -> Html {
    let like_label = if view.is_favorited { t::ARIA_UNLIKE } else { t::ARIA_LIKE };

    let controls = if view.can_manage {
        html! {
            <div class="post-detail__controls">
                <ConfirmPopover
                    open={view.confirming_delete}
                    title={t::DELETE_CONFIRM_TITLE}
                    ok_text={t::CONFIRM_YES}
                    cancel_text={t::CONFIRM_NO}
                    on_confirm={handlers.on_confirm}
                    on_cancel={handlers.on_cancel}
                    busy={view.delete_pending}
                >
                    <button
                        type="button"
                        class="post-detail__delete"
                        disabled={view.delete_pending}
                        onclick={handlers.on_delete}
                    >
                        <Icon name={IconName::Trash} size={16} />
                        { t::DELETE }
                    </button>
                </ConfirmPopover>
                <button type="button" class="post-detail__edit" onclick={handlers.on_edit}>
                    <Icon name={IconName::Pencil} size={16} />
                    { t::EDIT }
                </button>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <article class="post-detail">
            <div class="post-detail__card">
                <div class="post-detail__content">
                    <div class="post-detail__info">
                        <div class="post-detail__header">
                            <h2 class="post-detail__title">{ &view.title }</h2>
                            <button
                                type="button"
                                class={classes!(
                                    "post-detail__like",
                                    view.is_favorited.then_some("post-detail__like--active")
                                )}
                                aria-label={like_label}
                                aria-pressed={view.is_favorited.to_string()}
                                disabled={view.like_disabled}
                                onclick={handlers.on_like}
                            >
                                <Icon name={IconName::Heart} size={18} filled={view.is_favorited} />
                                <span class="post-detail__likes-count">{ view.likes_count }</span>
                            </button>
                        </div>
                        <ul class="post-detail__tags" aria-label={t::ARIA_TAGS}>
                            { for view.tags.iter().map(|tag| html! {
                                <li key={tag.key.clone()} class="post-detail__tag">{ &tag.text }</li>
                            }) }
                        </ul>
                    </div>
                    <div class="post-detail__author">
                        <div class="post-detail__author-info">
                            <div class="post-detail__username">{ &view.author }</div>
                            <div class="post-detail__date">{ &view.date }</div>
                        </div>
                        <Avatar
                            class="post-detail__avatar"
                            src={view.avatar.clone().map(AttrValue::from)}
                            alt={t::AVATAR_ALT}
                        />
                    </div>
                </div>
                <div class="post-detail__description-row">
                    <p class="post-detail__description">{ &view.description }</p>
                    { controls }
                </div>
                if let Some(error) = view.delete_error.clone() {
                    <ErrorBanner message={error} auto_dismiss={false} />
                }
                <MarkdownBody class="post-detail__body" markdown={view.body.clone()} />
            </div>
        </article>
    }
}
