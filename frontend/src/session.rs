use std::rc::Rc;

use post_viewer_shared::{SessionSource, SessionUser};
use web_sys::window;
use yew::prelude::*;

use crate::{api::use_api, config::TOKEN_STORAGE_KEY, utils::log_warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStatus {
    /// A persisted token is being exchanged for the user.
    Restoring,
    Anonymous,
    Authenticated,
}

/// The only global state of the app: who is logged in, and with which token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl SessionState {
    /// Initial state from `localStorage`.
    pub fn from_storage() -> Self {
        let token = read_token();
        Self {
            status: if token.is_some() { SessionStatus::Restoring } else { SessionStatus::Anonymous },
            user: None,
            token,
        }
    }

    pub fn is_restoring(&self) -> bool {
        self.status == SessionStatus::Restoring
    }
}

impl SessionSource for SessionState {
    fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    fn auth_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

pub enum SessionAction {
    Restored(SessionUser),
    /// The token could not be exchanged; it stays readable for API calls.
    RestoreFailed,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Restored(user) => {
                next.user = Some(user);
                next.status = SessionStatus::Authenticated;
            },
            SessionAction::RestoreFailed => {
                next.user = None;
                next.status = SessionStatus::Anonymous;
            },
        }
        Rc::new(next)
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

fn read_token() -> Option<String> {
    window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Snapshot of the session for the current render.
#[hook]
pub fn use_session() -> SessionState {
    use_context::<SessionContext>()
        .map(|ctx| (*ctx).clone())
        .unwrap_or_else(SessionState::from_storage)
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::from_storage);
    let api = use_api();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(token) = state.token.clone() {
                let dispatcher = state.dispatcher();
                wasm_bindgen_futures::spawn_local(async move {
                    match api.0.current_user(&token).await {
                        Ok(user) => dispatcher.dispatch(SessionAction::Restored(user)),
                        Err(e) => {
                            log_warn("Failed to restore session", e);
                            dispatcher.dispatch(SessionAction::RestoreFailed);
                        },
                    }
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
