//! Target-independent core of the post viewer.
//!
//! Everything here compiles for both `wasm32` and native targets: the data
//! model of the article API, the [`api::ArticleApi`] seam, and the state
//! machine behind the post-detail page. The Yew frontend only wires these to
//! the DOM.

pub mod api;
pub mod avatar;
pub mod delete;
pub mod detail;
pub mod error;
pub mod favorite;
pub mod format;
pub mod guard;
pub mod models;
pub mod query;
pub mod routes;

#[cfg(test)]
mod testing;

pub use api::{ArticleApi, SessionSource, StaticSession};
pub use error::ApiError;
pub use models::{Article, ArticleEnvelope, Profile, SessionUser, UserEnvelope};
