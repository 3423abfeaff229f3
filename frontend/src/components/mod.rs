// Reusable components live here.

pub mod avatar;
pub mod confirm_popover;
pub mod error_banner;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod markdown_body;
pub mod require_auth;
