pub mod article_detail;
pub mod article_edit;
pub mod articles;
pub mod not_found;
pub mod sign_in;
