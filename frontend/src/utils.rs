use pulldown_cmark::{html, Options, Parser};
use wasm_bindgen::JsValue;

/// Convert an article body from Markdown into sanitized HTML with common
/// extensions enabled.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    // Article bodies are user-authored.
    ammonia::clean(&html_output)
}

/// Report a failure to the browser console.
pub fn log_error(context: &str, detail: impl std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {detail}")));
}

/// Report a non-fatal oddity to the browser console.
pub fn log_warn(context: &str, detail: impl std::fmt::Display) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("{context}: {detail}")));
}
