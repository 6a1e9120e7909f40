//! Web-search link construction.
//!
//! After answering, the quiz view offers a "look it up" link: the
//! question text URL-encoded into a fixed search-engine query.

use url::Url;

const SEARCH_BASE: &str = "https://www.google.com/search";

/// Build a web search URL for a question's text.
pub fn search_url(question_text: &str) -> Url {
    Url::parse_with_params(SEARCH_BASE, &[("q", question_text)])
        .expect("search base URL is valid")
}
