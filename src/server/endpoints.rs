//! Route paths served by the web front-end.

pub(super) const INDEX_ENDPOINT: &str = "/";
pub(super) const CALLBACK_ENDPOINT: &str = "/callback";
pub(super) const LOGOUT_ENDPOINT: &str = "/logout";
pub(super) const PARSE_ENDPOINT: &str = "/parse";
pub(super) const CREATE_ENDPOINT: &str = "/create";
pub(super) const REPO_DETAILS_ENDPOINT: &str = "/repo-details";
