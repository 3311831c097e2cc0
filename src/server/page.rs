//! Server-rendered index page.

use minijinja::{Environment, context};

use crate::gateway::Session;

const INDEX_TEMPLATE_NAME: &str = "index.html";

/// Template environment with the index page loaded.
pub(super) fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, include_str!("templates/index.html"))?;
    Ok(env)
}

/// Render the page for the current session. Values are HTML-escaped.
pub(super) fn render_index_page(
    templates: &Environment<'static>,
    session: &Session,
    authorize_url: &str,
) -> Result<String, minijinja::Error> {
    templates.get_template(INDEX_TEMPLATE_NAME)?.render(context! {
        logged_in => session.is_active(),
        owners => &session.owners,
        repos_by_owner => &session.repos_by_owner,
        members => &session.members,
        authorize_url => authorize_url,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize?client_id=x&scope=repo";

    #[test]
    fn test_logged_out_page_links_to_authorize() {
        let page = render_index_page(&templates().unwrap(), &Session::default(), AUTHORIZE_URL)
            .unwrap();

        assert!(page.contains("client_id=x&amp;scope=repo"));
        assert!(!page.contains("/logout"));
    }

    #[test]
    fn test_logged_in_page_lists_repositories() {
        let session = Session::logged_in(
            "t".to_string(),
            BTreeMap::from([(
                "acme".to_string(),
                vec!["acme/widgets".to_string(), "acme/gadgets".to_string()],
            )]),
        );

        let page = render_index_page(&templates().unwrap(), &session, AUTHORIZE_URL).unwrap();

        assert!(page.contains("/logout"));
        assert!(page.contains(r#"<optgroup label="acme">"#));
        assert!(page.contains("gadgets"));
        assert!(!page.contains("login/oauth/authorize"));
    }

    #[test]
    fn test_values_are_escaped() {
        let session = Session::logged_in(
            "t".to_string(),
            BTreeMap::from([("<b>".to_string(), vec!["<b>/x".to_string()])]),
        );

        let page = render_index_page(&templates().unwrap(), &session, AUTHORIZE_URL).unwrap();

        assert!(page.contains("&lt;b&gt;"));
        assert!(!page.contains("<b>/x"));
    }
}
