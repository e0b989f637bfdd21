//! Share links for published forms

/// Public URL of the fill-in page for `form_id`
pub fn form_url(base_url: &str, form_id: &str) -> String {
    format!("{}/form/{}", base_url.trim_end_matches('/'), form_id)
}

/// HTML snippet that embeds the form on another page
pub fn embed_code(form_url: &str) -> String {
    format!(r#"<iframe src="{form_url}" width="100%" height="600" frameborder="0"></iframe>"#)
}

/// Plain-text invitation to fill out the form
pub fn invitation(form_url: &str) -> String {
    format!("Hi,\n\nPlease fill out this form: {form_url}\n\nThanks!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_url() {
        assert_eq!(
            form_url("https://forms.example.com", "abc"),
            "https://forms.example.com/form/abc"
        );
    }

    #[test]
    fn test_form_url_trims_trailing_slash() {
        assert_eq!(form_url("http://localhost:3000/", "x"), "http://localhost:3000/form/x");
    }

    #[test]
    fn test_embed_code() {
        assert_eq!(
            embed_code("http://h/form/x"),
            r#"<iframe src="http://h/form/x" width="100%" height="600" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn test_invitation_mentions_url() {
        assert!(invitation("http://h/form/x").contains("Please fill out this form: http://h/form/x"));
    }
}
