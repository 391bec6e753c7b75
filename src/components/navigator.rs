//! Leaves the app for mail, dialer and map targets through the webview.

use dioxus::prelude::*;
use usercard_core::{ContactAction, ContactKind, Navigator};

/// Opens contact targets with `window.open`; the desktop shell hands
/// non-app URLs to the system's default handler.
pub struct WebviewNavigator;

impl WebviewNavigator {
    /// Script that opens `uri`; maps get a fresh window, the rest reuse the current one.
    pub fn script(action: &ContactAction, uri: &str) -> String {
        let target = match action.kind() {
            ContactKind::Map => "_blank",
            ContactKind::Email | ContactKind::Call => "_self",
        };
        // serde_json gives a correctly escaped JS string literal
        let literal = serde_json::Value::String(uri.to_string()).to_string();
        format!("window.open({}, \"{}\");", literal, target)
    }
}

impl Navigator for WebviewNavigator {
    fn navigate(&self, action: &ContactAction) {
        match action.uri() {
            Ok(uri) => {
                tracing::debug!(%uri, "Opening contact target");
                let _ = document::eval(&Self::script(action, uri.as_str()));
            }
            Err(err) => {
                tracing::warn!(?action, "Could not build contact target: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets() {
        let email = ContactAction::Email("a@b.com".to_string());
        assert_eq!(
            WebviewNavigator::script(&email, "mailto:a@b.com"),
            "window.open(\"mailto:a@b.com\", \"_self\");"
        );

        let map = ContactAction::Map("x".to_string());
        assert!(WebviewNavigator::script(&map, "https://example.com/x").ends_with("\"_blank\");"));
    }

    #[test]
    fn test_script_escapes_quotes() {
        let call = ContactAction::Call("1".to_string());
        let script = WebviewNavigator::script(&call, "tel:\"1\"");
        assert!(script.contains("\\\"1\\\""));
    }
}
