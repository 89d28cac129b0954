use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{server::AppState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(app): Extension<AppState>,
) -> Html<String> {
    if let Some(error) = params.get("error") {
        warning!("Authorization was denied: {}", error);
        return Html(format!("<h4>Authorization failed: {}</h4>", error));
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>".to_string());
    };

    let mut grant = app.grant.lock().await;
    match grant.as_mut() {
        Some(pending) => {
            if params.get("state") != Some(&pending.state) {
                warning!("Ignoring callback with unexpected state");
                return Html("<h4>State mismatch.</h4>".to_string());
            }
            pending.code = Some(code.clone());
            Html("<h2>Authorization successful.</h2><p>Close browser window.</p>".to_string())
        }
        None => Html(format!(
            "<h2>Authorization code</h2><pre>{}</pre><p>Use it as <code>auth_code</code> in a playlist request.</p>",
            code
        )),
    }
}
