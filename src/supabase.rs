//! Thin client for the hosted backend-as-a-service REST surface.
//!
//! One operation is used: select all columns from a named table. Connection
//! values are baked in at compile time; a wasm bundle has no runtime
//! environment to read them from.

use crate::components::imports::ResponseExtend;

use gloo_net::http::Request;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

const DEFAULT_PROJECT_URL: &str = "http://localhost:54321";

fn project_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or(DEFAULT_PROJECT_URL)
}

fn anon_key() -> SecretString {
    SecretString::new(option_env!("SUPABASE_ANON_KEY").unwrap_or_default().to_owned())
}

pub fn table_url(project_url: &str, table: &str) -> String {
    format!(
        "{}/rest/v1/{}?select=*",
        project_url.trim_end_matches('/'),
        table
    )
}

#[derive(thiserror::Error, Debug)]
pub enum SelectError {
    #[error("Request error")]
    Request(#[source] gloo_net::Error),

    #[error("Api error: status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Parse error")]
    Parse(#[source] gloo_net::Error),
}

pub async fn select_all<T>(table: &str) -> Result<Vec<T>, SelectError>
where
    T: for<'de> Deserialize<'de>,
{
    let key = anon_key();

    let response = Request::get(&table_url(project_url(), table))
        .header("apikey", key.expose_secret())
        .header("Authorization", &format!("Bearer {}", key.expose_secret()))
        .send()
        .await
        .map_err(SelectError::Request)?;

    response.log_status();

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SelectError::Api {
            status,
            message: api_error_message(&body),
        });
    }

    response.json::<Vec<T>>().await.map_err(SelectError::Parse)
}

// error bodies arrive as `{"message": "..."}`; fall back to the raw body
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => error.message,
        Err(_) => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_targets_the_rest_surface() {
        assert_eq!(
            table_url("https://proj.supabase.co", "users"),
            "https://proj.supabase.co/rest/v1/users?select=*"
        );
    }

    #[test]
    fn table_url_tolerates_trailing_slash() {
        assert_eq!(
            table_url("http://localhost:54321/", "users"),
            "http://localhost:54321/rest/v1/users?select=*"
        );
    }

    #[test]
    fn api_error_message_prefers_the_message_field() {
        assert_eq!(
            api_error_message(r#"{"message":"network unreachable"}"#),
            "network unreachable"
        );
        assert_eq!(api_error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn select_error_display_is_human_readable() {
        let error = SelectError::Api {
            status: 503,
            message: "network unreachable".into(),
        };

        assert_eq!(
            error.to_string(),
            "Api error: status 503: network unreachable"
        );
    }
}
