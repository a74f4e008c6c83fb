//! One-time flash messages carried across a redirect in a cookie

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Messages left by the previous response, if any.
///
/// Rendering a page through [`Flash::page`] consumes them.
#[derive(Debug, Default)]
pub struct Flash {
    messages: Vec<FlashMessage>,
    cookie_present: bool,
}

impl Flash {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match read_cookie(headers) {
            Some(value) => Self {
                messages: decode(value).unwrap_or_default(),
                cookie_present: true,
            },
            None => Self::default(),
        }
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Render an HTML page and expire the flash cookie once it was shown
    pub fn page(self, html: String) -> Response {
        if self.cookie_present {
            let expired = format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE);
            ([(header::SET_COOKIE, expired)], Html(html)).into_response()
        } else {
            Html(html).into_response()
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash::from_headers(&parts.headers))
    }
}

/// Redirect to `to`, leaving `message` for the next rendered page
pub fn redirect_with(to: &str, message: FlashMessage) -> Response {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode(&[message])
    );
    ([(header::SET_COOKIE, cookie)], Redirect::to(to)).into_response()
}

fn encode(messages: &[FlashMessage]) -> String {
    // Serializing plain strings and enums cannot fail
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

fn decode(value: &str) -> Option<Vec<FlashMessage>> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn read_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == FLASH_COOKIE).then_some(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn cookie_value(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        let (pair, _) = set_cookie.split_once(';').unwrap();
        pair.to_string()
    }

    #[test]
    fn test_redirect_carries_message() {
        let response = redirect_with("/usuarios", FlashMessage::success("Hecho"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/usuarios");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}", cookie_value(&response))).unwrap(),
        );

        let flash = Flash::from_headers(&headers);
        assert_eq!(flash.messages(), &[FlashMessage::success("Hecho")]);
    }

    #[test]
    fn test_page_expires_cookie_only_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("flash=not-base64!"));

        let flash = Flash::from_headers(&headers);
        assert!(flash.messages().is_empty());

        let response = flash.page("<p>hola</p>".to_string());
        let set_cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(set_cookie.to_str().unwrap().contains("Max-Age=0"));

        let response = Flash::default().page("<p>hola</p>".to_string());
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn test_non_ascii_text_survives() {
        let message = FlashMessage::error("Error: El DNI ya está en uso.");
        let decoded = decode(&encode(&[message.clone()])).unwrap();
        assert_eq!(decoded, vec![message]);
    }
}
