use super::http_method::HttpMethod;
use super::models::ApiDefinition;
use crate::core::error::ApiError;
use crate::core::json::{value_to_plain, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};
use crate::core::logger::Logger;
use crate::core::query::encode_fields;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, SET_COOKIE, USER_AGENT};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;

lazy_static! {
    static ref HTML_TAG_REGEX: Regex = Regex::new(r"</?[^>]+(>|$)").unwrap();
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    /// `name=value` of the first `Set-Cookie` header.
    pub cookie: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Build a transport-ready request from a stored definition.
pub async fn build_request(
    client: &reqwest::Client,
    api: &ApiDefinition,
) -> Result<reqwest::RequestBuilder, ApiError> {
    let method = HttpMethod::parse(&api.method).ok_or_else(|| {
        ApiError::Network(format!("Request setup error: unsupported method '{}'", api.method))
    })?;

    let mut url = reqwest::Url::parse(&api.url).map_err(|e| {
        ApiError::Network(format!("Request setup error: invalid URL '{}': {e}", api.url))
    })?;
    if !api.query.is_empty() {
        let encoded = encode_fields(&api.query);
        let merged = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
            _ => encoded,
        };
        url.set_query(Some(&merged));
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&crate::core::version::user_agent())
            .map_err(|e| ApiError::Network(format!("Request setup error: {e}")))?,
    );
    for (key, value) in &api.header {
        if api.multipart && key.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
            tracing::debug!("dropping manual {key} for multipart request");
            continue;
        }
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ApiError::Network(format!("Request setup error: invalid header name '{key}': {e}"))
        })?;
        let value = HeaderValue::from_str(&value_to_plain(value)).map_err(|e| {
            ApiError::Network(format!("Request setup error: invalid value for header '{key}': {e}"))
        })?;
        tracing::debug!("adding header: {key}: {value:?}");
        headers.insert(name, value);
    }
    let has_content_type = headers.contains_key(CONTENT_TYPE);

    tracing::debug!("{} {}", method.as_str(), url);
    let builder = client.request(method.to_reqwest_method(), url);

    let builder = if api.encoded {
        if !has_content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
        let builder = builder.headers(headers);
        if api.data.is_empty() {
            builder
        } else {
            builder.body(encode_fields(&api.data))
        }
    } else if api.multipart {
        let form = build_form(api).await?;
        builder.headers(headers).multipart(form)
    } else if !api.data.is_empty() {
        if !has_content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        builder.headers(headers).json(&api.data)
    } else {
        builder.headers(headers)
    };

    Ok(builder)
}

/// Files first, each under its field name; then every `data` key as text.
/// A file that has disappeared since it was saved is skipped.
async fn build_form(api: &ApiDefinition) -> Result<Form, ApiError> {
    let mut form = Form::new();

    for attachment in &api.file {
        let path = Path::new(&attachment.file_path);
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                Logger::warn(&format!("File not found: {}", attachment.file_path));
                tracing::debug!("skipping attachment: {e}");
                continue;
            }
        };
        let length = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| attachment.filename.clone());

        form = form.part(
            attachment.filename.clone(),
            Part::stream_with_length(file, length).file_name(file_name),
        );
    }

    for (key, value) in &api.data {
        form = form.text(key.clone(), value_to_plain(value));
    }

    Ok(form)
}

/// Send one definition and print the outcome. Error statuses are printed and
/// returned like any other response; only transport failures are errors.
pub async fn execute(api: &ApiDefinition) -> Result<HttpResponse, ApiError> {
    let client = reqwest::Client::new();
    let response = build_request(&client, api).await?.send().await?;

    let status = response.status();
    let cookie = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .next()
        .and_then(|v| v.to_str().ok())
        .map(first_cookie_pair);
    let body = response.text().await?;

    let result = HttpResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        cookie,
        body,
    };
    render_response(&result);

    Ok(result)
}

fn render_response(response: &HttpResponse) {
    if response.is_error() {
        Logger::error(&format!(
            "Response error: {} {}",
            response.status, response.reason
        ));
        Logger::error(&format!("{}\n", error_body(&response.body)));
        return;
    }

    Logger::response(&format!("Status: {} {}", response.status, response.reason));
    Logger::info("Response:");
    Logger::success(&format!("{}\n", pretty_body(&response.body)));

    if let Some(cookie) = &response.cookie {
        Logger::info("Cookie received:");
        Logger::info(&format!("{cookie}\n"));
    }
}

/// Pretty JSON for structured bodies, the raw text otherwise.
pub fn pretty_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
        }
        _ => body.to_string(),
    }
}

/// Error bodies: pretty JSON, or text with HTML tags removed.
pub fn error_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
        }
        _ => HTML_TAG_REGEX.replace_all(body, "").trim().to_string(),
    }
}

fn first_cookie_pair(raw: &str) -> String {
    raw.split(';').next().unwrap_or_default().trim().to_string()
}
