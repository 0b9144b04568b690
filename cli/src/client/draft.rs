use super::http_method::HttpMethod;
use super::models::{ApiDefinition, FileAttachment, FileInput, RequestOptions};
use crate::core::error::ApiError;
use crate::core::json::{
    Fields, CONTENT_TYPE_HEADER, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
use crate::core::paths::{absolutize, clean_path};
use chrono::Utc;
use serde_json::Value;

/// Validated input for a new request definition.
///
/// `new` checks what can be checked without touching the disk; `build`
/// parses the raw option strings and resolves file attachments.
#[derive(Debug, Clone)]
pub struct ApiDraft {
    method: HttpMethod,
    url: String,
    options: RequestOptions,
}

impl ApiDraft {
    pub fn new(method: &str, url: &str, options: RequestOptions) -> Result<Self, ApiError> {
        if method.trim().is_empty() || url.trim().is_empty() {
            return Err(ApiError::Validation(
                "HTTP method and URL are required.".to_string(),
            ));
        }

        let parsed_method = HttpMethod::parse(method).ok_or_else(|| {
            ApiError::Validation(format!("Unsupported HTTP method: {}", method.trim()))
        })?;

        let url = url.trim();
        reqwest::Url::parse(url)
            .map_err(|e| ApiError::Validation(format!("Invalid URL '{url}': {e}")))?;

        if options.encoded && options.multipart {
            return Err(ApiError::Validation(
                "Options encoded and multipart cannot be used together.".to_string(),
            ));
        }

        Ok(Self {
            method: parsed_method,
            url: url.to_string(),
            options,
        })
    }

    pub fn build(&self, id: String) -> Result<ApiDefinition, ApiError> {
        let file = self.resolve_files()?;

        let data = self.options.data.to_fields().map_err(|e| {
            ApiError::InvalidInput(format!("Invalid JSON provided for --data (-d): {e}"))
        })?;
        let query = self.options.query.to_fields().map_err(|e| {
            ApiError::InvalidInput(format!("Invalid JSON provided for --query (-q): {e}"))
        })?;
        let header = self.build_headers()?;

        Ok(ApiDefinition {
            id,
            method: self.method.as_lower(),
            url: self.url.clone(),
            data,
            header,
            query,
            category: self.options.category.clone(),
            encoded: self.options.encoded,
            file,
            multipart: self.options.multipart,
            created_at: Utc::now(),
            updated_at: None,
            created_options: self.options.clone(),
        })
    }

    /// Default `Content-Type` for the encoding mode, then the user's headers.
    /// Multipart gets no default; the transport sets the boundary.
    fn build_headers(&self) -> Result<Fields, ApiError> {
        let user = self.options.header.to_fields().map_err(|e| {
            ApiError::InvalidInput(format!("Invalid JSON provided for --header (-H): {e}"))
        })?;

        let has_content_type = user
            .keys()
            .any(|k| k.eq_ignore_ascii_case(CONTENT_TYPE_HEADER));

        let mut header = Fields::new();
        if !has_content_type {
            if self.options.encoded {
                header.insert(
                    CONTENT_TYPE_HEADER.to_string(),
                    Value::String(FORM_CONTENT_TYPE.to_string()),
                );
            } else if !self.options.multipart {
                header.insert(
                    CONTENT_TYPE_HEADER.to_string(),
                    Value::String(JSON_CONTENT_TYPE.to_string()),
                );
            }
        }
        header.extend(user);

        Ok(header)
    }

    fn resolve_files(&self) -> Result<Vec<FileAttachment>, ApiError> {
        if self.options.file.is_empty() {
            return Ok(Vec::new());
        }
        if !self.options.multipart {
            return Err(ApiError::Validation(
                "Files can only be attached to multipart requests; add --multipart (-m)."
                    .to_string(),
            ));
        }
        if !self.method.accepts_files() {
            return Err(ApiError::Validation(
                "Files can only be sent on POST, PUT, PATCH methods".to_string(),
            ));
        }

        let mut attachments = Vec::with_capacity(self.options.file.len());
        for input in &self.options.file {
            let (filename, raw_path) = match input {
                FileInput::Spec(spec) => parse_file_spec(spec)?,
                FileInput::Attachment(a) => (a.filename.clone(), a.file_path.clone()),
            };

            if raw_path.starts_with("http://") || raw_path.starts_with("https://") {
                return Err(ApiError::Validation(
                    "Remote URLs are not allowed for files.".to_string(),
                ));
            }

            let path = absolutize(&raw_path)?;
            if !path.is_file() {
                return Err(ApiError::Validation(format!(
                    "File does not exist: {}",
                    clean_path(&path)
                )));
            }

            attachments.push(FileAttachment {
                filename,
                file_path: clean_path(&path),
            });
        }

        Ok(attachments)
    }
}

/// Split a `--file` value on its first colon into field name and path.
pub fn parse_file_spec(spec: &str) -> Result<(String, String), ApiError> {
    match spec.split_once(':') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), path.trim().to_string()))
        }
        _ => Err(ApiError::Validation(format!(
            "Invalid file format: {spec} (expected <filename>:<path>)"
        ))),
    }
}
