use super::models::{ApiDefinition, FieldInput, FileAttachment, FileInput, RequestOptions};
use crate::core::paths::normalize_separators;
use serde::Serialize;

/// A distinct request definition ready to be replayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueApi {
    /// Id of the first occurrence.
    pub id: String,
    pub method: String,
    pub url: String,
    #[serde(rename = "createdOptions")]
    pub created_options: RequestOptions,
}

/// Distinct definitions across `recent` then `saved`, optionally limited to
/// one category. The first occurrence of a definition wins.
pub fn resolve_unique(
    recent: &[ApiDefinition],
    saved: &[ApiDefinition],
    category: Option<&str>,
) -> Vec<UniqueApi> {
    let category = category.filter(|c| !c.is_empty());

    let mut accepted: Vec<&ApiDefinition> = Vec::new();
    for api in recent.iter().chain(saved.iter()) {
        if category.is_some_and(|c| api.category != c) {
            continue;
        }
        if api.method.is_empty() || api.url.is_empty() {
            continue;
        }
        if accepted.iter().any(|seen| is_same_api(seen, api)) {
            continue;
        }
        accepted.push(api);
    }

    tracing::debug!(
        "resolved {} unique API(s) from {} recent and {} saved",
        accepted.len(),
        recent.len(),
        saved.len()
    );

    accepted.into_iter().map(to_unique).collect()
}

/// Full-content equality. Mappings compare by value regardless of key order;
/// file lists compare after path normalization and sorting by filename.
pub fn is_same_api(a: &ApiDefinition, b: &ApiDefinition) -> bool {
    a.method == b.method
        && a.url == b.url
        && a.data == b.data
        && a.query == b.query
        && a.header == b.header
        && normalized_files(&a.file) == normalized_files(&b.file)
}

fn normalized_files(files: &[FileAttachment]) -> Vec<(String, String)> {
    let mut normalized: Vec<(String, String)> = files
        .iter()
        .map(|f| (f.filename.clone(), normalize_separators(&f.file_path)))
        .collect();
    normalized.sort();
    normalized
}

fn to_unique(api: &ApiDefinition) -> UniqueApi {
    UniqueApi {
        id: api.id.clone(),
        method: api.method.clone(),
        url: api.url.clone(),
        created_options: RequestOptions {
            data: FieldInput::Object(api.data.clone()),
            header: FieldInput::Object(api.header.clone()),
            query: FieldInput::Object(api.query.clone()),
            encoded: api.encoded,
            multipart: api.multipart,
            category: api.category.clone(),
            file: api.file.iter().cloned().map(FileInput::Attachment).collect(),
        },
    }
}
