use crate::core::formatter::ApiRow;
use crate::core::json::{parse_lenient, Fields, ParseError};
use crate::core::query::{encode_fields, encode_query_str};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `--data`, `--header` or `--query` value: the raw string the user typed,
/// or a mapping when the options were rebuilt from a stored definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Object(Fields),
    Text(String),
}

impl Default for FieldInput {
    fn default() -> Self {
        FieldInput::Text(String::new())
    }
}

impl From<Fields> for FieldInput {
    fn from(fields: Fields) -> Self {
        FieldInput::Object(fields)
    }
}

impl From<Option<String>> for FieldInput {
    fn from(text: Option<String>) -> Self {
        FieldInput::Text(text.unwrap_or_default())
    }
}

impl FieldInput {
    pub fn to_fields(&self) -> Result<Fields, ParseError> {
        match self {
            FieldInput::Object(fields) => Ok(fields.clone()),
            FieldInput::Text(text) => parse_lenient(text),
        }
    }

    pub fn to_query_string(&self) -> String {
        match self {
            FieldInput::Object(fields) => encode_fields(fields),
            FieldInput::Text(text) => encode_query_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub filename: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// A `--file` value as typed (`name:path`) or as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileInput {
    Attachment(FileAttachment),
    Spec(String),
}

/// Snapshot of the options a definition was created from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub data: FieldInput,
    pub header: FieldInput,
    pub query: FieldInput,
    pub encoded: bool,
    pub multipart: bool,
    pub category: String,
    pub file: Vec<FileInput>,
}

/// A stored request definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    pub id: String,
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub data: Fields,
    #[serde(default)]
    pub header: Fields,
    #[serde(default)]
    pub query: Fields,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub encoded: bool,
    #[serde(default)]
    pub file: Vec<FileAttachment>,
    #[serde(default)]
    pub multipart: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_options: RequestOptions,
}

impl ApiDefinition {
    /// Options that reproduce this definition when fed back through the
    /// `test` flow.
    pub fn replay_options(&self) -> RequestOptions {
        RequestOptions {
            data: FieldInput::Object(self.data.clone()),
            header: FieldInput::Object(self.header.clone()),
            query: FieldInput::Object(self.query.clone()),
            encoded: self.encoded,
            multipart: self.multipart,
            category: self.category.clone(),
            file: self
                .file
                .iter()
                .cloned()
                .map(FileInput::Attachment)
                .collect(),
        }
    }

    pub fn to_row(&self) -> ApiRow {
        ApiRow {
            id: self.id.clone(),
            method: self.method.clone(),
            url: self.url.clone(),
            category: self.category.clone(),
        }
    }
}

/// One persisted file: the saved or the recent list, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub apis: Vec<ApiDefinition>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            apis: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&ApiDefinition> {
        self.apis.iter().find(|api| api.id == id)
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ApiDefinition> {
        self.apis.iter().filter(move |api| api.category == category)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_input_deserializes_both_shapes() {
        let text: FieldInput = serde_json::from_value(json!("{a:1}")).unwrap();
        assert_eq!(text, FieldInput::Text("{a:1}".into()));

        let object: FieldInput = serde_json::from_value(json!({"a": 1})).unwrap();
        assert!(matches!(object, FieldInput::Object(_)));
    }

    #[test]
    fn test_file_input_shapes() {
        let files: Vec<FileInput> = serde_json::from_value(json!([
            "avatar:./me.png",
            {"filename": "doc", "filePath": "/tmp/doc.pdf"}
        ]))
        .unwrap();
        assert_eq!(files[0], FileInput::Spec("avatar:./me.png".into()));
        assert_eq!(
            files[1],
            FileInput::Attachment(FileAttachment {
                filename: "doc".into(),
                file_path: "/tmp/doc.pdf".into()
            })
        );
    }

    #[test]
    fn test_definition_json_shape() {
        let api = ApiDefinition {
            id: "1a2b".into(),
            method: "get".into(),
            url: "https://api.example.com/users".into(),
            data: Fields::new(),
            header: json!({"Content-Type": "application/json"})
                .as_object()
                .cloned()
                .unwrap(),
            query: Fields::new(),
            category: String::new(),
            encoded: false,
            file: vec![],
            multipart: false,
            created_at: Utc::now(),
            updated_at: None,
            created_options: RequestOptions::default(),
        };

        let value = serde_json::to_value(&api).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "method",
                "url",
                "data",
                "header",
                "query",
                "category",
                "encoded",
                "file",
                "multipart",
                "createdAt",
                "updatedAt",
                "createdOptions"
            ]
        );
        assert!(value["updatedAt"].is_null());
        assert_eq!(value["createdOptions"]["data"], json!(""));
    }

    #[test]
    fn test_collection_tolerates_missing_fields() {
        let collection: Collection = serde_json::from_value(json!({})).unwrap();
        assert!(collection.apis.is_empty());
    }

    #[test]
    fn test_replay_options_carry_stored_fields() {
        let api: ApiDefinition = serde_json::from_value(json!({
            "id": "beef",
            "method": "post",
            "url": "https://x.test/upload",
            "data": {"name": "John"},
            "header": {},
            "query": {"v": 2},
            "category": "uploads",
            "encoded": false,
            "file": [{"filename": "f", "filePath": "/tmp/f.txt"}],
            "multipart": true,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": null,
            "createdOptions": {}
        }))
        .unwrap();

        let options = api.replay_options();
        assert_eq!(options.category, "uploads");
        assert!(options.multipart);
        assert_eq!(options.query.to_query_string(), "v=2");
        assert_eq!(options.file.len(), 1);
    }
}
