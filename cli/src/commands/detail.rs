use crate::client::models::{FileAttachment, FileInput};
use crate::client::unique::UniqueApi;
use crate::client::{ApiDefinition, PostalClient};
use crate::commands::shared::{OutputArgs, SelectorArgs};
use crate::core::formatter::get_formatter;
use crate::core::json::Fields;
use crate::core::logger::Logger;
use clap::Args;
use serde::Serialize;

const SEPARATOR: &str =
    "------------------------------------------------------------------------";

#[derive(Debug, Args)]
pub struct DetailArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Serialize)]
pub struct ApiDetailView {
    pub id: String,
    pub method: String,
    pub url: String,
    pub query: Fields,
    pub header: Fields,
    pub data: Fields,
    pub file: Vec<FileAttachment>,
}

impl From<&ApiDefinition> for ApiDetailView {
    fn from(api: &ApiDefinition) -> Self {
        Self {
            id: api.id.clone(),
            method: api.method.to_uppercase(),
            url: api.url.clone(),
            query: api.query.clone(),
            header: api.header.clone(),
            data: api.data.clone(),
            file: api.file.clone(),
        }
    }
}

impl From<&UniqueApi> for ApiDetailView {
    fn from(api: &UniqueApi) -> Self {
        let options = &api.created_options;
        Self {
            id: api.id.clone(),
            method: api.method.to_uppercase(),
            url: api.url.clone(),
            query: options.query.to_fields().unwrap_or_default(),
            header: options.header.to_fields().unwrap_or_default(),
            data: options.data.to_fields().unwrap_or_default(),
            file: options
                .file
                .iter()
                .filter_map(|f| match f {
                    FileInput::Attachment(a) => Some(a.clone()),
                    FileInput::Spec(_) => None,
                })
                .collect(),
        }
    }
}

pub async fn execute(
    args: &DetailArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = get_formatter(&args.output.output);

    let (views, title) = if let Some(category) = &args.selector.category {
        let apis = client.unique_in_category(category).await?;
        if apis.is_empty() {
            Logger::warn(&format!("No APIs found for category: {category}"));
            return Ok(());
        }
        let views: Vec<ApiDetailView> = apis.iter().map(ApiDetailView::from).collect();
        let title = format!(
            "Displaying details of {} API(s) in category: {category}",
            views.len()
        );
        (views, title)
    } else if let Some(id) = &args.selector.id {
        let Some((api, _)) = client.find(id).await? else {
            Logger::warn(&format!("No API found with id: {id}"));
            return Ok(());
        };
        (
            vec![ApiDetailView::from(&api)],
            format!("Displaying details of API with id: {id}"),
        )
    } else {
        return Ok(());
    };

    print!(
        "{}",
        formatter.format(views.as_slice(), |views| format!(
            "\n{title}\n\n{}",
            render_details(views)
        ))
    );

    Ok(())
}

fn render_details(views: &[ApiDetailView]) -> String {
    let mut out = String::new();
    for (i, view) in views.iter().enumerate() {
        out.push_str(&format!("API {}/{}\n", i + 1, views.len()));
        out.push_str(&format!("   ID       : {}\n", view.id));
        out.push_str(&format!("   Method   : {}\n", view.method));
        out.push_str(&format!("   URL      : {}\n", view.url));

        for (label, fields) in [
            ("Query Params", &view.query),
            ("Headers", &view.header),
            ("Data", &view.data),
        ] {
            if !fields.is_empty() {
                let pretty = serde_json::to_string_pretty(fields).unwrap_or_default();
                out.push_str(&format!("   {label}: {pretty}\n"));
            }
        }

        if !view.file.is_empty() {
            out.push_str("   Files:\n");
            for (n, file) in view.file.iter().enumerate() {
                out.push_str(&format!("      • File {}\n", n + 1));
                out.push_str(&format!("        - Filename : {}\n", file.filename));
                out.push_str(&format!("        - Path     : {}\n", file.file_path));
            }
        }

        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view() -> ApiDetailView {
        ApiDetailView {
            id: "1a2b".into(),
            method: "POST".into(),
            url: "https://x.test/upload".into(),
            query: Fields::new(),
            header: json!({"X-Token": "abc"}).as_object().cloned().unwrap(),
            data: Fields::new(),
            file: vec![FileAttachment {
                filename: "doc".into(),
                file_path: "/tmp/doc.txt".into(),
            }],
        }
    }

    #[test]
    fn test_render_details_skips_empty_sections() {
        let out = render_details(&[view()]);
        assert!(out.starts_with("API 1/1\n"));
        assert!(out.contains("   URL      : https://x.test/upload\n"));
        assert!(out.contains("   Headers: {\n  \"X-Token\": \"abc\"\n}\n"));
        assert!(!out.contains("Query Params"));
        assert!(!out.contains("Data:"));
        assert!(out.contains("        - Path     : /tmp/doc.txt\n"));
        assert!(out.contains(SEPARATOR));
    }

    #[test]
    fn test_numbering() {
        let out = render_details(&[view(), view()]);
        assert!(out.contains("API 1/2\n"));
        assert!(out.contains("API 2/2\n"));
    }
}
