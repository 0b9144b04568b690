use crate::client::models::{FieldInput, FileInput, RequestOptions};
use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

/// Everything `test` and `save` accept to describe a request.
#[derive(Debug, Args)]
pub struct RequestInputArgs {
    #[arg(
        help = "HTTP method (GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS)",
        value_parser = validators::validate_method
    )]
    pub method: String,

    #[arg(help = "Request URL")]
    pub url: String,

    #[arg(
        short = 'd',
        long = "data",
        value_name = "JSON",
        help = "Request body as JSON or relaxed {key: value}"
    )]
    pub data: Option<String>,

    #[arg(
        short = 'H',
        long = "header",
        value_name = "JSON",
        help = "Request headers as JSON or relaxed {key: value}"
    )]
    pub header: Option<String>,

    #[arg(
        short = 'q',
        long = "query",
        value_name = "JSON",
        help = "Query parameters as JSON or relaxed {key: value}"
    )]
    pub query: Option<String>,

    #[arg(short = 'e', long = "encoded", help = "Send data form-urlencoded")]
    pub encoded: bool,

    #[arg(short = 'm', long = "multipart", help = "Send data as multipart form")]
    pub multipart: bool,

    #[arg(short = 'c', long = "category", help = "Category to file the request under")]
    pub category: Option<String>,

    #[arg(
        short = 'f',
        long = "file",
        value_name = "NAME:PATH",
        help = "Attach a file to a multipart request (repeatable)",
        value_parser = validators::validate_file_spec
    )]
    pub file: Vec<String>,
}

impl RequestInputArgs {
    pub fn to_options(&self) -> RequestOptions {
        RequestOptions {
            data: FieldInput::from(self.data.clone()),
            header: FieldInput::from(self.header.clone()),
            query: FieldInput::from(self.query.clone()),
            encoded: self.encoded,
            multipart: self.multipart,
            category: self.category.clone().unwrap_or_default(),
            file: self.file.iter().cloned().map(FileInput::Spec).collect(),
        }
    }
}

/// Exactly one of `--id` or `--category`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SelectorArgs {
    #[arg(short = 'i', long = "id", help = "API id")]
    pub id: Option<String>,

    #[arg(short = 'c', long = "category", help = "API category")]
    pub category: Option<String>,
}
