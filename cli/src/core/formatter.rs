use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A single line of `list`, `recent` and `search` output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiRow {
    pub id: String,
    pub method: String,
    pub url: String,
    pub category: String,
}

pub const TABLE_HEADER: &str = "- ID  Method  URL  Category";

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    /// `text` renders the model in text mode; JSON mode pretty-prints it.
    pub fn format<T, F>(&self, model: &T, text: F) -> String
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self.engine {
            OutputFormat::Text => text(model),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(model).unwrap_or_default();
                out.push('\n');
                out
            }
        }
    }

    /// Title, header line and one `•` line per row in text mode; a JSON
    /// array otherwise.
    pub fn format_table(&self, rows: &[ApiRow], title: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                let mut out = String::new();
                if !title.is_empty() {
                    out.push_str(&format!("\n{title}\n\n"));
                }
                out.push_str(TABLE_HEADER);
                out.push('\n');
                for row in rows {
                    out.push_str(&format!(
                        "• {}  {}  {}  {}\n",
                        row.id,
                        row.method.to_uppercase(),
                        row.url,
                        row.category
                    ));
                }
                out
            }
            OutputFormat::Json => {
                let mut out =
                    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
                out.push('\n');
                out
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
