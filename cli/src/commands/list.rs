use crate::client::{ListFilter, PostalClient};
use crate::commands::shared::OutputArgs;
use crate::core::formatter::get_formatter;
use crate::core::logger::Logger;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short = 'c', long = "category", help = "Only APIs in this category")]
    pub category: Option<String>,

    #[arg(short = 'm', long = "method", help = "Only APIs with this HTTP method")]
    pub method: Option<String>,

    #[arg(
        long = "host",
        value_name = "SCHEME://HOST[:PORT]",
        help = "Only APIs on this host"
    )]
    pub host: Option<String>,

    #[arg(short = 'a', long = "all", help = "List every saved API")]
    pub all: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn execute(
    args: &ListArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let saved = client.store().load_saved().await?;
    if saved.apis.is_empty() {
        Logger::warn("No saved APIs found.");
        return Ok(());
    }

    let filter = ListFilter {
        category: args.category.clone(),
        method: args.method.clone(),
        host: args.host.clone(),
    };
    if filter.is_empty() && !args.all {
        Logger::warn("No filter provided. Use --all to list everything.");
        return Ok(());
    }

    let rows: Vec<_> = filter
        .apply(&saved.apis)
        .into_iter()
        .map(|api| api.to_row())
        .collect();
    if rows.is_empty() {
        Logger::warn("No matching saved APIs found.");
        return Ok(());
    }

    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_table(&rows, &format!("Saved APIs ({}):", rows.len()))
    );

    Ok(())
}
