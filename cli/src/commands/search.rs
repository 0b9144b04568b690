use crate::client::search::search;
use crate::client::PostalClient;
use crate::commands::shared::OutputArgs;
use crate::commands::validators;
use crate::core::formatter::get_formatter;
use crate::core::logger::Logger;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(
        help = "Text to look for in URL, method and category",
        value_parser = validators::validate_query
    )]
    pub query: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn execute(
    args: &SearchArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let (recent, saved) = client.load_all().await?;
    let apis: Vec<_> = recent.apis.into_iter().chain(saved.apis).collect();
    if apis.is_empty() {
        Logger::warn("No APIs found in storage.");
        return Ok(());
    }

    let hits = search(&apis, &args.query);
    if hits.is_empty() {
        Logger::warn("No matches found for your query.");
        return Ok(());
    }

    for hit in &hits {
        tracing::debug!("{} scored {:.3}", hit.api.id, hit.score);
    }
    let rows: Vec<_> = hits.iter().map(|hit| hit.api.to_row()).collect();
    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_table(&rows, &format!("Search results ({}):", rows.len()))
    );

    Ok(())
}
