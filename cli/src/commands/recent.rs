use crate::client::PostalClient;
use crate::commands::shared::OutputArgs;
use crate::core::formatter::get_formatter;
use crate::core::logger::Logger;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecentArgs {
    #[arg(short = 'c', long = "category", help = "Only recent APIs in this category")]
    pub category: Option<String>,

    #[arg(short = 'a', long = "all", help = "List every recent API")]
    pub all: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn execute(
    args: &RecentArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let recent = client.store().load_recent().await;
    if recent.apis.is_empty() {
        Logger::warn("No recently called APIs found.");
        return Ok(());
    }

    let (apis, title) = if let Some(category) = &args.category {
        let apis: Vec<_> = recent.in_category(category).collect();
        if apis.is_empty() {
            Logger::warn(&format!(
                "No recently called APIs found for category: {category}"
            ));
            return Ok(());
        }
        let title = format!("All recent APIs of category \"{category}\" ({}):", apis.len());
        (apis, title)
    } else if args.all {
        (
            recent.apis.iter().collect::<Vec<_>>(),
            format!("All recent APIs ({}):", recent.apis.len()),
        )
    } else {
        Logger::warn("No filter provided. Use --all or --category to view recent APIs.");
        return Ok(());
    };

    let rows: Vec<_> = apis.into_iter().map(|api| api.to_row()).collect();
    let formatter = get_formatter(&args.output.output);
    print!("{}", formatter.format_table(&rows, &title));

    Ok(())
}
