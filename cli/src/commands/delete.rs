use crate::client::{ApiDefinition, DeleteTarget, PostalClient};
use crate::core::formatter::{get_formatter, OutputFormat};
use crate::core::logger::Logger;
use crate::core::prompt;
use clap::Args;

/// At most one of these; none at all only warns.
#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
pub struct DeleteTargetArgs {
    #[arg(short = 'i', long = "id", help = "Delete the saved API with this id")]
    pub id: Option<String>,

    #[arg(short = 'c', long = "category", help = "Delete every saved API in this category")]
    pub category: Option<String>,

    #[arg(short = 'a', long = "all", help = "Delete all saved APIs")]
    pub all: bool,

    #[arg(short = 'r', long = "recent", help = "Delete all recently tested APIs")]
    pub recent: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: DeleteTargetArgs,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

impl DeleteTargetArgs {
    fn saved_target(&self) -> Option<DeleteTarget> {
        if self.all {
            Some(DeleteTarget::All)
        } else if let Some(id) = &self.id {
            Some(DeleteTarget::Id(id.clone()))
        } else {
            self.category.clone().map(DeleteTarget::Category)
        }
    }
}

pub async fn execute(
    args: &DeleteArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.target.recent {
        return delete_recent(args, client).await;
    }

    let saved = client.store().load_saved().await?;
    if saved.apis.is_empty() {
        Logger::warn("No saved APIs found.");
        return Ok(());
    }

    let Some(target) = args.target.saved_target() else {
        Logger::warn("No filter provided. Use --all, --id, --category or --recent to delete.");
        return Ok(());
    };

    let selected = PostalClient::select_for_delete(&saved, &target);
    if selected.is_empty() {
        match &target {
            DeleteTarget::Id(id) => Logger::warn(&format!("No API found with id: {id}")),
            DeleteTarget::Category(category) => {
                Logger::warn(&format!("No APIs found in category: {category}"))
            }
            DeleteTarget::All => Logger::warn("No saved APIs found."),
        }
        return Ok(());
    }

    let apis: Vec<&ApiDefinition> = selected.iter().map(|(_, api)| api).collect();
    if !confirm_selection(&apis, args.yes)? {
        return Ok(());
    }

    let indices: Vec<usize> = selected.iter().map(|(i, _)| *i).collect();
    let remaining = client.delete_saved(saved, &indices).await?;
    Logger::success(&format!(
        "Deleted {} API(s). Remaining: {remaining}",
        indices.len()
    ));

    Ok(())
}

async fn delete_recent(
    args: &DeleteArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let recent = client.store().load_recent().await;
    if recent.apis.is_empty() {
        Logger::warn("No recently called APIs found.");
        return Ok(());
    }

    let apis: Vec<&ApiDefinition> = recent.apis.iter().collect();
    if !confirm_selection(&apis, args.yes)? {
        return Ok(());
    }

    client.clear_recent().await?;
    Logger::success(&format!("Deleted {} API(s). Remaining: 0", apis.len()));

    Ok(())
}

/// Show what is about to go and ask unless `--yes` was given.
fn confirm_selection(apis: &[&ApiDefinition], yes: bool) -> std::io::Result<bool> {
    let rows: Vec<_> = apis.iter().map(|api| api.to_row()).collect();
    let table = get_formatter(&OutputFormat::Text).format_table(&rows, "");
    Logger::response("API(s) selected to be deleted:");
    print!("{table}");

    if yes {
        return Ok(true);
    }

    let confirmed = prompt::confirm(&format!(
        "Are you sure you want to delete {} API(s)? (y/N): ",
        apis.len()
    ))?;
    if !confirmed {
        Logger::warn("Aborted deletion.");
    }
    Ok(confirmed)
}
