pub mod delete;
pub mod detail;
pub mod list;
pub mod recent;
pub mod run;
pub mod save;
pub mod search;
pub mod shared;
pub mod validators;

use crate::client::PostalClient;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Send a request and record it in the recent list")]
    Test(test::TestArgs),
    #[command(about = "Save a request definition without sending it")]
    Save(save::SaveArgs),
    #[command(about = "Replay a stored request by id, or every request in a category")]
    Run(run::RunArgs),
    #[command(about = "Show stored request details by id or category")]
    Detail(detail::DetailArgs),
    #[command(about = "List saved requests")]
    List(list::ListArgs),
    #[command(about = "Delete saved requests or clear the recent list")]
    Delete(delete::DeleteArgs),
    #[command(about = "List recently tested requests")]
    Recent(recent::RecentArgs),
    #[command(about = "Fuzzy search saved and recent requests")]
    Search(search::SearchArgs),
}

impl Commands {
    pub async fn execute(&self, client: &PostalClient) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Test(args) => test::execute(args, client).await,
            Commands::Save(args) => save::execute(args, client).await,
            Commands::Run(args) => run::execute(args, client).await,
            Commands::Detail(args) => detail::execute(args, client).await,
            Commands::List(args) => list::execute(args, client).await,
            Commands::Delete(args) => delete::execute(args, client).await,
            Commands::Recent(args) => recent::execute(args, client).await,
            Commands::Search(args) => search::execute(args, client).await,
        }
    }
}
