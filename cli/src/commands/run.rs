use crate::client::unique::resolve_unique;
use crate::client::PostalClient;
use crate::commands::shared::SelectorArgs;
use crate::core::error::ApiError;
use crate::core::logger::Logger;
use clap::Args;

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selector: SelectorArgs,
}

pub async fn execute(
    args: &RunArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let (recent, saved) = client.load_all().await?;
    if recent.apis.is_empty() && saved.apis.is_empty() {
        Logger::warn("No APIs found in storage.");
        return Ok(());
    }

    if let Some(category) = &args.selector.category {
        let apis = resolve_unique(&recent.apis, &saved.apis, Some(category.as_str()));
        if apis.is_empty() {
            Logger::warn(&format!("No APIs found for category: {category}"));
            return Ok(());
        }

        Logger::info(&format!(
            "Running {} API(s) of category: {category}",
            apis.len()
        ));
        let report = client.run_batch(&apis).await;
        if report.failed > 0 {
            return Err(ApiError::Generic(format!(
                "{} of {} API(s) in category '{category}' failed",
                report.failed, report.total
            ))
            .into());
        }
        return Ok(());
    }

    if let Some(id) = &args.selector.id {
        let Some((api, origin)) = PostalClient::locate(&recent, &saved, id) else {
            Logger::warn(&format!("No API found with id: {id}"));
            return Ok(());
        };
        tracing::debug!("replaying {id} from {origin:?}");
        client.replay(&api).await?;
    }

    Ok(())
}
