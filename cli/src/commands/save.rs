use crate::client::PostalClient;
use crate::commands::shared::RequestInputArgs;
use clap::Args;

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub input: RequestInputArgs,
}

pub async fn execute(
    args: &SaveArgs,
    client: &PostalClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let api = client
        .save(&args.input.method, &args.input.url, args.input.to_options())
        .await?;
    tracing::debug!("stored {} {} as {}", api.method, api.url, api.id);
    Ok(())
}
