//! Runs the token manager deployment workflow once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use eyre::Result;

use deployer::DeployerSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = DeployerSettings::new()?;
    settings.tracing.start_tracing()?;

    let workflow = settings.build_workflow().await?;
    let report = workflow.run().await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
