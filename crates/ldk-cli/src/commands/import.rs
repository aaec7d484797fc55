use anyhow::Context;
use ldk_client::ApiClient;
use ldk_views::ImportView;

use crate::cli::root_commands::ImportArgs;
use crate::cli::{GlobalFlags, OutputFormat};

pub async fn run(args: &ImportArgs, api: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut view = ImportView::new();
    view.select_file(file_name, bytes);
    view.upload(api).await;

    // The import page is the one place backend failures surface as a user
    // banner rather than just a log line.
    if let Some(banner) = view.error {
        anyhow::bail!("{banner}");
    }

    match flags.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.results)?),
        OutputFormat::Raw => println!("{}", serde_json::to_string(&view.results)?),
        OutputFormat::Table => {
            if !flags.quiet {
                println!("Import finished: {} result(s).", view.results.len());
            }
            for line in &view.results {
                println!("{line}");
            }
        }
    }
    Ok(())
}
