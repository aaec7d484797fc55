//! Maps parsed commands to their handlers.

use ldk_client::ApiClient;
use ldk_config::LdkConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::output::GridOptions;

use super::{activity, analytics, audit, dashboard, import, pages, proxy, session};

pub async fn dispatch(
    command: Commands,
    config: &LdkConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    tracing::debug!(base_url = %config.api.base_url, "dispatching command");

    let options = GridOptions {
        max_width: config.general.max_table_width,
        color: config.general.table_color,
    };

    match command {
        Commands::Dashboard => dashboard::show(flags, options),
        Commands::Pages => pages::list(flags, options),
        Commands::Activity { action } => {
            let api = ApiClient::new(config.api.base_url.clone());
            activity::run(action, &api, flags, options).await
        }
        Commands::Analytics { action } => {
            let api = ApiClient::new(config.api.base_url.clone());
            analytics::run(action, &api, flags, options).await
        }
        Commands::Session { action } => {
            let api = ApiClient::new(config.api.base_url.clone());
            session::run(action, &api, flags, options).await
        }
        Commands::Audit { action } => {
            let api = ApiClient::new(config.api.base_url.clone());
            audit::run(action, &api, flags, options).await
        }
        Commands::Import(args) => {
            let api = ApiClient::new(config.api.base_url.clone());
            import::run(&args, &api, flags).await
        }
        Commands::Proxy(args) => proxy::run(&args, config, flags).await,
    }
}
