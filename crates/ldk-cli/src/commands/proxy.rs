use ldk_config::LdkConfig;
use ldk_proxy::Proxy;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProxyArgs;

pub async fn run(args: &ProxyArgs, config: &LdkConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let listen = args.listen.as_deref().unwrap_or(&config.proxy.listen);
    let backend = args
        .backend
        .clone()
        .unwrap_or_else(|| config.proxy.backend.clone());

    let proxy = Proxy::bind(listen, backend)?;
    if !flags.quiet {
        match proxy.port() {
            Some(port) => eprintln!("ldk proxy listening on port {port} (Ctrl-C to stop)"),
            None => eprintln!("ldk proxy listening on {listen} (Ctrl-C to stop)"),
        }
    }
    proxy.run().await?;
    Ok(())
}
