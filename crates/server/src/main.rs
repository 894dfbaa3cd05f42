use clap::Parser;

use storefront_server::config::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    storefront_observability::init(cli.log_format);

    match cli.command {
        Command::Serve(args) => {
            let content = args.content.load()?;
            storefront_server::serve(args.config(), content).await
        }
        Command::Build(args) => {
            let content = args.content.load()?;
            storefront_server::report_missing_routes(&content);
            let written = storefront_server::export::build_site(&args.out, &content)?;
            tracing::info!(pages = written.len(), out = %args.out.display(), "site built");
            Ok(())
        }
    }
}
