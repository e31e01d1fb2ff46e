pub mod calculation;
pub mod cli;
pub mod config;
pub mod crawler;
pub mod declare;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod util;

use anyhow::Context;
use clap::Parser;
use log::debug;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = cli::Args::parse();
    let app = config::App::load(&args)?;

    logging::init(&app.log_level, app.log_format);
    debug!("Load config success: {:?}", app);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let quote = crawler::fetch_quote(&app, &cancel)
        .await
        .with_context(|| format!("cannot get stock {}{}", app.index, app.number))?;
    debug!("Get stock data success: {:?}", quote);

    presenter::print(&quote);

    Ok(())
}
