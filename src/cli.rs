use std::path::PathBuf;

use clap::Parser;

use crate::declare::{LogFormat, MarketIndex, Platform};

/// Show stock real-time data tools
///
/// A command line tool to display real-time stock information and analysis results.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ztock", version, about)]
pub struct Args {
    /// 股票代碼，例如 600000
    pub number: String,

    /// set the source platform for stock data
    #[arg(short, long, value_enum)]
    pub platform: Option<Platform>,

    /// set the stock market index
    #[arg(short, long, value_enum)]
    pub index: Option<MarketIndex>,

    /// set the level that is used for logging
    #[arg(long)]
    pub log_level: Option<String>,

    /// set the format that is used for logging
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// config file (default is $HOME/.ztock/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
