use async_trait::async_trait;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::{
    config::App,
    crawler::sina::Sina,
    declare::{MarketIndex, Platform, Quote},
    error::Result,
};

/// 新浪財經
pub mod sina;

/// 報價來源平台的共同介面
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// 取得指定交易所、代碼的即時報價
    async fn fetch(
        &self,
        number: &str,
        index: MarketIndex,
        cancel: &CancellationToken,
    ) -> Result<Quote>;
}

type Constructor = fn() -> Box<dyn QuoteProvider>;

fn new_sina() -> Box<dyn QuoteProvider> {
    Box::new(Sina::new())
}

/// 平台與建構函式的對照表，新增平台只需要在這裡加一列
const PROVIDERS: &[(Platform, Constructor)] = &[(Platform::Sina, new_sina)];

/// 找不到對應平台時使用
const DEFAULT_PROVIDER: Constructor = new_sina;

/// 依平台取得報價來源
pub fn provider_for(platform: Platform) -> Box<dyn QuoteProvider> {
    let constructor = PROVIDERS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_PROVIDER);

    constructor()
}

/// 依設定取得股票目前的報價
pub async fn fetch_quote(app: &App, cancel: &CancellationToken) -> Result<Quote> {
    debug!(
        "fetch quote {}{} from {}",
        app.index, app.number, app.platform
    );

    provider_for(app.platform)
        .fetch(&app.number, app.index, cancel)
        .await
}
