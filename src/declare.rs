use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// 交易所代碼，組成查詢字串的前綴 (例︰sh600000)
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MarketIndex {
    /// 上海證券交易所
    #[default]
    Sh,
    /// 深圳證券交易所
    Sz,
}

/// 報價來源平台
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// 新浪財經
    #[default]
    Sina,
}

/// 日誌輸出格式
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 單一股票在某個時間點的報價
///
/// 價格欄位保留來源的文字格式 (例︰"10.900")，不轉成數值以免失去精度或格式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// 股票名稱
    pub name: String,
    /// 股票代碼，永遠是呼叫端傳入的值
    pub number: String,
    /// 漲跌幅 (例︰"2.02%")
    pub percentage_change: String,
    /// 開盤價
    pub opening_price: String,
    /// 昨日收盤價
    pub previous_closing_price: String,
    /// 目前成交價
    pub current_price: String,
    /// 最高價
    pub high_price: String,
    /// 最低價
    pub low_price: String,
    /// 報價時間
    pub date: NaiveDateTime,
}

impl Quote {
    /// 漲跌幅是否為負值
    pub fn is_falling(&self) -> bool {
        self.percentage_change.starts_with('-')
    }
}
