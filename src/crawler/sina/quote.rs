//! # 新浪行情文字解析
//!
//! 平台回應的格式為 `var hq_str_sh600000="名稱,開盤,昨收,...,日期,時間,00,";`。
//! 以 `\`、`"`、`,` 組成的連續字元作為分隔符一次切開，
//! 變數名稱與引號外殼、欄位間的逗號都會被去除，只留下依序排列的欄位值。
//!
//! 欄位位置是與平台之間的實際約定，統一定義在 [`Field`]，平台改版時只需要修改這裡。

use chrono::NaiveDateTime;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    calculation::percentage,
    declare::Quote,
    error::{QuoteError, Result},
    util::datetime,
};

/// 欄位分隔符
static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\",]+"#).expect("Failed to compile delimiter regex"));

/// 切割後至少要有的欄位數
pub const MIN_FIELDS: usize = 35;

/// 欄位名稱與位置的對照表
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    OpeningPrice,
    PreviousClosingPrice,
    CurrentPrice,
    HighPrice,
    LowPrice,
    Date,
    Time,
}

impl Field {
    /// 欄位在切割結果中的位置 (0 是變數名稱)
    pub const fn index(self) -> usize {
        match self {
            Field::Name => 1,
            Field::OpeningPrice => 2,
            Field::PreviousClosingPrice => 3,
            Field::CurrentPrice => 4,
            Field::HighPrice => 5,
            Field::LowPrice => 6,
            Field::Date => 31,
            Field::Time => 32,
        }
    }
}

/// 切割完成且通過數量檢查的欄位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn get(&self, field: Field) -> &'a str {
        // 建構時已確認數量 >= MIN_FIELDS
        self.tokens[field.index()]
    }

    /// 日期與時間兩個欄位合成的報價時間
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        datetime::parse_date_time(self.get(Field::Date), self.get(Field::Time))
    }

    /// 以昨收與現價計算漲跌幅
    pub fn percentage_change(&self) -> Result<f64> {
        percentage::change_from_strings(
            self.get(Field::PreviousClosingPrice),
            self.get(Field::CurrentPrice),
        )
    }

    /// 組成報價，股票代碼使用呼叫端傳入的 `number`
    pub fn into_quote(self, number: &str) -> Result<Quote> {
        let date = self.timestamp()?;
        let pc = self.percentage_change()?;

        if !pc.is_finite() {
            warn!(
                "percentage change of {} is {} because previous closing price is {:?}",
                number,
                pc,
                self.get(Field::PreviousClosingPrice)
            );
        }

        Ok(Quote {
            name: self.get(Field::Name).to_string(),
            number: number.to_string(),
            percentage_change: format!("{:.2}%", pc),
            opening_price: self.get(Field::OpeningPrice).to_string(),
            previous_closing_price: self.get(Field::PreviousClosingPrice).to_string(),
            current_price: self.get(Field::CurrentPrice).to_string(),
            high_price: self.get(Field::HighPrice).to_string(),
            low_price: self.get(Field::LowPrice).to_string(),
            date,
        })
    }
}

/// 切割平台回應的文字
///
/// # Errors
///
/// 欄位數少於 [`MIN_FIELDS`] 時回傳 `QuoteError::InsufficientData`，
/// 例如查無此股票時平台會回應空字串 `var hq_str_sh000000="";`。
pub fn parse(raw: &str) -> Result<Fields<'_>> {
    let tokens: Vec<&str> = DELIMITER.split(raw).collect();

    if tokens.len() < MIN_FIELDS {
        return Err(QuoteError::InsufficientData);
    }

    Ok(Fields { tokens })
}

/// 解析平台回應並組成報價
pub fn to_quote(raw: &str, number: &str) -> Result<Quote> {
    parse(raw)?.into_quote(number)
}
