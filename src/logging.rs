use std::{io::Write, str::FromStr};

use chrono::{DateTime, Local};
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

use crate::{config, declare::LogFormat};

/// 解析日誌等級，無法辨識時使用預設的 warn
pub fn parse_level(level: &str) -> LevelFilter {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "fatal" | "panic" => "error".to_string(),
        other => other.to_string(),
    };

    LevelFilter::from_str(&level).unwrap_or_else(|_| {
        LevelFilter::from_str(config::DEFAULT_LOG_LEVEL).unwrap_or(LevelFilter::Warn)
    })
}

/// 初始化日誌，輸出到 stderr 以免干擾 stdout 上的表格
pub fn init(level: &str, format: LogFormat) {
    let mut builder = Builder::new();
    builder.filter_level(parse_level(level)).target(Target::Stderr);

    match format {
        LogFormat::Text => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                text_line(&Local::now(), record.level(), &record.args().to_string())
            )
        }),
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(&Local::now(), record.level(), &record.args().to_string())
            )
        }),
    };

    // 重複初始化時保留第一次的設定
    let _ = builder.try_init();
}

fn text_line(created_at: &DateTime<Local>, level: Level, msg: &str) -> String {
    format!(
        "{} {} {}",
        created_at.format("%Y-%m-%d %H:%M:%S.%3f"),
        level,
        msg
    )
}

fn json_line(created_at: &DateTime<Local>, level: Level, msg: &str) -> String {
    serde_json::json!({
        "time": created_at.to_rfc3339(),
        "level": level.as_str().to_ascii_lowercase(),
        "msg": msg,
    })
    .to_string()
}
