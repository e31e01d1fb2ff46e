/// 計算漲跌幅
pub mod percentage;
