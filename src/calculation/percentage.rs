use crate::error::{QuoteError, Result};

/// 計算兩個整數之間的漲跌百分比，`old` 為 0 時結果同 [`change_from_floats`]
pub fn change_from_integers(old: i64, new: i64) -> f64 {
    change_from_floats(old as f64, new as f64)
}

/// 計算兩個數值之間的漲跌百分比
///
/// `old` 為 0 時不會 panic，依 IEEE 754 得到無限大，兩者皆為 0 時得到 NaN。
pub fn change_from_floats(old: f64, new: f64) -> f64 {
    (new - old) / old * 100.0
}

/// 將兩個文字轉成數值後計算漲跌百分比
///
/// # Errors
///
/// 任一文字不是合法數字時回傳 `QuoteError::NumericParse`，並帶出第一個失敗的值。
pub fn change_from_strings(old: &str, new: &str) -> Result<f64> {
    let o = parse_f64(old)?;
    let n = parse_f64(new)?;

    Ok(change_from_floats(o, n))
}

fn parse_f64(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|source| QuoteError::NumericParse {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_from_integers() {
        assert_eq!(change_from_integers(20, 60), 200.0);
        assert_eq!(change_from_integers(60, 30), -50.0);
        assert!(change_from_integers(0, 5).is_infinite());
    }

    #[test]
    fn test_change_from_floats() {
        assert_eq!(change_from_floats(20.0, 60.0), 200.0);
        assert_eq!(change_from_floats(60.0, 30.0), -50.0);
    }

    #[test]
    fn test_change_from_floats_same_value_is_zero() {
        for old in [0.01, 1.0, 10.9, 3_000.5, 1e9] {
            assert_eq!(change_from_floats(old, old), 0.0, "old = {}", old);
        }
    }

    #[test]
    fn test_change_from_zero_is_not_finite() {
        assert!(change_from_floats(0.0, 1.0).is_infinite());
        assert!(change_from_floats(0.0, 0.0).is_nan());
        assert!(change_from_floats(0.0, -1.0).is_infinite());
    }

    #[test]
    fn test_change_from_strings() {
        let pct = change_from_strings("20.0", "60.0").unwrap();
        assert_eq!(pct, 200.0);

        let pct = change_from_strings("10.900", "11.120").unwrap();
        assert_eq!(format!("{:.2}%", pct), "2.02%");
    }

    #[test]
    fn test_change_from_strings_invalid_token() {
        match change_from_strings("old", "new") {
            Err(QuoteError::NumericParse { token, .. }) => assert_eq!(token, "old"),
            other => panic!("unexpected result: {:?}", other),
        }

        match change_from_strings("10.0", "new") {
            Err(QuoteError::NumericParse { token, .. }) => assert_eq!(token, "new"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
