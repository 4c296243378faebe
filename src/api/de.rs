// src/api/de.rs
//
// Lenient field decoders. The API sends numbers as strings, uses `null` and
// `""` interchangeably, and occasionally sends a bare number where a string
// is documented.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `12`, `"12"` → Some(12). `null`, `""`, garbage → None.
pub fn opt_num<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|i| T::try_from(i).ok()),
        Some(Value::String(s)) => s.trim().parse::<T>().ok(),
        _ => None,
    })
}

/// Like `opt_num`, missing values become zero.
pub fn num<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64> + Default,
{
    Ok(opt_num(d)?.unwrap_or_default())
}

/// Required text: `null` becomes "".
pub fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(d)?.unwrap_or_default())
}

/// Optional text that tolerates a bare number (`"intFormedYear": 1892`).
pub fn opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::num")]
        rank: u32,
        #[serde(default, deserialize_with = "super::opt_num")]
        gd: Option<i32>,
        #[serde(default, deserialize_with = "super::text")]
        id: String,
        #[serde(default, deserialize_with = "super::opt_text")]
        year: Option<String>,
    }

    #[test]
    fn accepts_strings_numbers_and_nulls() {
        let r: Row = serde_json::from_str(r#"{"rank":"3","gd":-4,"id":null,"year":1892}"#).unwrap();
        assert_eq!(r.rank, 3);
        assert_eq!(r.gd, Some(-4));
        assert_eq!(r.id, "");
        assert_eq!(r.year.as_deref(), Some("1892"));
    }

    #[test]
    fn missing_and_garbage_fall_back() {
        let r: Row = serde_json::from_str(r#"{"rank":"n/a","gd":""}"#).unwrap();
        assert_eq!(r.rank, 0);
        assert_eq!(r.gd, None);
        assert_eq!(r.year, None);
    }
}
