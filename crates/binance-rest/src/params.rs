//! Request parameters and query string serialization
//!
//! Every Binance parameter is one of a small set of primitive kinds.
//! [`ParamValue`] keeps the kind so that serialization can apply the
//! per-kind rules:
//!
//! - empty strings are omitted; every other kind is always sent,
//!   including `0` and `false`
//! - floats use the shortest decimal form that round-trips, never an exponent
//! - list values become repeated `key=value` pairs in list order
//!
//! Keys serialize in lexicographic order, so the same set of pairs always
//! yields the same query string and therefore the same signature.

use binance_types::{AccountType, FuturesType, SnapshotType, TransferDirection, UniversalTransferType};
use rust_decimal::Decimal;
use std::collections::btree_map::{self, BTreeMap};

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value; omitted from the query string when empty
    Str(String),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer (timestamps, ids)
    Long(i64),
    /// Floating point amount
    Float(f64),
    /// Boolean, sent as `true` / `false`
    Bool(bool),
    /// Repeated parameter, one pair per item
    List(Vec<String>),
}

impl ParamValue {
    /// Returns true for an empty string value
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }

    fn push_pairs<'a>(&self, key: &'a str, out: &mut Vec<(&'a str, String)>) {
        match self {
            Self::Str(s) => {
                if !s.is_empty() {
                    out.push((key, s.clone()));
                }
            }
            Self::Int(v) => out.push((key, v.to_string())),
            Self::Long(v) => out.push((key, v.to_string())),
            Self::Float(v) => out.push((key, v.to_string())),
            Self::Bool(v) => out.push((key, v.to_string())),
            Self::List(items) => out.extend(items.iter().map(|item| (key, item.clone()))),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Long(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Long)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Decimals are sent as strings with trailing zeros removed
impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::Str(value.normalize().to_string())
    }
}

impl From<SnapshotType> for ParamValue {
    fn from(value: SnapshotType) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<UniversalTransferType> for ParamValue {
    fn from(value: UniversalTransferType) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<AccountType> for ParamValue {
    fn from(value: AccountType) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<FuturesType> for ParamValue {
    fn from(value: FuturesType) -> Self {
        Self::Int(value.code())
    }
}

impl From<TransferDirection> for ParamValue {
    fn from(value: TransferDirection) -> Self {
        Self::Int(value.code())
    }
}

/// A set of request parameters keyed by name
///
/// Keys are unique; inserting an existing key replaces its value.
/// Absent values are never stored: use [`Params::insert_opt`] or
/// [`Params::with_opt`] with `None` to leave a parameter out.
///
/// # Example
///
/// ```
/// use binance_rest::Params;
///
/// let params = Params::new()
///     .with("email", "sub@example.com")
///     .with("page", 1)
///     .with_opt("isFreeze", None::<bool>);
///
/// assert_eq!(params.to_query_string().unwrap(), "email=sub%40example.com&page=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value for the key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert a parameter if the value is present
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder-style [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style [`Params::insert_opt`]
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.entries.iter()
    }

    /// Merge `other` into `self`; values from `other` win on conflicts
    pub fn merge(&mut self, other: Params) {
        self.entries.extend(other.entries);
    }

    /// Serialize to a URL-encoded query string (without a leading `?`)
    ///
    /// Keys appear in lexicographic order. Empty string values are skipped.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.push_pairs(key, &mut pairs);
        }
        serde_urlencoded::to_string(&pairs)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn query(params: &Params) -> String {
        params.to_query_string().unwrap()
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(query(&Params::new()), "");
    }

    #[test]
    fn test_empty_string_is_omitted() {
        let params = Params::new().with("email", "").with("asset", "BTC");
        let q = query(&params);
        assert_eq!(q, "asset=BTC");
        assert!(!q.contains("email"));
    }

    #[test]
    fn test_zero_and_false_are_sent() {
        let params = Params::new()
            .with("page", 0)
            .with("startTime", 0i64)
            .with("amount", 0.0)
            .with("isFreeze", false);
        assert_eq!(query(&params), "amount=0&isFreeze=false&page=0&startTime=0");
    }

    #[test]
    fn test_keys_are_sorted() {
        let params = Params::new()
            .with("timestamp", 1700000000000i64)
            .with("asset", "BTC")
            .with("amount", 1.5);
        assert_eq!(query(&params), "amount=1.5&asset=BTC&timestamp=1700000000000");
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = Params::new().with("page", 1).with("limit", 10).with("email", "a@b.c");
        let b = Params::new().with("email", "a@b.c").with("limit", 10).with("page", 1);
        assert_eq!(query(&a), query(&b));
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(query(&Params::new().with("amount", 1.0)), "amount=1");
        assert_eq!(query(&Params::new().with("amount", 0.0001)), "amount=0.0001");
        assert_eq!(query(&Params::new().with("amount", 1e-7)), "amount=0.0000001");
        assert_eq!(query(&Params::new().with("amount", 123456.789)), "amount=123456.789");
    }

    #[test]
    fn test_list_repeats_key_in_order() {
        let params = Params::new()
            .with("symbols", vec!["ETHUSDT", "BTCUSDT", "ETHUSDT"])
            .with("asset", "BNB");
        assert_eq!(
            query(&params),
            "asset=BNB&symbols=ETHUSDT&symbols=BTCUSDT&symbols=ETHUSDT"
        );
    }

    #[test]
    fn test_values_are_url_encoded() {
        let params = Params::new()
            .with("email", "sub+1@example.com")
            .with("note", "a b&c");
        assert_eq!(
            query(&params),
            "email=sub%2B1%40example.com&note=a+b%26c"
        );
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut params = Params::new().with("timestamp", 1i64);
        let previous = params.insert("timestamp", 2i64);
        assert_eq!(previous, Some(ParamValue::Long(1)));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("timestamp"), Some(&ParamValue::Long(2)));
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut params = Params::new();
        params.insert_opt("coin", None::<&str>);
        params.insert_opt("limit", Some(100));
        assert!(!params.contains_key("coin"));
        assert_eq!(params.get("limit"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = Params::new().with("email", "old@x.io").with("page", 1);
        base.merge(Params::new().with("email", "new@x.io"));
        assert_eq!(base.get("email"), Some(&ParamValue::Str("new@x.io".into())));
        assert_eq!(base.get("page"), Some(&ParamValue::Int(1)));
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = [("page", 1), ("limit", 10)].into_iter().collect();
        assert_eq!(query(&params), "limit=10&page=1");
    }

    #[test]
    fn test_decimal_is_normalized() {
        let params = Params::new().with("amount", dec!(1.500));
        assert_eq!(params.get("amount"), Some(&ParamValue::Str("1.5".into())));
    }

    #[test]
    fn test_enum_conversions() {
        let params = Params::new()
            .with("type", SnapshotType::Spot)
            .with("futuresType", FuturesType::CoinMargined)
            .with("fromAccountType", AccountType::UsdtFuture);
        assert_eq!(
            query(&params),
            "fromAccountType=USDT_FUTURE&futuresType=2&type=SPOT"
        );
    }

    #[test]
    fn test_is_empty_str() {
        assert!(ParamValue::from("").is_empty_str());
        assert!(!ParamValue::from("x").is_empty_str());
        assert!(!ParamValue::from(0).is_empty_str());
    }
}
