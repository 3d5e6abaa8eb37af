/// Parameter kinds and values
///
/// Pure per-kind codec functions: every kind maps to one parse and one
/// serialize rule, dispatched by tag. Same input → same output, no side
/// effects.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The closed set of kinds a route parameter can be declared as.
///
/// Every kind exists in a required and a nullable (`Opt*`) flavor. A
/// nullable parameter may be absent from a URL, decoding to
/// [`ParamValue::Null`]; a required parameter absent from a URL makes the
/// whole route not match.
///
/// # Examples
///
/// ```
/// use keyhold_router::ParamKind;
///
/// assert!(!ParamKind::Str.is_nullable());
/// assert!(ParamKind::OptStr.is_nullable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    /// UTF-8 string, carried verbatim (percent-encoded on the wire)
    Str,
    /// String, or absent
    OptStr,
    /// Floating point number, decimal on the wire
    Num,
    /// Number, or absent
    OptNum,
    /// Boolean, exactly `true` or `false` on the wire
    Bool,
    /// Boolean, or absent
    OptBool,
    /// Calendar date, `YYYY-MM-DD` on the wire
    Date,
    /// Date, or absent
    OptDate,
}

/// A decoded route parameter value.
///
/// Tagged union over the four base kinds plus [`ParamValue::Null`], the
/// decoded form of a nullable parameter that was absent from the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

impl ParamKind {
    /// Whether absence from a URL is valid for this kind
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            ParamKind::OptStr | ParamKind::OptNum | ParamKind::OptBool | ParamKind::OptDate
        )
    }

    /// Parses a raw (already percent-decoded) URL value into a typed value.
    ///
    /// Returns `None` when the value is malformed for this kind:
    /// non-numeric input for `Num`, anything but the literals
    /// `"true"`/`"false"` for `Bool`, anything but strict `YYYY-MM-DD` for
    /// `Date`. Absent parameters never reach this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyhold_router::{ParamKind, ParamValue};
    ///
    /// assert_eq!(ParamKind::Num.parse("1.5"), Some(ParamValue::Num(1.5)));
    /// assert_eq!(ParamKind::Bool.parse("1"), None);
    /// ```
    pub fn parse(self, raw: &str) -> Option<ParamValue> {
        match self {
            ParamKind::Str | ParamKind::OptStr => Some(ParamValue::Str(raw.to_string())),
            ParamKind::Num | ParamKind::OptNum => {
                raw.parse::<f64>().ok().filter(|n| !n.is_nan()).map(ParamValue::Num)
            }
            ParamKind::Bool | ParamKind::OptBool => match raw {
                "true" => Some(ParamValue::Bool(true)),
                "false" => Some(ParamValue::Bool(false)),
                _ => None,
            },
            ParamKind::Date | ParamKind::OptDate => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(ParamValue::Date),
        }
    }

    /// Whether a value is well-typed for this kind.
    ///
    /// `Null` is accepted only by nullable kinds.
    pub fn accepts(self, value: &ParamValue) -> bool {
        match value {
            ParamValue::Str(_) => matches!(self, ParamKind::Str | ParamKind::OptStr),
            ParamValue::Num(_) => matches!(self, ParamKind::Num | ParamKind::OptNum),
            ParamValue::Bool(_) => matches!(self, ParamKind::Bool | ParamKind::OptBool),
            ParamValue::Date(_) => matches!(self, ParamKind::Date | ParamKind::OptDate),
            ParamValue::Null => self.is_nullable(),
        }
    }
}

impl ParamValue {
    /// Serializes the value to its raw URL form, prior to percent-encoding.
    ///
    /// Mirrors [`ParamKind::parse`]: decimal numbers, literal
    /// `true`/`false` booleans, `YYYY-MM-DD` dates, strings verbatim.
    /// `Null` has no wire form and yields `None` (the parameter is omitted
    /// from the URL entirely).
    pub fn serialize(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Num(n) => Some(n.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            ParamValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            ParamValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ParamValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Num(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Num(n as f64)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(d: NaiveDate) -> Self {
        ParamValue::Date(d)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => ParamValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_kinds() {
        for kind in [ParamKind::OptStr, ParamKind::OptNum, ParamKind::OptBool, ParamKind::OptDate] {
            assert!(kind.is_nullable());
        }
        for kind in [ParamKind::Str, ParamKind::Num, ParamKind::Bool, ParamKind::Date] {
            assert!(!kind.is_nullable());
        }
    }

    #[test]
    fn test_parse_str_verbatim() {
        assert_eq!(
            ParamKind::Str.parse("a b/c"),
            Some(ParamValue::Str("a b/c".to_string()))
        );
    }

    #[test]
    fn test_parse_num() {
        assert_eq!(ParamKind::Num.parse("1234"), Some(ParamValue::Num(1234.0)));
        assert_eq!(ParamKind::Num.parse("-0.5"), Some(ParamValue::Num(-0.5)));
        assert_eq!(ParamKind::Num.parse("abc"), None);
        // stricter than JS parseFloat: trailing garbage is rejected too
        assert_eq!(ParamKind::Num.parse("1.5abc"), None);
        assert_eq!(ParamKind::Num.parse("NaN"), None);
    }

    #[test]
    fn test_parse_bool_literals_only() {
        assert_eq!(ParamKind::Bool.parse("true"), Some(ParamValue::Bool(true)));
        assert_eq!(ParamKind::Bool.parse("false"), Some(ParamValue::Bool(false)));
        assert_eq!(ParamKind::Bool.parse("1"), None);
        assert_eq!(ParamKind::Bool.parse("True"), None);
        assert_eq!(ParamKind::Bool.parse(""), None);
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(
            ParamKind::Date.parse("2019-08-31"),
            NaiveDate::from_ymd_opt(2019, 8, 31).map(ParamValue::Date)
        );
        assert_eq!(ParamKind::Date.parse("2019-13-01"), None);
        assert_eq!(ParamKind::Date.parse("31-08-2019"), None);
        assert_eq!(ParamKind::Date.parse("not-a-date"), None);
    }

    #[test]
    fn test_serialize_mirrors_parse() {
        assert_eq!(ParamValue::Num(1234.0).serialize(), Some("1234".to_string()));
        assert_eq!(ParamValue::Num(0.25).serialize(), Some("0.25".to_string()));
        assert_eq!(ParamValue::Bool(true).serialize(), Some("true".to_string()));
        let date = NaiveDate::from_ymd_opt(2019, 8, 31).unwrap();
        assert_eq!(ParamValue::Date(date).serialize(), Some("2019-08-31".to_string()));
        assert_eq!(ParamValue::Null.serialize(), None);
    }

    #[test]
    fn test_accepts() {
        assert!(ParamKind::Str.accepts(&ParamValue::Str("x".to_string())));
        assert!(!ParamKind::Str.accepts(&ParamValue::Num(1.0)));
        assert!(!ParamKind::Str.accepts(&ParamValue::Null));
        assert!(ParamKind::OptStr.accepts(&ParamValue::Null));
        assert!(ParamKind::OptDate.accepts(&ParamValue::Null));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ParamValue::from(None::<&str>), ParamValue::Null);
        assert_eq!(
            ParamValue::from(Some("x")),
            ParamValue::Str("x".to_string())
        );
    }
}
