use crate::utils::error::{Result, SumError};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// The input document: `{ "values": [int, ...] }`.
///
/// The `values` key matches in any ASCII case and the last occurrence wins.
/// A missing or `null` `values` field, or a top-level `null`, decodes to an
/// empty list; a `null` element counts as 0. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NumberList {
    pub values: Vec<i64>,
}

impl<'de> Deserialize<'de> for NumberList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberListVisitor)
    }
}

struct NumberListVisitor;

impl<'de> Visitor<'de> for NumberListVisitor {
    type Value = NumberList;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a JSON object with a \"values\" array of integers")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<NumberList, E> {
        Ok(NumberList::default())
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<NumberList, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if !key.eq_ignore_ascii_case("values") {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            // Elements are parsed from their literal text so `-0` stays an integer.
            let raw: Option<Vec<Box<RawValue>>> = map.next_value()?;
            values = raw
                .unwrap_or_default()
                .iter()
                .map(|element| parse_element::<A::Error>(element.get()))
                .collect::<std::result::Result<Vec<i64>, A::Error>>()?;
        }
        Ok(NumberList { values })
    }
}

fn parse_element<E: de::Error>(text: &str) -> std::result::Result<i64, E> {
    if text == "null" {
        return Ok(0);
    }
    text.parse::<i64>()
        .map_err(|_| E::invalid_value(Unexpected::Other(text), &"an integer that fits in i64"))
}

impl NumberList {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Decodes `bytes`; `source_name` appears in the error message.
    pub fn from_slice(bytes: &[u8], source_name: &str) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| SumError::Decode {
            source_name: source_name.to_string(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> Result<Sum> {
        self.values
            .iter()
            .try_fold(0i64, |acc, v| acc.checked_add(*v))
            .map(Sum)
            .ok_or(SumError::Overflow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sum(pub i64);

impl Sum {
    /// The exact line written to the output destination.
    pub fn render(&self) -> String {
        format!("Sum of numbers: {}\n", self.0)
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub sum: Sum,
    pub source: String,
    pub destination: String,
}
