use serde::{Deserialize, Deserializer};

// the web client posts numeric fields from form inputs, so both 2 and "2" show up
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

pub fn i64_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("Wrong value {value}, can not parse to i64"))),
    }
}
