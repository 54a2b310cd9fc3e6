use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form field the booking endpoint reads the selection from
pub const SEAT_IDS_FIELD: &str = "seat_ids";

/// Separator between seat ids in the submitted field value
pub const SEAT_ID_DELIMITER: char = ',';

/// Opaque identifier of one seat in the venue layout.
///
/// Always non-empty and never contains [`SEAT_ID_DELIMITER`], so a joined
/// payload splits back into exactly the seats that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId(String);

impl SeatId {
    pub fn parse(raw: &str) -> Result<Self, SeatIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SeatIdError::Empty);
        }
        if trimmed.contains(SEAT_ID_DELIMITER) {
            return Err(SeatIdError::ContainsDelimiter(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.0
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatIdError {
    #[error("Seat id is empty")]
    Empty,

    #[error("Seat id contains the payload delimiter: {0}")]
    ContainsDelimiter(String),
}

/// Join seat ids into a `seat_ids` field value
pub fn join_seat_ids<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a SeatId>,
{
    let mut value = String::new();
    for (index, id) in ids.into_iter().enumerate() {
        if index > 0 {
            value.push(SEAT_ID_DELIMITER);
        }
        value.push_str(id.as_str());
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_parse() {
        assert_eq!(SeatId::parse(" A1 ").unwrap().as_str(), "A1");
        assert_eq!(SeatId::parse("   "), Err(SeatIdError::Empty));
        assert!(matches!(
            SeatId::parse("A1,B2"),
            Err(SeatIdError::ContainsDelimiter(_))
        ));
    }

    #[test]
    fn test_join_seat_ids() {
        let ids = vec![SeatId::parse("A1").unwrap(), SeatId::parse("B7").unwrap()];
        let value = join_seat_ids(&ids);
        assert_eq!(value, "A1,B7");
        let parsed: Vec<SeatId> = value
            .split(SEAT_ID_DELIMITER)
            .map(|raw| raw.parse().unwrap())
            .collect();
        assert_eq!(parsed, ids);
        assert_eq!(join_seat_ids(&Vec::<SeatId>::new()), "");
    }

    #[test]
    fn test_seat_id_deserialization_validates() {
        let id: SeatId = serde_json::from_str("\"C3\"").expect("Failed to deserialize");
        assert_eq!(id.to_string(), "C3");
        assert!(serde_json::from_str::<SeatId>("\"\"").is_err());
    }
}
