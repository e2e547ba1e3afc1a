//! Metadata endpoint DTOs.
//!
//! The endpoint sends codes sometimes as JSON strings and sometimes as
//! numbers, so every code field goes through [`string_or_number`]. Fields
//! we don't use (`pubcode`, `accessibility`, `zone`, ...) are ignored.

use serde::{Deserialize, Deserializer};

/// `{ "records": [...] }` envelope shared by all metadata actions.
#[derive(Debug, Clone, Deserialize)]
pub struct Records<T> {
    pub records: Vec<T>,
}

/// A line, from `action=lineslist`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineInfo {
    /// Code sent back as `lcode`
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Label shown to the user
    pub description: String,
}

/// A travel direction of a line, from `action=linedirslist`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectionInfo {
    /// Code sent back as `ldir`
    #[serde(deserialize_with = "string_or_number")]
    pub dir: String,
    /// Label shown to the user
    pub descr_dir: String,
}

/// A stop served by a line in one direction, from `action=linestops`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopInfo {
    /// Code sent to the arrival widget as `paragem`
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Label shown to the user
    pub name: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_with_string_and_numeric_codes() {
        let json = r#"{"records": [
            {"accessibility": "1", "code": "200", "pubcode": "200", "description": "200 - Bolhão"},
            {"code": 205, "description": "205 - Campanhã"}
        ]}"#;

        let lines: Records<LineInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(
            lines.records,
            vec![
                LineInfo {
                    code: "200".into(),
                    description: "200 - Bolhão".into(),
                },
                LineInfo {
                    code: "205".into(),
                    description: "205 - Campanhã".into(),
                },
            ]
        );
    }

    #[test]
    fn directions_with_numeric_dir() {
        let json = r#"{"records": [{"dir": 0, "descr_dir": "Bolhão"}, {"dir": "1", "descr_dir": "Castelo do Queijo"}]}"#;

        let dirs: Records<DirectionInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(dirs.records[0].dir, "0");
        assert_eq!(dirs.records[1].dir, "1");
    }

    #[test]
    fn stops_ignore_extra_fields() {
        let json = r#"{"records": [{"code": "BLM1", "name": "Bolhão", "zone": "PRT1", "address": "Rua Fernandes Tomás"}]}"#;

        let stops: Records<StopInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(stops.records[0].code, "BLM1");
        assert_eq!(stops.records[0].name, "Bolhão");
    }

    #[test]
    fn missing_records_is_an_error() {
        let result = serde_json::from_str::<Records<StopInfo>>(r#"{"error": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn boolean_code_is_an_error() {
        let result = serde_json::from_str::<LineInfo>(r#"{"code": true, "description": "x"}"#);
        assert!(result.is_err());
    }
}
