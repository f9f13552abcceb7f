use serde::{Deserialize, Serialize};

/// Update-check response, always holding a single build
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct OtaDocument {
    pub response: Vec<OtaEntry>,
}

// Field order is the order of keys in the emitted JSON
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct OtaEntry {
    pub datetime: i64,
    pub filename: String,
    pub id: String,
    pub romtype: String,
    pub size: u64,
    pub url: String,
    pub version: String,
}

impl OtaDocument {
    pub fn new(entry: OtaEntry) -> Self {
        Self { response: vec![entry] }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(&self)
        } else {
            serde_json::to_string(&self)
        }
    }
}

#[cfg(test)]
mod ota_tests {
    use super::*;

    fn sample() -> OtaDocument {
        OtaDocument::new(OtaEntry {
            datetime: 1700000000,
            filename: "lineage-18.1-20231114.zip".to_string(),
            id: "3c9e85b65374e2c272ac63517f9b144d".to_string(),
            romtype: "unofficial".to_string(),
            size: 25,
            url: "https://example.com/lineage-18.1-20231114.zip".to_string(),
            version: "18.1".to_string(),
        })
    }

    #[test]
    fn test_json_shape() {
        let json = sample().to_json(false).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"response":[{"datetime":1700000000,"filename":"lineage-18.1-20231114.zip","#,
                r#""id":"3c9e85b65374e2c272ac63517f9b144d","romtype":"unofficial","size":25,"#,
                r#""url":"https://example.com/lineage-18.1-20231114.zip","version":"18.1"}]}"#
            )
        );
    }

    #[test]
    fn test_pretty_json() {
        let json = sample().to_json(true).unwrap();
        assert!(json.starts_with("{\n  \"response\": [\n    {\n      \"datetime\": 1700000000,\n"));
        assert!(json.ends_with("\n    }\n  ]\n}"));
    }
}
