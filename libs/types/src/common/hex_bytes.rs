//! Serde adapter that renders variable-length byte fields as `0x` hex.
//!
//! Use with `#[serde(with = "crate::common::hex_bytes")]`.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    super::decode_hex("bytes", &text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        data: Vec<u8>,
    }

    #[test]
    fn test_hex_bytes_json_shape() {
        let holder = Holder {
            data: vec![0xde, 0xad, 0xbe, 0xef],
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"data":"0xdeadbeef"}"#);

        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holder);
    }

    #[test]
    fn test_hex_bytes_accepts_unprefixed() {
        let back: Holder = serde_json::from_str(r#"{"data":"0102"}"#).unwrap();
        assert_eq!(back.data, vec![1, 2]);
    }
}
