use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn describe_yaml_error(e: &serde_yaml_ng::Error) -> String {
    match e.location() {
        Some(location) => format!(
            "Failed to parse config YAML at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        ),
        None => format!("Failed to parse config YAML: {}", e),
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| describe_yaml_error(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_error_mentions_line() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<BTreeMap<String, u64>, String> =
            serializer.deserialize("seed: 1\nother: [unclosed\n");

        let error = result.unwrap_err();
        assert!(error.starts_with("Failed to parse config YAML"), "{}", error);
        assert!(error.contains("line"), "{}", error);
    }

    #[test]
    fn test_serialize_produces_yaml_mapping() {
        let mut values = BTreeMap::new();
        values.insert("seed".to_string(), 3u64);

        let serialized = YamlConfigSerializer::new().serialize(&values).unwrap();
        assert_eq!(serialized.trim(), "seed: 3");
    }
}
