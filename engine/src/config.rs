use std::io::ErrorKind;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: Serialize + for<'de> Deserialize<'de>,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|error| format!("Failed to serialize config: {}", error))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|error| format!("Failed to deserialize config: {}", error))
    }
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    // A missing file is not an error, the manager falls back to defaults
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path, error
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|error| {
            format!("Failed to write config file {}: {}", self.file_path, error)
        })
    }
}

pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        if let Some(content) = self.provider.get_config_content()? {
            let config: TConfig = self.serializer.deserialize(&content)?;

            config
                .validate()
                .map_err(|error| format!("Config validation error: {}", error))?;

            *cached = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|error| format!("Config validation error: {}", error))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        let mut cached = self.cached.lock().unwrap();
        *cached = Some(config.clone());
        Ok(())
    }
}
