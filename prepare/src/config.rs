use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{MergePolicy, PrepareError};

/// параметры генерации таблиц
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrepareConfig
{
    /// каталог с файлами UCD
    pub ucd_dir: PathBuf,
    /// файл с подготовленными данными
    pub output: PathBuf,
    /// длина строки в файле с подготовленными данными
    pub line_width: usize,
    /// как специальные отображения сочетаются с простыми
    pub merge_policy: MergePolicy,
}

impl Default for PrepareConfig
{
    fn default() -> Self
    {
        Self {
            ucd_dir: PathBuf::from("./../data/ucd/15.1.0"),
            output: PathBuf::from("./../data/case_mapping.rs.txt"),
            line_width: 120,
            merge_policy: MergePolicy::default(),
        }
    }
}

impl PrepareConfig
{
    pub fn validate(&self) -> Result<(), PrepareError>
    {
        if self.line_width == 0 {
            return Err(PrepareError::InvalidConfig("line_width должна быть больше нуля".to_owned()));
        }

        Ok(())
    }
}

/// разобрать конфигурацию из TOML, отсутствующие параметры берутся по умолчанию
pub fn parse_config(content: &str, path: &Path) -> Result<PrepareConfig, PrepareError>
{
    let config: PrepareConfig = toml::from_str(content).map_err(|source| PrepareError::ConfigParse {
        path: path.display().to_string(),
        source,
    })?;

    config.validate()?;

    Ok(config)
}

/// прочитать файл конфигурации
pub fn load_config(path: &Path) -> Result<PrepareConfig, PrepareError>
{
    let content = std::fs::read_to_string(path).map_err(|source| PrepareError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&content, path)
}
