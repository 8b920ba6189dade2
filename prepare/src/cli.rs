use std::path::PathBuf;

use clap::Parser;
use crate::{load_config, MergePolicy, PrepareConfig, PrepareError};

/// генератор таблиц отображения регистра из UCD
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli
{
    /// файл конфигурации TOML; без него используются параметры по умолчанию
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// каталог с файлами UCD (UnicodeData.txt, SpecialCasing.txt, PropList.txt, DerivedCoreProperties.txt)
    #[arg(long)]
    pub ucd_dir: Option<PathBuf>,

    /// файл с подготовленными данными
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// политика объединения правил: replace или fallback
    #[arg(long)]
    pub merge_policy: Option<MergePolicy>,

    /// длина строки в файле с подготовленными данными
    #[arg(long)]
    pub line_width: Option<usize>,

    /// уровень логирования: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Cli
{
    /// конфигурация из файла (если указан) с параметрами командной строки поверх
    pub fn resolve_config(&self) -> Result<PrepareConfig, PrepareError>
    {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PrepareConfig::default(),
        };

        if let Some(dir) = &self.ucd_dir {
            config.ucd_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(policy) = self.merge_policy {
            config.merge_policy = policy;
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }

        config.validate()?;

        Ok(config)
    }
}
