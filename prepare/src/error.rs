use thiserror::Error;
use unicode_case_source::SourceError;

/// ошибки подготовки таблиц; любая из них прерывает генерацию целиком
#[derive(Error, Debug)]
pub enum PrepareError
{
    /// различных условий больше, чем бит в маске
    #[error("условие `{name}` не помещается в маску: допустимо не более {limit} условий")]
    TooManyConditions
    {
        name: String,
        limit: usize,
    },

    /// интервалы таблицы не помещаются в u16
    #[error("таблица {table}: {len} элементов, границы интервалов не помещаются в u16")]
    IntervalOverflow
    {
        table: &'static str,
        len: usize,
    },

    /// ошибка в исходных данных UCD
    #[error(transparent)]
    Source(#[from] SourceError),

    /// файл конфигурации не удалось прочитать
    #[error("не удалось прочитать конфигурацию {path}")]
    ConfigRead
    {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// файл конфигурации не является корректным TOML
    #[error("ошибка разбора конфигурации {path}")]
    ConfigParse
    {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// недопустимое значение параметра
    #[error("некорректная конфигурация: {0}")]
    InvalidConfig(String),
}
