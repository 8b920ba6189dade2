use thiserror::Error;

/// ошибки разбора файлов UCD
#[derive(Error, Debug)]
pub enum SourceError
{
    /// поле не является шестнадцатеричным кодом
    #[error("строка {line}: некорректный код `{value}`")]
    InvalidCode
    {
        line: usize,
        value: String,
    },

    /// в строке меньше полей, чем требует формат файла
    #[error("строка {line}: ожидалось полей - не менее {expected}, найдено {found}")]
    MissingFields
    {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// отображение длиннее трёх кодпоинтов
    #[error("строка {line}: последовательность из {len} кодпоинтов, допустимо не более 3")]
    SequenceTooLong
    {
        line: usize,
        len: usize,
    },

    /// начало диапазона больше его конца
    #[error("строка {line}: некорректный диапазон {first:04X}..{last:04X}")]
    InvalidRange
    {
        line: usize,
        first: u32,
        last: u32,
    },

    /// файл UCD не удалось прочитать
    #[error("не удалось прочитать {path}")]
    Io
    {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// разобрать шестнадцатеричный код, запомнив строку для сообщения об ошибке
pub(crate) fn parse_code(value: &str, line: usize) -> Result<u32, SourceError>
{
    let value = value.trim();

    u32::from_str_radix(value, 16).map_err(|_| SourceError::InvalidCode {
        line,
        value: value.to_owned(),
    })
}

/// отрезать комментарий, оставив данные строки
pub(crate) fn strip_comment(line: &str) -> &str
{
    match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    }
}
