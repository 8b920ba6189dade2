use crate::error::parse_code;
use crate::SourceError;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// разобрать колонку UnicodeData.txt, line - номер строки для сообщения об ошибке
    pub fn parse(value: &str, line: usize) -> Result<Self, SourceError>
    {
        Ok(match value.trim().is_empty() {
            true => Self::None,
            false => Self::Some(parse_code(value, line)?),
        })
    }

    /// код соответствующего символа, если он есть
    #[inline]
    pub fn code(&self) -> Option<u32>
    {
        match self {
            Self::None => None,
            Self::Some(code) => Some(*code),
        }
    }
}
