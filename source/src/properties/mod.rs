mod output_sequence;
mod simple_case_mapping;

pub use output_sequence::OutputSequence;
pub use simple_case_mapping::SimpleCaseMapping;

/// простые (односимвольные) отображения регистра кодпоинта
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultMapping
{
    /// код символа
    pub code: u32,
    /// соответствующая строчная буква
    pub lower: SimpleCaseMapping,
    /// соответствующая заглавная буква
    pub title: SimpleCaseMapping,
    /// соответствующая прописная буква
    pub upper: SimpleCaseMapping,
}

impl DefaultMapping
{
    /// есть ли у кодпоинта хотя бы одно отображение?
    pub fn has_mappings(&self) -> bool
    {
        [self.lower, self.title, self.upper]
            .iter()
            .any(|m| m.code().is_some())
    }
}

/// специальное (возможно, условное) отображение регистра
/// источник - UCD, SpecialCasing.txt
///
/// отсутствие последовательности означает, что для данного направления запись ничего не задаёт
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCasing
{
    /// код символа
    pub code: u32,
    /// отображение в строчные
    pub lower: Option<OutputSequence>,
    /// отображение в заглавные
    pub title: Option<OutputSequence>,
    /// отображение в прописные
    pub upper: Option<OutputSequence>,
    /// названия условий в порядке записи в файле: языки (tr, lt, ..) и контексты (Final_Sigma, ..)
    pub conditions: Vec<String>,
}

/// диапазон кодпоинтов с указанным свойством
/// источник - UCD, PropList.txt и DerivedCoreProperties.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRange
{
    /// первый кодпоинт диапазона
    pub first: u32,
    /// последний кодпоинт диапазона (включительно)
    pub last: u32,
    /// название свойства
    pub property: String,
}

impl PropertyRange
{
    /// кодпоинты диапазона
    pub fn codes(&self) -> impl Iterator<Item = u32>
    {
        self.first ..= self.last
    }
}
