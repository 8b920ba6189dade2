use crate::error::parse_code;
use crate::properties::*;
use crate::SourceError;

/// количество полей в строке UnicodeData.txt
const UNICODE_DATA_FIELDS: usize = 15;

/// разбор UnicodeData.txt из UCD: простые отображения регистра
///
/// возвращаются только кодпоинты, у которых есть хотя бы одно отображение, в порядке файла
pub fn unicode_data(data: &str) -> Result<Vec<DefaultMapping>, SourceError>
{
    let mut mappings = vec![];

    for (i, line) in data.lines().enumerate() {
        let line_number = i + 1;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() < UNICODE_DATA_FIELDS {
            return Err(SourceError::MissingFields {
                line: line_number,
                expected: UNICODE_DATA_FIELDS,
                found: props.len(),
            });
        }

        let code = parse_code(props[0], line_number)?;

        // диапазоны (<CJK Ideograph, First> .. <..., Last>) не имеют отображений регистра,
        // поэтому раскрывать их не нужно - достаточно того, что колонки 12 - 14 пусты

        // связанные символы в другом регистре (если есть)
        let upper = SimpleCaseMapping::parse(props[12], line_number)?;
        let lower = SimpleCaseMapping::parse(props[13], line_number)?;
        let title = SimpleCaseMapping::parse(props[14], line_number)?;

        let mapping = DefaultMapping {
            code,
            lower,
            title,
            upper,
        };

        if mapping.has_mappings() {
            mappings.push(mapping);
        }
    }

    log::debug!("UnicodeData.txt: кодпоинтов с отображениями регистра - {}", mappings.len());

    Ok(mappings)
}
