use crate::error::{parse_code, strip_comment};
use crate::properties::PropertyRange;
use crate::SourceError;

/// разбор файлов свойств UCD (PropList.txt, DerivedCoreProperties.txt)
///
/// формат строки:
///     <code>(..<code>)? ; <property> # <comment>
///
/// свойства с дополнительными значениями (например, InCB; Linker) сохраняются по названию свойства
pub fn property_ranges(data: &str) -> Result<Vec<PropertyRange>, SourceError>
{
    let mut ranges = vec![];

    for (i, line) in data.lines().enumerate() {
        let line_number = i + 1;
        let line = strip_comment(line);

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').map(str::trim).collect();

        if fields.len() < 2 {
            return Err(SourceError::MissingFields {
                line: line_number,
                expected: 2,
                found: fields.len(),
            });
        }

        let (first, last) = match fields[0].split_once("..") {
            Some((first, last)) => (parse_code(first, line_number)?, parse_code(last, line_number)?),
            None => {
                let code = parse_code(fields[0], line_number)?;
                (code, code)
            }
        };

        if first > last {
            return Err(SourceError::InvalidRange {
                line: line_number,
                first,
                last,
            });
        }

        ranges.push(PropertyRange {
            first,
            last,
            property: fields[1].to_owned(),
        });
    }

    Ok(ranges)
}
