use crate::error::{parse_code, strip_comment};
use crate::properties::*;
use crate::SourceError;

/// минимальное количество полей: код, строчные, заглавные, прописные
const SPECIAL_CASING_FIELDS: usize = 4;

/// разбор SpecialCasing.txt из UCD
///
/// формат строки:
///     <code>; <lower>; <title>; <upper>; (<condition_list>;)? # <comment>
///
/// пустое поле отображения означает отсутствие правила для этого направления
pub fn special_casing(data: &str) -> Result<Vec<SpecialCasing>, SourceError>
{
    let mut result = vec![];

    for (i, line) in data.lines().enumerate() {
        let line_number = i + 1;
        let line = strip_comment(line);

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() < SPECIAL_CASING_FIELDS {
            return Err(SourceError::MissingFields {
                line: line_number,
                expected: SPECIAL_CASING_FIELDS,
                found: fields.len(),
            });
        }

        let code = parse_code(fields[0], line_number)?;

        let lower = sequence(fields[1], line_number)?;
        let title = sequence(fields[2], line_number)?;
        let upper = sequence(fields[3], line_number)?;

        // после последнего ';' остаётся пустое поле, условия - пятое поле, если оно не пусто
        let conditions = match fields.get(4) {
            Some(field) => field.split_whitespace().map(str::to_owned).collect(),
            None => vec![],
        };

        result.push(SpecialCasing {
            code,
            lower,
            title,
            upper,
            conditions,
        });
    }

    log::debug!("SpecialCasing.txt: записей - {}", result.len());

    Ok(result)
}

/// последовательность кодпоинтов отображения, None - если поле пустое
fn sequence(field: &str, line: usize) -> Result<Option<OutputSequence>, SourceError>
{
    let codes = field
        .split_whitespace()
        .map(|v| parse_code(v, line))
        .collect::<Result<Vec<u32>, SourceError>>()?;

    if codes.is_empty() {
        return Ok(None);
    }

    match OutputSequence::new(&codes) {
        Some(sequence) => Ok(Some(sequence)),
        None => Err(SourceError::SequenceTooLong {
            line,
            len: codes.len(),
        }),
    }
}
