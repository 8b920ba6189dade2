use crate::tables::CaseTables;

/// размер MappingTo в таблице: две границы интервала (u16) и маска условий (u16)
const MAPPING_TO_SIZE: usize = 6;
/// размер строки таблицы отображения: кодпоинт (u32) и две границы интервала (u16)
const CASE_MAPPING_SIZE: usize = 8;

/// информация о подготовленных таблицах
pub fn print(tables: &CaseTables)
{
    let codepoints = tables.codepoints.len() * 4;
    let mappings = tables.mappings.len() * MAPPING_TO_SIZE;
    let entries = (tables.to_lower.len() + tables.to_title.len() + tables.to_upper.len()) * CASE_MAPPING_SIZE;
    let properties = (tables.cased.len() + tables.case_ignorable.len() + tables.soft_dotted.len()) * 4;

    log::info!(
        "\n  \
        условий: {}\n  \
        размер массива кодпоинтов: {}\n  \
        размер массива правил: {}\n  \
        размер таблиц отображений (lower / title / upper: {} / {} / {}): {}\n  \
        размер наборов свойств (cased / case ignorable / soft dotted: {} / {} / {}): {}\n  \
        общий размер: {}",
        tables.conditions.len(),
        codepoints,
        mappings,
        tables.to_lower.len(),
        tables.to_title.len(),
        tables.to_upper.len(),
        entries,
        tables.cased.len(),
        tables.case_ignorable.len(),
        tables.soft_dotted.len(),
        properties,
        codepoints + mappings + entries + properties,
    );

    let stats = &tables.stats;

    log::info!(
        "\n  \
        результаты отображений: дописано {}, найдено в массиве {}\n  \
        списки правил: дописано {}, найдено в массиве {}",
        stats.sequences_appended,
        stats.sequences_reused,
        stats.rule_lists_appended,
        stats.rule_lists_reused,
    );
}
