use std::io::{self, Write};

use crate::tables::{CaseMappingEntry, CaseTables, MappingTo};

use self::format::{format_items, format_num, format_num_vec};

pub mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// подготовленные данные в виде выражения Rust, пригодного для include!
pub fn render(tables: &CaseTables, line_width: usize) -> String
{
    format!(
        "CaseMappingData {{\n  \
            conditions: &[{}  ],\n  \
            codepoints: &[{}  ],\n  \
            mappings: &[{}  ],\n  \
            to_lower: &[{}  ],\n  \
            to_title: &[{}  ],\n  \
            to_upper: &[{}  ],\n  \
            cased: &[{}  ],\n  \
            case_ignorable: &[{}  ],\n  \
            soft_dotted: &[{}  ],\n\
        }}\n",
        format_conditions(&tables.conditions, line_width),
        format_num_vec(&tables.codepoints, line_width),
        format_mappings(&tables.mappings, line_width),
        format_entries(&tables.to_lower, line_width),
        format_entries(&tables.to_title, line_width),
        format_entries(&tables.to_upper, line_width),
        format_num_vec(&tables.cased, line_width),
        format_num_vec(&tables.case_ignorable, line_width),
        format_num_vec(&tables.soft_dotted, line_width),
    )
}

/// пишем подготовленные данные
pub fn write<W: Write>(tables: &CaseTables, line_width: usize, out: &mut W) -> io::Result<()>
{
    out.write_all(render(tables, line_width).as_bytes())
}

/// перечисление условий: ("название", маска)
fn format_conditions(conditions: &[(String, u8)], line_width: usize) -> String
{
    format_items(
        conditions
            .iter()
            .map(|(name, bit)| format!("(\"{}\", {})", name, format_num(1u16 << bit))),
        line_width,
    )
}

/// упакованные правила: (начало результата, конец результата, маска условий)
fn format_mappings(mappings: &[MappingTo], line_width: usize) -> String
{
    format_items(
        mappings.iter().map(|m| {
            format!(
                "({}, {}, {})",
                m.output.lo,
                m.output.hi,
                format_num(m.conditions)
            )
        }),
        line_width,
    )
}

/// строки таблицы отображения: (кодпоинт, начало правил, конец правил)
fn format_entries(entries: &[CaseMappingEntry], line_width: usize) -> String
{
    format_items(
        entries
            .iter()
            .map(|e| format!("({}, {}, {})", format_num(e.code), e.rules.lo, e.rules.hi)),
        line_width,
    )
}
