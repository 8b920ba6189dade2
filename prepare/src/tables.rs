use std::collections::BTreeMap;

use unicode_case_source::OutputSequence;

use crate::catalog::{ConditionCatalog, ConditionMask};
use crate::merge::{Direction, MergedRules, RawRule};
use crate::packer::{Interval, SequencePacker};
use crate::properties::PropertySets;
use crate::PrepareError;

/// границы интервалов в таблицах хранятся как u16
pub const MAX_TABLE_LEN: usize = u16::MAX as usize;

/// упакованное правило: интервал результата в массиве кодпоинтов и маска условий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingTo
{
    pub output: Interval,
    pub conditions: ConditionMask,
}

/// строка таблицы отображения: кодпоинт и интервал его правил в массиве MappingTo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMappingEntry
{
    pub code: u32,
    pub rules: Interval,
}

/// статистика упаковки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackingStats
{
    pub sequences_reused: usize,
    pub sequences_appended: usize,
    pub rule_lists_reused: usize,
    pub rule_lists_appended: usize,
}

/// подготовленные данные для записи
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTables
{
    /// перечисление условий: название, бит
    pub conditions: Vec<(String, u8)>,
    /// общий массив результатов отображений
    pub codepoints: Vec<u32>,
    /// общий массив упакованных правил
    pub mappings: Vec<MappingTo>,
    pub to_lower: Vec<CaseMappingEntry>,
    pub to_title: Vec<CaseMappingEntry>,
    pub to_upper: Vec<CaseMappingEntry>,
    pub cased: Vec<u32>,
    pub case_ignorable: Vec<u32>,
    pub soft_dotted: Vec<u32>,
    pub stats: PackingStats,
}

impl CaseTables
{
    /// строки таблицы направления, по возрастанию кодпоинтов
    pub fn entries(&self, direction: Direction) -> &[CaseMappingEntry]
    {
        match direction {
            Direction::Lower => &self.to_lower,
            Direction::Title => &self.to_title,
            Direction::Upper => &self.to_upper,
        }
    }

    /// правила кодпоинта - так же, как их найдёт использующая таблицы библиотека (двоичным поиском)
    pub fn lookup(&self, direction: Direction, code: u32) -> Option<&[MappingTo]>
    {
        let entries = self.entries(direction);
        let index = entries.binary_search_by_key(&code, |e| e.code).ok()?;

        Some(&self.mappings[entries[index].rules.range()])
    }

    /// результат упакованного правила
    #[inline]
    pub fn output(&self, mapping: &MappingTo) -> &[u32]
    {
        &self.codepoints[mapping.output.range()]
    }
}

/// построение таблиц: два упаковщика и каталог условий
pub struct TableBuilder
{
    catalog: ConditionCatalog,
    codepoints: SequencePacker<u32>,
    mappings: SequencePacker<MappingTo>,
    sequences: BTreeMap<OutputSequence, Interval>,
}

impl TableBuilder
{
    pub fn new(catalog: ConditionCatalog) -> Self
    {
        Self {
            catalog,
            codepoints: SequencePacker::new(),
            mappings: SequencePacker::new(),
            sequences: BTreeMap::new(),
        }
    }

    /// упаковать результаты отображений в массив кодпоинтов, запомнив интервал каждого
    pub fn pack_sequences<I>(&mut self, sequences: I)
    where
        I: IntoIterator<Item = OutputSequence>,
    {
        for sequence in sequences {
            if self.sequences.contains_key(&sequence) {
                continue;
            }

            let interval = self.codepoints.pack(sequence.as_slice());
            self.sequences.insert(sequence, interval);
        }
    }

    /// упаковать список правил кодпоинта, результаты правил должны быть упакованы заранее
    pub fn pack_rules(&mut self, code: u32, rules: &[RawRule]) -> Interval
    {
        let records: Vec<MappingTo> = rules.iter().map(|rule| self.mapping_to(code, rule)).collect();

        self.mappings.pack(&records)
    }

    fn mapping_to(&self, code: u32, rule: &RawRule) -> MappingTo
    {
        let output = match self.sequences.get(&rule.output) {
            Some(interval) => *interval,
            None => panic!(
                "U+{:04X}: результат {:04X?} не упакован в массив кодпоинтов",
                code,
                rule.output.as_slice()
            ),
        };

        let conditions = match self.catalog.mask(rule.conditions.iter().map(String::as_str)) {
            Some(mask) => mask,
            None => panic!(
                "U+{:04X}: условия {:?} отсутствуют в каталоге",
                code, rule.conditions
            ),
        };

        MappingTo { output, conditions }
    }

    /// таблицы отображений; наборы свойств передаются в результат без изменений
    pub fn build(mut self, rules: &MergedRules, properties: PropertySets) -> Result<CaseTables, PrepareError>
    {
        self.pack_sequences(rules.output_sequences());

        log::debug!(
            "массив кодпоинтов: {} элементов, результатов отображений - {}",
            self.codepoints.len(),
            self.sequences.len()
        );

        let mut tables: [Vec<CaseMappingEntry>; 3] = Default::default();

        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            for (&code, list) in rules.get(direction) {
                let interval = self.pack_rules(code, list);
                tables[i].push(CaseMappingEntry {
                    code,
                    rules: interval,
                });
            }

            log::debug!("{}: кодпоинтов - {}", direction, tables[i].len());
        }

        check_len("codepoints", self.codepoints.len())?;
        check_len("mappings", self.mappings.len())?;

        let stats = PackingStats {
            sequences_reused: self.codepoints.reused(),
            sequences_appended: self.codepoints.appended(),
            rule_lists_reused: self.mappings.reused(),
            rule_lists_appended: self.mappings.appended(),
        };

        let [to_lower, to_title, to_upper] = tables;

        Ok(CaseTables {
            conditions: self.catalog.conditions(),
            codepoints: self.codepoints.into_inner(),
            mappings: self.mappings.into_inner(),
            to_lower,
            to_title,
            to_upper,
            cased: properties.cased,
            case_ignorable: properties.case_ignorable,
            soft_dotted: properties.soft_dotted,
            stats,
        })
    }
}

/// границы интервалов должны поместиться в u16
fn check_len(table: &'static str, len: usize) -> Result<(), PrepareError>
{
    match len > MAX_TABLE_LEN {
        true => Err(PrepareError::IntervalOverflow { table, len }),
        false => Ok(()),
    }
}

/// построить таблицы из объединённых правил
pub fn build(rules: &MergedRules, properties: PropertySets) -> Result<CaseTables, PrepareError>
{
    let catalog = ConditionCatalog::from_names(rules.condition_names())?;

    log::debug!("условий - {}", catalog.len());

    TableBuilder::new(catalog).build(rules, properties)
}
