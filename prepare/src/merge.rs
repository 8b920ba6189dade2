use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use unicode_case_source::{DefaultMapping, OutputSequence, SimpleCaseMapping, SpecialCasing};

/// направление отображения регистра
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction
{
    Lower,
    Title,
    Upper,
}

impl Direction
{
    /// все направления в порядке обхода при построении таблиц
    pub const ALL: [Direction; 3] = [Direction::Lower, Direction::Title, Direction::Upper];

    #[inline]
    fn index(self) -> usize
    {
        self as usize
    }
}

impl fmt::Display for Direction
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(match self {
            Direction::Lower => "lower",
            Direction::Title => "title",
            Direction::Upper => "upper",
        })
    }
}

/// источник правила
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance
{
    /// простое отображение из UnicodeData.txt
    Default,
    /// специальное отображение из SpecialCasing.txt
    Special,
}

/// набор условий правила; пустой набор - безусловное правило
pub type ConditionSet = BTreeSet<String>;

/// правило отображения кодпоинта в одном направлении
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRule
{
    pub output: OutputSequence,
    pub conditions: ConditionSet,
    pub provenance: Provenance,
}

impl RawRule
{
    pub fn new(output: OutputSequence, conditions: ConditionSet, provenance: Provenance) -> Self
    {
        Self {
            output,
            conditions,
            provenance,
        }
    }

    #[inline]
    pub fn is_unconditional(&self) -> bool
    {
        self.conditions.is_empty()
    }

    /// одинаковые результат и условия - одно и то же правило, независимо от источника
    #[inline]
    pub fn same_as(&self, other: &RawRule) -> bool
    {
        self.output == other.output && self.conditions == other.conditions
    }
}

/// как специальные отображения сочетаются с простыми
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy
{
    /// первое же специальное правило для кодпоинта отбрасывает простое
    #[default]
    Replace,
    /// простое правило остаётся запасным вариантом после условных специальных;
    /// специальное правило без условий заменяет его
    Fallback,
}

impl FromStr for MergePolicy
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s {
            "replace" => Ok(Self::Replace),
            "fallback" => Ok(Self::Fallback),
            _ => Err(format!("неизвестная политика объединения `{}`: replace или fallback", s)),
        }
    }
}

/// правила одного направления: кодпоинт -> упорядоченный список правил
pub type DirectionRules = BTreeMap<u32, Vec<RawRule>>;

/// объединение правил из UnicodeData.txt и SpecialCasing.txt
///
/// простые отображения должны быть добавлены до специальных
#[derive(Debug, Clone, Default)]
pub struct RuleMerger
{
    policy: MergePolicy,
    rules: [DirectionRules; 3],
    /// условия всех специальных записей, в том числе записей без отображений
    conditions: BTreeSet<String>,
}

impl RuleMerger
{
    pub fn new(policy: MergePolicy) -> Self
    {
        Self {
            policy,
            rules: Default::default(),
            conditions: BTreeSet::new(),
        }
    }

    /// простые отображения кодпоинта
    pub fn add_default(&mut self, mapping: &DefaultMapping)
    {
        let directions = [
            (Direction::Lower, mapping.lower),
            (Direction::Title, mapping.title),
            (Direction::Upper, mapping.upper),
        ];

        for (direction, simple) in directions {
            if let SimpleCaseMapping::Some(code) = simple {
                let rule = RawRule::new(OutputSequence::single(code), ConditionSet::new(), Provenance::Default);
                self.insert_default(direction, mapping.code, rule);
            }
        }
    }

    /// специальные отображения кодпоинта
    pub fn add_special(&mut self, special: &SpecialCasing)
    {
        let directions = [
            (Direction::Lower, special.lower),
            (Direction::Title, special.title),
            (Direction::Upper, special.upper),
        ];

        let conditions: ConditionSet = special.conditions.iter().cloned().collect();

        self.conditions.extend(conditions.iter().cloned());

        for (direction, output) in directions {
            if let Some(output) = output {
                let rule = RawRule::new(output, conditions.clone(), Provenance::Special);
                self.insert_special(direction, special.code, rule);
            }
        }
    }

    fn insert_default(&mut self, direction: Direction, code: u32, rule: RawRule)
    {
        let policy = self.policy;
        let list = self.rules[direction.index()].entry(code).or_default();

        let has_special = list.iter().any(|r| r.provenance == Provenance::Special);
        let has_special_unconditional = list
            .iter()
            .any(|r| r.provenance == Provenance::Special && r.is_unconditional());

        let skip = match policy {
            MergePolicy::Replace => has_special,
            MergePolicy::Fallback => has_special_unconditional,
        };

        if skip {
            log::debug!("U+{:04X} ({}): простое отображение перекрыто специальным", code, direction);
            return;
        }

        if list.iter().any(|r| r.provenance == Provenance::Default) {
            log::warn!("U+{:04X} ({}): повторное простое отображение, оставляем последнее", code, direction);
            list.retain(|r| r.provenance != Provenance::Default);
        }

        list.push(rule);
    }

    fn insert_special(&mut self, direction: Direction, code: u32, rule: RawRule)
    {
        let list = self.rules[direction.index()].entry(code).or_default();

        let discard_default = match self.policy {
            MergePolicy::Replace => true,
            MergePolicy::Fallback => rule.is_unconditional(),
        };

        if discard_default {
            list.retain(|r| r.provenance != Provenance::Default);
        }

        list.push(rule);
    }

    /// итоговые списки правил: без повторов, безусловное правило - последним
    pub fn finish(self) -> MergedRules
    {
        let rules = self.rules.map(|direction_rules| {
            direction_rules
                .into_iter()
                .map(|(code, list)| {
                    let list = unconditional_last(code, dedup(list));
                    (code, list)
                })
                .collect()
        });

        MergedRules {
            rules,
            conditions: self.conditions,
        }
    }
}

/// объединить простые и специальные отображения
pub fn merge(
    policy: MergePolicy,
    defaults: &[DefaultMapping],
    specials: &[SpecialCasing],
) -> MergedRules
{
    let mut merger = RuleMerger::new(policy);

    for mapping in defaults {
        merger.add_default(mapping);
    }

    for special in specials {
        merger.add_special(special);
    }

    merger.finish()
}

/// убрать повторы правил, сохраняя порядок первых вхождений
fn dedup(list: Vec<RawRule>) -> Vec<RawRule>
{
    let mut result: Vec<RawRule> = Vec::with_capacity(list.len());

    for rule in list {
        if !result.iter().any(|r| r.same_as(&rule)) {
            result.push(rule);
        }
    }

    result
}

/// безусловное правило - в конец списка: при поиске оно проверяется последним.
/// если безусловных правил несколько - остаётся последнее
fn unconditional_last(code: u32, list: Vec<RawRule>) -> Vec<RawRule>
{
    let (mut conditional, unconditional): (Vec<RawRule>, Vec<RawRule>) =
        list.into_iter().partition(|r| !r.is_unconditional());

    if unconditional.len() > 1 {
        log::warn!(
            "U+{:04X}: безусловных правил - {}, оставляем последнее",
            code,
            unconditional.len()
        );
    }

    conditional.extend(unconditional.into_iter().last());

    conditional
}

/// объединённые правила по направлениям
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedRules
{
    rules: [DirectionRules; 3],
    conditions: BTreeSet<String>,
}

impl MergedRules
{
    /// правила направления, по возрастанию кодпоинтов
    #[inline]
    pub fn get(&self, direction: Direction) -> &DirectionRules
    {
        &self.rules[direction.index()]
    }

    /// список правил кодпоинта
    pub fn rules(&self, direction: Direction, code: u32) -> Option<&[RawRule]>
    {
        self.get(direction).get(&code).map(Vec::as_slice)
    }

    /// все правила всех направлений
    pub fn iter(&self) -> impl Iterator<Item = &RawRule>
    {
        self.rules.iter().flat_map(|rules| rules.values().flatten())
    }

    /// все различные результаты отображений, по возрастанию
    pub fn output_sequences(&self) -> BTreeSet<OutputSequence>
    {
        self.iter().map(|rule| rule.output).collect()
    }

    /// названия условий всех специальных записей, по возрастанию
    ///
    /// условие записи без отображений правил не порождает, но в перечисление попадает
    pub fn condition_names(&self) -> BTreeSet<&str>
    {
        self.conditions.iter().map(String::as_str).collect()
    }

    /// количество списков правил (кодпоинт + направление)
    pub fn len(&self) -> usize
    {
        self.rules.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}
