use std::collections::{BTreeMap, BTreeSet};

use crate::PrepareError;

/// битовая маска условий; 0 - правило без условий
pub type ConditionMask = u16;

/// максимальное количество различных условий
pub const MAX_CONDITIONS: usize = ConditionMask::BITS as usize;

/// каталог условий: каждому названию условия - свой бит маски
///
/// биты назначаются в порядке регистрации, поэтому для воспроизводимости таблиц каталог
/// заполняется отсортированным списком названий (см. from_names)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionCatalog
{
    bits: BTreeMap<String, u8>,
}

impl ConditionCatalog
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// каталог из всех встреченных названий: повторы отбрасываются, регистрация - в лексикографическом порядке
    pub fn from_names<'a, I>(names: I) -> Result<Self, PrepareError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sorted: BTreeSet<&str> = names.into_iter().collect();
        let mut catalog = Self::new();

        for name in sorted {
            catalog.register(name)?;
        }

        Ok(catalog)
    }

    /// бит условия; новое условие получает следующий свободный бит
    pub fn register(&mut self, name: &str) -> Result<u8, PrepareError>
    {
        if let Some(&bit) = self.bits.get(name) {
            return Ok(bit);
        }

        let bit = self.bits.len();

        if bit >= MAX_CONDITIONS {
            return Err(PrepareError::TooManyConditions {
                name: name.to_owned(),
                limit: MAX_CONDITIONS,
            });
        }

        log::debug!("условие {}: бит {}", name, bit);

        self.bits.insert(name.to_owned(), bit as u8);

        Ok(bit as u8)
    }

    /// маска набора условий, незнакомые условия регистрируются
    pub fn encode<'a, I>(&mut self, names: I) -> Result<ConditionMask, PrepareError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mask = 0;

        for name in names {
            mask |= 1 << self.register(name)?;
        }

        Ok(mask)
    }

    /// бит условия без регистрации
    #[inline]
    pub fn bit(&self, name: &str) -> Option<u8>
    {
        self.bits.get(name).copied()
    }

    /// маска набора уже зарегистрированных условий, None - если хотя бы одно условие неизвестно
    pub fn mask<'a, I>(&self, names: I) -> Option<ConditionMask>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .try_fold(0, |mask, name| Some(mask | 1 << self.bit(name)?))
    }

    /// перечисление условий (название, бит) в порядке битов
    pub fn conditions(&self) -> Vec<(String, u8)>
    {
        let mut conditions: Vec<(String, u8)> =
            self.bits.iter().map(|(name, &bit)| (name.clone(), bit)).collect();

        conditions.sort_by_key(|&(_, bit)| bit);

        conditions
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.bits.is_empty()
    }
}
