use std::fs;
use std::path::Path;

use crate::properties::*;
use crate::{property_ranges, special_casing, unicode_data, SourceError};

pub const UNICODE_DATA: &str = "UnicodeData.txt";
pub const SPECIAL_CASING: &str = "SpecialCasing.txt";
pub const PROP_LIST: &str = "PropList.txt";
pub const DERIVED_CORE_PROPERTIES: &str = "DerivedCoreProperties.txt";

/// разобранные данные UCD, необходимые для таблиц регистра
#[derive(Debug, Clone, Default)]
pub struct Ucd
{
    /// простые отображения (UnicodeData.txt)
    pub default_mappings: Vec<DefaultMapping>,
    /// специальные отображения (SpecialCasing.txt)
    pub special_casings: Vec<SpecialCasing>,
    /// PropList.txt - источник Soft_Dotted
    pub prop_list: Vec<PropertyRange>,
    /// DerivedCoreProperties.txt - источник Cased, Case_Ignorable
    pub derived_core_properties: Vec<PropertyRange>,
}

impl Ucd
{
    /// разобрать содержимое четырёх файлов UCD
    pub fn parse(
        unicode: &str,
        special: &str,
        prop_list: &str,
        derived_core_properties: &str,
    ) -> Result<Self, SourceError>
    {
        Ok(Self {
            default_mappings: unicode_data(unicode)?,
            special_casings: special_casing(special)?,
            prop_list: property_ranges(prop_list)?,
            derived_core_properties: property_ranges(derived_core_properties)?,
        })
    }

    /// прочитать файлы UCD из каталога
    pub fn read(dir: &Path) -> Result<Self, SourceError>
    {
        log::info!("читаем UCD из {}", dir.display());

        let unicode = read(dir, UNICODE_DATA)?;
        let special = read(dir, SPECIAL_CASING)?;
        let prop_list = read(dir, PROP_LIST)?;
        let derived = read(dir, DERIVED_CORE_PROPERTIES)?;

        Self::parse(&unicode, &special, &prop_list, &derived)
    }
}

/// прочитать файл
fn read(dir: &Path, name: &str) -> Result<String, SourceError>
{
    let path = dir.join(name);

    fs::read_to_string(&path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })
}
