use std::collections::BTreeSet;

use unicode_case_source::PropertyRange;

pub const CASED: &str = "Cased";
pub const CASE_IGNORABLE: &str = "Case_Ignorable";
pub const SOFT_DOTTED: &str = "Soft_Dotted";

/// наборы кодпоинтов со свойствами, нужными для проверки условий во время выполнения
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySets
{
    /// Cased (DerivedCoreProperties.txt)
    pub cased: Vec<u32>,
    /// Case_Ignorable (DerivedCoreProperties.txt)
    pub case_ignorable: Vec<u32>,
    /// Soft_Dotted (PropList.txt)
    pub soft_dotted: Vec<u32>,
}

impl PropertySets
{
    pub fn extract(prop_list: &[PropertyRange], derived_core_properties: &[PropertyRange]) -> Self
    {
        Self {
            cased: codepoints_with(derived_core_properties, CASED),
            case_ignorable: codepoints_with(derived_core_properties, CASE_IGNORABLE),
            soft_dotted: codepoints_with(prop_list, SOFT_DOTTED),
        }
    }
}

/// кодпоинты всех диапазонов с указанным свойством, по возрастанию и без повторов
///
/// название свойства сравнивается целиком: Cased и Case_Ignorable - разные свойства
pub fn codepoints_with(ranges: &[PropertyRange], property: &str) -> Vec<u32>
{
    let codes: BTreeSet<u32> = ranges
        .iter()
        .filter(|range| range.property == property)
        .flat_map(PropertyRange::codes)
        .collect();

    codes.into_iter().collect()
}
