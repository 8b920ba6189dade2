pub mod catalog;
pub mod cli;
pub mod config;
pub mod merge;
pub mod output;
pub mod packer;
pub mod properties;
pub mod tables;

mod error;

pub use catalog::{ConditionCatalog, ConditionMask};
pub use config::{load_config, PrepareConfig};
pub use error::PrepareError;
pub use merge::{merge, Direction, MergePolicy, MergedRules, Provenance, RawRule, RuleMerger};
pub use packer::{Interval, SequencePacker};
pub use properties::PropertySets;
pub use tables::{CaseMappingEntry, CaseTables, MappingTo, TableBuilder};

use unicode_case_source::Ucd;

/// подготавливаем таблицы отображения регистра
pub fn prepare(ucd: &Ucd, policy: MergePolicy) -> Result<CaseTables, PrepareError>
{
    let rules = merge(policy, &ucd.default_mappings, &ucd.special_casings);

    log::info!(
        "правила объединены ({:?}): списков правил - {}",
        policy,
        rules.len()
    );

    let properties = PropertySets::extract(&ucd.prop_list, &ucd.derived_core_properties);

    tables::build(&rules, properties)
}
