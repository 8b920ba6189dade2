pub mod properties;

mod error;
mod prop_list;
mod special_casing;
mod ucd;
mod unicode;

pub use error::SourceError;

pub use properties::DefaultMapping;
pub use properties::OutputSequence;
pub use properties::PropertyRange;
pub use properties::SimpleCaseMapping;
pub use properties::SpecialCasing;

pub use prop_list::property_ranges;
pub use special_casing::special_casing;
pub use unicode::unicode_data;

pub use ucd::Ucd;
pub use ucd::DERIVED_CORE_PROPERTIES;
pub use ucd::PROP_LIST;
pub use ucd::SPECIAL_CASING;
pub use ucd::UNICODE_DATA;
