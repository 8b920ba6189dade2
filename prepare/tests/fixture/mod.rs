use unicode_case_source::Ucd;

lazy_static! {
    /// выдержка из UCD 15.1.0
    pub static ref UCD: Ucd = ucd();
}

const UNICODE_DATA: &str = include_str!("./../data/UnicodeData.txt");
const SPECIAL_CASING: &str = include_str!("./../data/SpecialCasing.txt");
const PROP_LIST: &str = include_str!("./../data/PropList.txt");
const DERIVED_CORE_PROPERTIES: &str = include_str!("./../data/DerivedCoreProperties.txt");

fn ucd() -> Ucd
{
    Ucd::parse(UNICODE_DATA, SPECIAL_CASING, PROP_LIST, DERIVED_CORE_PROPERTIES).unwrap()
}
