use std::path::Path;

use unicode_case_source::Ucd;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// выдержка из UCD, на которой тестируется генерация таблиц
pub const UCD_DIR: &str = "./../prepare/tests/data";

/// прочитать и разобрать файлы UCD
pub fn read_ucd(dir: &str) -> Ucd
{
    match Ucd::read(Path::new(dir)) {
        Ok(ucd) => ucd,
        Err(e) => panic!("не удалось прочитать UCD из {}: {}", dir, e),
    }
}

/// последовательности для упаковки: все префиксы и суффиксы результатов отображений
pub fn sequences(ucd: &Ucd) -> Vec<Vec<u32>>
{
    let mut sequences = vec![];

    for special in ucd.special_casings.iter() {
        for sequence in [&special.lower, &special.title, &special.upper].into_iter().flatten() {
            let codes = sequence.as_slice();

            for i in 0 .. codes.len() {
                sequences.push(codes[i ..].to_vec());
                sequences.push(codes[.. codes.len() - i].to_vec());
            }
        }
    }

    sequences
}
