use std::cmp::Ordering;

/// максимальная длина отображения регистра в SpecialCasing.txt
pub const MAX_SEQUENCE_LEN: usize = 3;

/// результат отображения: последовательность из 1 - 3 кодпоинтов
///
/// неиспользуемые элементы хранятся нулями, поэтому побайтовое сравнение совпадает со сравнением срезов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputSequence
{
    codes: [u32; MAX_SEQUENCE_LEN],
    len: u8,
}

impl OutputSequence
{
    /// последовательность из среза; None, если срез пуст или длиннее трёх кодпоинтов
    pub fn new(codes: &[u32]) -> Option<Self>
    {
        if codes.is_empty() || codes.len() > MAX_SEQUENCE_LEN {
            return None;
        }

        let mut result = Self {
            codes: [0; MAX_SEQUENCE_LEN],
            len: codes.len() as u8,
        };

        result.codes[.. codes.len()].copy_from_slice(codes);

        Some(result)
    }

    /// последовательность из одного кодпоинта
    pub fn single(code: u32) -> Self
    {
        Self {
            codes: [code, 0, 0],
            len: 1,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32]
    {
        &self.codes[.. self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }
}

// лексикографический порядок кодпоинтов, более короткая последовательность - раньше своего продолжения
impl Ord for OutputSequence
{
    fn cmp(&self, other: &Self) -> Ordering
    {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for OutputSequence
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        Some(self.cmp(other))
    }
}
