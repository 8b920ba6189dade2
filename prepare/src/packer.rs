use std::ops::Range;

/// полуоткрытый интервал [lo, hi) в плоском массиве; lo == hi - пустой интервал
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Interval
{
    pub lo: usize,
    pub hi: usize,
}

impl Interval
{
    pub fn new(lo: usize, hi: usize) -> Self
    {
        assert!(lo <= hi, "интервал [{}, {}) с отрицательной длиной", lo, hi);

        Self { lo, hi }
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.hi - self.lo
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.lo == self.hi
    }

    #[inline]
    pub fn range(&self) -> Range<usize>
    {
        self.lo .. self.hi
    }
}

/// упаковщик последовательностей в общий плоский массив
///
/// последовательность, уже встречающаяся в массиве подряд, повторно не записывается -
/// вместо этого возвращается интервал самого левого вхождения. поиск перекрытий,
/// начинающихся внутри кандидата (как при построении суффиксного массива), не выполняется
#[derive(Debug, Clone)]
pub struct SequencePacker<T>
{
    buffer: Vec<T>,
    /// сколько раз последовательность нашлась в массиве
    reused: usize,
    /// сколько раз последовательность пришлось дописать
    appended: usize,
}

impl<T> Default for SequencePacker<T>
{
    fn default() -> Self
    {
        Self {
            buffer: vec![],
            reused: 0,
            appended: 0,
        }
    }
}

impl<T: PartialEq + Clone> SequencePacker<T>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// интервал, содержащий последовательность: найденный в массиве или дописанный в его конец
    ///
    /// пустая последовательность - пустой интервал [N, N), где N - текущая длина массива
    pub fn pack(&mut self, candidate: &[T]) -> Interval
    {
        if candidate.is_empty() {
            return Interval::new(self.buffer.len(), self.buffer.len());
        }

        let interval = match self.find(candidate) {
            Some(lo) => {
                self.reused += 1;
                Interval::new(lo, lo + candidate.len())
            }
            None => {
                let lo = self.buffer.len();

                self.buffer.extend_from_slice(candidate);
                self.appended += 1;

                Interval::new(lo, self.buffer.len())
            }
        };

        assert!(
            self.buffer[interval.range()] == *candidate,
            "интервал [{}, {}) не совпадает с упакованной последовательностью",
            interval.lo,
            interval.hi
        );

        interval
    }

    /// начало самого левого вхождения последовательности в массив
    ///
    /// кандидатами являются позиции, на которых стоит первый элемент последовательности;
    /// с каждой из них (слева направо) последовательность сравнивается поэлементно
    pub fn find(&self, candidate: &[T]) -> Option<usize>
    {
        let first = candidate.first()?;

        self.buffer
            .iter()
            .enumerate()
            .filter(|(_, element)| *element == first)
            .map(|(position, _)| position)
            .find(|&position| self.buffer[position ..].starts_with(candidate))
    }

    /// элементы массива в пределах интервала
    #[inline]
    pub fn get(&self, interval: Interval) -> &[T]
    {
        &self.buffer[interval.range()]
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T]
    {
        &self.buffer
    }

    pub fn reused(&self) -> usize
    {
        self.reused
    }

    pub fn appended(&self) -> usize
    {
        self.appended
    }

    pub fn into_inner(self) -> Vec<T>
    {
        self.buffer
    }
}
