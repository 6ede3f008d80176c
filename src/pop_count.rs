use std::fmt;

/// The word type every variant counts over.
pub type Word = u32;

/// Size of `Word` in bits.
pub const WIDTH: u32 = Word::BITS;

/// Naive count: test the lowest bit, then shift it out.
///
/// ```
/// assert_eq!(bitcount::bitcount(0b_1011), 3);
/// ```
#[inline]
pub fn bitcount(num: Word) -> u32 {
    shift_test(num).0
}

/// Same loop as `bitcount`, but adds the lowest bit instead of branching on it.
#[inline]
pub fn bitcount2(num: Word) -> u32 {
    shift_add(num).0
}

/// Counts by clearing the lowest set bit on every pass.
///
/// `num - 1` turns the lowest set bit into 0 and every zero below it into 1,
/// so `num & (num - 1)` drops exactly that bit:
///
/// ```text
///   0b0111    0b1000
/// & 0b0110  & 0b0111
/// = 0b0110  = 0b0000
/// ```
///
/// The loop runs once per set bit, not once per significant bit.
#[inline]
pub fn bitcount3(num: Word) -> u32 {
    clear_lowest(num).0
}

// Each loop returns (count, passes).

#[inline(always)]
fn shift_test(mut num: Word) -> (u32, u32) {
    let mut count = 0;
    let mut passes = 0;
    while num != 0 {
        if num & 1 == 1 {
            count += 1;
        }
        num >>= 1;
        passes += 1;
    }
    (count, passes)
}

#[inline(always)]
fn shift_add(mut num: Word) -> (u32, u32) {
    let mut count = 0;
    let mut passes = 0;
    while num != 0 {
        count += num & 1;
        num >>= 1;
        passes += 1;
    }
    (count, passes)
}

#[inline(always)]
fn clear_lowest(mut num: Word) -> (u32, u32) {
    let mut count = 0;
    while num != 0 {
        num &= num - 1;
        count += 1;
    }
    // one pass per cleared bit
    (count, count)
}

/// Names one of the counting strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `bitcount`
    ShiftTest,
    /// `bitcount2`
    ShiftAdd,
    /// `bitcount3`
    ClearLowest,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::ShiftTest, Variant::ShiftAdd, Variant::ClearLowest];

    /// Counts the set bits of `num` with this strategy.
    pub fn count(self, num: Word) -> u32 {
        match self {
            Variant::ShiftTest => bitcount(num),
            Variant::ShiftAdd => bitcount2(num),
            Variant::ClearLowest => bitcount3(num),
        }
    }

    /// Number of loop passes this strategy makes for `num`.
    ///
    /// Shifting variants pay for every significant bit,
    /// `ClearLowest` only for the set ones.
    pub fn passes(self, num: Word) -> u32 {
        match self {
            Variant::ShiftTest => shift_test(num).1,
            Variant::ShiftAdd => shift_add(num).1,
            Variant::ClearLowest => clear_lowest(num).1,
        }
    }

    /// Name of the function this variant dispatches to.
    pub fn name(self) -> &'static str {
        match self {
            Variant::ShiftTest => "bitcount",
            Variant::ShiftAdd => "bitcount2",
            Variant::ClearLowest => "bitcount3",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn zero() {
        for v in Variant::ALL {
            assert_eq!(v.count(0), 0, "{}", v);
        }
    }

    #[test]
    fn one() {
        for v in Variant::ALL {
            assert_eq!(v.count(1), 1, "{}", v);
        }
    }

    #[test]
    fn two_low_bits() {
        for v in Variant::ALL {
            assert_eq!(v.count(0b_11), 2, "{}", v);
        }
    }

    #[test]
    fn single_high_bit() {
        for v in Variant::ALL {
            assert_eq!(v.count(0b_1000), 1, "{}", v);
        }
    }

    #[test]
    fn all_ones() {
        for v in Variant::ALL {
            assert_eq!(v.count(Word::MAX), WIDTH, "{}", v);
            assert_eq!(v.passes(Word::MAX), WIDTH, "{}", v);
        }
    }

    #[test]
    fn top_bit_only() {
        let num = 1 << (WIDTH - 1);
        assert_eq!(bitcount(num), 1);
        assert_eq!(Variant::ShiftTest.passes(num), WIDTH);
        assert_eq!(Variant::ShiftAdd.passes(num), WIDTH);
        assert_eq!(Variant::ClearLowest.passes(num), 1);
    }

    #[test]
    fn names() {
        let names = Variant::ALL.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["bitcount", "bitcount2", "bitcount3"]);
    }

    quickcheck! {
        fn agrees_with_count_ones(num: u32) -> bool {
            let want = num.count_ones();
            bitcount(num) == want && bitcount2(num) == want && bitcount3(num) == want
        }

        fn repeated_calls_agree(num: u32) -> bool {
            Variant::ALL.iter().all(|v| v.count(num) == v.count(num))
        }

        fn clearing_a_set_bit_drops_one(num: u32, at: u8) -> TestResult {
            let i = u32::from(at) % WIDTH;
            if num & (1 << i) == 0 {
                return TestResult::discard();
            }
            let cleared = num & !(1 << i);
            TestResult::from_bool(
                Variant::ALL.iter().all(|v| v.count(cleared) + 1 == v.count(num)),
            )
        }

        fn shifting_passes_follow_width(num: u32) -> bool {
            let want = WIDTH - num.leading_zeros();
            Variant::ShiftTest.passes(num) == want && Variant::ShiftAdd.passes(num) == want
        }

        fn clearing_passes_follow_ones(num: u32) -> bool {
            Variant::ClearLowest.passes(num) == num.count_ones()
        }
    }
}
