//! Population count of a 32-bit word, three ways.
//!
//! `bitcount` and `bitcount2` walk every significant bit, `bitcount3`
//! only visits the set ones.
//!
//! ```
//! use bitcount::{bitcount, bitcount2, bitcount3};
//! for &num in &[0, 1, 0b_11, 0b_1000, u32::MAX] {
//!     let want = num.count_ones();
//!     assert_eq!(bitcount(num), want);
//!     assert_eq!(bitcount2(num), want);
//!     assert_eq!(bitcount3(num), want);
//! }
//! ```

mod pop_count;

pub mod check;

pub use pop_count::{bitcount, bitcount2, bitcount3, Variant, Word, WIDTH};
