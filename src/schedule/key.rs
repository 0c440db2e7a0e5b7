//! Taxpayer identifier validation and digit-to-index mappings.

use serde::Serialize;

/// Longest identifier accepted from the form; real NITs run 9–10 digits.
const MAX_NIT_LEN: usize = 12;

/// Due dates are assigned to trailing digits in the order the regulator
/// publishes them: 1, 2, 3, 4, 5, 6, 7, 8, 9, 0. This table maps a last
/// digit to its position in that sequence. It is a historical convention,
/// not numeric order, so it stays a lookup table.
const LAST_DIGIT_INDEX: [usize; 10] = [9, 0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Two-digit calendars assign one date per pair of consecutive values,
/// with "00" counting as one hundred: 01–02 share the first date, 03–04
/// the second, …, 99–00 the fiftieth.
pub const TWO_DIGIT_HORIZON: usize = 50;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NitError {
    #[error("el NIT no puede estar vacío")]
    Empty,
    #[error("el NIT debe contener solo números")]
    NonNumeric,
    #[error("el NIT no puede exceder {MAX_NIT_LEN} dígitos")]
    TooLong,
}

/// The trailing digits of a NIT that drive deadline selection.
///
/// Derived per query and never persisted; the rest of the identifier is
/// irrelevant to scheduling and is dropped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxpayerKey {
    last_digit: u8,
    last_pair: u8,
}

impl TaxpayerKey {
    pub fn from_nit(nit: &str) -> Result<Self, NitError> {
        let trimmed = nit.trim();
        if trimmed.is_empty() {
            return Err(NitError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NitError::NonNumeric);
        }
        if trimmed.len() > MAX_NIT_LEN {
            return Err(NitError::TooLong);
        }

        let digits = trimmed.as_bytes();
        let last_digit = digits[digits.len() - 1] - b'0';
        // Single-digit identifiers read as a zero-padded pair.
        let penultimate = if digits.len() >= 2 {
            digits[digits.len() - 2] - b'0'
        } else {
            0
        };

        Ok(Self {
            last_digit,
            last_pair: penultimate * 10 + last_digit,
        })
    }

    pub fn last_digit(&self) -> u8 {
        self.last_digit
    }

    /// The last two digits as printed on the form, e.g. `"07"`.
    pub fn last_pair(&self) -> String {
        format!("{:02}", self.last_pair)
    }

    /// Position of the last digit in the regulator's filing order.
    pub fn single_digit_index(&self) -> usize {
        LAST_DIGIT_INDEX[self.last_digit as usize]
    }

    /// Index into a two-digit calendar, in `0..TWO_DIGIT_HORIZON`.
    pub fn two_digit_index(&self) -> usize {
        let value = if self.last_pair == 0 {
            100
        } else {
            self.last_pair as usize
        };
        (value - 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filing_order_follows_the_published_sequence() {
        let expected = [(1u8, 0usize), (2, 1), (5, 4), (9, 8), (0, 9)];
        for (digit, index) in expected {
            let key = TaxpayerKey::from_nit(&format!("90012345{digit}")).expect("valid nit");
            assert_eq!(key.single_digit_index(), index, "digit {digit}");
        }
    }

    #[test]
    fn filing_order_is_a_bijection() {
        let mut seen = [false; 10];
        for digit in 0..10u8 {
            let key = TaxpayerKey::from_nit(&digit.to_string()).expect("valid nit");
            let index = key.single_digit_index();
            assert!(index < 10);
            assert!(!seen[index], "index {index} assigned twice");
            seen[index] = true;
        }
        assert!(seen.iter().all(|covered| *covered));
    }

    #[test]
    fn consecutive_pairs_share_a_two_digit_index() {
        let index_of = |nit: &str| {
            TaxpayerKey::from_nit(nit)
                .expect("valid nit")
                .two_digit_index()
        };

        assert_eq!(index_of("1000001"), 0);
        assert_eq!(index_of("1000002"), 0);
        assert_eq!(index_of("1000003"), 1);
        assert_eq!(index_of("1000099"), 49);
        // "00" counts as one hundred and closes the calendar.
        assert_eq!(index_of("1000000"), 49);
    }

    #[test]
    fn two_digit_index_stays_inside_horizon() {
        for pair in 0..100u8 {
            let key = TaxpayerKey::from_nit(&format!("9{pair:02}")).expect("valid nit");
            assert!(key.two_digit_index() < TWO_DIGIT_HORIZON);
        }
    }

    #[test]
    fn single_digit_identifier_reads_as_zero_padded_pair() {
        let key = TaxpayerKey::from_nit("7").expect("valid nit");
        assert_eq!(key.last_digit(), 7);
        assert_eq!(key.last_pair(), "07");
        assert_eq!(key.two_digit_index(), 3);
    }

    #[test]
    fn rejects_non_numeric_empty_and_oversized_input() {
        assert_eq!(
            TaxpayerKey::from_nit("900.123-456"),
            Err(NitError::NonNumeric)
        );
        assert_eq!(TaxpayerKey::from_nit("   "), Err(NitError::Empty));
        assert_eq!(
            TaxpayerKey::from_nit("9001234567890"),
            Err(NitError::TooLong)
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let key = TaxpayerKey::from_nit(" 900123456 ").expect("valid nit");
        assert_eq!(key.last_digit(), 6);
        assert_eq!(key.last_pair(), "56");
    }
}
