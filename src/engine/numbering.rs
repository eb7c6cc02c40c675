//! Delivery-order (DO) number generation.
//!
//! DO numbers look like `DO2025-0042`: the year the order was created and a per-year sequence.
//! The next number is derived from the records already in the session, so there is nothing to
//! persist. Two browser tabs generating numbers at the same time can collide; each tab holds its
//! own copy of the dataset and nothing coordinates them.

/// Prefix shared by every DO number of `year`, e.g. `DO2025-`.
pub fn do_prefix(year: i32) -> String {
    format!("DO{}-", year)
}

/// Derives the next DO number for `year`.
///
/// Scans the existing numbers carrying the year's prefix, takes the highest sequence and adds
/// one. Numbers from other years and suffixes that do not start with a digit are ignored.
///
/// # Arguments
/// - `existing` - Every DO number known to the session, including orders created in it
/// - `year` - Year the new order is created in
///
/// # Returns
/// The prefix followed by the sequence zero-padded to at least four digits.
///
/// # Example
/// ```
/// use siba::engine::numbering::next_do_number;
///
/// let next = next_do_number(["DO2025-0001", "DO2025-0004", "DO2024-0099"], 2025);
/// assert_eq!(next, "DO2025-0005");
/// ```
pub fn next_do_number<'a, I>(existing: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = do_prefix(year);

    let max = existing
        .into_iter()
        .filter_map(|number| number.strip_prefix(prefix.as_str()))
        .filter_map(parse_sequence)
        .max()
        .unwrap_or(0);

    format!("{}{:04}", prefix, max.saturating_add(1))
}

/// Reads the leading decimal digits of a DO suffix.
fn parse_sequence(suffix: &str) -> Option<u64> {
    let end = suffix
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(suffix.len());
    suffix[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod next_do_number {
        use super::*;

        /// Tests incrementing past the highest existing sequence.
        ///
        /// Expected: "DO2025-0005"
        #[test]
        fn increments_highest_sequence() {
            let next = next_do_number(["DO2025-0001", "DO2025-0004"], 2025);
            assert_eq!(next, "DO2025-0005");
        }

        /// Tests numbering the first order of a year.
        ///
        /// Expected: "DO2026-0001"
        #[test]
        fn starts_at_one_without_records() {
            assert_eq!(next_do_number([], 2026), "DO2026-0001");
        }

        /// Tests that other years never influence the sequence.
        ///
        /// Expected: "DO2026-0001" even though 2025 reached 0042
        #[test]
        fn ignores_other_years() {
            let next = next_do_number(["DO2025-0042", "DO2024-0100"], 2026);
            assert_eq!(next, "DO2026-0001");
        }

        /// Tests that unordered input still yields the maximum.
        ///
        /// Expected: "DO2025-0011"
        #[test]
        fn uses_maximum_not_last() {
            let next = next_do_number(["DO2025-0010", "DO2025-0002", "DO2025-0007"], 2025);
            assert_eq!(next, "DO2025-0011");
        }

        /// Tests that duplicated numbers do not advance the sequence twice.
        ///
        /// Expected: "DO2025-0004"
        #[test]
        fn duplicates_do_not_double_count() {
            let next = next_do_number(["DO2025-0003", "DO2025-0003"], 2025);
            assert_eq!(next, "DO2025-0004");
        }

        /// Tests suffixes without leading digits and suffixes with trailing text.
        ///
        /// Expected: "DO2025-0008" ("7-retur" counts as 7, "X" is ignored)
        #[test]
        fn parses_leading_digits_only() {
            let next = next_do_number(["DO2025-X", "DO2025-7-retur"], 2025);
            assert_eq!(next, "DO2025-0008");
        }

        /// Tests sequences beyond four digits.
        ///
        /// Expected: "DO2025-10000"
        #[test]
        fn grows_past_four_digits() {
            assert_eq!(next_do_number(["DO2025-9999"], 2025), "DO2025-10000");
        }
    }
}
