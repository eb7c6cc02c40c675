//! Indonesian display formatting for prices, quantities and dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats an amount in Rupiah with `.` as thousands separator, e.g. `Rp 1.250.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("Rp {}", grouped)
}

pub fn format_qty(quantity: u32) -> String {
    format!("{} buah", quantity)
}

/// Formats a date as `<day> <month> <year>` with the Indonesian month name.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// Formats a local timestamp as `YYYY-MM-DD HH:MM:SS`, the format journey entries use.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod format_rupiah {
        use super::*;

        /// Tests thousands grouping.
        ///
        /// Expected: dots every three digits from the right
        #[test]
        fn groups_thousands() {
            assert_eq!(format_rupiah(0), "Rp 0");
            assert_eq!(format_rupiah(950), "Rp 950");
            assert_eq!(format_rupiah(65_000), "Rp 65.000");
            assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
        }
    }

    mod format_date {
        use super::*;

        /// Tests the Indonesian long date.
        ///
        /// Expected: "5 Januari 2025" and "25 Agustus 2025"
        #[test]
        fn uses_indonesian_month_names() {
            assert_eq!(
                format_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
                "5 Januari 2025"
            );
            assert_eq!(
                format_date(NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()),
                "25 Agustus 2025"
            );
        }
    }

    mod format_datetime {
        use super::*;

        /// Tests zero padding of every component.
        ///
        /// Expected: "2025-01-05 08:03:09"
        #[test]
        fn pads_components() {
            let datetime = NaiveDate::from_ymd_opt(2025, 1, 5)
                .unwrap()
                .and_hms_opt(8, 3, 9)
                .unwrap();
            assert_eq!(format_datetime(datetime), "2025-01-05 08:03:09");
        }
    }

    /// Tests the quantity unit.
    ///
    /// Expected: "12 buah"
    #[test]
    fn format_qty_appends_unit() {
        assert_eq!(format_qty(12), "12 buah");
    }
}
