//! Daily authentication token derivation.

use chrono::{NaiveDate, Utc};
use md5::{Digest, Md5};

/// Derives the token for a specific calendar date.
///
/// The service accepts the lowercase hex MD5 digest of `{secret}_{YYYYMMDD}`,
/// where the date component is zero-padded. Pure function of its inputs.
pub fn token_for_date(secret: &str, date: NaiveDate) -> String {
    let stamp = date.format("%Y%m%d");
    let mut hasher = Md5::new();
    hasher.update(format!("{}_{}", secret, stamp));
    hex::encode(hasher.finalize())
}

/// Derives the token for the current UTC date.
///
/// UTC is the canonical timezone so that client and server agree on the day
/// boundary regardless of where the client runs. Tokens are cheap to compute
/// and are derived fresh for every request rather than cached.
pub fn current_token(secret: &str) -> String {
    token_for_date(secret, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_digest() {
        assert_eq!(
            token_for_date("Valantis", date(2024, 1, 1)),
            "e3e0d61e2ab7bdb7ca2e5da39f709706"
        );
    }

    #[test]
    fn month_and_day_are_zero_padded() {
        assert_eq!(
            token_for_date("Valantis", date(2024, 9, 5)),
            "69e982b527e3ac15ebf5ffd44ef6cfa1"
        );
    }

    #[test]
    fn secret_is_part_of_the_digest() {
        assert_eq!(
            token_for_date("swordfish", date(2025, 12, 31)),
            "1ebb64bd4e90b9431f5e57dc328be96d"
        );
        assert_ne!(
            token_for_date("swordfish", date(2025, 12, 31)),
            token_for_date("Valantis", date(2025, 12, 31))
        );
    }

    #[test]
    fn current_token_matches_todays_date() {
        let today = Utc::now().date_naive();
        assert_eq!(current_token("Valantis"), token_for_date("Valantis", today));
    }
}
