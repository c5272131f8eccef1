use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::MJD;
use crate::photodyn_errors::PhotodynError;

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss to a
/// modified julian date (MJD)
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss
///
/// Return
/// ------
/// * the input date as a modified julian date (MJD)
pub fn date_to_mjd(date: &str) -> Result<MJD, PhotodynError> {
    Epoch::from_str(date)
        .map(|epoch| epoch.to_mjd_utc_days())
        .map_err(|e| PhotodynError::InvalidDate(format!("{date}: {e}")))
}

/// Build an evaluation grid from a list of date strings.
///
/// Argument
/// --------
/// * `dates`: date strings in the format YYYY-MM-ddTHH:mm:ss
///
/// Return
/// ------
/// * the grid as modified julian dates, in input order
pub fn dates_to_mjd(dates: &[&str]) -> Result<Vec<MJD>, PhotodynError> {
    dates.iter().map(|date| date_to_mjd(date)).collect()
}

#[cfg(test)]
mod test_time {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn j2000_noon_is_mjd_51544_5() {
        let mjd = date_to_mjd("2000-01-01T12:00:00").unwrap();
        assert_relative_eq!(mjd, 51544.5, epsilon = 1e-9);
    }

    #[test]
    fn grid_preserves_input_order() {
        let grid = dates_to_mjd(&["2000-01-02T00:00:00", "2000-01-01T00:00:00"]).unwrap();
        assert_relative_eq!(grid[0], 51545.0, epsilon = 1e-9);
        assert_relative_eq!(grid[1], 51544.0, epsilon = 1e-9);
    }

    #[test]
    fn malformed_date_is_an_error() {
        assert!(matches!(
            date_to_mjd("not a date"),
            Err(PhotodynError::InvalidDate(_))
        ));
    }
}
