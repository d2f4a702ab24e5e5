use crate::types::{Semester, Weekday};

/// The weekdays shown when printing a weekly timetable.
pub const SCHOOL_DAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

/// The number of regular periods in a day.
pub const PERIODS_PER_DAY: u32 = 5;

/// Parses the semester code that KULASIS uses.
///
/// # Parameters
/// - `code`: The code. This should be between 0 and 5, both inclusive.
///
/// # Returns
/// The semester, or `None` if the code is unknown.
///
/// # Example
/// An input of `2` would return `Some(Semester::Second)`.
pub fn parse_semester_code(code: i64) -> Option<Semester> {
    match code {
        0 => Some(Semester::First),
        1 => Some(Semester::FirstIntensive),
        2 => Some(Semester::Second),
        3 => Some(Semester::SecondIntensive),
        4 => Some(Semester::FullYear),
        5 => Some(Semester::FullYearIntensive),
        _ => None,
    }
}

/// Parses a weekday number.
///
/// # Parameters
/// - `code`: The weekday number. `0` is Sunday and `6` is Saturday.
///
/// # Returns
/// The weekday, or `None` if the number is out of range.
pub fn parse_weekday_code(code: i64) -> Option<Weekday> {
    match code {
        0 => Some(Weekday::Sunday),
        1 => Some(Weekday::Monday),
        2 => Some(Weekday::Tuesday),
        3 => Some(Weekday::Wednesday),
        4 => Some(Weekday::Thursday),
        5 => Some(Weekday::Friday),
        6 => Some(Weekday::Saturday),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_codes() {
        assert_eq!(Some(Semester::First), parse_semester_code(0));
        assert_eq!(Some(Semester::Second), parse_semester_code(2));
        assert_eq!(Some(Semester::FullYearIntensive), parse_semester_code(5));
        assert_eq!(None, parse_semester_code(6));
        assert_eq!(None, parse_semester_code(-1));
        assert_eq!(None, parse_semester_code(300));
    }

    #[test]
    fn weekday_codes() {
        assert_eq!(Some(Weekday::Sunday), parse_weekday_code(0));
        assert_eq!(Some(Weekday::Friday), parse_weekday_code(5));
        assert_eq!(None, parse_weekday_code(7));
        assert_eq!(None, parse_weekday_code(-1));
        assert_eq!("Wednesday", parse_weekday_code(3).unwrap().to_string());
    }

    #[test]
    fn school_days_are_weekdays() {
        assert!(!SCHOOL_DAYS.contains(&Weekday::Saturday));
        assert!(!SCHOOL_DAYS.contains(&Weekday::Sunday));
    }
}
