use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

/// The generic type is the return value. Otherwise, regardless of request type,
/// we're just returning the error if there is one.
pub type Result<T, E = WrapperError> = std::result::Result<T, E>;

/// The period type. Periods start at `1`.
pub type PeriodType = u32;

/// A semester (or intensive session) that a lecture can be held in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Semester {
    First,
    FirstIntensive,
    Second,
    SecondIntensive,
    FullYear,
    FullYearIntensive,
}

/// A day of the week.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };

        write!(f, "{s}")
    }
}

/// A single cell of the timetable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct DayPeriod {
    /// The semester this cell belongs to.
    pub semester: Semester,
    /// The day of the week.
    pub day: Weekday,
    /// The period. For example, the second class of the day would be `2`.
    pub period: PeriodType,
}

impl DayPeriod {
    /// Creates a new `DayPeriod`.
    ///
    /// # Parameters
    /// - `semester`: The semester.
    /// - `day`: The day of the week.
    /// - `period`: The period, starting at `1`.
    ///
    /// # Returns
    /// The new `DayPeriod`.
    pub fn new(semester: Semester, day: Weekday, period: PeriodType) -> Self {
        Self {
            semester,
            day,
            period,
        }
    }
}

/// Uniquely identifies a lecture. The department number and lecture number
/// together are what KULASIS uses to look up course mail.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct LectureId {
    pub department_no: i64,
    pub lecture_no: i64,
}

/// A lecture that the student is registered for.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Lecture {
    /// The name of the department offering this lecture.
    pub department_name: String,
    /// The department number.
    pub department_no: i64,
    /// Whether KULASIS flags this lecture as having something new (e.g., unread mail).
    pub is_new: bool,
    /// The lecture name.
    pub lecture_name: String,
    /// The lecture number.
    pub lecture_no: i64,
    /// The room where the lecture is held.
    pub room_name: String,
    /// The instructor(s).
    pub teacher_name: String,
}

impl Lecture {
    /// The identifier of this lecture.
    pub fn id(&self) -> LectureId {
        LectureId {
            department_no: self.department_no,
            lecture_no: self.lecture_no,
        }
    }
}

/// The student's timetable, indexed by cell and by lecture.
#[derive(Debug, Clone, Default)]
pub struct TimeSlot {
    pub(crate) times: HashMap<DayPeriod, LectureId>,
    pub(crate) lectures: BTreeMap<LectureId, Lecture>,
}

impl TimeSlot {
    /// Gets the lecture held at the specified cell.
    ///
    /// # Parameters
    /// - `dp`: The semester, day, and period to look up.
    ///
    /// # Returns
    /// The lecture, or `None` if nothing is held then. A cell that refers to a
    /// lecture which KULASIS did not send a record for also yields `None`.
    pub fn get_lecture(&self, dp: DayPeriod) -> Option<&Lecture> {
        self.times.get(&dp).and_then(|id| self.lectures.get(id))
    }

    /// Gets every lecture in the timetable, ordered by department number and
    /// then lecture number.
    pub fn get_all_lectures(&self) -> Vec<&Lecture> {
        self.lectures.values().collect()
    }

    /// Gets every lecture that is flagged as new, in the same order as
    /// [`TimeSlot::get_all_lectures`].
    pub fn get_new_lectures(&self) -> Vec<&Lecture> {
        self.lectures.values().filter(|l| l.is_new).collect()
    }

    /// Whether the timetable has no lectures at all.
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }
}

/// An entry in a lecture's course mail list. Use this to fetch the full mail.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CourseMailTitle {
    /// The mail number.
    pub mail_no: i64,
    /// The subject of the mail.
    pub title: String,
    /// The date the mail was sent, as given by KULASIS.
    pub date: String,
    /// The department number of the lecture this mail belongs to.
    pub department_no: i64,
    /// The lecture number of the lecture this mail belongs to.
    pub lecture_no: i64,
}

/// A full course mail.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CourseMail {
    /// The mail number.
    pub mail_no: i64,
    /// The subject of the mail.
    pub title: String,
    /// The date the mail was sent.
    pub date: String,
    /// The plain text body.
    pub text_body: String,
}

impl Display for CourseMail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}] - {}", self.title, self.date)?;
        writeln!(f, "{}", self.text_body)?;
        writeln!(f, "##########")
    }
}

#[derive(Error, Debug)]
pub enum WrapperError {
    /// Occurs if there was an error encountered by the reqwest library.
    #[error("Request error occurred: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Occurs when there was an error parsing the URL.
    #[error("Malformed url: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Occurs when there was an error with serde. This error will most likely occur
    /// if KULASIS returned something other than the expected JSON.
    #[error("Serde error occurred: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Occurs when the wrapper encounters a bad status code. This also includes some
    /// context as to why the error may occur, although the context is not cleaned so
    /// it may be very large (e.g., raw HTML).
    #[error("Unsuccessful status code: {0} (context: {1:?})")]
    BadStatusCode(u16, Option<String>),

    /// Occurs when KULASIS rejected the credentials.
    #[error("The current session is not valid. Are your account ID and access token valid?")]
    SessionNotValid,
}
