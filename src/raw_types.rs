//! The raw shapes of the KULASIS JSON responses. These are converted into the
//! types found in [`crate::types`] by the parser.

use serde::Deserialize;

/// The response of the timetable endpoint.
#[derive(Debug, Deserialize)]
pub struct RawTimeTable {
    /// Every occupied (semester, weekday, period) cell.
    #[serde(rename = "timetableCells", default)]
    pub cells: Vec<RawTimeTableCell>,

    /// The lectures referenced by the cells.
    #[serde(rename = "lectures", default)]
    pub lectures: Vec<RawLecture>,
}

/// A single occupied cell in the timetable.
#[derive(Debug, Deserialize)]
pub struct RawTimeTableCell {
    /// The semester code, `0` through `5`.
    #[serde(rename = "semester")]
    pub semester: i64,

    /// The weekday, where `0` is Sunday and `6` is Saturday.
    #[serde(rename = "weekday")]
    pub weekday: i64,

    /// The period, starting at `1`.
    #[serde(rename = "period")]
    pub period: i64,

    #[serde(rename = "departmentNo")]
    pub department_no: i64,

    #[serde(rename = "lectureNo")]
    pub lecture_no: i64,
}

/// A lecture record.
#[derive(Debug, Deserialize)]
pub struct RawLecture {
    #[serde(rename = "departmentName", default)]
    pub department_name: String,

    #[serde(rename = "departmentNo")]
    pub department_no: i64,

    #[serde(rename = "isNew", default)]
    pub is_new: bool,

    #[serde(rename = "lectureName", default)]
    pub lecture_name: String,

    #[serde(rename = "lectureNo")]
    pub lecture_no: i64,

    #[serde(rename = "roomName", default)]
    pub room_name: String,

    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
}

/// The response of the course mail list endpoint.
#[derive(Debug, Deserialize)]
pub struct RawCourseMailList {
    #[serde(rename = "courseMails", default)]
    pub course_mails: Vec<RawCourseMailTitle>,
}

/// A single entry in the course mail list.
#[derive(Debug, Deserialize)]
pub struct RawCourseMailTitle {
    #[serde(rename = "courseMailNo")]
    pub course_mail_no: i64,

    #[serde(rename = "title", default)]
    pub title: String,

    #[serde(rename = "date", default)]
    pub date: String,
}

/// The response of the course mail endpoint.
#[derive(Debug, Deserialize)]
pub struct RawCourseMailResponse {
    #[serde(rename = "courseMail")]
    pub course_mail: RawCourseMail,
}

/// A full course mail.
#[derive(Debug, Deserialize)]
pub struct RawCourseMail {
    #[serde(rename = "courseMailNo")]
    pub course_mail_no: i64,

    #[serde(rename = "title", default)]
    pub title: String,

    #[serde(rename = "date", default)]
    pub date: String,

    #[serde(rename = "textBody", default)]
    pub text_body: String,
}
