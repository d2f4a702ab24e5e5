use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::raw_types::{RawCourseMail, RawCourseMailTitle, RawTimeTable};
use crate::types::{
    CourseMail, CourseMailTitle, DayPeriod, Lecture, LectureId, PeriodType, TimeSlot,
};
use crate::util::{parse_semester_code, parse_weekday_code};

/// Processes the raw timetable into a [`TimeSlot`].
///
/// Cells with an unknown semester code, an unknown weekday, or a period below `1`
/// are skipped. If two cells (or two lecture records) collide, the later one
/// is kept.
///
/// # Parameters
/// - `raw`: The raw timetable.
///
/// # Returns
/// The indexed timetable.
pub fn parse_time_slot(raw: RawTimeTable) -> TimeSlot {
    let mut times: HashMap<DayPeriod, LectureId> = HashMap::new();
    for cell in raw.cells {
        let parsed = (
            parse_semester_code(cell.semester),
            parse_weekday_code(cell.weekday),
            PeriodType::try_from(cell.period).ok().filter(|p| *p >= 1),
        );
        let (semester, day, period) = match parsed {
            (Some(s), Some(d), Some(p)) => (s, d, p),
            _ => {
                warn!(
                    "skipping timetable cell with semester={} weekday={} period={}",
                    cell.semester, cell.weekday, cell.period
                );
                continue;
            }
        };

        times.insert(
            DayPeriod::new(semester, day, period),
            LectureId {
                department_no: cell.department_no,
                lecture_no: cell.lecture_no,
            },
        );
    }

    let lectures: BTreeMap<LectureId, Lecture> = raw
        .lectures
        .into_iter()
        .map(|l| Lecture {
            department_name: l.department_name.trim().to_string(),
            department_no: l.department_no,
            is_new: l.is_new,
            lecture_name: l.lecture_name.trim().to_string(),
            lecture_no: l.lecture_no,
            room_name: l.room_name.trim().to_string(),
            teacher_name: l.teacher_name.trim().to_string(),
        })
        .map(|l| (l.id(), l))
        .collect();

    TimeSlot { times, lectures }
}

/// Processes the raw course mail list for the given lecture.
///
/// # Parameters
/// - `lecture`: The lecture that the list was requested for.
/// - `raw`: The raw mail list entries.
///
/// # Returns
/// The mail titles, in the order KULASIS sent them.
pub fn parse_course_mail_titles(
    lecture: LectureId,
    raw: Vec<RawCourseMailTitle>,
) -> Vec<CourseMailTitle> {
    raw.into_iter()
        .map(|m| CourseMailTitle {
            mail_no: m.course_mail_no,
            title: m.title.trim().to_string(),
            date: m.date.trim().to_string(),
            department_no: lecture.department_no,
            lecture_no: lecture.lecture_no,
        })
        .collect()
}

/// Processes a raw course mail.
///
/// # Parameters
/// - `raw`: The raw mail.
///
/// # Returns
/// The mail. The body is kept as-is, apart from normalizing line endings.
pub fn parse_course_mail(raw: RawCourseMail) -> CourseMail {
    CourseMail {
        mail_no: raw.course_mail_no,
        title: raw.title.trim().to_string(),
        date: raw.date.trim().to_string(),
        text_body: raw.text_body.replace("\r\n", "\n"),
    }
}
