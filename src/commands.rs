use std::io::{self, BufRead, Write};

use kulasis::types::{DayPeriod, Lecture, Semester, TimeSlot};
use kulasis::util::{PERIODS_PER_DAY, SCHOOL_DAYS};
use kulasis::wrapper::KulasisWrapper;
use log::info;

use crate::cli::CliError;

/// Fetches the timetable and prints every occupied weekday slot of the semester.
pub async fn timeslot(wrapper: &KulasisWrapper, semester: Semester) -> Result<(), CliError> {
    let time_slot = wrapper.get_time_slot().await?;
    let stdout = io::stdout();
    write_time_slot(&mut stdout.lock(), &time_slot, semester)?;
    Ok(())
}

/// Lets the user pick a lecture, then prints all of its course mail.
pub async fn mail(wrapper: &KulasisWrapper, new_only: bool) -> Result<(), CliError> {
    let time_slot = wrapper.get_time_slot().await?;
    let lectures = if new_only {
        time_slot.get_new_lectures()
    } else {
        time_slot.get_all_lectures()
    };

    {
        let stdout = io::stdout();
        write_lecture_list(&mut stdout.lock(), &lectures)?;
    }
    eprintln!("Select lectures to read course mail.");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let lecture = lectures[parse_selection(&line, lectures.len())?];

    let titles = wrapper.get_course_mail_titles(lecture).await?;
    info!(
        "{} course mail(s) for {}",
        titles.len(),
        lecture.lecture_name
    );

    let stdout = io::stdout();
    for title in &titles {
        let mail = wrapper.get_course_mail(title).await?;
        writeln!(stdout.lock(), "{mail}")?;
    }

    Ok(())
}

pub(crate) fn write_time_slot(
    out: &mut impl Write,
    time_slot: &TimeSlot,
    semester: Semester,
) -> io::Result<()> {
    for day in SCHOOL_DAYS {
        for period in 1..=PERIODS_PER_DAY {
            let dp = DayPeriod::new(semester, day, period);
            if let Some(lecture) = time_slot.get_lecture(dp) {
                writeln!(out, "[{} {}] {}", dp.day, dp.period, lecture.lecture_name)?;
            }
        }
    }

    Ok(())
}

pub(crate) fn write_lecture_list(out: &mut impl Write, lectures: &[&Lecture]) -> io::Result<()> {
    for (i, l) in lectures.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, l.lecture_name)?;
    }

    Ok(())
}

/// Parses a 1-based selection typed by the user into an index into a list of `count` items.
pub(crate) fn parse_selection(input: &str, count: usize) -> Result<usize, CliError> {
    let trimmed = input.trim();
    let num: usize = trimmed
        .parse()
        .map_err(|_| CliError::InvalidSelection(format!("'{trimmed}' is not a number")))?;
    if num < 1 || num > count {
        return Err(CliError::InvalidSelection(format!(
            "{num} is not between 1 and {count}"
        )));
    }

    Ok(num - 1)
}
