use std::time::Duration;

use log::info;
use reqwest::Client;

use crate::auth::AuthInfo;
use crate::constants::*;
use crate::parser::{parse_course_mail, parse_course_mail_titles, parse_time_slot};
use crate::raw_types::{RawCourseMailList, RawCourseMailResponse, RawTimeTable};
use crate::types;
use crate::types::{CourseMail, CourseMailTitle, Lecture, TimeSlot};
use crate::wrapper::helper::process_get_result;
use crate::wrapper::request_data::KulasisWrapperData;
use crate::wrapper::wrapper_builder::{default_base_url, KulasisWrapperBuilder};

mod helper;
mod request_data;
pub mod wrapper_builder;

/// A wrapper for the private app API of
/// [KULASIS](https://www.k.kyoto-u.ac.jp/), Kyoto University's student portal.
pub struct KulasisWrapper {
    data: KulasisWrapperData,
}

impl KulasisWrapper {
    /// Creates a new instance of the `KulasisWrapper` with the specified `Client` and
    /// credentials. A default timeout, user agent, and base URL will be provided. To
    /// override these, use [`KulasisWrapperBuilder`].
    ///
    /// # Parameters
    /// - `client`: The `reqwest` client.
    /// - `auth`: The account ID and access token.
    ///
    /// # Returns
    /// The new instance of the `KulasisWrapper`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use reqwest::Client;
    /// use kulasis::auth::AuthInfo;
    /// use kulasis::wrapper::KulasisWrapper;
    ///
    /// let wrapper = KulasisWrapper::new(Client::new(), AuthInfo::new("a0123456", "token"));
    /// ```
    pub fn new(client: Client, auth: AuthInfo) -> Self {
        Self {
            data: KulasisWrapperData {
                auth,
                client,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                user_agent: MY_USER_AGENT.to_owned(),
                base_url: default_base_url(),
            },
        }
    }

    /// Creates a new builder that can be used to construct a `KulasisWrapper`.
    ///
    /// # Returns
    /// The builder.
    pub fn builder() -> KulasisWrapperBuilder {
        KulasisWrapperBuilder::new()
    }

    /// Replaces the credentials used for subsequent requests.
    ///
    /// # Parameters
    /// - `auth`: The new credentials.
    pub fn set_auth(&mut self, auth: AuthInfo) {
        self.data.auth = auth;
    }

    /// Gets the account ID that this wrapper is using.
    pub fn account(&self) -> &str {
        &self.data.auth.account
    }

    /// Gets the student's timetable.
    ///
    /// # Returns
    /// The timetable, indexed by (semester, weekday, period) and by lecture.
    ///
    /// # Example
    /// ```rust,no_run
    /// use reqwest::Client;
    /// use kulasis::auth::AuthInfo;
    /// use kulasis::types::{DayPeriod, Semester, Weekday};
    /// use kulasis::wrapper::KulasisWrapper;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let wrapper = KulasisWrapper::new(Client::new(), AuthInfo::new("a0123456", "token"));
    /// let time_slot = wrapper.get_time_slot().await.unwrap();
    /// let lecture = time_slot.get_lecture(DayPeriod::new(Semester::First, Weekday::Monday, 1));
    /// # }
    /// ```
    pub async fn get_time_slot(&self) -> types::Result<TimeSlot> {
        let url = self.data.endpoint(TIMETABLE, &[])?;
        let raw = process_get_result::<RawTimeTable>(self.data.get(url).send().await).await?;
        let time_slot = parse_time_slot(raw);
        info!(
            "fetched timetable with {} lecture(s)",
            time_slot.get_all_lectures().len()
        );
        Ok(time_slot)
    }

    /// Gets the titles of every course mail sent for the specified lecture.
    ///
    /// # Parameters
    /// - `lecture`: The lecture.
    ///
    /// # Returns
    /// The mail titles. Use [`KulasisWrapper::get_course_mail`] to read a mail.
    pub async fn get_course_mail_titles(
        &self,
        lecture: &Lecture,
    ) -> types::Result<Vec<CourseMailTitle>> {
        let url = self.data.endpoint(
            COURSE_MAIL_LIST,
            &[
                ("departmentNo", lecture.department_no.to_string()),
                ("lectureNo", lecture.lecture_no.to_string()),
            ],
        )?;

        process_get_result::<RawCourseMailList>(self.data.get(url).send().await)
            .await
            .map(|raw| parse_course_mail_titles(lecture.id(), raw.course_mails))
    }

    /// Gets the full contents of a course mail.
    ///
    /// # Parameters
    /// - `title`: The mail title, as obtained from [`KulasisWrapper::get_course_mail_titles`].
    ///
    /// # Returns
    /// The mail.
    pub async fn get_course_mail(&self, title: &CourseMailTitle) -> types::Result<CourseMail> {
        let url = self.data.endpoint(
            COURSE_MAIL,
            &[
                ("departmentNo", title.department_no.to_string()),
                ("lectureNo", title.lecture_no.to_string()),
                ("courseMailNo", title.mail_no.to_string()),
            ],
        )?;

        process_get_result::<RawCourseMailResponse>(self.data.get(url).send().await)
            .await
            .map(|raw| parse_course_mail(raw.course_mail))
    }
}
