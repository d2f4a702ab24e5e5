pub(crate) const MY_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, \
like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// The header carrying the KULASIS account ID.
pub(crate) const ACCOUNT_HEADER: &str = "x-kulasis-account";

/// The default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The root of the KULASIS app API. Endpoint paths below are relative to this.
pub const DEFAULT_BASE_URL: &str = "https://www.k.kyoto-u.ac.jp/api/app/v1/";

// Endpoints, relative to the base URL
pub(crate) const TIMETABLE: &str = "timetable/get_table";
pub(crate) const COURSE_MAIL_LIST: &str = "support/course_mail_list";
pub(crate) const COURSE_MAIL: &str = "support/course_mail";
