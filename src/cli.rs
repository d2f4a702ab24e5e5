use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use kulasis::constants::DEFAULT_TIMEOUT_SECS;
use kulasis::types::Semester;
use kulasis::wrapper::KulasisWrapper;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "kulasis")]
#[command(about = "Read your KULASIS timetable and course mail", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Your KULASIS account ID.
    #[arg(short, long = "account", env = "ACCOUNT_ID", global = true)]
    pub account_id: Option<String>,

    /// The access token for the account.
    #[arg(short, long, env = "ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Override the API root.
    #[arg(long, env = "KULASIS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "KULASIS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the weekly timetable to the console.
    Timeslot {
        #[arg(short = 's', long = "semester", value_enum)]
        semester: SemesterArg,
    },
    /// Pick a lecture and read its course mail.
    Mail {
        /// Only list lectures flagged as new.
        #[arg(short = 'n', long = "new")]
        new_only: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum SemesterArg {
    First,
    Second,
    FullYear,
}

impl From<SemesterArg> for Semester {
    fn from(value: SemesterArg) -> Self {
        match value {
            SemesterArg::First => Semester::First,
            SemesterArg::Second => Semester::Second,
            SemesterArg::FullYear => Semester::FullYear,
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Wrapper(#[from] kulasis::types::WrapperError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing {0}; pass it as a flag or set {1}")]
    MissingCredential(&'static str, &'static str),

    #[error("INVALID SELECTION: {0}")]
    InvalidSelection(String),

    #[error("could not set up the KULASIS client from the given options")]
    ClientSetup,
}

/// Whether a parse "error" is really a request for help or version text, which clap
/// prints and exits with status 0. Every other parse error is a usage error.
pub fn is_informational(e: &clap::Error) -> bool {
    matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

impl Cli {
    /// Builds the wrapper from the global options.
    pub fn build_wrapper(&self) -> Result<KulasisWrapper, CliError> {
        let account = self
            .account_id
            .clone()
            .ok_or(CliError::MissingCredential("account ID", "ACCOUNT_ID"))?;
        let token = self
            .token
            .clone()
            .ok_or(CliError::MissingCredential("access token", "ACCESS_TOKEN"))?;

        let mut builder = KulasisWrapper::builder()
            .with_auth(kulasis::auth::AuthInfo::new(account, token))
            .with_default_timeout(std::time::Duration::from_secs(self.timeout));
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url)?;
        }

        builder.try_build_wrapper().ok_or(CliError::ClientSetup)
    }
}
