//! Opening contact links with the operating system's URL handler.

use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;
use thiserror::Error;

/// Schemes handed to the OS opener.
pub const ALLOWED_SCHEMES: [&str; 3] = ["mailto", "http", "https"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Unsupported link '{url}'")]
    UnsupportedScheme { url: String },

    #[error("Failed to start '{program}' for '{url}': {error}")]
    SpawnFailed {
        program: String,
        url: String,
        error: String,
    },

    #[error("'{program}' could not open '{url}' (exit code {code:?})")]
    OpenerFailed {
        program: String,
        url: String,
        code: Option<i32>,
    },
}

impl LinkError {
    /// Short text for the on-screen notice.
    pub fn user_message(&self) -> String {
        match self {
            LinkError::UnsupportedScheme { url } => format!("Can't open this kind of link: {url}"),
            LinkError::SpawnFailed { url, .. } | LinkError::OpenerFailed { url, .. } => {
                format!("No application could open {url}")
            }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            LinkError::UnsupportedScheme { url }
            | LinkError::SpawnFailed { url, .. }
            | LinkError::OpenerFailed { url, .. } => url,
        }
    }
}

/// Host capability for opening an external URL.
pub trait UrlOpener: Send + Sync {
    /// Starts opening `url` and returns without waiting for the handler.
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Returns the scheme of `url` if it is one the opener accepts.
pub fn checked_scheme(url: &str) -> Result<&str, LinkError> {
    let scheme = url
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|scheme| {
            ALLOWED_SCHEMES
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
        });
    scheme.ok_or_else(|| LinkError::UnsupportedScheme {
        url: url.to_string(),
    })
}

pub type FailureReporter = Arc<dyn Fn(LinkError) + Send + Sync>;

/// Program and leading arguments used to open a URL; the URL is always
/// passed last as its own argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Opener for an OS name as reported by `std::env::consts::OS`.
    ///
    /// Windows goes through `rundll32` rather than `cmd /C start`: cmd would
    /// reparse `&`, `|` and `^` in the URL.
    pub fn for_os(os: &str) -> Self {
        match os {
            "macos" => Self::new("open", [] as [&str; 0]),
            "windows" => Self::new("rundll32", ["url.dll,FileProtocolHandler"]),
            _ => Self::new("xdg-open", [] as [&str; 0]),
        }
    }

    /// Full argument list for `url`.
    pub fn argv<'a>(&'a self, url: &'a str) -> Vec<&'a str> {
        self.args
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(url))
            .collect()
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.argv(url));
        cmd
    }
}

/// Opens URLs with `open`, `xdg-open` or `rundll32`.
///
/// The spawned process is reaped on a detached thread; a non-zero exit is
/// logged and passed to the reporter, if any.
#[derive(Clone)]
pub struct SystemOpener {
    launch: LaunchCommand,
    reporter: Option<FailureReporter>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self {
            launch: LaunchCommand::for_os(std::env::consts::OS),
            reporter: None,
        }
    }
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the platform opener.
    pub fn with_launch(mut self, launch: LaunchCommand) -> Self {
        self.launch = launch;
        self
    }

    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(LinkError) + Send + Sync + 'static,
    {
        self.reporter = Some(Arc::new(reporter));
        self
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        checked_scheme(url)?;

        let program = self.launch.program.clone();
        let mut child = self
            .launch
            .command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LinkError::SpawnFailed {
                program: program.clone(),
                url: url.to_string(),
                error: e.to_string(),
            })?;

        tracing::info!(program = %program, url, "Opening link");

        let reporter = self.reporter.clone();
        let url = url.to_string();
        thread::spawn(move || {
            let code = match child.wait() {
                Ok(status) if status.success() => return,
                Ok(status) => status.code(),
                Err(_) => None,
            };
            let err = LinkError::OpenerFailed { program, url, code };
            tracing::warn!(error = %err, "Link opener failed");
            if let Some(reporter) = reporter {
                reporter(err);
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mail_and_web_schemes() {
        assert_eq!(checked_scheme("mailto:a@b.c").unwrap(), "mailto");
        assert_eq!(checked_scheme("https://github.com/x").unwrap(), "https");
        assert_eq!(checked_scheme("HTTP://example.com").unwrap(), "HTTP");
    }

    #[test]
    fn rejects_other_schemes() {
        for url in ["file:///etc/passwd", "javascript:alert(1)", "no-scheme", ""] {
            let err = checked_scheme(url).unwrap_err();
            assert_eq!(
                err,
                LinkError::UnsupportedScheme {
                    url: url.to_string()
                }
            );
        }
    }

    #[test]
    fn system_opener_never_spawns_for_rejected_urls() {
        let err = SystemOpener::new().open("ftp://example.com").unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedScheme { .. }));
        assert_eq!(err.url(), "ftp://example.com");
    }

    #[test]
    fn windows_opener_keeps_query_string_in_one_argument() {
        let url = "https://example.com/?a=1&b=2|c^d";
        let launch = LaunchCommand::for_os("windows");
        assert_eq!(launch.program, "rundll32");
        assert_eq!(launch.argv(url), vec!["url.dll,FileProtocolHandler", url]);
        assert_ne!(launch.program, "cmd");
    }

    #[test]
    fn unix_openers_take_the_url_alone() {
        let url = "mailto:someone@example.com";
        assert_eq!(LaunchCommand::for_os("macos").program, "open");
        assert_eq!(LaunchCommand::for_os("macos").argv(url), vec![url]);
        assert_eq!(LaunchCommand::for_os("linux").program, "xdg-open");
        assert_eq!(LaunchCommand::for_os("freebsd").argv(url), vec![url]);
    }

    #[test]
    fn missing_opener_program_is_a_spawn_error() {
        let opener = SystemOpener::new()
            .with_launch(LaunchCommand::new("resume-tui-no-such-opener", [] as [&str; 0]));
        let err = opener.open("https://example.com").unwrap_err();
        assert!(matches!(
            err,
            LinkError::SpawnFailed { ref program, .. } if program == "resume-tui-no-such-opener"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failed_opener_exit_reaches_the_reporter() {
        use std::sync::mpsc;
        use std::time::Duration;

        let (tx, rx) = mpsc::channel();
        let tx = parking_lot::Mutex::new(tx);
        let opener = SystemOpener::new()
            .with_launch(LaunchCommand::new("sh", ["-c", "exit 3", "sh"]))
            .with_reporter(move |err| {
                let _ = tx.lock().send(err);
            });

        opener.open("https://example.com/?a=1&b=2").unwrap();
        let reported = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(
            reported,
            LinkError::OpenerFailed {
                program: "sh".to_string(),
                url: "https://example.com/?a=1&b=2".to_string(),
                code: Some(3),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn successful_opener_reports_nothing() {
        use std::sync::mpsc;
        use std::time::Duration;

        let (tx, rx) = mpsc::channel::<LinkError>();
        let tx = parking_lot::Mutex::new(tx);
        let opener = SystemOpener::new()
            .with_launch(LaunchCommand::new("sh", ["-c", "exit 0", "sh"]))
            .with_reporter(move |err| {
                let _ = tx.lock().send(err);
            });

        opener.open("mailto:someone@example.com").unwrap();
        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    }

    #[test]
    fn user_message_mentions_url() {
        let err = LinkError::OpenerFailed {
            program: "xdg-open".to_string(),
            url: "https://x.y".to_string(),
            code: Some(3),
        };
        assert_eq!(err.user_message(), "No application could open https://x.y");
    }
}
