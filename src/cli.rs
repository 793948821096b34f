use clap::Parser;
use std::path::PathBuf;

/// Terminal résumé viewer.
#[derive(Debug, Parser)]
#[command(name = "resume-tui", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/resume-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile file (.toml or .json) to show instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Print the page as plain text and exit
    #[arg(long)]
    pub print: bool,

    /// Page width used by --print
    #[arg(long, value_name = "COLS", default_value_t = 80)]
    pub width: u16,

    /// Use ASCII labels instead of emoji icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Do not fetch the profile photo
    #[arg(long)]
    pub no_photo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_eighty_columns() {
        let cli = Cli::parse_from(["resume-tui"]);
        assert!(!cli.print);
        assert_eq!(cli.width, 80);
        assert!(cli.profile.is_none());
    }

    #[test]
    fn parses_print_options() {
        let cli = Cli::parse_from([
            "resume-tui",
            "--print",
            "--width",
            "100",
            "--ascii-icons",
            "--profile",
            "me.toml",
        ]);
        assert!(cli.print);
        assert!(cli.ascii_icons);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.profile, Some(PathBuf::from("me.toml")));
    }
}
