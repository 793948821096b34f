use anyhow::Context;
use clap::Parser;
use resume_tui::cli::Cli;
use resume_tui::config::Config;
use resume_tui::logging::init_tracing;
use resume_tui::photo::PhotoView;
use resume_tui::profile::{self, Profile};
use resume_tui::ui::platform::HostPlatform;
use resume_tui::ui::screen::{compose, ScreenContext};
use resume_tui::ui::theme::Theme;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.ascii_icons {
        config.display.ascii_icons = true;
    }
    if cli.no_photo {
        config.display.show_photo = false;
    }

    let theme = Theme::from_config(&config.theme, &config.display)?;

    let profile = match cli.profile.as_ref().or(config.profile.as_ref()) {
        Some(path) => profile::load(path).context("Failed to load profile")?,
        None => Profile::builtin(),
    };

    if cli.print {
        let ctx = ScreenContext {
            width: cli.width,
            viewport_height: 0,
            platform: HostPlatform::current(),
            photo: &PhotoView::Disabled,
            focused_link: None,
        };
        println!("{}", compose(&profile, &theme, &ctx).plain_text());
        return Ok(());
    }

    resume_tui::ui::run(profile, theme, &config.display).context("Terminal viewer failed")?;
    Ok(())
}
