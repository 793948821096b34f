use crate::clipboard::LinkClipboard;
use crate::links::{LinkError, UrlOpener};
use crate::photo::PhotoView;
use crate::profile::Profile;
use crate::ui::components::ContactLink;
use crate::ui::mvi::Reducer;
use crate::ui::platform::HostPlatform;
use crate::ui::screen::{compose, Page, ScreenContext};
use crate::ui::theme::Theme;
use crate::ui::viewer::{Notice, ViewerIntent, ViewerReducer, ViewerState};
use std::sync::Arc;

const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Viewer host: owns the immutable profile, the style table and the
/// scroll/focus state, and keeps the composed page in sync with them.
pub struct App {
    should_quit: bool,
    profile: Profile,
    theme: Theme,
    platform: HostPlatform,
    photo: PhotoView,
    viewer: ViewerState,
    opener: Arc<dyn UrlOpener>,
    clipboard: LinkClipboard,
    /// Full terminal size.
    terminal_size: (u16, u16),
    /// Size of the scrollable body.
    body_size: (u16, u16),
    page: Page,
}

impl App {
    pub fn new(
        profile: Profile,
        theme: Theme,
        platform: HostPlatform,
        photo: PhotoView,
        opener: Arc<dyn UrlOpener>,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            profile,
            theme,
            platform,
            photo,
            viewer: ViewerState::default(),
            opener,
            clipboard: LinkClipboard::new(),
            terminal_size: DEFAULT_SIZE,
            body_size: DEFAULT_SIZE,
            page: Page::default(),
        };
        app.recompose();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn photo(&self) -> &PhotoView {
        &self.photo
    }

    pub fn body_size(&self) -> (u16, u16) {
        self.body_size
    }

    /// `terminal` is the full screen, `body` the part the page scrolls in.
    pub fn on_resize(&mut self, terminal: (u16, u16), body: (u16, u16)) {
        self.terminal_size = terminal;
        self.body_size = (body.0.max(1), body.1.max(1));
        self.recompose();
        self.dispatch(ViewerIntent::Clamp {
            max: self.max_scroll(),
        });
    }

    pub fn set_photo(&mut self, photo: PhotoView) {
        self.photo = photo;
        self.recompose();
        self.dispatch(ViewerIntent::Clamp {
            max: self.max_scroll(),
        });
    }

    pub fn max_scroll(&self) -> u16 {
        let height = u16::try_from(self.page.height()).unwrap_or(u16::MAX);
        height.saturating_sub(self.body_size.1)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.dispatch(ViewerIntent::ScrollBy {
            delta,
            max: self.max_scroll(),
        });
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.body_size.1.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.body_size.1.max(1)));
    }

    pub fn scroll_home(&mut self) {
        self.dispatch(ViewerIntent::ScrollHome);
    }

    pub fn scroll_end(&mut self) {
        self.dispatch(ViewerIntent::ScrollEnd {
            max: self.max_scroll(),
        });
    }

    pub fn focus_next(&mut self) {
        let count = self.page.links.len();
        self.dispatch(ViewerIntent::FocusNext { count });
        self.reveal_focused();
    }

    pub fn focus_prev(&mut self) {
        let count = self.page.links.len();
        self.dispatch(ViewerIntent::FocusPrev { count });
        self.reveal_focused();
    }

    pub fn clear_focus(&mut self) {
        self.dispatch(ViewerIntent::ClearFocus);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(ViewerIntent::DismissNotice);
    }

    /// Activates the focused link, if any.
    pub fn activate_focused(&mut self) {
        if let Some(index) = self.viewer.focused_link {
            self.activate_link(index);
        }
    }

    /// Opens link `index`. A failure becomes an on-screen notice instead of
    /// being dropped.
    pub fn activate_link(&mut self, index: usize) {
        let Some(region) = self.page.links.get(index) else {
            return;
        };
        let target = region.target.clone();
        match ContactLink::new(&target).activate(self.opener.as_ref()) {
            Ok(()) => tracing::info!(url = %target.url, "Contact link activated"),
            Err(err) => self.on_link_failed(err),
        }
    }

    /// Reports a link failure, whether immediate or from the opener process.
    pub fn on_link_failed(&mut self, err: LinkError) {
        tracing::warn!(error = %err, "Contact link failed");
        self.dispatch(ViewerIntent::ShowNotice(Notice {
            message: err.user_message(),
            url: Some(err.url().to_string()),
        }));
    }

    /// Handles a click on body row `row`. While a notice is shown the click
    /// only dismisses it.
    pub fn click(&mut self, row: u16) {
        if self.viewer.has_notice() {
            self.dismiss_notice();
            return;
        }
        let line = usize::from(self.viewer.scroll) + usize::from(row);
        let Some((index, _)) = self.page.link_at(line) else {
            return;
        };
        self.dispatch(ViewerIntent::FocusLink { index });
        self.activate_link(index);
    }

    /// URL that `y` copies: the notice's link first, then the focused link.
    pub fn copy_target(&self) -> Option<String> {
        if let Some(url) = self.viewer.notice.as_ref().and_then(|n| n.url.clone()) {
            return Some(url);
        }
        self.viewer
            .focused_link
            .and_then(|index| self.page.links.get(index))
            .map(|region| region.target.url.clone())
    }

    pub fn copy_link(&mut self) {
        let Some(url) = self.copy_target() else {
            return;
        };
        match self.clipboard.copy(&url) {
            Ok(()) => self.show_notice(format!("Copied {url}"), None),
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.show_notice(err.to_string(), Some(url));
            }
        }
    }

    fn show_notice(&mut self, message: String, url: Option<String>) {
        self.dispatch(ViewerIntent::ShowNotice(Notice { message, url }));
    }

    fn reveal_focused(&mut self) {
        let Some(line) = self
            .viewer
            .focused_link
            .and_then(|index| self.page.links.get(index))
            .map(|region| region.lines.start)
        else {
            return;
        };
        self.dispatch(ViewerIntent::Reveal {
            line,
            viewport: self.body_size.1,
            max: self.max_scroll(),
        });
    }

    fn dispatch(&mut self, intent: ViewerIntent) {
        let focused_before = self.viewer.focused_link;
        self.viewer = ViewerReducer::reduce(std::mem::take(&mut self.viewer), intent);
        if self.viewer.focused_link != focused_before {
            self.recompose();
        }
    }

    fn recompose(&mut self) {
        let ctx = ScreenContext {
            width: self.body_size.0,
            viewport_height: self.terminal_size.1,
            platform: self.platform,
            photo: &self.photo,
            focused_link: self.viewer.focused_link,
        };
        self.page = compose(&self.profile, &self.theme, &ctx);
    }
}
