use crate::ui::mvi::Reducer;
use crate::ui::viewer::intent::ViewerIntent;
use crate::ui::viewer::state::ViewerState;

pub struct ViewerReducer;

impl Reducer for ViewerReducer {
    type State = ViewerState;
    type Intent = ViewerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewerIntent::ScrollBy { delta, max } => {
                let target = i64::from(state.scroll) + i64::from(delta);
                ViewerState {
                    scroll: target.clamp(0, i64::from(max)) as u16,
                    ..state
                }
            }
            ViewerIntent::ScrollHome => ViewerState { scroll: 0, ..state },
            ViewerIntent::ScrollEnd { max } => ViewerState { scroll: max, ..state },
            ViewerIntent::Clamp { max } => ViewerState {
                scroll: state.scroll.min(max),
                ..state
            },
            ViewerIntent::FocusNext { count } => {
                let focused_link = match (count, state.focused_link) {
                    (0, _) => None,
                    (_, None) => Some(0),
                    (count, Some(i)) if i + 1 >= count => Some(0),
                    (_, Some(i)) => Some(i + 1),
                };
                ViewerState {
                    focused_link,
                    ..state
                }
            }
            ViewerIntent::FocusPrev { count } => {
                let focused_link = match (count, state.focused_link) {
                    (0, _) => None,
                    (count, None) => Some(count - 1),
                    (count, Some(0)) => Some(count - 1),
                    (count, Some(i)) => Some((i - 1).min(count - 1)),
                };
                ViewerState {
                    focused_link,
                    ..state
                }
            }
            ViewerIntent::FocusLink { index } => ViewerState {
                focused_link: Some(index),
                ..state
            },
            ViewerIntent::ClearFocus => ViewerState {
                focused_link: None,
                ..state
            },
            ViewerIntent::Reveal {
                line,
                viewport,
                max,
            } => {
                let line = u16::try_from(line).unwrap_or(u16::MAX);
                let viewport = viewport.max(1);
                let scroll = if line < state.scroll {
                    line
                } else if line >= state.scroll.saturating_add(viewport) {
                    line - viewport + 1
                } else {
                    state.scroll
                };
                ViewerState {
                    scroll: scroll.min(max),
                    ..state
                }
            }
            ViewerIntent::ShowNotice(notice) => ViewerState {
                notice: Some(notice),
                ..state
            },
            ViewerIntent::DismissNotice => ViewerState {
                notice: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_by_negative_stops_at_top() {
        let state = ViewerReducer::reduce(
            ViewerState::default(),
            ViewerIntent::ScrollBy { delta: -5, max: 10 },
        );
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn reveal_keeps_visible_line_in_place() {
        let state = ViewerState {
            scroll: 5,
            ..ViewerState::default()
        };
        let state = ViewerReducer::reduce(
            state,
            ViewerIntent::Reveal {
                line: 8,
                viewport: 10,
                max: 40,
            },
        );
        assert_eq!(state.scroll, 5);
    }
}
