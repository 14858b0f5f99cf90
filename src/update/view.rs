//! Viewport messages: scrolling, resizing, zoom

use crate::commands::Cmd;
use crate::messages::ViewMsg;
use crate::session::EditorSession;

pub fn update_view(session: &mut EditorSession, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::Scroll(notches) => {
            if session.scroll(notches) {
                Some(Cmd::AnimateScroll)
            } else {
                None
            }
        }

        ViewMsg::Tick => {
            if !session.tick() {
                return None;
            }
            if session.view().scroll.is_animating() {
                Some(Cmd::AnimateScroll)
            } else {
                // last frame: offset just landed on the target
                Some(Cmd::Redraw)
            }
        }

        ViewMsg::Resize { width, height } => {
            if session.resize(width, height) {
                tracing::debug!(width, height, "viewport resized");
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        ViewMsg::ZoomIn => {
            session.zoom_in();
            tracing::debug!(zoom = session.view().zoom, "zoom in");
            Some(Cmd::Redraw)
        }

        ViewMsg::ZoomOut => {
            if session.zoom_out() {
                tracing::debug!(zoom = session.view().zoom, "zoom out");
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
