//! Application-level update handlers (window events)

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle a window-level message
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            if model.window_size == (width, height) {
                return None;
            }
            model.window_size = (width, height);
            debug!(target: "window", width, height, "resized");
            Some(Cmd::Redraw)
        }
        AppMsg::ScaleFactorChanged(factor) => {
            model.scale_factor = factor;
            Some(Cmd::Redraw)
        }
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
