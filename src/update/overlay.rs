//! Overlay update handlers
//!
//! Routes overlay messages through the state machine, resolving clicks
//! against the same layout geometry the renderer draws from.

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::OverlayMsg;
use crate::model::AppModel;
use crate::view::geometry::{resolve_canvas_click, CanvasHit, PanelHit};

/// Handle an overlay message, returning a redraw command on any visible
/// state change
pub fn update_overlay(model: &mut AppModel, msg: OverlayMsg) -> Option<Cmd> {
    let before = model.overlay;
    match msg {
        OverlayMsg::Open => model.overlay.open(),
        OverlayMsg::Close => model.overlay.close(),
        OverlayMsg::Toggle => {
            if model.overlay.is_open() {
                model.overlay.close();
            } else {
                model.overlay.open();
            }
        }
        OverlayMsg::ToggleDetail(mode) => model.overlay.toggle_detail(mode),
        OverlayMsg::Click { x, y } => handle_click(model, x as f32, y as f32),
    }
    (model.overlay != before).then_some(Cmd::Redraw)
}

/// Resolve a pointer click.
///
/// While closed, any click opens the overlay. While open, the panel
/// chrome is checked first (close button, metric buttons), then the
/// click falls through to the canvas resolution, which also handles the
/// exit-anywhere behavior of the zoomed view.
fn handle_click(model: &mut AppModel, x: f32, y: f32) {
    if !model.overlay.is_open() {
        model.overlay.open();
        return;
    }

    let layout = model.panel_layout();
    match layout.hit_test(x, y) {
        PanelHit::CloseButton => {
            debug!(target: "hit", "close button");
            model.overlay.close();
        }
        PanelHit::MetricButton(mode) => {
            debug!(target: "hit", ?mode, "metric button");
            model.overlay.toggle_detail(mode);
        }
        PanelHit::Canvas | PanelHit::Body | PanelHit::Outside => {
            let grid = model.grid_layout();
            match resolve_canvas_click(x, y, model.overlay, &model.data, &grid) {
                Some(CanvasHit::ExitZoom) => model.overlay.exit_zoom(),
                Some(CanvasHit::ZoomToDate(date)) => {
                    debug!(target: "hit", %date, "zoom into day");
                    model.overlay.zoom_to(date);
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::{CalendarData, DetailMode, OverlayView};
    use crate::theme::Theme;
    use chrono::NaiveDate;

    fn model() -> AppModel {
        let mut model =
            AppModel::new(AppConfig::default(), Theme::default(), CalendarData::demo());
        model.window_size = (1000, 800);
        model
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn cell_center(model: &AppModel, day: u32) -> (f32, f32) {
        let grid = model.grid_layout();
        let (col, row) = grid.cell_for_day(day);
        let (x, y) = grid.cell_origin(col, row);
        (x + 12.0, y + 12.0)
    }

    #[test]
    fn test_click_while_closed_opens() {
        let mut m = model();
        let cmd = update_overlay(&mut m, OverlayMsg::Click { x: 5.0, y: 5.0 });
        assert_eq!(m.overlay, OverlayView::Overview);
        assert_eq!(cmd, Some(Cmd::Redraw));
    }

    #[test]
    fn test_toggle_messages() {
        let mut m = model();
        assert_eq!(update_overlay(&mut m, OverlayMsg::Toggle), Some(Cmd::Redraw));
        assert!(m.overlay.is_open());
        assert_eq!(update_overlay(&mut m, OverlayMsg::Toggle), Some(Cmd::Redraw));
        assert!(!m.overlay.is_open());
    }

    #[test]
    fn test_no_redraw_when_nothing_changes() {
        let mut m = model();
        // Close while already closed
        assert_eq!(update_overlay(&mut m, OverlayMsg::Close), None);
    }

    #[test]
    fn test_close_button_click() {
        let mut m = model();
        m.overlay = OverlayView::MonthGrid(DetailMode::Leads);
        let cb = m.panel_layout().close_button;
        update_overlay(&mut m, OverlayMsg::Click { x: (cb.x + 2.0) as f64, y: (cb.y + 2.0) as f64 });
        assert_eq!(m.overlay, OverlayView::Closed);
    }

    #[test]
    fn test_metric_button_toggles_mode() {
        let mut m = model();
        m.overlay = OverlayView::Overview;
        let b = m.panel_layout().buttons[1];
        let (x, y) = ((b.x + 2.0) as f64, (b.y + 2.0) as f64);
        update_overlay(&mut m, OverlayMsg::Click { x, y });
        assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Meetings));
        update_overlay(&mut m, OverlayMsg::Click { x, y });
        assert_eq!(m.overlay, OverlayView::Overview);
    }

    #[test]
    fn test_meeting_cell_click_zooms() {
        let mut m = model();
        m.overlay = OverlayView::MonthGrid(DetailMode::Meetings);
        let (x, y) = cell_center(&m, 3);
        update_overlay(&mut m, OverlayMsg::Click { x: x as f64, y: y as f64 });
        assert_eq!(m.overlay, OverlayView::TimeZoom(date(3)));
    }

    #[test]
    fn test_empty_cell_click_does_nothing() {
        let mut m = model();
        m.overlay = OverlayView::MonthGrid(DetailMode::Meetings);
        // Day 4 has leads only, day 20 has nothing
        for day in [4, 20] {
            let (x, y) = cell_center(&m, day);
            let cmd = update_overlay(&mut m, OverlayMsg::Click { x: x as f64, y: y as f64 });
            assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Meetings));
            assert_eq!(cmd, None);
        }
    }

    #[test]
    fn test_cell_click_inert_in_leads_mode() {
        let mut m = model();
        m.overlay = OverlayView::MonthGrid(DetailMode::Leads);
        let (x, y) = cell_center(&m, 3);
        update_overlay(&mut m, OverlayMsg::Click { x: x as f64, y: y as f64 });
        assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Leads));
    }

    #[test]
    fn test_click_anywhere_exits_zoom() {
        let mut m = model();
        m.overlay = OverlayView::TimeZoom(date(3));
        // Click well outside the panel
        update_overlay(&mut m, OverlayMsg::Click { x: 2.0, y: 2.0 });
        assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Meetings));
    }

    #[test]
    fn test_close_button_wins_over_exit_zoom() {
        let mut m = model();
        m.overlay = OverlayView::TimeZoom(date(3));
        let cb = m.panel_layout().close_button;
        update_overlay(&mut m, OverlayMsg::Click { x: (cb.x + 2.0) as f64, y: (cb.y + 2.0) as f64 });
        assert_eq!(m.overlay, OverlayView::Closed);
    }
}
