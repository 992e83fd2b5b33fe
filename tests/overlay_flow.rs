//! End-to-end overlay scenarios driven through the update loop

use chrono::NaiveDate;
use pulseboard::config::AppConfig;
use pulseboard::messages::{AppMsg, Msg, OverlayMsg};
use pulseboard::model::{AppModel, CalendarData, DetailMode, OverlayView};
use pulseboard::theme::Theme;
use pulseboard::update::update;
use pulseboard::Cmd;

fn model() -> AppModel {
    let mut model = AppModel::new(AppConfig::default(), Theme::default(), CalendarData::demo());
    model.window_size = (1000, 800);
    model
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn click_day(model: &mut AppModel, day: u32) -> Option<Cmd> {
    let grid = model.grid_layout();
    let (col, row) = grid.cell_for_day(day);
    let (x, y) = grid.cell_origin(col, row);
    update(model, Msg::click((x + 12.0) as f64, (y + 12.0) as f64))
}

#[test]
fn test_full_drill_down_and_back() {
    let mut m = model();

    // Open, pick the meetings mode
    update(&mut m, Msg::Overlay(OverlayMsg::Toggle));
    assert_eq!(m.overlay, OverlayView::Overview);
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Meetings)));
    assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Meetings));

    // Zoom into March 3rd (has the Meta meeting)
    click_day(&mut m, 3);
    assert_eq!(m.overlay, OverlayView::TimeZoom(date(3)));

    // Click anywhere exits the zoom back to the meetings grid
    update(&mut m, Msg::click(1.0, 1.0));
    assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Meetings));

    // Close and reopen starts fresh at the overview
    update(&mut m, Msg::Overlay(OverlayMsg::Close));
    update(&mut m, Msg::Overlay(OverlayMsg::Open));
    assert_eq!(m.overlay, OverlayView::Overview);
}

#[test]
fn test_mode_switching_sequence() {
    let mut m = model();
    update(&mut m, Msg::Overlay(OverlayMsg::Open));

    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Leads)));
    assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Leads));

    // Switching to another mode goes directly, no overview stop
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Deals)));
    assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Deals));

    // Re-selecting the active mode returns to overview
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Deals)));
    assert_eq!(m.overlay, OverlayView::Overview);
}

#[test]
fn test_zoom_requires_meetings_mode() {
    let mut m = model();
    update(&mut m, Msg::Overlay(OverlayMsg::Open));
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Leads)));

    // Day 3 has a meeting, but leads mode doesn't drill down
    click_day(&mut m, 3);
    assert_eq!(m.overlay, OverlayView::MonthGrid(DetailMode::Leads));
}

#[test]
fn test_escape_closes_from_any_depth() {
    let mut m = model();
    update(&mut m, Msg::Overlay(OverlayMsg::Open));
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Meetings)));
    click_day(&mut m, 3);
    assert!(m.overlay.zoomed());

    update(&mut m, Msg::Overlay(OverlayMsg::Close));
    assert_eq!(m.overlay, OverlayView::Closed);
    assert_eq!(m.overlay.selected_date(), None);
}

#[test]
fn test_detail_keys_ignored_while_closed() {
    let mut m = model();
    let cmd = update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Leads)));
    assert_eq!(m.overlay, OverlayView::Closed);
    assert_eq!(cmd, None);
}

#[test]
fn test_resize_then_click_uses_new_layout() {
    let mut m = model();
    update(&mut m, Msg::Overlay(OverlayMsg::Open));
    update(&mut m, Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Meetings)));

    // Shrink the window; the panel recenters and the grid moves with it
    update(&mut m, Msg::App(AppMsg::Resize(600, 620)));
    click_day(&mut m, 3);
    assert_eq!(m.overlay, OverlayView::TimeZoom(date(3)));
}

#[test]
fn test_quit_command_propagates() {
    let mut m = model();
    assert_eq!(update(&mut m, Msg::App(AppMsg::Quit)), Some(Cmd::Quit));
}
