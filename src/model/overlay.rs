//! Overlay view state - the detail-mode / zoom state machine
//!
//! Pure state, no rendering. All mutation happens through the explicit
//! transition methods; the update layer never pokes at variants directly.

use chrono::NaiveDate;

/// Which metric category the calendar is visualizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Leads,
    Meetings,
    Deals,
}

impl DetailMode {
    /// Display label for the metric button
    pub fn label(&self) -> &'static str {
        match self {
            DetailMode::Leads => "New Leads",
            DetailMode::Meetings => "Meetings",
            DetailMode::Deals => "Closed",
        }
    }
}

/// The overlay state machine.
///
/// `TimeZoom` is only reachable from `MonthGrid(Meetings)`, and its date
/// always refers to a day with at least one meeting record; the update
/// layer enforces both before transitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayView {
    /// Overlay not visible
    #[default]
    Closed,
    /// Overlay open, no detail mode selected (grid shows no indicators)
    Overview,
    /// Overlay open with a detail mode active
    MonthGrid(DetailMode),
    /// Zoomed single-day time view for a date with meeting records
    TimeZoom(NaiveDate),
}

impl OverlayView {
    /// Whether the overlay is visible at all
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayView::Closed)
    }

    /// The active detail mode, if any. The time zoom is only reachable
    /// through the meetings grid, so it reports `Meetings`.
    pub fn detail_mode(&self) -> Option<DetailMode> {
        match self {
            OverlayView::Closed | OverlayView::Overview => None,
            OverlayView::MonthGrid(mode) => Some(*mode),
            OverlayView::TimeZoom(_) => Some(DetailMode::Meetings),
        }
    }

    /// Whether the zoomed time view is active
    pub fn zoomed(&self) -> bool {
        matches!(self, OverlayView::TimeZoom(_))
    }

    /// The selected date, set only while zoomed
    pub fn selected_date(&self) -> Option<NaiveDate> {
        match self {
            OverlayView::TimeZoom(date) => Some(*date),
            _ => None,
        }
    }

    /// `Closed -> Overview`. Reopening always starts at the overview;
    /// no detail mode survives a close.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = OverlayView::Overview;
        }
    }

    /// Any state `-> Closed`, clearing detail mode and selected date
    pub fn close(&mut self) {
        *self = OverlayView::Closed;
    }

    /// Toggle a detail mode. Selecting the active mode returns to the
    /// overview; selecting a different mode switches directly. Toggling
    /// while zoomed behaves as if the meetings grid were showing (the
    /// zoom is abandoned). No-op while closed.
    pub fn toggle_detail(&mut self, mode: DetailMode) {
        if !self.is_open() {
            return;
        }
        *self = if self.detail_mode() == Some(mode) {
            OverlayView::Overview
        } else {
            OverlayView::MonthGrid(mode)
        };
    }

    /// `MonthGrid(Meetings) -> TimeZoom(date)`. The caller verifies the
    /// date has meeting records; any other state is left unchanged.
    pub fn zoom_to(&mut self, date: NaiveDate) {
        if matches!(self, OverlayView::MonthGrid(DetailMode::Meetings)) {
            *self = OverlayView::TimeZoom(date);
        }
    }

    /// `TimeZoom -> MonthGrid(Meetings)`; no-op in any other state
    pub fn exit_zoom(&mut self) {
        if self.zoomed() {
            *self = OverlayView::MonthGrid(DetailMode::Meetings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_open_starts_at_overview() {
        let mut view = OverlayView::Closed;
        view.open();
        assert_eq!(view, OverlayView::Overview);
    }

    #[test]
    fn test_open_is_idempotent_when_already_open() {
        let mut view = OverlayView::MonthGrid(DetailMode::Leads);
        view.open();
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Leads));
    }

    #[test]
    fn test_toggle_same_mode_returns_to_overview() {
        let mut view = OverlayView::Overview;
        view.toggle_detail(DetailMode::Leads);
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Leads));
        view.toggle_detail(DetailMode::Leads);
        assert_eq!(view, OverlayView::Overview);
    }

    #[test]
    fn test_toggle_different_mode_switches_directly() {
        let mut view = OverlayView::MonthGrid(DetailMode::Leads);
        view.toggle_detail(DetailMode::Meetings);
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Meetings));
    }

    #[test]
    fn test_toggle_while_closed_is_noop() {
        let mut view = OverlayView::Closed;
        view.toggle_detail(DetailMode::Deals);
        assert_eq!(view, OverlayView::Closed);
    }

    #[test]
    fn test_zoom_only_from_meetings_grid() {
        let mut view = OverlayView::MonthGrid(DetailMode::Leads);
        view.zoom_to(date(3));
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Leads));

        let mut view = OverlayView::Overview;
        view.zoom_to(date(3));
        assert_eq!(view, OverlayView::Overview);

        let mut view = OverlayView::MonthGrid(DetailMode::Meetings);
        view.zoom_to(date(3));
        assert_eq!(view, OverlayView::TimeZoom(date(3)));
        assert!(view.zoomed());
        assert_eq!(view.selected_date(), Some(date(3)));
    }

    #[test]
    fn test_exit_zoom_returns_to_meetings_grid() {
        let mut view = OverlayView::TimeZoom(date(3));
        view.exit_zoom();
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Meetings));
    }

    #[test]
    fn test_toggle_meetings_while_zoomed_returns_to_overview() {
        let mut view = OverlayView::TimeZoom(date(3));
        view.toggle_detail(DetailMode::Meetings);
        assert_eq!(view, OverlayView::Overview);
    }

    #[test]
    fn test_toggle_other_mode_while_zoomed_switches_grid() {
        let mut view = OverlayView::TimeZoom(date(3));
        view.toggle_detail(DetailMode::Deals);
        assert_eq!(view, OverlayView::MonthGrid(DetailMode::Deals));
    }

    #[test]
    fn test_close_clears_everything_and_machine_restarts() {
        let mut view = OverlayView::TimeZoom(date(3));
        view.close();
        assert_eq!(view, OverlayView::Closed);
        assert_eq!(view.detail_mode(), None);
        assert_eq!(view.selected_date(), None);

        view.open();
        assert_eq!(view, OverlayView::Overview);
    }

    #[test]
    fn test_zoom_reports_meetings_mode() {
        let view = OverlayView::TimeZoom(date(3));
        assert_eq!(view.detail_mode(), Some(DetailMode::Meetings));
    }
}
