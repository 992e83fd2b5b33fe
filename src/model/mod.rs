//! Application model - all state lives here
//!
//! The model is plain data; the update layer is the only place that
//! mutates it, and the view layer only reads it.

pub mod data;
pub mod overlay;

pub use data::{leads_intensity, CalendarData, Meeting, MetricSummary};
pub use overlay::{DetailMode, OverlayView};

use chrono::{Datelike, Local, NaiveDate};

use crate::config::AppConfig;
use crate::theme::Theme;
use crate::view::geometry::{GridLayout, PanelLayout};

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Overlay state machine
    pub overlay: OverlayView,
    /// Injected calendar records
    pub data: CalendarData,
    /// First day of the displayed month
    pub month: NaiveDate,
    /// The date highlighted as "today" in the grid
    pub today: NaiveDate,
    /// Resolved color theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: AppConfig,
    /// Window inner size in physical pixels
    pub window_size: (u32, u32),
    /// Display scale factor
    pub scale_factor: f64,
}

impl AppModel {
    /// Build the model from loaded config, theme, and calendar data.
    ///
    /// The displayed month comes from the fixture when it declares one,
    /// otherwise the current month; "today" is always the wall clock.
    pub fn new(config: AppConfig, theme: Theme, data: CalendarData) -> Self {
        let today = Local::now().date_naive();
        let month = data.month.unwrap_or_else(|| first_of_month(today));
        Self {
            overlay: OverlayView::default(),
            data,
            month,
            today,
            theme,
            config,
            window_size: (0, 0),
            scale_factor: 1.0,
        }
    }

    /// Overlay panel layout for the current window size and scale factor
    pub fn panel_layout(&self) -> PanelLayout {
        PanelLayout::new(
            self.window_size.0 as f32,
            self.window_size.1 as f32,
            self.scale_factor as f32,
        )
    }

    /// Month-grid layout for the displayed month, positioned inside the
    /// panel's canvas region
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::for_month(self.month, self.panel_layout().canvas, self.scale_factor as f32)
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_month() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(first_of_month(d), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_model_uses_fixture_month() {
        let model = AppModel::new(AppConfig::default(), Theme::default(), CalendarData::demo());
        assert_eq!(model.month, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(model.overlay, OverlayView::Closed);
    }

    #[test]
    fn test_layouts_track_scale_factor() {
        let mut model =
            AppModel::new(AppConfig::default(), Theme::default(), CalendarData::demo());
        model.window_size = (2000, 1600);
        model.scale_factor = 2.0;

        let layout = model.panel_layout();
        assert_eq!(layout.panel.width, crate::view::geometry::PANEL_WIDTH * 2.0);
        assert_eq!(model.grid_layout().cell_size(), crate::view::geometry::CELL_SIZE * 2.0);
    }

    #[test]
    fn test_model_falls_back_to_current_month() {
        let data = CalendarData::from_yaml("{}").unwrap();
        let model = AppModel::new(AppConfig::default(), Theme::default(), data);
        assert_eq!(model.month.day(), 1);
    }
}
