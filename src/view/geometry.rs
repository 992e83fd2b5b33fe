//! Pure layout geometry and hit-testing
//!
//! Single source of truth for where things are drawn: the renderer and
//! the click handling both derive positions from these types, so a hit
//! test can never disagree with the pixels on screen.
//!
//! All coordinates are surface pixels, f32. The layout constants are
//! logical sizes; each layout multiplies them by the window scale
//! factor, so the panel keeps the same apparent size on HiDPI displays
//! and text scaled the same way lands inside the scaled cells.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::model::{CalendarData, DetailMode, OverlayView};

/// A rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// Panel dimensions, logical pixels
pub const PANEL_WIDTH: f32 = 380.0;
pub const PANEL_HEIGHT: f32 = 560.0;
pub const PANEL_PADDING: f32 = 16.0;
pub const CLOSE_BUTTON_SIZE: f32 = 20.0;
pub const TITLE_HEIGHT: f32 = 28.0;
pub const REVENUE_HEIGHT: f32 = 36.0;
pub const CANVAS_WIDTH: f32 = 240.0;
pub const CANVAS_HEIGHT: f32 = 230.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;

/// Where a click inside the window landed, panel-wise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    /// The close (x) button
    CloseButton,
    /// One of the three metric buttons
    MetricButton(DetailMode),
    /// The calendar canvas region
    Canvas,
    /// Panel chrome outside any interactive region
    Body,
    /// Outside the panel entirely
    Outside,
}

/// Computed layout for the overlay panel, centered in the window.
///
/// Rebuilt from the window size on every frame and every click; nothing
/// here is cached across resizes.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub panel: Rect,
    pub close_button: Rect,
    /// Baseline-ish anchor for the "Sales Overview" title
    pub title_pos: (f32, f32),
    /// Anchor for the revenue figure
    pub revenue_pos: (f32, f32),
    pub canvas: Rect,
    /// Metric buttons in `DetailMode` order: leads, meetings, deals
    pub buttons: [Rect; 3],
}

impl PanelLayout {
    /// Lay out the panel centered in a window of the given physical size,
    /// with all logical constants multiplied by `scale`
    pub fn new(window_width: f32, window_height: f32, scale: f32) -> Self {
        let pad = PANEL_PADDING * scale;
        let panel = Rect::new(
            ((window_width - PANEL_WIDTH * scale) / 2.0).max(0.0),
            ((window_height - PANEL_HEIGHT * scale) / 2.0).max(0.0),
            PANEL_WIDTH * scale,
            PANEL_HEIGHT * scale,
        );

        let close_button = Rect::new(
            panel.right() - pad - CLOSE_BUTTON_SIZE * scale,
            panel.y + pad,
            CLOSE_BUTTON_SIZE * scale,
            CLOSE_BUTTON_SIZE * scale,
        );

        let title_pos = (panel.x + pad, panel.y + pad);
        let revenue_pos = (panel.x + pad, panel.y + pad + TITLE_HEIGHT * scale);

        let canvas = Rect::new(
            panel.x + (PANEL_WIDTH - CANVAS_WIDTH) * scale / 2.0,
            panel.y + pad + (TITLE_HEIGHT + REVENUE_HEIGHT) * scale,
            CANVAS_WIDTH * scale,
            CANVAS_HEIGHT * scale,
        );

        let buttons_top = canvas.bottom() + pad;
        let button_width = (PANEL_WIDTH - 2.0 * PANEL_PADDING) * scale;
        let mut buttons = [Rect::new(0.0, 0.0, 0.0, 0.0); 3];
        for (i, slot) in buttons.iter_mut().enumerate() {
            *slot = Rect::new(
                panel.x + pad,
                buttons_top + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP) * scale,
                button_width,
                BUTTON_HEIGHT * scale,
            );
        }

        Self { panel, close_button, title_pos, revenue_pos, canvas, buttons }
    }

    /// The metric mode a button slot represents
    pub fn button_mode(index: usize) -> DetailMode {
        match index {
            0 => DetailMode::Leads,
            1 => DetailMode::Meetings,
            _ => DetailMode::Deals,
        }
    }

    /// Resolve a click against the panel. Interactive regions win over
    /// the body, and the body wins over the backdrop.
    pub fn hit_test(&self, x: f32, y: f32) -> PanelHit {
        if self.close_button.contains(x, y) {
            return PanelHit::CloseButton;
        }
        for (i, button) in self.buttons.iter().enumerate() {
            if button.contains(x, y) {
                return PanelHit::MetricButton(Self::button_mode(i));
            }
        }
        if self.canvas.contains(x, y) {
            return PanelHit::Canvas;
        }
        if self.panel.contains(x, y) {
            return PanelHit::Body;
        }
        PanelHit::Outside
    }
}

// Month grid dimensions, logical pixels relative to the canvas origin
pub const GRID_START_X: f32 = 20.0;
pub const GRID_START_Y: f32 = 30.0;
pub const CELL_SIZE: f32 = 24.0;
pub const CELL_PADDING: f32 = 2.0;
pub const CELL_STRIDE: f32 = CELL_SIZE + CELL_PADDING;
pub const GRID_COLS: u32 = 7;

/// Weekday column headers, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Month-grid layout: a 7-column grid of day cells with the first row
/// padded by the weekday offset of day 1 (Monday = column 0).
///
/// `day = row * 7 + col - first_offset + 1`; cells before day 1 or past
/// the end of the month are blank.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Absolute x of the top-left cell
    pub origin_x: f32,
    /// Absolute y of the top-left cell
    pub origin_y: f32,
    /// Scale applied to the logical cell constants
    pub scale: f32,
    /// Monday-first weekday index of day 1 (0..=6)
    pub first_offset: u32,
    pub days_in_month: u32,
    /// First day of the displayed month
    pub month: NaiveDate,
}

impl GridLayout {
    /// Lay out the grid for a month inside a canvas region
    pub fn for_month(month: NaiveDate, canvas: Rect, scale: f32) -> Self {
        Self {
            origin_x: canvas.x + GRID_START_X * scale,
            origin_y: canvas.y + GRID_START_Y * scale,
            scale,
            first_offset: month.weekday().num_days_from_monday(),
            days_in_month: days_in_month(month),
            month,
        }
    }

    /// Edge length of a day cell in surface pixels
    pub fn cell_size(&self) -> f32 {
        CELL_SIZE * self.scale
    }

    /// Distance between cell origins in surface pixels
    pub fn stride(&self) -> f32 {
        CELL_STRIDE * self.scale
    }

    /// Number of rows needed to fit the month
    pub fn rows(&self) -> u32 {
        (self.first_offset + self.days_in_month).div_ceil(GRID_COLS)
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, col: u32, row: u32) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.stride(),
            self.origin_y + row as f32 * self.stride(),
        )
    }

    /// Day of month at a cell position, if the cell holds a day
    pub fn day_at(&self, col: u32, row: u32) -> Option<u32> {
        if col >= GRID_COLS {
            return None;
        }
        let index = row * GRID_COLS + col;
        let day = (index + 1).checked_sub(self.first_offset)?;
        (1..=self.days_in_month).contains(&day).then_some(day)
    }

    /// Grid position of a day of month
    pub fn cell_for_day(&self, day: u32) -> (u32, u32) {
        let index = day - 1 + self.first_offset;
        (index % GRID_COLS, index / GRID_COLS)
    }

    /// The calendar date a day of month refers to
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        self.month.with_day(day)
    }

    /// The cell under a point. Clicks in the padding gaps between cells
    /// miss; only the cell square itself is live.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.stride()) as u32;
        let row = (dy / self.stride()) as u32;
        if col >= GRID_COLS || row >= self.rows() {
            return None;
        }
        let within_x = dx - col as f32 * self.stride();
        let within_y = dy - row as f32 * self.stride();
        (within_x < self.cell_size() && within_y < self.cell_size()).then_some((col, row))
    }

    /// The date under a point, if a day cell is there
    pub fn date_at(&self, x: f32, y: f32) -> Option<NaiveDate> {
        let (col, row) = self.hit_test(x, y)?;
        let day = self.day_at(col, row)?;
        self.date_for_day(day)
    }
}

/// Number of days in the month containing `month`
pub fn days_in_month(month: NaiveDate) -> u32 {
    let (year, m) = (month.year(), month.month());
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, m + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}

// Time-zoom axis, logical pixels relative to the canvas origin
pub const AXIS_START_HOUR: u32 = 9;
pub const AXIS_END_HOUR: u32 = 17;
pub const AXIS_LEFT: f32 = 40.0;
pub const AXIS_TOP: f32 = 24.0;
pub const AXIS_BOTTOM_INSET: f32 = 16.0;

/// Vertical hour axis for the zoomed single-day view: 09:00 at the top,
/// 17:00 at the bottom, linearly interpolated between.
#[derive(Debug, Clone, Copy)]
pub struct TimeAxis {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Scale applied to the logical axis constants
    pub scale: f32,
}

impl TimeAxis {
    /// Lay out the axis inside a canvas region
    pub fn for_canvas(canvas: Rect, scale: f32) -> Self {
        Self {
            left: canvas.x + AXIS_LEFT * scale,
            top: canvas.y + AXIS_TOP * scale,
            width: canvas.width - (AXIS_LEFT + 8.0) * scale,
            height: canvas.height - (AXIS_TOP + AXIS_BOTTOM_INSET) * scale,
            scale,
        }
    }

    /// Y coordinate of a whole hour tick
    pub fn hour_y(&self, hour: u32) -> f32 {
        let span = (AXIS_END_HOUR - AXIS_START_HOUR) as f32;
        self.top + (hour.saturating_sub(AXIS_START_HOUR)) as f32 * self.height / span
    }

    /// Y coordinate of a time of day, with minutes interpolated.
    /// Times outside the axis range clamp to its ends.
    pub fn time_y(&self, time: NaiveTime) -> f32 {
        use chrono::Timelike;
        let hours = time.hour() as f32 + time.minute() as f32 / 60.0;
        let span = (AXIS_END_HOUR - AXIS_START_HOUR) as f32;
        let frac = ((hours - AXIS_START_HOUR as f32) / span).clamp(0.0, 1.0);
        self.top + frac * self.height
    }
}

/// What a click on the canvas resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasHit {
    /// Leave the time zoom, back to the meetings grid
    ExitZoom,
    /// Zoom into the time view for a day with meetings
    ZoomToDate(NaiveDate),
}

/// Resolve a click in the canvas (or anywhere, while zoomed) against the
/// current view state.
///
/// While zoomed, any click exits the zoom regardless of position. In the
/// meetings grid, a click on a day cell with meeting records zooms into
/// it; every other combination is inert.
pub fn resolve_canvas_click(
    x: f32,
    y: f32,
    view: OverlayView,
    data: &CalendarData,
    grid: &GridLayout,
) -> Option<CanvasHit> {
    if view.zoomed() {
        return Some(CanvasHit::ExitZoom);
    }
    if view != OverlayView::MonthGrid(DetailMode::Meetings) {
        return None;
    }
    let date = grid.date_at(x, y)?;
    data.has_meetings(date).then_some(CanvasHit::ZoomToDate(date))
}
