//! Month-grid painter
//!
//! Draws the calendar grid for the displayed month: weekday headers, day
//! cells, the today highlight, and the per-mode indicators. All positions
//! come from `GridLayout` so clicks resolve against the same geometry.

use chrono::NaiveDate;

use crate::model::{leads_intensity, CalendarData, DetailMode};
use crate::theme::CalendarTheme;

use super::frame::{Frame, TextPainter};
use super::geometry::{GridLayout, Rect, GRID_COLS, WEEKDAY_LABELS};

/// Offset of the indicator dot from the cell's top-right corner
const INDICATOR_INSET: f32 = 6.0;
const INDICATOR_DOT_RADIUS: f32 = 2.0;
const INDICATOR_GLOW_RADIUS: f32 = 7.0;
/// Glow strength of the fixed-intensity meeting dot
const MEETING_GLOW_ALPHA: u8 = 0x66;

/// Draw the month grid.
///
/// `mode` is `None` in the overview state, which draws the bare grid with
/// no indicators. The deals mode also draws no indicators.
pub fn draw_month_grid(
    frame: &mut Frame,
    text: &mut TextPainter,
    grid: &GridLayout,
    data: &CalendarData,
    today: NaiveDate,
    mode: Option<DetailMode>,
    theme: &CalendarTheme,
) {
    draw_weekday_headers(frame, text, grid, theme);

    let s = grid.scale;
    let cell = grid.cell_size();

    for day in 1..=grid.days_in_month {
        let (col, row) = grid.cell_for_day(day);
        let (x, y) = grid.cell_origin(col, row);
        let date = grid.date_for_day(day);

        frame.blend_rect(Rect::new(x, y, cell, cell), theme.cell_fill.to_argb_u32());
        frame.draw_rect_outline(
            x as usize,
            y as usize,
            cell as usize,
            cell as usize,
            theme.cell_border.to_argb_u32(),
        );

        text.draw(
            frame,
            (x + 3.0 * s) as usize,
            (y + 2.0 * s) as usize,
            &day.to_string(),
            theme.axis_label.to_argb_u32(),
        );

        // Indicator dot in the cell's top-right corner
        let (dot_x, dot_y) = (x + cell - INDICATOR_INSET * s, y + INDICATOR_INSET * s);
        match mode {
            Some(DetailMode::Meetings) if date.is_some_and(|d| data.has_meetings(d)) => {
                let color = theme.meeting_indicator;
                frame.draw_glow(
                    dot_x,
                    dot_y,
                    INDICATOR_GLOW_RADIUS * s,
                    color.with_alpha(MEETING_GLOW_ALPHA).to_argb_u32(),
                );
                frame.fill_circle(dot_x, dot_y, INDICATOR_DOT_RADIUS * s, color.to_argb_u32());
            }
            Some(DetailMode::Leads) => {
                if let Some(count) = date.and_then(|d| data.lead_count(d)).filter(|&c| c > 0) {
                    let color = theme.lead_indicator;
                    frame.draw_glow(
                        dot_x,
                        dot_y,
                        INDICATOR_GLOW_RADIUS * s,
                        color.scale_alpha(leads_intensity(count)).to_argb_u32(),
                    );
                    frame.fill_circle(dot_x, dot_y, INDICATOR_DOT_RADIUS * s, color.to_argb_u32());
                }
            }
            _ => {}
        }

        // Today outline goes on top of everything in the cell
        if date == Some(today) {
            frame.draw_rect_outline(
                x as usize,
                y as usize,
                cell as usize,
                cell as usize,
                theme.today_border.to_argb_u32(),
            );
        }
    }
}

fn draw_weekday_headers(
    frame: &mut Frame,
    text: &mut TextPainter,
    grid: &GridLayout,
    theme: &CalendarTheme,
) {
    let s = grid.scale;
    let label_y = grid.origin_y - 10.0 * s - text.line_height() as f32 / 2.0;
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        if col as u32 >= GRID_COLS {
            break;
        }
        let x = grid.origin_x + col as f32 * grid.stride() + grid.cell_size() / 2.0 - 3.0 * s;
        text.draw(
            frame,
            x.max(0.0) as usize,
            label_y.max(0.0) as usize,
            label,
            theme.axis_label.to_argb_u32(),
        );
    }
}
