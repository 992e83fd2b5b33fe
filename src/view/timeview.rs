//! Zoomed single-day time view painter
//!
//! Draws the working-hours axis (09:00 to 17:00) with the day's earliest
//! meeting plotted as a glowing point. Positions come from `TimeAxis`.

use chrono::NaiveDate;

use crate::model::Meeting;
use crate::theme::CalendarTheme;

use super::frame::{Frame, TextPainter};
use super::geometry::{Rect, TimeAxis, AXIS_END_HOUR, AXIS_START_HOUR};

const MEETING_POINT_RADIUS: f32 = 3.0;
/// The meeting point sits this far right of the axis line
const MEETING_POINT_OFFSET: f32 = 24.0;
const MEETING_GLOW_RADIUS: f32 = 9.0;
const MEETING_GLOW_ALPHA: u8 = 0x66;

/// Draw the time view for a single day.
///
/// Only the date's first meeting is plotted; the records are kept sorted
/// by time, so this is the earliest one. A date without records draws
/// just the axis.
pub fn draw_time_view(
    frame: &mut Frame,
    text: &mut TextPainter,
    axis: &TimeAxis,
    date: NaiveDate,
    meetings: &[Meeting],
    theme: &CalendarTheme,
) {
    let s = axis.scale;
    let heading = date.format("%B %-d, %Y").to_string();
    text.draw(
        frame,
        axis.left as usize,
        (axis.top - 18.0 * s).max(0.0) as usize,
        &heading,
        theme.axis_label.to_argb_u32(),
    );

    let line_color = theme.axis_line.to_argb_u32();
    let label_color = theme.axis_label.to_argb_u32();
    for hour in AXIS_START_HOUR..=AXIS_END_HOUR {
        let y = axis.hour_y(hour);
        frame.fill_rect(Rect::new(axis.left, y, axis.width, s.max(1.0)), line_color);
        let label = format!("{:02}:00", hour);
        let label_y = y - text.line_height() as f32 / 2.0;
        text.draw(
            frame,
            (axis.left - 34.0 * s).max(0.0) as usize,
            label_y.max(0.0) as usize,
            &label,
            label_color,
        );
    }

    if let Some(meeting) = meetings.first() {
        let y = axis.time_y(meeting.time);
        let x = axis.left + MEETING_POINT_OFFSET * s;
        let color = theme.meeting_indicator;
        frame.draw_glow(
            x,
            y,
            MEETING_GLOW_RADIUS * s,
            color.with_alpha(MEETING_GLOW_ALPHA).to_argb_u32(),
        );
        frame.fill_circle(x, y, MEETING_POINT_RADIUS * s, color.to_argb_u32());

        // Label centered above the point: "HH:MM - company"
        let label = format!("{} - {}", meeting.time.format("%H:%M"), meeting.company);
        let label_x = (x - text.measure_width(&label) / 2.0).max(0.0);
        let label_y = (y - text.line_height() as f32 - 4.0 * s).max(0.0);
        text.draw(frame, label_x as usize, label_y as usize, &label, color.to_argb_u32());
    }
}
