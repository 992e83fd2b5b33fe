//! View module - all rendering code
//!
//! Contains the Renderer struct plus the pure layout geometry and the
//! canvas painters it drives. Every frame is a full repaint of the back
//! buffer followed by a copy to the softbuffer surface.

pub mod calendar;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod timeview;

pub use frame::{blend_colors, Frame, TextPainter};
pub use geometry::{CanvasHit, GridLayout, PanelHit, PanelLayout, Rect, TimeAxis};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use fontdue::{Font, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use crate::model::{AppModel, OverlayView};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Backdrop dim applied behind the open panel
const BACKDROP_DIM: u8 = 110;

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer. Softbuffer doesn't guarantee buffer
    /// contents are preserved between frames, so we maintain our own
    /// buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    glyph_cache: GlyphCache,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer, automatically detecting the window's scale factor
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let scale_factor = window.scale_factor();
        Self::with_scale_factor(window, context, scale_factor)
    }

    /// Create a new renderer with an explicit scale factor
    pub fn with_scale_factor(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        scale_factor: f64,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        // Explicitly resize the surface to match window dimensions
        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::new(1).unwrap()),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::new(1).unwrap()),
            )
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font = font::load_ui_font()?;

        let buffer_size = (width as usize) * (height as usize);
        let back_buffer = vec![0u32; buffer_size];

        Ok(Self {
            font,
            surface,
            back_buffer,
            width,
            height,
            glyph_cache: HashMap::new(),
            scale_factor,
        })
    }

    /// Get the current scale factor
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize the surface and back buffer to a new window size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::new(1).unwrap()),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::new(1).unwrap()),
            )
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        self.width = width;
        self.height = height;
        self.back_buffer.resize((width as usize) * (height as usize), 0);
        Ok(())
    }

    /// Update the scale factor (fonts re-rasterize lazily at the new size)
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.glyph_cache.clear();
    }

    /// Render the full scene for the current model state and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let width = self.width as usize;
        let height = self.height as usize;
        let scale = self.scale_factor as f32;

        {
            let mut frame = Frame::new(&mut self.back_buffer, width, height);
            frame.clear(model.theme.window.background.to_argb_u32());

            if model.overlay.is_open() {
                frame.dim(BACKDROP_DIM);
                draw_panel(&mut frame, &self.font, &mut self.glyph_cache, scale, model);
            } else {
                draw_closed_hint(&mut frame, &self.font, &mut self.glyph_cache, scale, model);
            }
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

/// Build a text painter for a font size, deriving metrics from the font
fn make_painter<'a>(
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    size: f32,
) -> TextPainter<'a> {
    let (ascent, line_height) = match font.horizontal_line_metrics(size) {
        Some(m) => (m.ascent, m.new_line_size.ceil() as usize),
        None => (size * 0.8, size.ceil() as usize),
    };
    TextPainter::new(font, glyph_cache, size, ascent, line_height)
}

/// Hint shown while the overlay is closed
fn draw_closed_hint(
    frame: &mut Frame,
    font: &Font,
    glyph_cache: &mut GlyphCache,
    scale: f32,
    model: &AppModel,
) {
    let mut text = make_painter(font, glyph_cache, 13.0 * scale);
    let bounds = Rect::new(0.0, 0.0, frame.width() as f32, frame.height() as f32);
    text.draw_centered(
        frame,
        bounds,
        "Click anywhere or press Space to open Sales Overview",
        model.theme.panel.text_dim.to_argb_u32(),
    );
}

/// Draw the overlay panel: chrome, canvas content, and metric buttons
pub fn draw_panel(
    frame: &mut Frame,
    font: &Font,
    glyph_cache: &mut GlyphCache,
    scale: f32,
    model: &AppModel,
) {
    let layout = model.panel_layout();
    let theme = &model.theme;

    frame.draw_bordered_rect(
        layout.panel.x as usize,
        layout.panel.y as usize,
        layout.panel.width as usize,
        layout.panel.height as usize,
        theme.panel.background.to_argb_u32(),
        theme.panel.border.to_argb_u32(),
    );

    // Title and close button
    {
        let mut text = make_painter(font, glyph_cache, 14.0 * scale);
        text.draw(
            frame,
            layout.title_pos.0 as usize,
            layout.title_pos.1 as usize,
            "Sales Overview",
            theme.panel.title.to_argb_u32(),
        );
        text.draw_centered(
            frame,
            layout.close_button,
            "x",
            theme.panel.text_dim.to_argb_u32(),
        );
    }

    // Revenue figure
    {
        let mut text = make_painter(font, glyph_cache, 22.0 * scale);
        text.draw(
            frame,
            layout.revenue_pos.0 as usize,
            layout.revenue_pos.1 as usize,
            &model.data.summary.revenue,
            theme.panel.revenue.to_argb_u32(),
        );
    }

    // Canvas content, clipped to the canvas region
    frame.fill_rect(layout.canvas, theme.calendar.background.to_argb_u32());
    frame.set_clip(layout.canvas);
    {
        let mut text = make_painter(font, glyph_cache, 9.0 * scale);
        match model.overlay {
            OverlayView::Closed => {}
            OverlayView::Overview => {
                let grid = model.grid_layout();
                calendar::draw_month_grid(
                    frame,
                    &mut text,
                    &grid,
                    &model.data,
                    model.today,
                    None,
                    &theme.calendar,
                );
            }
            OverlayView::MonthGrid(mode) => {
                let grid = model.grid_layout();
                calendar::draw_month_grid(
                    frame,
                    &mut text,
                    &grid,
                    &model.data,
                    model.today,
                    Some(mode),
                    &theme.calendar,
                );
            }
            OverlayView::TimeZoom(date) => {
                let axis = TimeAxis::for_canvas(layout.canvas, scale);
                let meetings = model.data.meetings_on(date).unwrap_or(&[]);
                timeview::draw_time_view(frame, &mut text, &axis, date, meetings, &theme.calendar);
            }
        }
    }
    frame.clear_clip();

    // Metric buttons
    let mut text = make_painter(font, glyph_cache, 12.0 * scale);
    let active_mode = model.overlay.detail_mode();
    for (i, rect) in layout.buttons.iter().enumerate() {
        let mode = PanelLayout::button_mode(i);
        let active = active_mode == Some(mode);
        let fill = if active {
            theme.buttons.active_background
        } else {
            theme.buttons.background
        };
        // The active deals button carries the deal accent on its border
        let border = if active && mode == crate::model::DetailMode::Deals {
            theme.calendar.deal_accent
        } else {
            theme.buttons.border
        };
        frame.draw_bordered_rect(
            rect.x as usize,
            rect.y as usize,
            rect.width as usize,
            rect.height as usize,
            fill.to_argb_u32(),
            border.to_argb_u32(),
        );
        let count = match mode {
            crate::model::DetailMode::Leads => model.data.summary.new_leads,
            crate::model::DetailMode::Meetings => model.data.summary.meetings,
            crate::model::DetailMode::Deals => model.data.summary.closed,
        };
        let label = format!("{} {}", mode.label(), count);
        text.draw_centered(frame, *rect, &label, theme.buttons.text.to_argb_u32());
    }
}
