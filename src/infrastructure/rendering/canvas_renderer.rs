use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{ChartGeometry, ChartLayout};
use crate::domain::logging::LogComponent;
use crate::log_trace;

pub type RenderingResult<T> = Result<T, JsValue>;

const GRID_COLOR: &str = "#dcdde1";
const AXIS_TEXT_COLOR: &str = "#666666";
const LINE_COLOR: &str = "#4cd137";
const BAR_COLOR: &str = "#487eb0";
const AXIS_FONT: &str = "12px Arial, sans-serif";

/// Canvas 2D painter for one chart element
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn attach(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;
        Ok(Self { canvas, context })
    }

    /// Resize the backing store to the element's CSS box and return the layout.
    pub fn fit_layout(&self, height: u32) -> ChartLayout {
        let width = self.canvas.client_width().max(1) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        ChartLayout::new(width as f64, height as f64)
    }

    pub fn draw(&self, geometry: &ChartGeometry, layout: &ChartLayout) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, layout.width, layout.height);

        if geometry.is_empty() {
            return self.draw_message("No data", layout);
        }

        self.draw_grid(geometry, layout)?;
        self.draw_axes(geometry, layout)?;

        if !geometry.bars.is_empty() {
            ctx.set_fill_style_str(BAR_COLOR);
            for bar in &geometry.bars {
                ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
            }
        }

        if let Some((first, rest)) = geometry.points.split_first() {
            ctx.set_stroke_style_str(LINE_COLOR);
            ctx.set_line_width(2.0);
            ctx.begin_path();
            ctx.move_to(first.x, first.y);
            for p in rest {
                ctx.line_to(p.x, p.y);
            }
            ctx.stroke();
        }

        log_trace!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Painted {} points, {} bars",
            geometry.points.len(),
            geometry.bars.len()
        );
        Ok(())
    }

    /// Dashed 3/3 grid at every tick
    fn draw_grid(&self, geometry: &ChartGeometry, layout: &ChartLayout) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.save();
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        ctx.set_line_dash(&js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0)))?;
        ctx.begin_path();
        for tick in &geometry.value_ticks {
            ctx.move_to(layout.plot_left(), tick.position);
            ctx.line_to(layout.plot_right(), tick.position);
        }
        for tick in &geometry.date_ticks {
            ctx.move_to(tick.position, layout.plot_top());
            ctx.line_to(tick.position, layout.plot_bottom());
        }
        ctx.stroke();
        ctx.restore();
        Ok(())
    }

    fn draw_axes(&self, geometry: &ChartGeometry, layout: &ChartLayout) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_font(AXIS_FONT);

        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for tick in &geometry.value_ticks {
            ctx.fill_text(&tick.label, layout.plot_left() - 6.0, tick.position)?;
        }

        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for tick in &geometry.date_ticks {
            ctx.fill_text(&tick.label, tick.position, layout.plot_bottom() + 8.0)?;
        }
        Ok(())
    }

    fn draw_message(&self, message: &str, layout: &ChartLayout) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_font("14px Arial, sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(message, layout.width / 2.0, layout.height / 2.0)
    }
}
