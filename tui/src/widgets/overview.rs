//! Overview Widget
//!
//! The three spheres on a braille canvas. The group zoom and layer style
//! are applied here; opacity and blur become a fade toward the backdrop.
//! Titles are printed in each theme's dark text color over the light
//! backdrop.

use omnipository_core::{OverviewModel, SphereModel};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context};
use ratatui::widgets::Widget;

use crate::theme::{faded, BACKDROP_COLOR};
use crate::viewport::Viewport;

/// Blur at which the layer is dimmed by half
const FULL_BLUR: f64 = 40.0;

/// Draws an [`OverviewModel`]
pub struct OverviewWidget<'a> {
    model: &'a OverviewModel,
    viewport: Viewport,
}

impl<'a> OverviewWidget<'a> {
    /// Draw `model` mapped through `viewport`
    #[must_use]
    pub fn new(model: &'a OverviewModel, viewport: Viewport) -> Self {
        Self { model, viewport }
    }

    fn opacity(&self) -> f64 {
        let style = self.model.style;
        let clarity = 1.0 - (style.blur / FULL_BLUR).clamp(0.0, 0.5);
        style.opacity * clarity
    }

    fn draw_sphere(&self, ctx: &mut Context<'_>, sphere: &SphereModel, opacity: f64) {
        let group = self.model.scale * self.model.style.extra_scale;
        let (x, y) = self
            .viewport
            .to_canvas(sphere.position.x * group, sphere.position.y * group);
        let radius = self.model.diameter / 2.0 * group * sphere.scale_factor;
        let palette = sphere.palette;

        ctx.draw(&Circle {
            x,
            y,
            radius,
            color: faded(palette.background, opacity),
        });
        ctx.draw(&Circle {
            x,
            y,
            radius: radius * 0.8,
            color: faded(palette.shadow.rgb, opacity * f64::from(palette.shadow.alpha)),
        });
        ctx.draw(&Circle {
            x,
            y,
            radius: radius * 0.55,
            color: faded(palette.highlight, opacity),
        });

        #[allow(clippy::cast_precision_loss)]
        let half_label = sphere.title.chars().count() as f64 * self.viewport.units_per_col() / 2.0;
        ctx.print(
            x - half_label,
            y,
            Line::styled(
                sphere.title,
                Style::default()
                    .fg(faded(palette.text, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
}

impl Widget for OverviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let opacity = self.opacity();
        Canvas::default()
            .background_color(BACKDROP_COLOR)
            .marker(Marker::Braille)
            .x_bounds(self.viewport.x_bounds())
            .y_bounds(self.viewport.y_bounds())
            .paint(|ctx| {
                for sphere in &self.model.spheres {
                    self.draw_sphere(ctx, sphere, opacity);
                    // One layer per sphere so their colors stay separate
                    ctx.layer();
                }
            })
            .render(area, buf);
    }
}
