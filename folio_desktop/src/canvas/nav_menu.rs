use crate::animation::NavMenuState;
use crate::constants::{NAV_PANEL_WIDTH, TOP_BAR_HEIGHT};
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, Theme};
use std::marker::PhantomData;

/// Canvas program for the navigation panel backdrop: a dimming layer plus a
/// panel that slides in from the right edge, under the top bar.
pub struct NavMenuBackdrop<'a, Message> {
    pub state: &'a NavMenuState,
    pub palette: PaletteColors,
    /// Height of the link column the panel must accommodate.
    pub panel_height: f32,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> NavMenuBackdrop<'a, Message> {
    pub fn new(state: &'a NavMenuState, palette: PaletteColors, panel_height: f32) -> Self {
        Self {
            state,
            palette,
            panel_height,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for NavMenuBackdrop<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let backdrop = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let progress = self.state.progress();
            if progress < 0.01 {
                return;
            }

            let eased = ease_out_cubic(progress.min(1.0));

            // Dim everything behind the panel
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(Color {
                    a: 0.35 * eased,
                    ..self.palette.shadow
                }),
            );

            // Panel slides in from the right edge
            let panel_size = Size::new(NAV_PANEL_WIDTH, self.panel_height);
            let slide = NAV_PANEL_WIDTH * (1.0 - eased);
            let top_left = Point::new(
                bounds.width - NAV_PANEL_WIDTH - 12.0 + slide,
                TOP_BAR_HEIGHT + 8.0,
            );

            let panel = Path::rounded_rectangle(top_left, panel_size, 8.0.into());
            frame.fill(
                &panel,
                Color {
                    a: 0.98 * eased,
                    ..self.palette.surface
                },
            );
            frame.stroke(
                &panel,
                Stroke::default()
                    .with_color(Color {
                        a: 0.8 * eased,
                        ..self.palette.border
                    })
                    .with_width(1.0),
            );
        });
        vec![backdrop]
    }
}

/// Cubic ease-out for the panel slide.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
