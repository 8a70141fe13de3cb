use crate::animation::TiltCardState;
use crate::constants::{TILT_MAX_ROTATE_DEG, TILT_PERSPECTIVE};
use crate::theme::PaletteColors;
use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};
use std::f32::consts::PI;
use std::marker::PhantomData;

const CARD_INSET: f32 = 12.0;

/// Canvas program rendering one tilt-responsive card: the card plane is
/// rotated in 3D from the current contact point, projected back to the
/// canvas with a fixed focal length, and trailed by a directional shadow.
pub struct TiltCardCanvas<'a, Message> {
    pub state: &'a TiltCardState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> TiltCardCanvas<'a, Message> {
    pub fn new(state: &'a TiltCardState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for TiltCardCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let card = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let transform = self.state.transform;

            let ax = transform.rotate_x.to_radians();
            let ay = transform.rotate_y.to_radians();

            // Project a card-plane point (x, y relative to center, z = 0):
            // rotate about the x axis, then the y axis, push toward the
            // viewer, then apply the perspective divide.
            let project = |x: f32, y: f32| -> (f32, f32) {
                let yr = y * ax.cos();
                let z1 = y * ax.sin();
                let xr = x * ay.cos() + z1 * ay.sin();
                let z2 = -x * ay.sin() + z1 * ay.cos();

                let z = z2 + transform.translate_z;
                let scale = TILT_PERSPECTIVE / (TILT_PERSPECTIVE - z);
                (xr * scale, yr * scale)
            };

            let hw = bounds.width / 2.0 - CARD_INSET;
            let hh = bounds.height / 2.0 - CARD_INSET;
            let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];

            let quad = |offset_x: f32, offset_y: f32| -> Path {
                Path::new(|builder| {
                    for (i, (cx, cy)) in corners.iter().enumerate() {
                        let (px, py) = project(*cx, *cy);
                        let point = Point::new(
                            center.x + px + offset_x,
                            center.y + py + offset_y,
                        );
                        if i == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                    builder.close();
                })
            };

            // Directional drop shadow, only while tilted
            if !transform.is_neutral() {
                let shadow = quad(transform.shadow_offset.x, transform.shadow_offset.y);
                frame.fill(
                    &shadow,
                    Color {
                        a: 0.25,
                        ..self.palette.shadow
                    },
                );
            }

            let face = quad(0.0, 0.0);
            frame.fill(&face, self.palette.surface_raised);

            // Border with pulse effect on hover
            let pulse = (self.state.hover_tick.sin() + 1.0) * 0.5;
            let (border_color, border_alpha, stroke_width) = if self.state.is_hovered {
                (self.palette.accent, 0.8 + 0.2 * pulse, 2.0)
            } else {
                (self.palette.border, 0.6, 1.0)
            };
            frame.stroke(
                &face,
                Stroke::default()
                    .with_color(Color {
                        a: border_alpha,
                        ..border_color
                    })
                    .with_width(stroke_width),
            );

            // Glare sweep following the contact point
            if self.state.is_hovered && !transform.is_neutral() {
                let dx = transform.rotate_y / TILT_MAX_ROTATE_DEG;
                let dy = -transform.rotate_x / TILT_MAX_ROTATE_DEG;

                let angle = dx * 0.5 + PI / 4.0;
                let glare_len = bounds.width * 1.5;
                let cx = center.x + dx * bounds.width * 0.2;
                let cy = center.y + dy * bounds.height * 0.2;

                let start = Point::new(
                    cx + angle.cos() * glare_len * 0.5,
                    cy + angle.sin() * glare_len * 0.5,
                );
                let end = Point::new(
                    cx - angle.cos() * glare_len * 0.5,
                    cy - angle.sin() * glare_len * 0.5,
                );

                let glare = gradient::Linear::new(start, end)
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(0.5, Color { a: 0.1, ..Color::WHITE })
                    .add_stop(1.0, Color::TRANSPARENT);

                frame.fill(&face, glare);
            }
        });
        vec![card]
    }
}
