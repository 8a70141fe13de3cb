use crate::animation::ParticleField;
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

/// Canvas program for the ambient background particle layer.
pub struct ParticleFieldCanvas<'a, Message> {
    pub state: &'a ParticleField,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleFieldCanvas<'a, Message> {
    pub fn new(state: &'a ParticleField, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleFieldCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layer = self.state.cache.draw(renderer, bounds.size(), |frame| {
            // Fill first; the field is the bottom layer of the whole window
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.background),
            );

            for p in &self.state.particles {
                let dot = Path::circle(Point::new(p.x, p.y), p.radius);
                frame.fill(
                    &dot,
                    Color {
                        a: p.alpha,
                        ..self.palette.glow
                    },
                );
            }
        });
        vec![layer]
    }
}
