//! Folio Desktop - Entry point for the Iced showcase application.

use folio_core::content::{Anchor, SiteContent};
use folio_core::utils::config::Config;
use folio_core::utils::logger;
use folio_desktop::canvas::{NavMenuBackdrop, ParticleFieldCanvas, TiltCardCanvas};
use folio_desktop::styles::{
    feedback_style, icon_button_style, input_style, nav_link_style, primary_button_style,
    section_style, top_bar_style, transparent_style,
};
use folio_desktop::{
    app_theme_with_mode, palette_from_mode, ContactForm, NavMenuState, PaletteColors,
    ParticleField, RevealTracker, ThemeMode, TiltCardState, Typewriter,
    CONTENT_MAX_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, FEEDBACK_CLEAR_MS,
    MOBILE_BREAKPOINT, NAV_PANEL_WIDTH, PROJECT_CARD_HEIGHT, PROJECT_CARD_WIDTH,
    SECTION_ABOUT_HEIGHT, SECTION_CONTACT_HEIGHT, SECTION_HERO_HEIGHT, SECTION_PROJECTS_HEIGHT,
    TICK_INTERVAL_MS, TOP_BAR_HEIGHT, TYPE_INTERVAL_MS,
};
use iced_fonts::bootstrap;

use chrono::Datelike;
use iced::alignment::Horizontal;
use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{
    button, column, container, mouse_area, row, scrollable, stack, text, text_editor, text_input,
    Space,
};
use iced::{Element, Length, Padding, Point, Size, Subscription, Task};

const NAV_LINK_HEIGHT: f32 = 44.0;

/// Application state. Each effect owns its state object; nothing is shared
/// between them beyond the palette derived from the theme mode.
struct App {
    config: Config,
    content: SiteContent,
    theme_mode: ThemeMode,
    window_size: Size,
    /// Height of the scrollable content viewport, from the last scroll event.
    viewport_height: f32,
    scroll_offset: f32,
    particle_field: ParticleField,
    typewriter: Typewriter,
    reveal: RevealTracker,
    tilt_cards: Vec<TiltCardState>,
    nav_state: NavMenuState,
    form: ContactForm,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick,
    TypeTick,
    ToggleTheme,
    ToggleNav,
    NavLinkClicked(Anchor),
    WindowResized(Size),
    Scrolled(scrollable::Viewport),
    CardHovered(usize, bool),
    CardMouseMoved(usize, Point),
    FormNameChanged(String),
    FormEmailChanged(String),
    FormBodyEdited(text_editor::Action),
    SubmitContact,
    FeedbackElapsed(u64),
}

/// Scrollable ID for programmatic nav scrolling.
fn content_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("folio-content")
}

/// Document-space top offsets of [hero, about, projects, contact].
fn section_tops() -> [f32; 4] {
    [
        0.0,
        SECTION_HERO_HEIGHT,
        SECTION_HERO_HEIGHT + SECTION_ABOUT_HEIGHT,
        SECTION_HERO_HEIGHT + SECTION_ABOUT_HEIGHT + SECTION_PROJECTS_HEIGHT,
    ]
}

fn anchor_offset(anchor: Anchor) -> f32 {
    let tops = section_tops();
    match anchor {
        Anchor::About => tops[1],
        Anchor::Projects => tops[2],
        Anchor::Contact => tops[3],
    }
}

/// Loads the user config, with context for the diagnostic on failure.
fn load_config() -> anyhow::Result<Config> {
    use anyhow::Context;
    Config::load_or_default().context("loading ~/.folio/config.yaml")
}

/// System light/dark signal, the middle step of theme resolution.
fn system_theme_mode() -> Option<ThemeMode> {
    match dark_light::detect() {
        dark_light::Mode::Light => Some(ThemeMode::Light),
        dark_light::Mode::Dark => Some(ThemeMode::Dark),
        dark_light::Mode::Default => None,
    }
}

impl App {
    /// Initializes the application. Every effect initializer is isolated:
    /// a failing one degrades to its default with a logged diagnostic and
    /// never takes the others down.
    fn init() -> (Self, Task<Message>) {
        if let Err(err) = logger::init_global_logger() {
            eprintln!("folio: file logging unavailable: {err}");
        }

        let config = match load_config() {
            Ok(config) => config,
            Err(err) => {
                logger::warn(&format!("config unavailable, using defaults: {err:#}"));
                Config::default()
            }
        };

        // Resolution order: persisted preference, then the OS signal, then dark
        let theme_mode = config
            .theme()
            .and_then(ThemeMode::from_name)
            .or_else(system_theme_mode)
            .unwrap_or_default();

        let content = SiteContent::default_site();
        let typewriter = Typewriter::new(content.name.clone());
        let tilt_cards = (0..content.projects.len())
            .map(|_| TiltCardState::default())
            .collect();

        let viewport_height = DEFAULT_WINDOW_HEIGHT - TOP_BAR_HEIGHT;
        let mut reveal = RevealTracker::new(section_tops().to_vec());
        // Startup pass so above-the-fold sections come in without scrolling
        reveal.check(0.0, viewport_height);

        (
            Self {
                config,
                content,
                theme_mode,
                window_size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
                viewport_height,
                scroll_offset: 0.0,
                particle_field: ParticleField::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
                typewriter,
                reveal,
                tilt_cards,
                nav_state: NavMenuState::default(),
                form: ContactForm::new(),
            },
            Task::none(),
        )
    }

    /// Applies a theme mode and persists it. Applying the current mode again
    /// is a no-op on both the palette and the stored preference.
    fn apply_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.config.set_theme(mode.name());
        if let Err(err) = self.config.save() {
            logger::warn(&format!("failed to persist theme preference: {err}"));
        }
        self.clear_canvas_caches();
    }

    /// Canvas layers cache geometry per palette; drop it all on theme swap.
    fn clear_canvas_caches(&mut self) {
        self.particle_field.cache.clear();
        self.nav_state.cache.clear();
        for card in &mut self.tilt_cards {
            card.clear_cache();
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.particle_field.advance(1.0);
                self.nav_state.update();
                self.reveal.update();

                let mut redraw_cards = false;
                for card in &mut self.tilt_cards {
                    if card.update() {
                        redraw_cards = true;
                    }
                }
                if redraw_cards {
                    for card in &mut self.tilt_cards {
                        card.clear_cache();
                    }
                }
            }
            Message::TypeTick => {
                self.typewriter.tick();
            }
            Message::ToggleTheme => {
                self.apply_theme(self.theme_mode.toggled());
            }
            Message::ToggleNav => {
                self.nav_state.toggle();
            }
            Message::NavLinkClicked(anchor) => {
                // Force-hide the panel at mobile widths only
                if self.window_size.width <= MOBILE_BREAKPOINT {
                    self.nav_state.close();
                }
                return iced::widget::operation::scroll_to(
                    content_scroll_id(),
                    AbsoluteOffset {
                        x: 0.0,
                        y: anchor_offset(anchor),
                    },
                );
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                // Bounds and population change; surviving particle positions
                // deliberately do not (wrap-around self-corrects)
                self.particle_field.resize(size.width, size.height);
                self.viewport_height = size.height - TOP_BAR_HEIGHT;
                self.reveal.check(self.scroll_offset, self.viewport_height);
            }
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                self.viewport_height = viewport.bounds().height;
                self.reveal.check(self.scroll_offset, self.viewport_height);
            }
            Message::CardHovered(idx, hovered) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_hovered(hovered);
                }
            }
            Message::CardMouseMoved(idx, point) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_contact(
                        point,
                        Size::new(PROJECT_CARD_WIDTH, PROJECT_CARD_HEIGHT),
                    );
                }
            }
            Message::FormNameChanged(value) => {
                self.form.name = value;
            }
            Message::FormEmailChanged(value) => {
                self.form.email = value;
            }
            Message::FormBodyEdited(action) => {
                self.form.body.perform(action);
            }
            Message::SubmitContact => {
                let epoch = self.form.acknowledge(&self.content.acknowledgement);
                return Task::future(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(FEEDBACK_CLEAR_MS)).await;
                    Message::FeedbackElapsed(epoch)
                });
            }
            Message::FeedbackElapsed(epoch) => {
                self.form.expire(epoch);
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);

        // The reveal timer stops itself: once the string is exhausted the
        // subscription is simply not rebuilt
        let typing = if self.typewriter.is_complete() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(TYPE_INTERVAL_MS)).map(|_| Message::TypeTick)
        };

        let resizes = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        Subscription::batch(vec![ticks, typing, resizes])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette_from_mode(self.theme_mode);

        let background = Canvas::new(ParticleFieldCanvas::<Message>::new(
            &self.particle_field,
            pal,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let sections = column![
            self.hero_section(pal),
            self.about_section(pal),
            self.projects_section(pal),
            self.contact_section(pal),
            self.footer(pal),
        ]
        .width(Length::Fill);

        let content = scrollable(sections)
            .id(content_scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let main_layer = column![self.top_bar(pal), content]
            .width(Length::Fill)
            .height(Length::Fill);

        let nav_overlay: Element<'_, Message> = if self.nav_state.progress() > 0.01 {
            self.nav_panel(pal)
        } else {
            Space::new().into()
        };

        let layers = stack(vec![background.into(), main_layer.into(), nav_overlay]);
        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn top_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let brand = text("folio").size(20).style(move |_| iced::widget::text::Style {
            color: Some(pal.accent),
        });

        let mut bar = row![brand, Space::new().width(Length::Fill)]
            .align_y(iced::Alignment::Center)
            .spacing(8);

        // Inline links on wide windows; the panel covers narrow ones
        if self.window_size.width > MOBILE_BREAKPOINT {
            for link in &self.content.nav_links {
                let anchor = link.anchor;
                bar = bar.push(
                    button(text(link.label.as_str()).size(15))
                        .on_press(Message::NavLinkClicked(anchor))
                        .padding([6, 10])
                        .style(nav_link_style(pal)),
                );
            }
        }

        let theme_glyph = match self.theme_mode {
            ThemeMode::Light => bootstrap::sun_fill(),
            ThemeMode::Dark => bootstrap::moon_stars(),
        };
        bar = bar.push(
            button(theme_glyph.size(16))
                .on_press(Message::ToggleTheme)
                .padding([8, 10])
                .style(icon_button_style(pal)),
        );
        bar = bar.push(
            button(bootstrap::list().size(18))
                .on_press(Message::ToggleNav)
                .padding([8, 10])
                .style(icon_button_style(pal)),
        );

        container(bar)
            .padding([12, 20])
            .width(Length::Fill)
            .height(Length::Fixed(TOP_BAR_HEIGHT))
            .style(top_bar_style(pal))
            .into()
    }

    /// Overlay: sliding backdrop plus the link column, aligned top-right.
    fn nav_panel(&self, pal: PaletteColors) -> Element<'_, Message> {
        let panel_height = NAV_LINK_HEIGHT * self.content.nav_links.len() as f32 + 24.0;

        let backdrop = Canvas::new(NavMenuBackdrop::<Message>::new(
            &self.nav_state,
            pal,
            panel_height,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let progress = self.nav_state.progress();
        let mut links = column![].spacing(4).width(Length::Fixed(NAV_PANEL_WIDTH - 24.0));
        for link in &self.content.nav_links {
            let anchor = link.anchor;
            links = links.push(
                button(
                    text(link.label.as_str())
                        .size(15)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(iced::Color {
                                a: progress,
                                ..pal.text
                            }),
                        }),
                )
                .on_press(Message::NavLinkClicked(anchor))
                .padding([10, 14])
                .width(Length::Fill)
                .style(nav_link_style(pal)),
            );
        }

        let positioned = container(links)
            .width(Length::Fill)
            .padding(Padding {
                top: TOP_BAR_HEIGHT + 20.0,
                right: 24.0,
                bottom: 0.0,
                left: 0.0,
            })
            .align_x(Horizontal::Right);

        stack(vec![backdrop.into(), positioned.into()]).into()
    }

    fn hero_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        // Caret rides along until the reveal finishes
        let name_line = if self.typewriter.is_complete() {
            self.typewriter.visible().to_string()
        } else {
            format!("{}▌", self.typewriter.visible())
        };

        let inner = column![
            Space::new().height(Length::Fill),
            text(name_line)
                .size(54)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.text),
                }),
            text(self.content.tagline.as_str())
                .size(20)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted),
                }),
            Space::new().height(Length::Fill),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center);

        container(inner)
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_HERO_HEIGHT))
            .align_x(Horizontal::Center)
            .style(transparent_style(pal))
            .into()
    }

    /// Wraps section content in the reveal treatment for `index`.
    fn revealed<'a>(
        &'a self,
        index: usize,
        height: f32,
        pal: PaletteColors,
        inner: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let progress = self.reveal.progress(index);
        let slide = (1.0 - progress) * 24.0;

        let card = container(inner)
            .max_width(CONTENT_MAX_WIDTH)
            .padding(32)
            .style(section_style(pal, progress));

        container(
            container(card)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(Padding {
                    top: 24.0 + slide,
                    right: 24.0,
                    bottom: 24.0,
                    left: 24.0,
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
    }

    fn about_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let inner = column![
            text(self.content.about.title.as_str()).size(28),
            text(self.content.about.body.as_str()).size(16),
        ]
        .spacing(16);

        self.revealed(1, SECTION_ABOUT_HEIGHT, pal, inner.into())
    }

    fn projects_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let mut cards = row![].spacing(20);
        for (i, project) in self.content.projects.iter().enumerate() {
            cards = cards.push(self.project_card(i, project, pal));
        }

        let inner = column![
            text(self.content.projects_title.as_str()).size(28),
            cards,
        ]
        .spacing(20);

        self.revealed(2, SECTION_PROJECTS_HEIGHT, pal, inner.into())
    }

    fn project_card<'a>(
        &'a self,
        index: usize,
        project: &'a folio_core::content::ProjectCard,
        pal: PaletteColors,
    ) -> Element<'a, Message> {
        let state = &self.tilt_cards[index];
        let transform = state.transform;

        let surface = Canvas::new(TiltCardCanvas::<Message>::new(state, pal))
            .width(Length::Fixed(PROJECT_CARD_WIDTH))
            .height(Length::Fixed(PROJECT_CARD_HEIGHT));

        // Labels drift with the shadow for a light parallax
        let label_padding = Padding {
            top: 32.0 - transform.shadow_offset.y * 0.5,
            right: 28.0,
            bottom: 28.0,
            left: 28.0 - transform.shadow_offset.x * 0.5,
        };

        let labels = container(
            column![
                text(project.title.as_str())
                    .size(18)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent),
                    }),
                text(project.summary.as_str())
                    .size(13)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.text),
                    }),
            ]
            .spacing(8),
        )
        .padding(label_padding)
        .width(Length::Fixed(PROJECT_CARD_WIDTH))
        .height(Length::Fixed(PROJECT_CARD_HEIGHT));

        mouse_area(stack(vec![surface.into(), labels.into()]))
            .on_enter(Message::CardHovered(index, true))
            .on_exit(Message::CardHovered(index, false))
            .on_move(move |point| Message::CardMouseMoved(index, point))
            .into()
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let name_input = text_input("Your name", &self.form.name)
            .on_input(Message::FormNameChanged)
            .padding([10, 12])
            .style(input_style(pal));

        let email_input = text_input("Email", &self.form.email)
            .on_input(Message::FormEmailChanged)
            .padding([10, 12])
            .style(input_style(pal));

        let body_input = text_editor(&self.form.body)
            .on_action(Message::FormBodyEdited)
            .height(Length::Fixed(120.0));

        let send = button(text("Send").size(15))
            .on_press(Message::SubmitContact)
            .padding([10, 24])
            .style(primary_button_style(pal));

        let mut inner = column![
            text(self.content.contact_title.as_str()).size(28),
            text(self.content.contact_blurb.as_str()).size(15),
            name_input,
            email_input,
            body_input,
            send,
        ]
        .spacing(14);

        if let Some(feedback) = &self.form.feedback {
            inner = inner.push(
                container(text(feedback.as_str()).size(14))
                    .padding([8, 12])
                    .style(feedback_style(pal)),
            );
        }

        self.revealed(3, SECTION_CONTACT_HEIGHT, pal, inner.into())
    }

    fn footer(&self, pal: PaletteColors) -> Element<'_, Message> {
        let year = chrono::Local::now().year();
        container(
            text(format!("© {} {}", year, self.content.name))
                .size(13)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted),
                }),
        )
        .width(Length::Fill)
        .padding([20, 0])
        .align_x(Horizontal::Center)
        .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app_theme_with_mode(app.theme_mode)
    }

    iced::application(App::init, App::update, App::view)
        .title("Folio")
        .subscription(App::subscription)
        .theme(get_theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window_size(Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tops_are_cumulative_heights() {
        let tops = section_tops();
        assert_eq!(tops[0], 0.0);
        assert_eq!(tops[1], SECTION_HERO_HEIGHT);
        assert_eq!(tops[2], SECTION_HERO_HEIGHT + SECTION_ABOUT_HEIGHT);
        assert_eq!(
            tops[3],
            SECTION_HERO_HEIGHT + SECTION_ABOUT_HEIGHT + SECTION_PROJECTS_HEIGHT
        );
    }

    #[test]
    fn anchor_offsets_point_at_their_sections() {
        assert_eq!(anchor_offset(Anchor::About), section_tops()[1]);
        assert_eq!(anchor_offset(Anchor::Projects), section_tops()[2]);
        assert_eq!(anchor_offset(Anchor::Contact), section_tops()[3]);
    }
}
