// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const TYPE_INTERVAL_MS: u64 = 80;
pub const FEEDBACK_CLEAR_MS: u64 = 5000;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Nav panel transition (fast and snappy)
pub const NAV_SPRING_STIFFNESS: f32 = 0.15;
pub const NAV_SPRING_DAMPING: f32 = 0.70;

// Particles
pub const PARTICLE_DENSITY: f32 = 70_000.0; // px^2 of viewport per particle
pub const PARTICLE_EDGE_MARGIN: f32 = 10.0;
pub const PARTICLE_RADIUS_MIN: f32 = 0.4;
pub const PARTICLE_RADIUS_SPAN: f32 = 1.6;
pub const PARTICLE_DRIFT: f32 = 0.2; // horizontal speed span, centered on 0
pub const PARTICLE_RISE_MIN: f32 = 0.2;
pub const PARTICLE_RISE_SPAN: f32 = 0.3;
pub const PARTICLE_ALPHA_MIN: f32 = 0.15;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;

// Tilt cards
pub const TILT_MAX_ROTATE_DEG: f32 = 12.0;
pub const TILT_MAX_TRANSLATE: f32 = 10.0;
pub const TILT_PERSPECTIVE: f32 = 900.0;
pub const TILT_SHADOW_FACTOR: f32 = 1.6;
pub const HOVER_TICK_INCREMENT: f32 = 0.1;

// Scroll reveal
pub const REVEAL_THRESHOLD: f32 = 0.85; // fraction of viewport height

// Layout
pub const MOBILE_BREAKPOINT: f32 = 900.0;
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const TOP_BAR_HEIGHT: f32 = 64.0;
pub const NAV_PANEL_WIDTH: f32 = 220.0;
pub const SECTION_HERO_HEIGHT: f32 = 560.0;
pub const SECTION_ABOUT_HEIGHT: f32 = 360.0;
pub const SECTION_PROJECTS_HEIGHT: f32 = 440.0;
pub const SECTION_CONTACT_HEIGHT: f32 = 520.0;
pub const PROJECT_CARD_WIDTH: f32 = 220.0;
pub const PROJECT_CARD_HEIGHT: f32 = 170.0;
pub const CONTENT_MAX_WIDTH: f32 = 820.0;

// Corner radii
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const INPUT_BORDER_RADIUS: f32 = 8.0;
