/// Breakpoint handling for the landing page, kept apart from rendering.
use leptos::*;

pub const SM_MIN_WIDTH: f64 = 600.0;
pub const MD_MIN_WIDTH: f64 = 900.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenSize {
    Xs,
    Sm,
    #[default]
    Md,
}

impl ScreenSize {
    pub fn from_width(width: f64) -> Self {
        if width < SM_MIN_WIDTH {
            ScreenSize::Xs
        } else if width < MD_MIN_WIDTH {
            ScreenSize::Sm
        } else {
            ScreenSize::Md
        }
    }

    pub fn is_small(self) -> bool {
        self == ScreenSize::Xs
    }
}

/// Outer panel: vertical padding, gap between heading and cards, heading typography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub padding_y: &'static str,
    pub spacing: &'static str,
    pub title_line_height: &'static str,
    pub sub_title_font_size: &'static str,
    pub sub_title_line_height: &'static str,
    pub cards_direction: &'static str,
    pub cards_gap: &'static str,
}

impl PanelLayout {
    pub fn for_screen(size: ScreenSize) -> Self {
        match size {
            ScreenSize::Xs => Self {
                padding_y: "1.125rem",
                spacing: "20px",
                title_line_height: "31px",
                sub_title_font_size: "12px",
                sub_title_line_height: "15px",
                cards_direction: "column",
                cards_gap: "24px",
            },
            ScreenSize::Sm => Self {
                padding_y: "1.125rem",
                spacing: "40px",
                title_line_height: "45px",
                sub_title_font_size: "16px",
                sub_title_line_height: "24px",
                cards_direction: "column",
                cards_gap: "24px",
            },
            ScreenSize::Md => Self {
                padding_y: "3rem",
                spacing: "40px",
                title_line_height: "57px",
                sub_title_font_size: "18px",
                sub_title_line_height: "39px",
                cards_direction: "row",
                cards_gap: "32px",
            },
        }
    }

    pub fn style(&self) -> String {
        format!(
            "padding: {} 0; gap: {}; display: flex; flex-direction: column;",
            self.padding_y, self.spacing
        )
    }

    pub fn sub_title_style(&self) -> String {
        format!(
            "font-size: {}; line-height: {}; width: 70%; text-align: center;",
            self.sub_title_font_size, self.sub_title_line_height
        )
    }

    pub fn cards_style(&self) -> String {
        format!(
            "display: flex; flex-direction: {}; gap: {}; justify-content: space-between; align-items: stretch;",
            self.cards_direction, self.cards_gap
        )
    }
}

/// A single promo card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub padding: &'static str,
    pub image_size: u32,
    pub title_font_size: &'static str,
    pub title_line_height: &'static str,
    pub body_class: &'static str,
}

impl CardLayout {
    pub fn for_screen(size: ScreenSize) -> Self {
        match size {
            ScreenSize::Xs => Self {
                padding: "15px 10px",
                image_size: 95,
                title_font_size: "14px",
                title_line_height: "18px",
                body_class: "body3",
            },
            ScreenSize::Sm => Self {
                padding: "25px 40px",
                image_size: 110,
                title_font_size: "18px",
                title_line_height: "24px",
                body_class: "body1",
            },
            ScreenSize::Md => Self {
                padding: "30px",
                image_size: 175,
                title_font_size: "26px",
                title_line_height: "33px",
                body_class: "body1",
            },
        }
    }

    pub fn style(&self) -> String {
        format!("padding: {};", self.padding)
    }

    pub fn image_style(&self) -> String {
        format!("width: {0}px; height: {0}px;", self.image_size)
    }

    pub fn title_style(&self) -> String {
        format!(
            "font-size: {}; line-height: {}; font-weight: 700;",
            self.title_font_size, self.title_line_height
        )
    }
}

fn current_screen_size() -> ScreenSize {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(MD_MIN_WIDTH);
    ScreenSize::from_width(width)
}

/// Tracks the viewport breakpoint. Server renders assume desktop.
pub fn use_screen_size() -> ReadSignal<ScreenSize> {
    let (size, set_size) = create_signal(ScreenSize::default());
    create_effect(move |_| set_size.set(current_screen_size()));
    let handle = window_event_listener(ev::resize, move |_| set_size.set(current_screen_size()));
    on_cleanup(move || handle.remove());
    size
}
