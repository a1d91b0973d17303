use ratatui::style::Color;

use crate::snake::Position;

/// Axis-aligned square play area, centered on the origin.
///
/// Replaces the loose bag of boundary constants that tends to accumulate in
/// snake implementations: every consumer gets the geometry from one `Copy`
/// value instead of reaching for globals.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    /// Greatest coordinate magnitude still on the board, per axis.
    pub half_extent: i32,
    /// Distance one segment travels per tick; also the food alignment unit.
    pub step: i32,
    /// Inset from the wall inside which food never spawns.
    pub food_margin: i32,
}

impl Board {
    /// The classic 800x800 board: walls at ±380, 20-unit cells, food
    /// confined to ±280.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            half_extent: 380,
            step: 20,
            food_margin: 100,
        }
    }

    /// Returns true when `position` lies on or inside the walls.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x.abs() <= self.half_extent && position.y.abs() <= self.half_extent
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Head-to-food distance below which the food counts as eaten.
///
/// Equal to one grid step. The collision check compares with strict `<`,
/// so heads in adjacent cells (exactly one step away) never trigger it;
/// only a shared cell does.
pub const FOOD_COLLISION_DISTANCE: f64 = 20.0;

/// Head-to-segment distance below which the snake has bitten itself.
pub const SELF_COLLISION_TOLERANCE: f64 = 15.0;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_SEGMENTS: usize = 3;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Fastest tick interval the CLI accepts.
pub const MIN_TICK_INTERVAL_MS: u64 = 40;

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-black theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::Green,
    hud_fg: Color::Gray,
    hud_accent: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    hud_fg: Color::Gray,
    hud_accent: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    hud_fg: Color::Gray,
    hud_accent: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

pub const GLYPH_SNAKE_HEAD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "◆";
pub const GLYPH_SNAKE_TAIL: &str = "◇";
pub const GLYPH_FOOD: &str = "✦";
