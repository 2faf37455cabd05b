use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Colours applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_text: Color,
}

/// Black board, green snake with a darker head, red food.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(0, 155, 0),
    snake_body: Color::Rgb(0, 255, 0),
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_text: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Red,
    menu_text: Color::White,
};

/// Glyph used to paint one logical cell.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns per logical cell; keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Default simulation rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Upper bound accepted for the simulation rate.
pub const MAX_TICKS_PER_SECOND: u32 = 60;

/// Points granted per food eaten.
pub const DEFAULT_FOOD_REWARD: u32 = 10;

/// Smallest playable board: the snake plus one free cell for food.
pub const MIN_GRID_CELLS: usize = 2;
