//! Text rendering of a finished grid
//!
//! A read-only mapping from cell state to one character per cell.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::cell::{Cell, RegionId};
use crate::grid::Grid;

/// What a cell looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Wall,
    Floor(RegionId),
    Door,
    /// A connector the merger never reached; marks a disconnected pocket
    ResidualConnector,
}

impl Glyph {
    pub fn of(cell: &Cell) -> Self {
        if cell.is_door {
            Glyph::Door
        } else if cell.is_connector() {
            Glyph::ResidualConnector
        } else if cell.is_wall {
            Glyph::Wall
        } else {
            Glyph::Floor(cell.region_id)
        }
    }

    /// Display character for this glyph in the given style
    pub fn symbol(self, style: RenderStyle) -> char {
        match (self, style) {
            (Glyph::Wall, _) => '#',
            (Glyph::ResidualConnector, _) => '?',
            (Glyph::Floor(_), RenderStyle::Plain) => '.',
            (Glyph::Floor(region), RenderStyle::Regions) => {
                char::from_digit(region % 16, 16).unwrap_or('.')
            }
            (Glyph::Door, RenderStyle::Plain) => '+',
            (Glyph::Door, RenderStyle::Regions) => 'X',
        }
    }
}

/// Rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RenderStyle {
    /// Walls, floor, doors
    #[default]
    Plain,
    /// Floor shows the low hex digit of its region id
    Regions,
}

/// Render the grid, one `\n`-terminated line per row
pub fn render(grid: &Grid, style: RenderStyle) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|c| Glyph::of(c).symbol(style)));
        out.push('\n');
    }
    out
}
