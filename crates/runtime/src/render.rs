//! Plain-text rendering of the world grid.

use wumpus_core::{GameState, Heading, Position, PropKind};

const CELL_WIDTH: usize = 4;

/// Draws the grid with north at the top.
///
/// Rows run from `y = height - 1` down to `0` and columns from `x = 0`, so a
/// cell is always addressed as `(x, y)`. Props render as `G` gold, `W`
/// wumpus, `P` pit and a solid `####` wall; agents as an arrow for their
/// heading. The score and the event log follow the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridRenderer;

impl GridRenderer {
    pub fn render(state: &GameState) -> String {
        let dims = state.dimensions();
        let width = dims.width as usize;
        let rule = format!("{}+", "+----".repeat(width));

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');

        for y in (0..dims.height as i32).rev() {
            out.push('|');
            for x in 0..dims.width as i32 {
                let cell = Self::cell(state, Position::new(x, y));
                out.push_str(&format!("{:<width$}|", cell, width = CELL_WIDTH));
            }
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }

        out.push_str(&format!("Score: {}\n", state.world.score));
        for event in state.world.log.iter() {
            out.push_str(&format!("{event}\n"));
        }
        out
    }

    fn cell(state: &GameState, position: Position) -> String {
        let props: Vec<_> = state.entities.props_at(position).collect();
        if props.iter().any(|prop| prop.kind == PropKind::Wall) {
            return "#".repeat(CELL_WIDTH);
        }

        let mut cell = String::new();
        for agent in state.entities.agents_at(position) {
            cell.push(Self::arrow(agent.heading));
        }
        for prop in props {
            cell.push(match prop.kind {
                PropKind::Gold => 'G',
                PropKind::Wumpus => 'W',
                PropKind::Pit => 'P',
                PropKind::Wall => '#',
            });
        }
        cell
    }

    fn arrow(heading: Heading) -> char {
        match heading {
            Heading::East => '>',
            Heading::North => '^',
            Heading::West => '<',
            Heading::South => 'v',
        }
    }
}
