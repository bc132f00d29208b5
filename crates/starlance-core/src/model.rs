//! Sprite models: cell grids consumed by the renderer and, for the
//! collision core, only their dimensions.

use serde::{Deserialize, Serialize};

use crate::constants::ENEMY_MODEL_START;

/// A rows × cols cell grid. Each cell is empty or a color index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteModel {
    rows: usize,
    cols: usize,
    /// Row-major, top row first.
    cells: Vec<Option<u8>>,
}

impl SpriteModel {
    /// Build a model from ASCII rows: '.' or ' ' is empty, a digit is a
    /// color index. Short rows are padded empty; the grid width is the
    /// longest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let mut n = 0;
            for ch in row.chars() {
                cells.push(ch.to_digit(10).map(|d| d as u8));
                n += 1;
            }
            for _ in n..cols {
                cells.push(None);
            }
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Color index at (row, col), top-left origin. `None` for empty or
    /// out-of-range cells.
    pub fn color_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }
}

/// Maps model ids to sprite models. Id 0 is the player ship, id 1 the
/// shot pellet, ids 2.. the enemy ship variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelTable {
    models: Vec<SpriteModel>,
}

impl ModelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, returning its id.
    pub fn push(&mut self, model: SpriteModel) -> usize {
        self.models.push(model);
        self.models.len() - 1
    }

    pub fn get(&self, id: usize) -> Option<&SpriteModel> {
        self.models.get(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Grid dimensions (cols, rows) for envelope derivation.
    /// Unknown ids yield a degenerate (0, 0) grid.
    pub fn dims(&self, id: usize) -> (usize, usize) {
        self.models
            .get(id)
            .map(|m| (m.cols, m.rows))
            .unwrap_or((0, 0))
    }

    /// Number of registered enemy-ship models.
    pub fn enemy_model_count(&self) -> usize {
        self.models.len().saturating_sub(ENEMY_MODEL_START)
    }

    /// The built-in model set: player ship, shot pellet, and four enemy
    /// ship variants. Keeps the sim runnable without asset files.
    pub fn standard_set() -> Self {
        let mut table = Self::new();
        // id 0: player ship
        table.push(SpriteModel::from_rows(&[
            "..1..",
            ".111.",
            "11111",
            "1.1.1",
        ]));
        // id 1: shot pellet
        table.push(SpriteModel::from_rows(&["2"]));
        // id 2: dart
        table.push(SpriteModel::from_rows(&[".3.", "333", "3.3"]));
        // id 3: wing
        table.push(SpriteModel::from_rows(&["4..4", "4444", ".44."]));
        // id 4: hauler
        table.push(SpriteModel::from_rows(&["555", "5.5", "555", ".5."]));
        // id 5: drone
        table.push(SpriteModel::from_rows(&[".66.", "6666"]));
        table
    }
}
