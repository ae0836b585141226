//! Arena-backed world grid.
//!
//! Tiles are installed into a [`GridBuilder`] and the linking pass in
//! [`GridBuilder::link_all`] turns a fully populated builder into a [`Grid`]
//! whose tiles know their four neighbors. The grid exclusively owns every tile
//! for the lifetime of the session.

use std::ops::{Index, IndexMut};

use crate::error::{ErrorSeverity, GameError};

use super::{CardinalDirection, GridDimensions, Neighbors, Position, Tile};

/// Errors raised while assembling the grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {dimensions} contain no cells")]
    EmptyDimensions { dimensions: GridDimensions },

    #[error("tile position {position} is outside the {dimensions} grid")]
    OutOfBounds {
        position: Position,
        dimensions: GridDimensions,
    },

    #[error("a tile is already installed at {position}")]
    AlreadyInstalled { position: Position },

    #[error("no tile installed at {position}; every cell needs a tile before linking")]
    Unfilled { position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::EmptyDimensions { .. } => "GRID_EMPTY_DIMENSIONS",
            GridError::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            GridError::AlreadyInstalled { .. } => "GRID_ALREADY_INSTALLED",
            GridError::Unfilled { .. } => "GRID_UNFILLED",
        }
    }
}

/// Grid under construction: cells may still be empty and tiles are unlinked.
#[derive(Debug)]
pub struct GridBuilder {
    dimensions: GridDimensions,
    cells: Vec<Option<Tile>>,
}

impl GridBuilder {
    /// Allocates `rows × cols` empty cells.
    pub fn new(dimensions: GridDimensions) -> Result<Self, GridError> {
        if dimensions.area() == 0 {
            return Err(GridError::EmptyDimensions { dimensions });
        }

        let mut cells = Vec::with_capacity(dimensions.area());
        cells.resize_with(dimensions.area(), || None);

        Ok(Self { dimensions, cells })
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Installs a tile at its own position. A cell accepts exactly one tile.
    pub fn set_tile(&mut self, tile: Tile) -> Result<(), GridError> {
        let position = tile.position();
        let index = self
            .dimensions
            .index_of(position)
            .ok_or(GridError::OutOfBounds {
                position,
                dimensions: self.dimensions,
            })?;

        let cell = &mut self.cells[index];
        if cell.is_some() {
            return Err(GridError::AlreadyInstalled { position });
        }
        *cell = Some(tile);
        Ok(())
    }

    /// Returns true when every cell holds a tile.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Links every tile to its in-bounds neighbors and freezes the grid.
    ///
    /// Fails with [`GridError::Unfilled`] naming the first empty cell in
    /// row-major order.
    pub fn link_all(self) -> Result<Grid, GridError> {
        let dimensions = self.dimensions;
        let mut tiles = Vec::with_capacity(self.cells.len());

        for (position, cell) in dimensions.positions().zip(self.cells) {
            let mut tile = cell.ok_or(GridError::Unfilled { position })?;

            let mut links = Neighbors::default();
            for direction in CardinalDirection::ALL {
                let (dx, dy) = direction.delta();
                let neighbor = position.offset(dx, dy);
                links.set(direction, dimensions.contains(neighbor).then_some(neighbor));
            }
            tile.set_links(links);

            tiles.push(tile);
        }

        Ok(Grid { dimensions, tiles })
    }
}

/// Fully linked world grid.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn builder(dimensions: GridDimensions) -> Result<GridBuilder, GridError> {
        GridBuilder::new(dimensions)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Bounds-checked lookup.
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.dimensions
            .index_of(position)
            .map(|index| &self.tiles[index])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.dimensions
            .index_of(position)
            .map(move |index| &mut self.tiles[index])
    }

    /// Follows the tile's link in `direction`; `None` at the grid boundary.
    pub fn neighbor(&self, position: Position, direction: CardinalDirection) -> Option<&Tile> {
        self.get(position)?
            .neighbor(direction)
            .and_then(|next| self.get(next))
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dimensions.cols as usize)
    }

    fn expect_index(&self, position: Position) -> usize {
        debug_assert!(
            self.dimensions.contains(position),
            "grid lookup at {position} outside {}",
            self.dimensions
        );
        position.y as usize * self.dimensions.cols as usize + position.x as usize
    }
}

/// Unchecked lookup: callers must pass in-bounds coordinates.
impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, position: Position) -> &Tile {
        &self.tiles[self.expect_index(position)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, position: Position) -> &mut Tile {
        let index = self.expect_index(position);
        &mut self.tiles[index]
    }
}
