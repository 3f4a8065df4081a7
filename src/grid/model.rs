//! Garden grid with arena-backed placement bookkeeping.

use std::sync::Arc;

use tracing::warn;

use super::types::{Placement, PlacementId};
use crate::catalog::{Catalog, Footprint};
use crate::error::{Error, Result};

/// Rectangular planting grid.
///
/// Cells are stored row-major. Placement metadata lives in a growable
/// table indexed by [`PlacementId`]; removed placements leave an empty
/// slot so that ids are never reused.
///
/// Cloning produces an independent deep copy of the occupancy state; the
/// read-only [`Catalog`] is shared.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_garden::catalog::{Catalog, Effect, Footprint};
/// use u_garden::grid::Garden;
///
/// let catalog = Arc::new(
///     Catalog::new().with_item("Pumpkin", Some(Effect::Quality), Footprint::square(2).unwrap()),
/// );
/// let mut garden = Garden::new(3, 3, catalog);
///
/// let id = garden.place("Pumpkin", 0, 0).unwrap();
/// assert!(!garden.can_place("Pumpkin", 1, 1));
/// assert!(garden.move_placement(id, 1, 1));
/// assert_eq!(garden.cell(2, 2), Some(id));
/// ```
#[derive(Debug, Clone)]
pub struct Garden {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PlacementId>>,
    slots: Vec<Option<Placement>>,
    live: usize,
    catalog: Arc<Catalog>,
}

impl Garden {
    /// Creates an empty garden. A zero dimension yields a garden that
    /// accepts no placements.
    pub fn new(rows: usize, cols: usize, catalog: Arc<Catalog>) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            slots: Vec::new(),
            live: 0,
            catalog,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Number of live placements.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Occupant of a cell. Out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<PlacementId> {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            None
        }
    }

    pub fn placement(&self, id: PlacementId) -> Option<&Placement> {
        self.slots.get(id.slot()?)?.as_ref()
    }

    /// Live placements in ascending id order.
    pub fn placements(&self) -> impl Iterator<Item = (PlacementId, &Placement)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, p)| p.as_ref().map(|p| (PlacementId::from_slot(slot), p)))
    }

    /// Ids of live placements in ascending order.
    pub fn placement_ids(&self) -> Vec<PlacementId> {
        self.placements().map(|(id, _)| id).collect()
    }

    /// In-bounds orthogonal neighbors of a cell: up, down, left, right.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows, self.cols);
        [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < rows && c < cols).then_some((r, c))
            })
    }

    /// Whether `item` fits with its top-left corner at `(row, col)` on
    /// currently empty cells.
    ///
    /// Items missing from the catalog never fit.
    pub fn can_place(&self, item: &str, row: usize, col: usize) -> bool {
        match self.footprint_of(item) {
            Some(fp) => self.region_is_free(row, col, fp.width(), fp.height(), None),
            None => false,
        }
    }

    /// Places `item` at `(row, col)`, returning its new id, or `None` if
    /// the footprint leaves the grid or overlaps another placement.
    pub fn place(&mut self, item: &str, row: usize, col: usize) -> Option<PlacementId> {
        let fp = self.footprint_of(item)?;
        if !self.region_is_free(row, col, fp.width(), fp.height(), None) {
            return None;
        }

        let id = PlacementId::from_slot(self.slots.len());
        let placement = Placement::new(item, row, col, fp);
        self.mark(&placement, Some(id));
        self.slots.push(Some(placement));
        self.live += 1;
        Some(id)
    }

    /// Removes a placement and frees its cells. Unknown ids are a no-op.
    pub fn remove(&mut self, id: PlacementId) -> Option<Placement> {
        let placement = self.slots.get_mut(id.slot()?)?.take()?;
        self.mark(&placement, None);
        self.live -= 1;
        Some(placement)
    }

    /// Relocates a placement so its top-left corner lands on `(row, col)`.
    ///
    /// The placement's own cells count as free, so it may slide into a
    /// region overlapping its current footprint. Returns `false` without
    /// modifying the grid if the id is unknown or the destination is out
    /// of bounds or occupied by another placement.
    pub fn move_placement(&mut self, id: PlacementId, row: usize, col: usize) -> bool {
        let Some(slot) = id.slot() else {
            return false;
        };
        let Some(current) = self.placement(id) else {
            return false;
        };
        let (width, height) = (current.width, current.height);
        if !self.region_is_free(row, col, width, height, Some(id)) {
            return false;
        }

        let Some(mut placement) = self.slots[slot].take() else {
            return false;
        };
        self.mark(&placement, None);
        placement.row = row;
        placement.col = col;
        self.mark(&placement, Some(id));
        self.slots[slot] = Some(placement);
        true
    }

    /// Removes every placement and restarts id allocation at 1.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.slots.clear();
        self.live = 0;
    }

    /// Checks the full occupancy invariant.
    pub fn validate(&self) -> Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(id) = self.cells[self.index(row, col)] else {
                    continue;
                };
                match self.placement(id) {
                    Some(p) if p.covers(row, col) => {}
                    Some(_) => {
                        return Err(Error::InvariantViolation(format!(
                            "cell ({row}, {col}) holds {id} outside its footprint"
                        )))
                    }
                    None => {
                        return Err(Error::InvariantViolation(format!(
                            "cell ({row}, {col}) holds {id} with no metadata"
                        )))
                    }
                }
            }
        }

        let mut live = 0;
        for (id, p) in self.placements() {
            live += 1;
            if !self.fits(p.row, p.col, p.width, p.height) {
                return Err(Error::InvariantViolation(format!(
                    "{id} at ({}, {}) exceeds the {}x{} grid",
                    p.row, p.col, self.rows, self.cols
                )));
            }
            if let Some((r, c)) = p.cells().find(|&(r, c)| self.cell(r, c) != Some(id)) {
                return Err(Error::InvariantViolation(format!(
                    "{id} covers ({r}, {c}) but the cell holds {:?}",
                    self.cell(r, c)
                )));
            }
        }
        if live != self.live {
            return Err(Error::InvariantViolation(format!(
                "live count {} does not match {live} placements",
                self.live
            )));
        }
        Ok(())
    }

    fn footprint_of(&self, item: &str) -> Option<Footprint> {
        match self.catalog.get(item) {
            Some(spec) => Some(spec.footprint),
            None => {
                warn!("Item '{}' is not in the catalog; rejecting placement.", item);
                None
            }
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn fits(&self, row: usize, col: usize, width: usize, height: usize) -> bool {
        matches!(row.checked_add(height), Some(end) if end <= self.rows)
            && matches!(col.checked_add(width), Some(end) if end <= self.cols)
    }

    /// Whether the rectangle is in bounds and every cell is empty or
    /// belongs to `owner`.
    fn region_is_free(
        &self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
        owner: Option<PlacementId>,
    ) -> bool {
        if !self.fits(row, col, width, height) {
            return false;
        }
        (row..row + height).all(|r| {
            (col..col + width).all(|c| match self.cells[self.index(r, c)] {
                None => true,
                occupant => occupant == owner,
            })
        })
    }

    fn mark(&mut self, placement: &Placement, value: Option<PlacementId>) {
        for (r, c) in placement.cells() {
            let idx = self.index(r, c);
            self.cells[idx] = value;
        }
    }
}

impl PartialEq for Garden {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.cells == other.cells
            && self.slots == other.slots
            && (Arc::ptr_eq(&self.catalog, &other.catalog) || self.catalog == other.catalog)
    }
}
