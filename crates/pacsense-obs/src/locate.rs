//! Locating the agent's cell in a grid.
//!
//! Rendered grids carry exactly one agent cell. That invariant is
//! checked here rather than assumed: a grid with no match or with
//! several matches is an error, never a silent pick of the first one.

use crate::error::DetectError;
use pacsense_core::{Color, GridBatch, GridView};

/// The unique `(row, col)` of `color` in `grid`.
///
/// `grid_index` is only used to label errors.
pub fn locate_unique(
    grid: &GridView<'_>,
    color: Color,
    grid_index: usize,
) -> Result<(usize, usize), DetectError> {
    let mut found = grid.positions_of(color);
    let first = found.next().ok_or(DetectError::MissingCenter {
        grid: grid_index,
        color,
    })?;
    let extra = found.count();
    if extra > 0 {
        return Err(DetectError::AmbiguousCenter {
            grid: grid_index,
            color,
            count: extra + 1,
        });
    }
    Ok(first)
}

/// The `(row, col)` of the agent in a single grid.
pub fn agent_coordinate_lookup(
    grid: &GridView<'_>,
    agent_color: Color,
) -> Result<(usize, usize), DetectError> {
    locate_unique(grid, agent_color, 0)
}

/// The unique `(row, col)` of `color` in every grid of `batch`.
///
/// Fails on the first grid that violates the uniqueness invariant.
pub fn locate_centers(batch: &GridBatch, color: Color) -> Result<Vec<(usize, usize)>, DetectError> {
    batch
        .iter()
        .enumerate()
        .map(|(i, grid)| locate_unique(&grid, color, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_match() {
        let batch = GridBatch::single(vec![vec![0, 0, 0], vec![0, 0, 5]]).unwrap();
        let g = batch.grid(0).unwrap();
        assert_eq!(agent_coordinate_lookup(&g, 5), Ok((1, 2)));
    }

    #[test]
    fn missing_is_an_error() {
        let batch = GridBatch::single(vec![vec![0, 0]]).unwrap();
        let g = batch.grid(0).unwrap();
        assert_eq!(
            agent_coordinate_lookup(&g, 5),
            Err(DetectError::MissingCenter { grid: 0, color: 5 })
        );
    }

    #[test]
    fn duplicates_are_an_error() {
        let batch = GridBatch::single(vec![vec![5, 0], vec![5, 5]]).unwrap();
        let g = batch.grid(0).unwrap();
        assert_eq!(
            agent_coordinate_lookup(&g, 5),
            Err(DetectError::AmbiguousCenter {
                grid: 0,
                color: 5,
                count: 3
            })
        );
    }

    #[test]
    fn batch_errors_name_the_grid() {
        let batch = GridBatch::from_nested(&[
            vec![vec![5, 0]],
            vec![vec![0, 5]],
            vec![vec![0, 0]],
        ])
        .unwrap();
        assert_eq!(
            locate_centers(&batch, 5),
            Err(DetectError::MissingCenter { grid: 2, color: 5 })
        );

        let ok = GridBatch::from_nested(&[vec![vec![5, 0]], vec![vec![0, 5]]]).unwrap();
        assert_eq!(locate_centers(&ok, 5), Ok(vec![(0, 0), (0, 1)]));
    }
}
