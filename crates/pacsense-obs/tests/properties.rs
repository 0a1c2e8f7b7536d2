//! Property tests for ghost-proximity detection over random grids.

use pacsense_core::{Color, Direction, DirectionSet, GridBatch};
use pacsense_obs::{detect, DetectorConfig, ProximityDetector, Radius};
use pacsense_test_utils::fixtures::{
    repeat_batch, GridBuilder, AGENT, EMPTY, FOOD, GHOST, WALL_TILE,
};
use proptest::prelude::*;

/// A random grid with exactly one agent: `(rows, cols, cells)`.
fn arb_grid() -> impl Strategy<Value = (usize, usize, Vec<Color>)> {
    (1usize..9, 1usize..9)
        .prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            let cell = prop_oneof![
                3 => Just(EMPTY),
                1 => Just(WALL_TILE),
                1 => Just(FOOD),
                2 => Just(GHOST),
            ];
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(cell, n),
                0..n,
            )
        })
        .prop_map(|(rows, cols, mut cells, agent)| {
            cells[agent] = AGENT;
            (rows, cols, cells)
        })
}

fn arb_radius() -> impl Strategy<Value = Radius> {
    prop_oneof![Just(Radius::One), Just(Radius::Two), Just(Radius::Three)]
}

fn detector(radius: Radius) -> ProximityDetector {
    ProximityDetector::new(DetectorConfig::new(AGENT, GHOST, radius)).unwrap()
}

fn run(rows: usize, cols: usize, cells: &[Color], radius: Radius) -> DirectionSet {
    let batch = GridBatch::new(1, rows, cols, cells.to_vec()).unwrap();
    detector(radius).detect_batch(&batch).unwrap()[0]
}

/// Closed form of the offset tables: a direction is set when a ghost lies
/// strictly on that side of the agent within Manhattan distance `radius`.
fn half_plane_oracle(cols: usize, cells: &[Color], radius: Radius) -> DirectionSet {
    let agent = cells.iter().position(|&c| c == AGENT).unwrap();
    let (ar, ac) = ((agent / cols) as i32, (agent % cols) as i32);
    let mut set = DirectionSet::empty();
    for (i, _) in cells.iter().enumerate().filter(|&(_, &c)| c == GHOST) {
        let (dr, dc) = ((i / cols) as i32 - ar, (i % cols) as i32 - ac);
        if dr.abs() + dc.abs() > radius.get() as i32 {
            continue;
        }
        for d in Direction::ALL {
            let (ur, uc) = d.offset_2d();
            if dr * ur + dc * uc > 0 {
                set.insert(d);
            }
        }
    }
    set
}

proptest! {
    #[test]
    fn matches_half_plane_oracle((rows, cols, cells) in arb_grid(), radius in arb_radius()) {
        prop_assert_eq!(
            run(rows, cols, &cells, radius),
            half_plane_oracle(cols, &cells, radius)
        );
    }

    #[test]
    fn radius_is_monotone((rows, cols, cells) in arb_grid()) {
        let one = run(rows, cols, &cells, Radius::One);
        let two = run(rows, cols, &cells, Radius::Two);
        let three = run(rows, cols, &cells, Radius::Three);
        prop_assert!(one.is_subset(two), "{} -> {}", one, two);
        prop_assert!(two.is_subset(three), "{} -> {}", two, three);
    }

    #[test]
    fn identical_grids_give_identical_rows(
        (rows, cols, cells) in arb_grid(),
        radius in arb_radius(),
        copies in 1usize..6,
    ) {
        let nested: Vec<Vec<Color>> = cells.chunks(cols).map(<[Color]>::to_vec).collect();
        let batch = repeat_batch(&nested, copies);
        let out = detector(radius).detect_batch(&batch).unwrap();
        prop_assert_eq!(out.len(), copies);
        let expected = run(rows, cols, &cells, radius);
        prop_assert!(out.iter().all(|r| *r == expected));
    }

    #[test]
    fn reach_ends_exactly_at_radius(
        rows in 1usize..10,
        cols in 1usize..10,
        ar in 0usize..10,
        ac in 0usize..10,
        radius in arb_radius(),
    ) {
        let (ar, ac) = (ar % rows, ac % cols);
        let r = radius.get() as i32;
        for d in Direction::ALL {
            let (ur, uc) = d.offset_2d();
            for (dist, seen) in [(r, true), (r + 1, false)] {
                let (gr, gc) = (ar as i32 + ur * dist, ac as i32 + uc * dist);
                if gr < 0 || gc < 0 || gr >= rows as i32 || gc >= cols as i32 {
                    continue;
                }
                let g = GridBuilder::new(rows, cols).agent(ar, ac).ghost(gr as usize, gc as usize);
                let hits = detector(radius).detect_batch(&g.build()).unwrap()[0];
                if seen {
                    prop_assert_eq!(hits, DirectionSet::from(d));
                } else {
                    prop_assert!(hits.is_empty(), "{} at distance {}: {}", d, dist, hits);
                }
            }
        }
    }

    #[test]
    fn upper_left_diagonal_marks_up_and_left(
        rows in 2usize..10,
        cols in 2usize..10,
        ar in 1usize..10,
        ac in 1usize..10,
        radius in prop_oneof![Just(2u32), Just(3u32)],
    ) {
        let (ar, ac) = (1 + ar % (rows - 1), 1 + ac % (cols - 1));
        let g = GridBuilder::new(rows, cols).agent(ar, ac).ghost(ar - 1, ac - 1);
        let out = detect(&g.build(), AGENT, GHOST, radius).unwrap();
        prop_assert_eq!(out[0], [1.0, 0.0, 1.0, 0.0]);
    }
}

#[test]
fn walls_in_the_maze_do_not_block_sight() {
    // Detection is purely geometric: maze walls between agent and ghost
    // are not occluders.
    let g = GridBuilder::new(5, 5)
        .agent(2, 2)
        .set(1, 2, WALL_TILE)
        .ghost(0, 2);
    let out = detect(&g.build(), AGENT, GHOST, 2).unwrap();
    assert_eq!(out[0], [1.0, 0.0, 0.0, 0.0]);
}
