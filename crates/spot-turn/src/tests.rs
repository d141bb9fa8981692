//! Integration tests for spot-turn.

use spot_core::{GridRng, Level, MoveDirection::*, Position, Step};
use spot_grid::{Grid, GridBuilder, OccupancyRegistry};

use crate::{advance, run_to_completion, NoopObserver, TurnObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn preset_level() -> Level {
    Level::new(5, 3, 2).with_indigenous_moves(vec![Right, Down, Right])
}

fn build(level: Level, seed: u64) -> Grid {
    GridBuilder::new(level).build(&mut GridRng::new(seed)).unwrap()
}

fn build_planned(level: Level, seed: u64) -> (Grid, OccupancyRegistry) {
    GridBuilder::new(level)
        .build_with_registry(&mut GridRng::new(seed))
        .unwrap()
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance_tests {
    use super::*;
    use crate::TurnError;

    #[test]
    fn preset_scenario_drains_after_three_turns() {
        let mut grid = build(preset_level(), 42);
        let start = grid.indigenous.position;

        assert!(advance(&mut grid).unwrap());
        assert!(advance(&mut grid).unwrap());
        assert!(advance(&mut grid).unwrap());
        assert!(grid.indigenous.trajectory.is_empty());
        assert!(grid.is_drained());
        assert!(!advance(&mut grid).unwrap());

        assert_eq!(grid.indigenous.position, Position::new(start.x + 2, start.y - 1));
    }

    #[test]
    fn each_turn_consumes_one_move_per_person() {
        let mut grid = build(Level::new(8, 4, 3), 1);
        advance(&mut grid).unwrap();
        assert!(grid.people().all(|p| p.trajectory.len() == 3));
    }

    #[test]
    fn deltas_applied_per_direction() {
        let mut grid = build(Level::new(5, 4, 0).with_indigenous_moves(vec![Up, Right, Down, Left]), 0);
        let start = grid.indigenous.position;
        let expected = [
            Position::new(start.x,     start.y + 1),
            Position::new(start.x + 1, start.y + 1),
            Position::new(start.x + 1, start.y),
            start,
        ];
        for want in expected {
            advance(&mut grid).unwrap();
            assert_eq!(grid.indigenous.position, want);
        }
    }

    #[test]
    fn drained_grid_is_untouched() {
        let mut grid = build(preset_level(), 3);
        while advance(&mut grid).unwrap() {}
        let before = grid.clone();
        assert!(!advance(&mut grid).unwrap());
        assert!(!advance(&mut grid).unwrap());
        assert_eq!(grid, before);
    }

    #[test]
    fn unspecified_move_fails_without_mutation() {
        let mut grid = build(preset_level(), 4);
        grid.indigenous.trajectory = spot_core::Trajectory::from_moves([Unspecified, Up]);
        let before = grid.clone();

        match advance(&mut grid) {
            Err(TurnError::InvalidDirection { person, direction }) => {
                assert_eq!(person, spot_core::PersonId::INDIGENOUS);
                assert_eq!(direction, Unspecified);
            }
            other => panic!("expected InvalidDirection, got {other:?}"),
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn people_with_empty_queues_are_skipped() {
        let mut grid = build(preset_level(), 5);
        grid.aliens[0].trajectory = spot_core::Trajectory::new();
        let parked = grid.aliens[0].position;
        assert!(advance(&mut grid).unwrap());
        assert_eq!(grid.aliens[0].position, parked);
    }
}

// ── run_to_completion ─────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use std::collections::HashSet;

    use super::*;

    /// Records every snapshot's position set plus hook counts.
    #[derive(Default)]
    struct Recorder {
        starts:    usize,
        ends:      Vec<(Step, bool)>,
        snapshots: Vec<(Step, HashSet<Position>)>,
        finished:  Option<Step>,
    }

    impl TurnObserver for Recorder {
        fn on_turn_start(&mut self, _step: Step) {
            self.starts += 1;
        }
        fn on_turn_end(&mut self, step: Step, moved: bool) {
            self.ends.push((step, moved));
        }
        fn on_snapshot(&mut self, step: Step, grid: &Grid) {
            self.snapshots.push((step, grid.people().map(|p| p.position).collect()));
        }
        fn on_replay_end(&mut self, final_step: Step) {
            self.finished = Some(final_step);
        }
    }

    #[test]
    fn runs_until_drained() {
        let mut grid = build(Level::new(6, 3, 2), 8);
        let last = run_to_completion(&mut grid, &mut NoopObserver).unwrap();
        assert_eq!(last, Step(3));
        assert!(grid.is_drained());
    }

    #[test]
    fn hooks_fire_per_turn() {
        let mut grid = build(preset_level(), 9);
        let mut rec = Recorder::default();
        run_to_completion(&mut grid, &mut rec).unwrap();

        assert_eq!(rec.starts, 4);
        assert_eq!(
            rec.ends,
            vec![(Step(1), true), (Step(2), true), (Step(3), true), (Step(4), false)]
        );
        let steps: Vec<Step> = rec.snapshots.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, vec![Step(0), Step(1), Step(2), Step(3)]);
        assert_eq!(rec.finished, Some(Step(3)));
    }

    #[test]
    fn drained_grid_reports_step_zero() {
        let mut grid = build(Level::new(4, 0, 0), 2);
        let mut rec = Recorder::default();
        assert_eq!(run_to_completion(&mut grid, &mut rec).unwrap(), Step(0));
        assert_eq!(rec.ends, vec![(Step(1), false)]);
    }

    #[test]
    fn replay_matches_placement_plan() {
        let (mut grid, registry) = build_planned(Level::new(8, 4, 5), 21);
        let mut rec = Recorder::default();
        run_to_completion(&mut grid, &mut rec).unwrap();

        assert_eq!(rec.snapshots.len(), registry.step_count());
        for (step, seen) in &rec.snapshots {
            let planned: HashSet<Position> = registry.occupied_at(*step).unwrap().copied().collect();
            assert_eq!(seen, &planned, "divergence at {step}");
            assert_eq!(seen.len(), grid.person_count());
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn replay_stays_in_bounds_and_collision_free(
            size in 5u32..10,
            moves in 1u32..5,
            num_aliens in 0u32..4,
            seed in any::<u64>(),
        ) {
            let level = Level::new(size, moves, num_aliens);
            let Ok((mut grid, registry)) = GridBuilder::new(level)
                .build_with_registry(&mut GridRng::new(seed))
            else {
                return Ok(());
            };

            let mut step = Step::ZERO;
            loop {
                let here: HashSet<Position> = grid.people().map(|p| p.position).collect();
                prop_assert_eq!(here.len(), grid.person_count());
                prop_assert!(here.iter().all(|p| grid.contains(*p)));
                let planned: HashSet<Position> =
                    registry.occupied_at(step).unwrap().copied().collect();
                prop_assert_eq!(&here, &planned);

                if !advance(&mut grid).unwrap() {
                    break;
                }
                step = step.next();
            }
            prop_assert_eq!(step, Step(moves));
        }
    }
}
