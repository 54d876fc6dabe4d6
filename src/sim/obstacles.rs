//! Obstacle stacks: spawning and pruning
//!
//! A spawn builds a stack at the right edge of the viewport. Each extra level
//! needs its own successful draw and the chain stops at the first failure, so
//! tall stacks get geometrically rarer. Half the time a second stack is built
//! directly to the right of the first.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::config::SpawnConfig;

/// An obstacle block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
}

/// Where a spawn happens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSite {
    /// Left edge of the first stack
    pub left: f32,
    /// Bottom edge of the lowest block (ground level)
    pub ground_y: f32,
    /// Size of one block
    pub block: Vec2,
}

/// Decide whether a spawn happens this frame.
///
/// The draw is only taken once the minimum interval has elapsed.
pub fn should_spawn<R: Rng>(rng: &mut R, rules: &SpawnConfig, now: f64, last_spawn: f64) -> bool {
    now - last_spawn > rules.min_spawn_time && rng.random::<f64>() > rules.spawn_threshold
}

/// Build one or two stacks at `site`, appending them to `out` in creation
/// order. Returns the height of each stack built.
pub fn spawn_stacks<R: Rng>(
    rng: &mut R,
    rules: &SpawnConfig,
    site: &SpawnSite,
    next_id: &mut u32,
    out: &mut Vec<Obstacle>,
) -> Vec<u32> {
    let mut heights = vec![build_stack(rng, rules, site.left, site, next_id, out)];

    if rng.random::<f64>() > rules.double_stack_threshold {
        let left = site.left + site.block.x;
        heights.push(build_stack(rng, rules, left, site, next_id, out));
    }

    heights
}

fn build_stack<R: Rng>(
    rng: &mut R,
    rules: &SpawnConfig,
    left: f32,
    site: &SpawnSite,
    next_id: &mut u32,
    out: &mut Vec<Obstacle>,
) -> u32 {
    let mut top = push_block(out, next_id, left, site.ground_y, site.block);
    let mut height = 1;

    while height < rules.max_obstacle_height {
        if rng.random::<f64>() <= rules.stack_threshold {
            break;
        }
        top = push_block(out, next_id, left, top.bottom() - top.height(), site.block);
        height += 1;
    }

    height
}

fn push_block(out: &mut Vec<Obstacle>, next_id: &mut u32, left: f32, bottom: f32, size: Vec2) -> Rect {
    let rect = Rect::from_left_bottom(left, bottom, size);
    out.push(Obstacle { id: *next_id, rect });
    *next_id += 1;
    rect
}

/// Remove the first obstacle whose centre has scrolled past the left edge.
///
/// At most one obstacle goes per call; the rest wait for later frames.
pub fn prune_offscreen(obstacles: &mut Vec<Obstacle>) -> Option<Obstacle> {
    let idx = obstacles
        .iter()
        .position(|o| o.rect.right() - o.rect.width() / 2.0 <= 0.0)?;
    Some(obstacles.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    /// Feeds exact uniform draws in order; panics if asked for one too many
    struct ScriptedRng {
        draws: VecDeque<f64>,
    }

    impl ScriptedRng {
        fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let p = self.draws.pop_front().expect("random draw script exhausted");
            // f64 samples use the top 53 bits
            ((p * (1u64 << 53) as f64) as u64) << 11
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn site() -> SpawnSite {
        SpawnSite {
            left: 960.0,
            ground_y: 168.0,
            block: Vec2::new(32.0, 32.0),
        }
    }

    #[test]
    fn test_scripted_profile() {
        let mut rng = ScriptedRng::new(&[0.8, 0.9, 0.1, 0.6, 0.75, 0.2]);
        let mut next_id = 1;
        let mut out = Vec::new();

        let heights = spawn_stacks(&mut rng, &SpawnConfig::default(), &site(), &mut next_id, &mut out);

        assert_eq!(heights, vec![3, 2]);
        assert!(rng.draws.is_empty());

        let placed: Vec<(u32, f32, f32)> = out
            .iter()
            .map(|o| (o.id, o.rect.left(), o.rect.bottom()))
            .collect();
        assert_eq!(
            placed,
            vec![
                (1, 960.0, 168.0),
                (2, 960.0, 136.0),
                (3, 960.0, 104.0),
                (4, 992.0, 168.0),
                (5, 992.0, 136.0),
            ]
        );
        assert_eq!(next_id, 6);
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        // A failed level-2 draw ends the stack; the next draw is the double check
        let mut rng = ScriptedRng::new(&[0.1, 0.4]);
        let mut next_id = 1;
        let mut out = Vec::new();

        let heights = spawn_stacks(&mut rng, &SpawnConfig::default(), &site(), &mut next_id, &mut out);

        assert_eq!(heights, vec![1]);
        assert_eq!(out.len(), 1);
        assert!(rng.draws.is_empty());
    }

    #[test]
    fn test_height_is_capped() {
        // 4 levels + double + 4 levels; a tenth draw would panic
        let mut rng = ScriptedRng::new(&[0.99; 9]);
        let mut next_id = 1;
        let mut out = Vec::new();

        let heights = spawn_stacks(&mut rng, &SpawnConfig::default(), &site(), &mut next_id, &mut out);

        assert_eq!(heights, vec![5, 5]);
        assert_eq!(out.len(), 10);
        assert_eq!(out[4].rect.top(), 168.0 - 5.0 * 32.0);
    }

    #[test]
    fn test_spawn_gate() {
        let rules = SpawnConfig::default();

        // Too soon: no draw is consumed
        let mut rng = ScriptedRng::new(&[]);
        assert!(!should_spawn(&mut rng, &rules, 10.3, 10.0));

        let mut rng = ScriptedRng::new(&[0.99]);
        assert!(should_spawn(&mut rng, &rules, 10.6, 10.0));

        let mut rng = ScriptedRng::new(&[0.5]);
        assert!(!should_spawn(&mut rng, &rules, 10.6, 10.0));
    }

    /// Run 100 eligible frames (gate always open) and record which frames
    /// spawned, the stack heights and the total block count
    fn golden_run(seed: u64) -> (Vec<u32>, Vec<Vec<u32>>, usize) {
        let rules = SpawnConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut next_id = 1;
        let mut out = Vec::new();
        let mut frames = Vec::new();
        let mut profile = Vec::new();

        for frame in 0..100 {
            if should_spawn(&mut rng, &rules, 1.0, 0.0) {
                frames.push(frame);
                profile.push(spawn_stacks(&mut rng, &rules, &site(), &mut next_id, &mut out));
            }
        }
        assert_eq!(next_id as usize, out.len() + 1);
        (frames, profile, out.len())
    }

    #[test]
    fn test_seeded_generation_golden() {
        assert_eq!(golden_run(42), (vec![1, 20], vec![vec![1], vec![1]], 2));
        assert_eq!(
            golden_run(54),
            (
                vec![14, 22, 65, 88, 96],
                vec![vec![2, 1], vec![3], vec![1, 1], vec![1, 1], vec![1, 1]],
                12
            )
        );
        assert_eq!(golden_run(43), (vec![], vec![], 0));
    }

    #[test]
    fn test_height_odds_decay() {
        let mut rng = Pcg32::seed_from_u64(7);
        let rules = SpawnConfig::default();
        let mut next_id = 1;
        let mut stacks = 0usize;
        let mut tall = 0usize;

        for _ in 0..10_000 {
            let mut out = Vec::new();
            for h in spawn_stacks(&mut rng, &rules, &site(), &mut next_id, &mut out) {
                stacks += 1;
                if h >= 2 {
                    tall += 1;
                }
            }
        }

        let ratio = tall as f64 / stacks as f64;
        assert!((0.25..0.35).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn test_prune_removes_first_offscreen_only() {
        let size = Vec2::new(32.0, 32.0);
        let mut obstacles: Vec<Obstacle> = [-40.0, -20.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, &left)| Obstacle {
                id: i as u32 + 1,
                rect: Rect::from_left_bottom(left, 168.0, size),
            })
            .collect();

        assert_eq!(prune_offscreen(&mut obstacles).map(|o| o.id), Some(1));
        assert_eq!(prune_offscreen(&mut obstacles).map(|o| o.id), Some(2));
        assert_eq!(prune_offscreen(&mut obstacles), None);
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_prune_boundary_is_centre() {
        let size = Vec2::new(32.0, 32.0);
        // Centre exactly on the left edge
        let mut obstacles = vec![Obstacle {
            id: 1,
            rect: Rect::from_left_bottom(-16.0, 168.0, size),
        }];
        assert!(prune_offscreen(&mut obstacles).is_some());

        let mut obstacles = vec![Obstacle {
            id: 1,
            rect: Rect::from_left_bottom(-15.5, 168.0, size),
        }];
        assert!(prune_offscreen(&mut obstacles).is_none());
    }

    proptest! {
        #[test]
        fn prop_prune_at_most_one_and_never_visible_centre(
            lefts in proptest::collection::vec(-200.0f32..1000.0, 0..30),
        ) {
            let size = Vec2::new(32.0, 32.0);
            let mut obstacles: Vec<Obstacle> = lefts
                .iter()
                .enumerate()
                .map(|(i, &left)| Obstacle { id: i as u32, rect: Rect::from_left_bottom(left, 168.0, size) })
                .collect();
            let before = obstacles.len();

            let removed = prune_offscreen(&mut obstacles);

            prop_assert!(before - obstacles.len() <= 1);
            if let Some(o) = removed {
                prop_assert!(o.rect.right() - o.rect.width() / 2.0 <= 0.0);
            }
            // Remaining order is unchanged
            prop_assert!(obstacles.windows(2).all(|w| w[0].id < w[1].id));
        }
    }
}
