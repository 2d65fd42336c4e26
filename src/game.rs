use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::pos::{Dir, Pos};
use crate::{GRID_H, GRID_W};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single tick of the world did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Moved,
    Ate,
    Won,
    Died(DeathReason),
}

// Rejection sampling gives up after this many tries and scans for free cells.
const SPAWN_ATTEMPTS: u32 = 100;

pub struct Game {
    pub snake: VecDeque<Pos>,
    pub dir: Dir,
    pub food: Option<Pos>,
    pub score: u32,
    grow: bool,
    rng: SmallRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        let mut snake = VecDeque::new();
        snake.push_back(Pos::new(GRID_W / 2, GRID_H / 2));
        let mut game = Self {
            snake,
            dir: Dir::Right,
            food: None,
            score: 0,
            grow: false,
            rng,
        };
        game.place_food();
        game
    }

    pub fn head(&self) -> Pos {
        self.snake[0]
    }

    pub fn change_dir(&mut self, new_dir: Dir) {
        // Prevent 180 degree turns
        if new_dir != self.dir.opposite() {
            self.dir = new_dir;
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        let new_head = self.dir.offset(self.head());

        if new_head.x < 0 || new_head.x >= GRID_W || new_head.y < 0 || new_head.y >= GRID_H {
            return StepOutcome::Died(DeathReason::WallCollision);
        }

        // The tail cell vacates this tick unless growth is pending, so it
        // does not count as a collision.
        let occupied = self.snake.len() - usize::from(!self.grow);
        if self.snake.iter().take(occupied).any(|&c| c == new_head) {
            return StepOutcome::Died(DeathReason::SelfCollision);
        }

        self.snake.push_front(new_head);
        if self.grow {
            self.grow = false;
        } else {
            self.snake.pop_back();
        }

        if self.food == Some(new_head) {
            self.score += 10;
            self.grow = true;
            self.place_food();
            if self.food.is_none() {
                return StepOutcome::Won;
            }
            return StepOutcome::Ate;
        }

        StepOutcome::Moved
    }

    fn place_food(&mut self) {
        // Board full: nothing left to place, the run is won
        if self.snake.len() >= (GRID_W * GRID_H) as usize {
            self.food = None;
            return;
        }

        for _ in 0..SPAWN_ATTEMPTS {
            let p = Pos::new(self.rng.gen_range(0..GRID_W), self.rng.gen_range(0..GRID_H));
            if !self.snake.contains(&p) {
                self.food = Some(p);
                return;
            }
        }

        // Dense board: fall back to a uniform pick over the free cells
        self.food = (0..GRID_W * GRID_H)
            .map(|i| Pos::new(i % GRID_W, i / GRID_W))
            .filter(|p| !self.snake.contains(p))
            .choose(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Game {
        Game::with_rng(SmallRng::seed_from_u64(7))
    }

    fn every_cell_except(hole: Pos) -> VecDeque<Pos> {
        (0..GRID_W * GRID_H)
            .map(|i| Pos::new(i % GRID_W, i / GRID_W))
            .filter(|&p| p != hole)
            .collect()
    }

    #[test]
    fn new_game_starts_centered_with_food_placed() {
        let game = seeded();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.head(), Pos::new(GRID_W / 2, GRID_H / 2));
        assert_eq!(game.dir, Dir::Right);
        assert_eq!(game.score, 0);
        let food = game.food.unwrap();
        assert!(food.x >= 0 && food.x < GRID_W && food.y >= 0 && food.y < GRID_H);
        assert!(!game.snake.contains(&food));
    }

    #[test]
    fn step_moves_the_head_one_cell() {
        let mut game = seeded();
        game.food = Some(Pos::new(0, 0));
        assert_eq!(game.step(), StepOutcome::Moved);
        assert_eq!(game.head(), Pos::new(GRID_W / 2 + 1, GRID_H / 2));
        assert_eq!(game.snake.len(), 1);
    }

    #[test]
    fn eating_scores_and_grows_on_the_following_tick() {
        let mut game = seeded();
        game.food = Some(Pos::new(GRID_W / 2 + 1, GRID_H / 2));
        assert_eq!(game.step(), StepOutcome::Ate);
        assert_eq!(game.score, 10);
        assert_eq!(game.snake.len(), 1);
        game.food = Some(Pos::new(0, 0));
        assert_eq!(game.step(), StepOutcome::Moved);
        assert_eq!(game.snake.len(), 2);
    }

    #[test]
    fn reversals_are_rejected() {
        let mut game = seeded();
        game.change_dir(Dir::Left);
        assert_eq!(game.dir, Dir::Right);
        game.change_dir(Dir::Up);
        assert_eq!(game.dir, Dir::Up);
        game.change_dir(Dir::Down);
        assert_eq!(game.dir, Dir::Up);
    }

    #[test]
    fn hitting_the_wall_ends_the_run() {
        let mut game = seeded();
        game.food = Some(Pos::new(0, 0));
        game.change_dir(Dir::Up);
        let mut last = StepOutcome::Moved;
        for _ in 0..GRID_H {
            last = game.step();
            if last != StepOutcome::Moved {
                break;
            }
        }
        assert_eq!(last, StepOutcome::Died(DeathReason::WallCollision));
    }

    #[test]
    fn running_into_the_body_ends_the_run() {
        let cells = [
            Pos::new(5, 5),
            Pos::new(6, 5),
            Pos::new(6, 6),
            Pos::new(5, 6),
            Pos::new(4, 6),
        ];
        let mut game = Game {
            snake: VecDeque::from(cells.to_vec()),
            dir: Dir::Down,
            food: Some(Pos::new(0, 0)),
            score: 0,
            grow: false,
            rng: SmallRng::seed_from_u64(1),
        };
        assert_eq!(game.step(), StepOutcome::Died(DeathReason::SelfCollision));
    }

    #[test]
    fn chasing_the_tail_is_safe() {
        // The head may enter the cell the tail vacates this same tick
        let cells = [
            Pos::new(5, 5),
            Pos::new(6, 5),
            Pos::new(6, 6),
            Pos::new(5, 6),
        ];
        let mut game = Game {
            snake: VecDeque::from(cells.to_vec()),
            dir: Dir::Down,
            food: Some(Pos::new(0, 0)),
            score: 0,
            grow: false,
            rng: SmallRng::seed_from_u64(1),
        };
        assert_eq!(game.step(), StepOutcome::Moved);
        assert_eq!(game.head(), Pos::new(5, 6));
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn pending_growth_blocks_the_tail_cell() {
        let cells = [
            Pos::new(5, 5),
            Pos::new(6, 5),
            Pos::new(6, 6),
            Pos::new(5, 6),
        ];
        let mut game = Game {
            snake: VecDeque::from(cells.to_vec()),
            dir: Dir::Down,
            food: Some(Pos::new(0, 0)),
            score: 0,
            grow: true,
            rng: SmallRng::seed_from_u64(1),
        };
        assert_eq!(game.step(), StepOutcome::Died(DeathReason::SelfCollision));
    }

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut game = seeded();
        for _ in 0..100 {
            game.place_food();
            let food = game.food.unwrap();
            assert!(!game.snake.contains(&food));
        }
    }

    #[test]
    fn spawn_falls_back_to_scanning_when_the_board_is_packed() {
        let mut game = Game {
            snake: every_cell_except(Pos::new(0, 0)),
            dir: Dir::Left,
            food: None,
            score: 0,
            grow: false,
            rng: SmallRng::seed_from_u64(3),
        };
        game.place_food();
        assert_eq!(game.food, Some(Pos::new(0, 0)));
    }

    #[test]
    fn filling_the_board_wins() {
        // One free cell left, growth pending, head right beside the hole
        let mut game = Game {
            snake: every_cell_except(Pos::new(0, 0)),
            dir: Dir::Left,
            food: Some(Pos::new(0, 0)),
            score: 0,
            grow: true,
            rng: SmallRng::seed_from_u64(3),
        };
        assert_eq!(game.head(), Pos::new(1, 0));
        assert_eq!(game.step(), StepOutcome::Won);
        assert_eq!(game.food, None);
        assert_eq!(game.score, 10);
        assert_eq!(game.snake.len(), (GRID_W * GRID_H) as usize);
    }
}
