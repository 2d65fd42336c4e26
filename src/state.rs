use std::time::Duration;

use log::info;

use crate::audio::{Audio, Sfx};
use crate::game::{Game, StepOutcome};
use crate::menu::{self, MenuAction};
use crate::pos::Dir;

/// Which screen owns input and drawing right now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    StartMenu,
    HowToPlay,
    Intro,
    Playing,
    Paused,
    GameOver,
}

/// Keys the game reacts to, decoupled from the windowing backend so the
/// state machine can be driven directly in tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    P,
    R,
    M,
}

// Logic runs at 10 ticks per second; every food shaves the tick down to a floor.
const BASE_TICK_MS: u64 = 100;
const MIN_TICK_MS: u64 = 60;
// The ready-set-go sequence lasts 3 seconds at the base rate.
const INTRO_TICKS: u32 = 30;

const PAUSE_OPTIONS: usize = 3;

pub struct App {
    pub state: GameState,
    pub game: Game,
    pub audio: Audio,
    pub intro_ticks: u32,
    pub pause_selection: usize,
    pub won: bool,
    tick_len: Duration,
}

impl App {
    pub fn new(audio: Audio) -> Self {
        Self {
            state: GameState::StartMenu,
            game: Game::new(),
            audio,
            intro_ticks: 0,
            pause_selection: 0,
            won: false,
            tick_len: Duration::from_millis(BASE_TICK_MS),
        }
    }

    pub fn tick_len(&self) -> Duration {
        self.tick_len
    }

    pub fn intro_progress(&self) -> f32 {
        self.intro_ticks as f32 / INTRO_TICKS as f32
    }

    // Fresh world, then the ready-set-go sequence
    fn enter_intro(&mut self) {
        self.game = Game::new();
        self.won = false;
        self.intro_ticks = 0;
        self.tick_len = Duration::from_millis(BASE_TICK_MS);
        self.state = GameState::Intro;
        info!("intro started");
    }

    fn toggle_music(&mut self) {
        self.audio.toggle_music();
        info!("music {}", if self.audio.muted() { "off" } else { "on" });
    }

    pub fn handle_key(&mut self, key: Key) {
        // Music toggle works on every screen
        if key == Key::M {
            self.audio.play(Sfx::MenuClick);
            self.toggle_music();
            return;
        }

        match self.state {
            GameState::StartMenu => {
                if key == Key::Space {
                    self.audio.play(Sfx::MenuClick);
                    self.enter_intro();
                }
            }
            GameState::HowToPlay => {
                if key == Key::Space || key == Key::Enter {
                    self.audio.play(Sfx::MenuClick);
                    self.state = GameState::StartMenu;
                }
            }
            GameState::Intro => {
                // Any key skips the countdown
                self.audio.play(Sfx::MenuClick);
                self.state = GameState::Playing;
                info!("intro skipped");
            }
            GameState::Playing => match key {
                Key::Up => self.game.change_dir(Dir::Up),
                Key::Down => self.game.change_dir(Dir::Down),
                Key::Left => self.game.change_dir(Dir::Left),
                Key::Right => self.game.change_dir(Dir::Right),
                Key::P | Key::Space => {
                    self.pause_selection = 0;
                    self.state = GameState::Paused;
                    info!("paused");
                }
                _ => {}
            },
            GameState::Paused => match key {
                Key::Up => {
                    self.pause_selection = (self.pause_selection + PAUSE_OPTIONS - 1) % PAUSE_OPTIONS;
                    self.audio.play(Sfx::MenuClick);
                }
                Key::Down => {
                    self.pause_selection = (self.pause_selection + 1) % PAUSE_OPTIONS;
                    self.audio.play(Sfx::MenuClick);
                }
                Key::Space => self.select_pause_entry(),
                Key::P => self.state = GameState::Playing,
                _ => {}
            },
            GameState::GameOver => match key {
                Key::Space => {
                    self.audio.play(Sfx::MenuClick);
                    self.enter_intro();
                }
                Key::R => {
                    self.audio.play(Sfx::MenuClick);
                    self.state = GameState::StartMenu;
                }
                _ => {}
            },
        }
    }

    fn select_pause_entry(&mut self) {
        self.audio.play(Sfx::MenuClick);
        match self.pause_selection {
            0 => self.state = GameState::Playing,
            1 => self.toggle_music(),
            _ => self.state = GameState::StartMenu,
        }
    }

    /// Dispatches a left click at framebuffer coordinates. Returns true when
    /// a quit button was hit.
    pub fn handle_click(&mut self, mx: u32, my: u32) -> bool {
        let buttons: &[menu::Button] = match self.state {
            GameState::StartMenu => &menu::START_MENU,
            GameState::HowToPlay => &[menu::BACK],
            GameState::GameOver => &menu::GAME_OVER,
            _ => return false,
        };
        for button in buttons {
            if button.contains(mx, my) {
                return self.apply_action(button.action);
            }
        }
        false
    }

    fn apply_action(&mut self, action: MenuAction) -> bool {
        self.audio.play(Sfx::MenuClick);
        match action {
            MenuAction::Start | MenuAction::PlayAgain => self.enter_intro(),
            MenuAction::HowToPlay => self.state = GameState::HowToPlay,
            MenuAction::MainMenu | MenuAction::Back => self.state = GameState::StartMenu,
            MenuAction::Quit => return true,
        }
        false
    }

    /// Advances one logic tick. The caller owns the clock.
    pub fn tick(&mut self) {
        match self.state {
            GameState::Intro => {
                self.intro_ticks += 1;
                if self.intro_ticks >= INTRO_TICKS {
                    self.state = GameState::Playing;
                    info!("game on");
                }
            }
            GameState::Playing => match self.game.step() {
                StepOutcome::Moved => {}
                StepOutcome::Ate => {
                    self.audio.play(Sfx::Eat);
                    self.tick_len = tick_len_for(self.game.score);
                    info!("food eaten, score {}", self.game.score);
                }
                StepOutcome::Won => {
                    self.audio.play(Sfx::Eat);
                    self.won = true;
                    self.state = GameState::GameOver;
                    info!("board full, final score {}", self.game.score);
                }
                StepOutcome::Died(reason) => {
                    self.audio.play(Sfx::GameOver);
                    self.won = false;
                    self.state = GameState::GameOver;
                    info!("game over: {:?}, final score {}", reason, self.game.score);
                }
            },
            _ => {}
        }
    }
}

fn tick_len_for(score: u32) -> Duration {
    let foods = (score / 10) as u64;
    Duration::from_millis(BASE_TICK_MS.saturating_sub(2 * foods).max(MIN_TICK_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Pos;
    use crate::{GRID_H, GRID_W};

    fn fresh_app() -> App {
        App::new(Audio::disabled())
    }

    #[test]
    fn space_starts_the_intro_from_the_menu() {
        let mut app = fresh_app();
        assert_eq!(app.state, GameState::StartMenu);
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::Intro);
        assert_eq!(app.intro_ticks, 0);
    }

    #[test]
    fn intro_advances_to_playing_after_three_seconds() {
        let mut app = fresh_app();
        app.handle_key(Key::Space);
        for _ in 0..INTRO_TICKS - 1 {
            app.tick();
        }
        assert_eq!(app.state, GameState::Intro);
        app.tick();
        assert_eq!(app.state, GameState::Playing);
    }

    #[test]
    fn any_bound_key_skips_the_intro() {
        let mut app = fresh_app();
        app.handle_key(Key::Space);
        app.handle_key(Key::Left);
        assert_eq!(app.state, GameState::Playing);
    }

    #[test]
    fn pause_menu_selection_wraps() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::Paused);
        assert_eq!(app.pause_selection, 0);
        app.handle_key(Key::Up);
        assert_eq!(app.pause_selection, 2);
        app.handle_key(Key::Down);
        app.handle_key(Key::Down);
        assert_eq!(app.pause_selection, 1);
    }

    #[test]
    fn pause_entries_dispatch() {
        let mut app = fresh_app();
        app.state = GameState::Paused;
        app.pause_selection = 0;
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::Playing);

        app.state = GameState::Paused;
        app.pause_selection = 1;
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::Paused);
        assert!(app.audio.muted());

        app.pause_selection = 2;
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::StartMenu);
    }

    #[test]
    fn p_toggles_pause() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.handle_key(Key::P);
        assert_eq!(app.state, GameState::Paused);
        app.handle_key(Key::P);
        assert_eq!(app.state, GameState::Playing);
    }

    #[test]
    fn m_toggles_music_on_any_screen() {
        let mut app = fresh_app();
        app.handle_key(Key::M);
        assert!(app.audio.muted());
        assert_eq!(app.state, GameState::StartMenu);

        app.state = GameState::Playing;
        app.handle_key(Key::M);
        assert!(!app.audio.muted());
        assert_eq!(app.state, GameState::Playing);
    }

    #[test]
    fn steering_keys_reach_the_snake() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.handle_key(Key::Up);
        assert_eq!(app.game.dir, Dir::Up);
        app.handle_key(Key::Down);
        assert_eq!(app.game.dir, Dir::Up);
        app.handle_key(Key::Right);
        assert_eq!(app.game.dir, Dir::Right);
    }

    #[test]
    fn a_wall_death_moves_to_game_over() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.game.food = Some(Pos::new(0, 0));
        app.handle_key(Key::Up);
        for _ in 0..GRID_H {
            app.tick();
        }
        assert_eq!(app.state, GameState::GameOver);
        assert!(!app.won);
    }

    #[test]
    fn eating_speeds_up_the_tick() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.game.food = Some(Pos::new(GRID_W / 2 + 1, GRID_H / 2));
        app.tick();
        assert_eq!(app.game.score, 10);
        assert_eq!(app.tick_len(), Duration::from_millis(BASE_TICK_MS - 2));
    }

    #[test]
    fn tick_rate_never_drops_below_the_floor() {
        assert_eq!(tick_len_for(0), Duration::from_millis(100));
        assert_eq!(tick_len_for(100), Duration::from_millis(80));
        assert_eq!(tick_len_for(200), Duration::from_millis(60));
        assert_eq!(tick_len_for(9000), Duration::from_millis(60));
    }

    #[test]
    fn game_over_keys_restart_or_return_to_menu() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        app.game.food = Some(Pos::new(GRID_W / 2 + 1, GRID_H / 2));
        app.tick();
        assert_eq!(app.game.score, 10);
        assert_ne!(app.tick_len(), Duration::from_millis(BASE_TICK_MS));

        app.state = GameState::GameOver;
        app.handle_key(Key::Space);
        assert_eq!(app.state, GameState::Intro);
        assert_eq!(app.game.score, 0);
        assert_eq!(app.tick_len(), Duration::from_millis(BASE_TICK_MS));

        app.state = GameState::GameOver;
        app.handle_key(Key::R);
        assert_eq!(app.state, GameState::StartMenu);
    }

    #[test]
    fn menu_clicks_dispatch_their_actions() {
        let mut app = fresh_app();
        let start = &menu::START_MENU[0];
        assert!(!app.handle_click(start.x + start.w / 2, start.y + start.h / 2));
        assert_eq!(app.state, GameState::Intro);

        let mut app = fresh_app();
        let how = &menu::START_MENU[1];
        app.handle_click(how.x + 1, how.y + 1);
        assert_eq!(app.state, GameState::HowToPlay);
        assert!(!app.handle_click(menu::BACK.x + 1, menu::BACK.y + 1));
        assert_eq!(app.state, GameState::StartMenu);

        let quit = &menu::START_MENU[2];
        assert!(app.handle_click(quit.x + 1, quit.y + 1));
    }

    #[test]
    fn game_over_buttons_dispatch_their_actions() {
        let mut app = fresh_app();
        app.state = GameState::GameOver;
        app.game.score = 30;
        let again = &menu::GAME_OVER[0];
        assert!(!app.handle_click(again.x + 1, again.y + 1));
        assert_eq!(app.state, GameState::Intro);
        assert_eq!(app.game.score, 0);

        app.state = GameState::GameOver;
        let main = &menu::GAME_OVER[1];
        app.handle_click(main.x + 1, main.y + 1);
        assert_eq!(app.state, GameState::StartMenu);

        app.state = GameState::GameOver;
        let quit = &menu::GAME_OVER[2];
        assert!(app.handle_click(quit.x + 1, quit.y + 1));
    }

    #[test]
    fn clicks_are_ignored_while_playing() {
        let mut app = fresh_app();
        app.state = GameState::Playing;
        assert!(!app.handle_click(crate::WIDTH / 2, crate::HEIGHT / 2));
        assert_eq!(app.state, GameState::Playing);
    }
}
