use crate::draw;
use crate::game::Game;
use crate::menu;
use crate::state::{App, GameState};
use crate::{BORDER, HEIGHT, PLAY_H, PLAY_W, WIDTH};

const HOW_TO_SECTIONS: [(&str, (u8, u8, u8), &[&str]); 3] = [
    (
        "OBJECTIVE:",
        draw::NEON_PINK,
        &[
            "- CONTROL THE NEON SNAKE TO EAT FOOD AND GROW",
            "- EACH FOOD ITEM GIVES YOU 10 POINTS",
            "- TRY TO ACHIEVE THE HIGHEST SCORE POSSIBLE!",
        ],
    ),
    (
        "CONTROLS:",
        draw::NEON_BLUE,
        &[
            "- ARROW KEYS OR WASD - MOVE THE SNAKE",
            "- P OR SPACE - PAUSE THE GAME",
            "- ESC - QUIT ANYTIME",
        ],
    ),
    (
        "RULES:",
        draw::BRIGHT_GREEN,
        &[
            "- AVOID HITTING THE WALLS",
            "- DON'T RUN INTO YOUR OWN BODY",
            "- SNAKE GROWS LONGER WITH EACH FOOD EATEN",
            "- GAME GETS HARDER AS YOU GROW!",
        ],
    ),
];

/// Paints the whole frame for the current state.
pub fn draw(app: &App, frame: &mut [u8], mouse: (u32, u32), held: bool) {
    draw::clear(frame, draw::BLACK);
    match app.state {
        GameState::StartMenu => draw_start_menu(frame, mouse, held),
        GameState::HowToPlay => draw_how_to_play(frame, mouse, held),
        GameState::Intro => draw_intro(frame, app.intro_progress()),
        GameState::Playing => draw_playing(frame, &app.game),
        GameState::Paused => {
            draw_playing(frame, &app.game);
            draw_pause_menu(frame, app.pause_selection, app.audio.muted());
        }
        GameState::GameOver => {
            // The dead snake is not drawn, only the frame and the score
            draw_board_frame(frame);
            draw_hud(frame, app.game.score);
            draw_game_over(frame, app.game.score, app.won, mouse, held);
        }
    }
}

fn draw_start_menu(frame: &mut [u8], mouse: (u32, u32), held: bool) {
    // Big frame, brightening outward
    for i in 0..8u32 {
        let v = 100 + i * 20;
        let col = (0, (v / 4) as u8, v as u8, 255);
        draw::stroke_rect(
            frame,
            50 - i * 3,
            100 - i * 3,
            WIDTH - 100 + i * 6,
            HEIGHT - 200 + i * 6,
            2,
            col,
        );
    }

    draw::draw_text_centered(frame, "NEON SNAKE", WIDTH / 2 + 3, 153, 7, draw::opaque(draw::GLOW_BLUE));
    draw::draw_text_centered(frame, "NEON SNAKE", WIDTH / 2, 150, 7, draw::opaque(draw::NEON_BLUE));
    draw::draw_text_centered(frame, "CLASSIC ARCADE EXPERIENCE", WIDTH / 2, 200, 3, draw::opaque(draw::NEON_PINK));

    for button in &menu::START_MENU {
        button.draw(frame, mouse, held);
    }

    draw::draw_text_centered(
        frame,
        "USE MOUSE TO CLICK BUTTONS OR PRESS ESC TO QUIT",
        WIDTH / 2,
        HEIGHT - 30,
        2,
        draw::opaque(draw::DARK_BLUE),
    );
}

fn draw_how_to_play(frame: &mut [u8], mouse: (u32, u32), held: bool) {
    draw::glow_border(frame, 30, 30, WIDTH - 60, HEIGHT - 60, 5, 255);

    draw::draw_text_centered(frame, "HOW TO PLAY", WIDTH / 2 + 2, 82, 5, draw::opaque(draw::GLOW_BLUE));
    draw::draw_text_centered(frame, "HOW TO PLAY", WIDTH / 2, 80, 5, draw::opaque(draw::NEON_BLUE));

    let mut y = 140;
    for (title, color, items) in HOW_TO_SECTIONS {
        draw::draw_text(frame, title, 100, y, 3, draw::opaque(color));
        y += 40;
        for item in items {
            draw::draw_text(frame, item, 120, y, 2, draw::opaque(draw::WHITE));
            y += 25;
        }
        y += 15;
    }

    // Drawn last so it sits on top of the rules text
    menu::BACK.draw(frame, mouse, held);
}

// Phase thresholds at 0.3 and 0.6 of the intro progress, countdown last
fn draw_intro(frame: &mut [u8], progress: f32) {
    if progress < 0.3 {
        let alpha = (progress / 0.3 * 255.0) as u8;
        draw::draw_text_centered(frame, "GET READY", WIDTH / 2, HEIGHT / 2 - 50, 6, draw::faded(draw::NEON_BLUE, alpha));
    } else {
        draw::draw_text_centered(frame, "GET READY", WIDTH / 2, HEIGHT / 2 - 50, 6, draw::opaque(draw::NEON_BLUE));
        if progress < 0.6 {
            let alpha = ((progress - 0.3) / 0.3 * 255.0) as u8;
            draw::draw_text_centered(frame, "CONTROL THE NEON SNAKE", WIDTH / 2, HEIGHT / 2, 3, draw::faded(draw::NEON_PINK, alpha));
        } else {
            draw::draw_text_centered(frame, "CONTROL THE NEON SNAKE", WIDTH / 2, HEIGHT / 2, 3, draw::opaque(draw::NEON_PINK));
            let count = 3 - ((progress - 0.6) / 0.4 * 3.0) as i32;
            if count > 0 {
                let digit = count.to_string();
                draw::draw_text_centered(frame, &digit, WIDTH / 2 + 3, HEIGHT / 2 + 63, 9, draw::opaque(draw::BRIGHT_GREEN));
                draw::draw_text_centered(frame, &digit, WIDTH / 2, HEIGHT / 2 + 60, 9, draw::opaque(draw::WHITE));
            }
        }
    }

    // Border brightens with the countdown
    draw::glow_border(frame, 20, 20, WIDTH - 40, HEIGHT - 40, 5, (255.0 * progress) as i32);
}

fn draw_playing(frame: &mut [u8], game: &Game) {
    draw_board_frame(frame);
    draw_world(frame, game);
    draw_hud(frame, game.score);
}

fn draw_board_frame(frame: &mut [u8]) {
    draw::glow_border(frame, BORDER - 20, BORDER - 20, PLAY_W + 40, PLAY_H + 40, 5, 255);
    draw::stroke_rect(
        frame,
        BORDER - 10,
        BORDER - 10,
        PLAY_W + 20,
        PLAY_H + 20,
        3,
        draw::opaque(draw::NEON_BLUE),
    );
}

fn draw_world(frame: &mut [u8], game: &Game) {
    for (i, &segment) in game.snake.iter().enumerate() {
        if i == 0 {
            draw::fill_cell_halo(frame, segment, draw::opaque(draw::GLOW_BLUE));
            draw::fill_cell(frame, segment, draw::opaque(draw::NEON_BLUE));
        } else {
            draw::fill_cell(frame, segment, draw::opaque(draw::BRIGHT_GREEN));
        }
    }

    if let Some(food) = game.food {
        draw::fill_cell_halo(frame, food, draw::opaque(draw::NEON_PINK));
        draw::fill_cell(frame, food, draw::opaque(draw::WHITE));
    }
}

fn draw_hud(frame: &mut [u8], score: u32) {
    let score_text = format!("SCORE: {}", score);
    draw::draw_text(frame, &score_text, 22, 22, 3, draw::opaque(draw::WHITE));
    draw::draw_text(frame, &score_text, 20, 20, 3, draw::opaque(draw::NEON_PINK));

    draw::draw_text_centered(frame, "NEON SNAKE", WIDTH / 2 + 2, 32, 5, draw::opaque(draw::GLOW_BLUE));
    draw::draw_text_centered(frame, "NEON SNAKE", WIDTH / 2, 30, 5, draw::opaque(draw::NEON_BLUE));

    let hint = "P: PAUSE";
    draw::draw_text(frame, hint, WIDTH - 20 - draw::text_width(hint, 2), 20, 2, draw::opaque(draw::DARK_BLUE));
}

fn draw_pause_menu(frame: &mut [u8], selection: usize, muted: bool) {
    draw::dim(frame, 180);

    let menu_w: u32 = 400;
    let menu_h: u32 = 300;
    let menu_x = (WIDTH - menu_w) / 2;
    let menu_y = (HEIGHT - menu_h) / 2;

    draw::glow_border(frame, menu_x - 10, menu_y - 10, menu_w + 20, menu_h + 20, 5, 255);

    draw::draw_text_centered(frame, "GAME PAUSED", WIDTH / 2 + 2, menu_y + 52, 5, draw::opaque(draw::GLOW_BLUE));
    draw::draw_text_centered(frame, "GAME PAUSED", WIDTH / 2, menu_y + 50, 5, draw::opaque(draw::NEON_BLUE));

    let music_label = if muted { "MUSIC: OFF" } else { "MUSIC: ON" };
    let options = ["RESUME GAME", music_label, "MAIN MENU"];
    for (i, option) in options.iter().enumerate() {
        let y = menu_y + 120 + i as u32 * 40;
        if i == selection {
            draw::draw_text(frame, ">", menu_x + 50, y - 10, 3, draw::opaque(draw::BRIGHT_GREEN));
            draw::draw_text_centered(frame, option, WIDTH / 2 + 2, y + 2, 3, draw::opaque(draw::WHITE));
            draw::draw_text_centered(frame, option, WIDTH / 2, y, 3, draw::opaque(draw::NEON_PINK));
        } else {
            draw::draw_text_centered(frame, option, WIDTH / 2, y, 3, draw::opaque(draw::WHITE));
        }
    }

    draw::draw_text_centered(
        frame,
        "USE UP/DOWN ARROWS AND SPACE TO SELECT",
        WIDTH / 2,
        menu_y + menu_h - 30,
        2,
        draw::opaque(draw::DARK_BLUE),
    );
}

fn draw_game_over(frame: &mut [u8], score: u32, won: bool, mouse: (u32, u32), held: bool) {
    draw::dim(frame, 128);

    let banner = if won { "YOU WIN" } else { "GAME OVER" };
    draw::draw_text_centered(frame, banner, WIDTH / 2 + 2, HEIGHT / 2 - 118, 5, draw::opaque(draw::WHITE));
    draw::draw_text_centered(frame, banner, WIDTH / 2, HEIGHT / 2 - 120, 5, draw::opaque(draw::NEON_PINK));

    let score_text = format!("FINAL SCORE: {}", score);
    draw::draw_text_centered(frame, &score_text, WIDTH / 2, HEIGHT / 2 - 70, 3, draw::opaque(draw::NEON_BLUE));

    for button in &menu::GAME_OVER {
        button.draw(frame, mouse, held);
    }
}
