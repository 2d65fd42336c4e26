use crate::draw::{self, BLACK, NEON_BLUE, NEON_PINK, WHITE};
use crate::{HEIGHT, WIDTH};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    Start,
    HowToPlay,
    Quit,
    PlayAgain,
    MainMenu,
    Back,
}

pub struct Button {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub label: &'static str,
    pub scale: u32,
    pub action: MenuAction,
}

pub const START_MENU: [Button; 3] = [
    Button { x: WIDTH / 2 - 100, y: 280, w: 200, h: 50, label: "START GAME", scale: 3, action: MenuAction::Start },
    Button { x: WIDTH / 2 - 100, y: 350, w: 200, h: 50, label: "HOW TO PLAY", scale: 3, action: MenuAction::HowToPlay },
    Button { x: WIDTH / 2 - 100, y: 420, w: 200, h: 50, label: "QUIT", scale: 3, action: MenuAction::Quit },
];

pub const GAME_OVER: [Button; 3] = [
    Button { x: WIDTH / 2 - 100, y: HEIGHT / 2 - 20, w: 200, h: 45, label: "PLAY AGAIN", scale: 3, action: MenuAction::PlayAgain },
    Button { x: WIDTH / 2 - 100, y: HEIGHT / 2 + 40, w: 200, h: 45, label: "MAIN MENU", scale: 3, action: MenuAction::MainMenu },
    Button { x: WIDTH / 2 - 100, y: HEIGHT / 2 + 100, w: 200, h: 45, label: "QUIT GAME", scale: 3, action: MenuAction::Quit },
];

pub const BACK: Button = Button {
    x: WIDTH / 2 - 75,
    y: HEIGHT - 100,
    w: 150,
    h: 40,
    label: "BACK TO MENU",
    scale: 2,
    action: MenuAction::Back,
};

impl Button {
    pub fn contains(&self, mx: u32, my: u32) -> bool {
        mx >= self.x && my >= self.y && mx < self.x + self.w && my < self.y + self.h
    }

    pub fn draw(&self, frame: &mut [u8], mouse: (u32, u32), held: bool) {
        let hovered = self.contains(mouse.0, mouse.1);
        let pressed = hovered && held;
        let (border, text, rings) = if pressed {
            (WHITE, NEON_PINK, 8u32)
        } else if hovered {
            (NEON_PINK, WHITE, 6)
        } else {
            (NEON_BLUE, NEON_BLUE, 4)
        };

        // Glow rings spread outward in the border color, dimming per ring
        for i in 0..rings {
            let v = 255 - i as i32 * 30;
            if v <= 0 {
                continue;
            }
            let col = (
                (border.0 as i32 * v / 255) as u8,
                (border.1 as i32 * v / 255) as u8,
                (border.2 as i32 * v / 255) as u8,
                255,
            );
            draw::stroke_rect(frame, self.x - i, self.y - i, self.w + i * 2, self.h + i * 2, 2, col);
        }

        draw::fill_rect(frame, self.x, self.y, self.w, self.h, draw::opaque(BLACK));
        draw::stroke_rect(frame, self.x, self.y, self.w, self.h, 3, draw::opaque(border));

        let cx = self.x + self.w / 2;
        let cy = self.y + self.h / 2;
        if hovered {
            draw::draw_text_centered(frame, self.label, cx + 1, cy + 1, self.scale, draw::opaque(WHITE));
        }
        draw::draw_text_centered(frame, self.label, cx, cy, self.scale, draw::opaque(text));
    }
}
