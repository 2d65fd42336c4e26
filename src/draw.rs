use crate::pos::Pos;
use crate::{BORDER, CELL, HEIGHT, WIDTH};

pub type Rgba = (u8, u8, u8, u8);

// Neon palette
pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const NEON_BLUE: (u8, u8, u8) = (0, 255, 255);
pub const NEON_PINK: (u8, u8, u8) = (255, 20, 147);
pub const BRIGHT_GREEN: (u8, u8, u8) = (57, 255, 20);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const DARK_BLUE: (u8, u8, u8) = (0, 100, 150);
pub const GLOW_BLUE: (u8, u8, u8) = (100, 200, 255);

pub fn opaque(c: (u8, u8, u8)) -> Rgba {
    (c.0, c.1, c.2, 255)
}

pub fn faded(c: (u8, u8, u8), a: u8) -> Rgba {
    (c.0, c.1, c.2, a)
}

// ============================
// Framebuffer primitives
// ============================

pub fn clear(frame: &mut [u8], c: (u8, u8, u8)) {
    for px in frame.chunks_exact_mut(4) {
        px[0] = c.0;
        px[1] = c.1;
        px[2] = c.2;
        px[3] = 255;
    }
}

pub fn blend_pixel(frame: &mut [u8], x: u32, y: u32, col: Rgba) {
    if x >= WIDTH || y >= HEIGHT {
        return;
    }
    let idx = ((y * WIDTH + x) * 4) as usize;
    if idx + 3 >= frame.len() {
        return;
    }
    let (r, g, b, a) = col;
    let a = a as u16;
    let ia = 255 - a;
    frame[idx] = ((r as u16 * a + frame[idx] as u16 * ia) / 255) as u8;
    frame[idx + 1] = ((g as u16 * a + frame[idx + 1] as u16 * ia) / 255) as u8;
    frame[idx + 2] = ((b as u16 * a + frame[idx + 2] as u16 * ia) / 255) as u8;
    frame[idx + 3] = 255;
}

pub fn fill_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, col: Rgba) {
    let x2 = (x + w).min(WIDTH);
    let y2 = (y + h).min(HEIGHT);
    for py in y..y2 {
        for px in x..x2 {
            blend_pixel(frame, px, py, col);
        }
    }
}

// Hollow rect with the stroke drawn inward from the outer edge
pub fn stroke_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, thickness: u32, col: Rgba) {
    for i in 0..thickness {
        if w <= i * 2 || h <= i * 2 {
            break;
        }
        stroke_ring(frame, x + i, y + i, w - i * 2, h - i * 2, col);
    }
}

fn stroke_ring(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, col: Rgba) {
    if w == 0 || h == 0 {
        return;
    }
    let x2 = (x + w - 1).min(WIDTH - 1);
    let y2 = (y + h - 1).min(HEIGHT - 1);
    for px in x..=x2 {
        blend_pixel(frame, px, y, col);
        blend_pixel(frame, px, y2, col);
    }
    for py in y..=y2 {
        blend_pixel(frame, x, py, col);
        blend_pixel(frame, x2, py, col);
    }
}

// Full-screen black veil for the pause and game-over overlays
pub fn dim(frame: &mut [u8], alpha: u8) {
    fill_rect(frame, 0, 0, WIDTH, HEIGHT, (0, 0, 0, alpha));
}

// ============================
// Neon helpers
// ============================

// Expanding blue rings around the rect, dimming as they spread. `base` caps
// the innermost intensity, so a ramped base fades the whole frame in.
pub fn glow_border(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, rings: u32, base: i32) {
    for i in 0..rings {
        let v = base - i as i32 * 40;
        if v <= 0 {
            continue;
        }
        let col = (0, (v / 3) as u8, v as u8, 255);
        stroke_rect(frame, x - i, y - i, w + i * 2, h + i * 2, 2, col);
    }
}

pub fn cell_origin(p: Pos) -> (u32, u32) {
    (BORDER + p.x as u32 * CELL, BORDER + p.y as u32 * CELL)
}

pub fn fill_cell(frame: &mut [u8], p: Pos, col: Rgba) {
    let (x, y) = cell_origin(p);
    fill_rect(frame, x, y, CELL, CELL, col);
}

// Cell inflated by two pixels on every side, drawn under the cell as a halo
pub fn fill_cell_halo(frame: &mut [u8], p: Pos, col: Rgba) {
    let (x, y) = cell_origin(p);
    fill_rect(frame, x - 2, y - 2, CELL + 4, CELL + 4, col);
}

// ============================
// 5x7 bitmap font
// ============================

pub fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '>' => [0b10000, 0b01000, 0b00100, 0b00010, 0b00100, 0b01000, 0b10000],
        '/' => [0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    })
}

pub fn draw_char(frame: &mut [u8], ch: char, x: u32, y: u32, scale: u32, col: Rgba) -> u32 {
    if let Some(rows) = glyph_5x7(ch) {
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (row >> (4 - rx)) & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            blend_pixel(frame, x + rx as u32 * scale + sx, y + ry as u32 * scale + sy, col);
                        }
                    }
                }
            }
        }
    }
    5 * scale + scale
}

pub fn draw_text(frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32, col: Rgba) {
    let mut cx = x;
    for ch in text.chars() {
        cx += draw_char(frame, ch, cx, y, scale, col);
    }
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 { 0 } else { n * 6 * scale - scale }
}

// Centers on both axes; `cy` is the vertical midline of the glyphs
pub fn draw_text_centered(frame: &mut [u8], text: &str, cx: u32, cy: u32, scale: u32, col: Rgba) {
    let x = cx.saturating_sub(text_width(text, scale) / 2);
    let y = cy.saturating_sub(7 * scale / 2);
    draw_text(frame, text, x, y, scale, col);
}
