//! Terminal renderer: an RGB pixel buffer flushed as half-block cells.
//!
//! The simulation runs in world units; everything here is scaled per axis
//! onto the buffer, so sprites stretch a little when the terminal is resized.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use crate::config::ConfigField;
use crate::machine::{Machine, Phase};
use crate::panel::{ConfigPanel, MAX_INPUT_LEN};
use crate::sim::{Collision, GameState, PIPE_WIDTH, World, policy};

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    const fn halve(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

impl From<Rgb> for CColor {
    fn from(c: Rgb) -> Self {
        CColor::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const SKYLINE: Rgb = Rgb(150, 200, 210);
const SKYLINE_WINDOW: Rgb = Rgb(215, 240, 245);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_Y: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const BOARD: Rgb = Rgb(210, 185, 110);
const BOARD_LIGHT: Rgb = Rgb(220, 195, 120);
const FIELD: Rgb = Rgb(225, 225, 225);
const FIELD_FOCUS: Rgb = Rgb(255, 255, 255);
const FIELD_BAD: Rgb = Rgb(255, 180, 170);
const BUTTON: Rgb = Rgb(225, 75, 35);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);

// ── Pixel buffer with half-block rendering ──────────────────────────────────

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SKY_TOP; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY_TOP);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    fn fill(&mut self, r: Rect, c: Rgb) {
        self.fill_rect(r.x, r.y, r.w, r.h, c);
    }

    fn darken(&mut self) {
        for c in self.px.iter_mut() {
            *c = c.halve();
        }
    }

    /// Write the whole buffer, two pixel rows per terminal row.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(bot.into()))?;
                    bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                    continue;
                }
                if fg != Some(top) {
                    queue!(out, style::SetForegroundColor(top.into()))?;
                    fg = Some(top);
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

// ── 3x5 bitmap font ─────────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

#[rustfmt::skip]
const LETTERS: [[u8; 15]; 26] = [
    [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1], // A
    [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0], // B
    [0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1], // C
    [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0], // D
    [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1], // E
    [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0], // F
    [0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1], // G
    [1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1], // H
    [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1], // I
    [0,0,1, 0,0,1, 0,0,1, 1,0,1, 0,1,0], // J
    [1,0,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1], // K
    [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1], // L
    [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1], // M
    [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1], // N
    [0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0], // O
    [1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0], // P
    [0,1,0, 1,0,1, 1,0,1, 1,1,0, 0,1,1], // Q
    [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1], // R
    [0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0], // S
    [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0], // T
    [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // U
    [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0], // V
    [1,0,1, 1,0,1, 1,1,1, 1,1,1, 1,0,1], // W
    [1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1], // X
    [1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0], // Y
    [1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1], // Z
];

#[rustfmt::skip]
const UNKNOWN: [u8; 15] = [1,1,0, 0,0,1, 0,1,0, 0,0,0, 0,1,0]; // ?

fn glyph(ch: char) -> Option<[u8; 15]> {
    #[rustfmt::skip]
    let g = match ch.to_ascii_uppercase() {
        ' ' => return None,
        d @ '0'..='9' => DIGITS[(d as u8 - b'0') as usize],
        l @ 'A'..='Z' => LETTERS[(l as u8 - b'A') as usize],
        '.' => [0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0],
        '-' => [0,0,0, 0,0,0, 1,1,1, 0,0,0, 0,0,0],
        '+' => [0,0,0, 0,1,0, 1,1,1, 0,1,0, 0,0,0],
        ':' => [0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0],
        '!' => [0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0],
        _ => UNKNOWN,
    };
    Some(g)
}

fn draw_char(buf: &mut PixelBuf, x: i32, y: i32, ch: char, fg: Rgb) {
    let Some(g) = glyph(ch) else {
        return;
    };
    for row in 0..5 {
        for col in 0..3 {
            if g[row * 3 + col] == 1 {
                buf.set(x + col as i32, y + row as i32, fg);
            }
        }
    }
}

/// Width in pixels: 3px per glyph + 1px spacing.
pub fn text_width(s: &str) -> i32 {
    (s.chars().count() as i32 * 4 - 1).max(0)
}

fn draw_text(buf: &mut PixelBuf, x: i32, y: i32, s: &str, fg: Rgb, shadow: bool) {
    // Shadows first so they never cover a neighbouring glyph
    if shadow {
        for (i, ch) in s.chars().enumerate() {
            draw_char(buf, x + i as i32 * 4 + 1, y + 1, ch, SHADOW);
        }
    }
    for (i, ch) in s.chars().enumerate() {
        draw_char(buf, x + i as i32 * 4, y, ch, fg);
    }
}

fn draw_text_centered(buf: &mut PixelBuf, cx: i32, y: i32, s: &str, fg: Rgb, shadow: bool) {
    draw_text(buf, cx - text_width(s) / 2, y, s, fg, shadow);
}

// ── Sprites ─────────────────────────────────────────────────────────────────

/// The four images the game draws, by logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Background,
        Sprite::Bird,
        Sprite::TopPipe,
        Sprite::BottomPipe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sprite::Background => "background",
            Sprite::Bird => "bird",
            Sprite::TopPipe => "topPipe",
            Sprite::BottomPipe => "bottomPipe",
        }
    }

    /// Draw into `dst`. `frame` drives the wing animation.
    pub fn draw(&self, buf: &mut PixelBuf, dst: Rect, frame: u64) {
        match self {
            Sprite::Background => draw_background(buf, dst),
            Sprite::Bird => draw_bird(buf, dst, frame),
            Sprite::TopPipe => draw_pipe(buf, dst, true),
            Sprite::BottomPipe => draw_pipe(buf, dst, false),
        }
    }
}

fn draw_background(buf: &mut PixelBuf, dst: Rect) {
    let h = dst.h.max(1);
    for y in 0..dst.h {
        let t = (y * 256 / h) as u16;
        buf.fill_rect(dst.x, dst.y + y, dst.w, 1, Rgb::lerp(SKY_TOP, SKY_BOT, t));
    }

    let base = dst.y + dst.h;
    let unit = (dst.h as f64 / 48.0).max(0.5);

    // Skyline
    let mut x = 0;
    while x < dst.w {
        let r = pseudo_rand(x as u64 + 17);
        let bw = 3 + (r * 5.0) as i32;
        let bh = ((6.0 + r * 10.0) * unit) as i32;
        buf.fill_rect(dst.x + x, base - bh, bw, bh, SKYLINE);
        for wy in (base - bh + 2..base).step_by(3) {
            for wx in (x + 1..x + bw - 1).step_by(2) {
                if pseudo_rand((wx * 31 + wy) as u64) > 0.6 {
                    buf.set(dst.x + wx, wy, SKYLINE_WINDOW);
                }
            }
        }
        x += bw + 1;
    }

    // Far hills
    for x in 0..dst.w {
        let fx = x as f64 * 0.04;
        let h = (fx.sin() * 3.0 + (fx * 1.7).sin() * 1.5 + 3.0) * unit;
        buf.fill_rect(dst.x + x, base - h as i32, 1, h as i32, HILL_FAR);
    }
    // Near hills
    for x in 0..dst.w {
        let fx = x as f64 * 0.06 + 1.3;
        let h = (fx.sin() * 2.0 + (fx * 2.3).sin() + 1.5) * unit;
        buf.fill_rect(dst.x + x, base - h as i32, 1, h as i32, HILL_NEAR);
    }
}

fn draw_bird(buf: &mut PixelBuf, dst: Rect, frame: u64) {
    let w = dst.w.max(4);
    let h = dst.h.max(3);
    let (x, y) = (dst.x, dst.y);

    buf.fill_rect(x, y, w, h, BIRD_Y);
    buf.fill_rect(x + 1, y, w - 2, 1, BIRD_HI);

    // Wing
    let wing_h = (h / 3).max(1);
    let wing_y = if frame % 8 < 4 { y + h / 2 - wing_h } else { y + h / 2 };
    buf.fill_rect(x, wing_y.max(y), (w / 3).max(1), wing_h, BIRD_WING);

    // Eye
    let ex = x + w - 1 - (w / 4).max(1);
    let ey = y + (h / 4).max(1) - 1;
    buf.fill_rect(ex, ey, 2, 1, BIRD_EYE);
    buf.set(ex + 1, ey, BIRD_PUPIL);

    // Beak
    buf.fill_rect(x + w, y + h / 2, (w / 4).max(1), (h / 3).max(1), BIRD_BEAK);
}

fn draw_pipe(buf: &mut PixelBuf, dst: Rect, top: bool) {
    let cap_extra = (dst.w / 8).max(1);
    let cap_h = (dst.w / 3).clamp(2, dst.h.max(2));
    let (body_y, cap_y) = if top {
        (dst.y, dst.y + dst.h - cap_h)
    } else {
        (dst.y + cap_h, dst.y)
    };

    for x in 0..dst.w {
        buf.fill_rect(dst.x + x, body_y, 1, dst.h - cap_h, pipe_shade(x, dst.w));
    }
    let cap_w = dst.w + cap_extra * 2;
    for x in 0..cap_w {
        let px = dst.x - cap_extra + x;
        buf.fill_rect(px, cap_y, 1, cap_h, pipe_shade(x, cap_w));
        buf.set(px, cap_y, CAP_DARK);
        buf.set(px, cap_y + cap_h - 1, CAP_DARK);
    }
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

/// Stable per-column noise for the skyline.
fn pseudo_rand(seed: u64) -> f64 {
    let x = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let bits = (x >> 33) ^ x;
    (bits % 1000) as f64 / 1000.0
}

// ── World to pixels ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    sx: f64,
    sy: f64,
}

impl Viewport {
    pub fn new(world: &World, pw: usize, ph: usize) -> Self {
        Self {
            sx: pw as f64 / world.width,
            sy: ph as f64 / world.height,
        }
    }

    /// World rectangle to pixels. Edges are rounded independently so
    /// neighbouring rectangles never overlap or leave gaps.
    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let x0 = (x * self.sx).round() as i32;
        let y0 = (y * self.sy).round() as i32;
        let x1 = ((x + w) * self.sx).round() as i32;
        let y1 = ((y + h) * self.sy).round() as i32;
        Rect::new(x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }

    pub fn point(&self, x: f64, y: f64) -> (i32, i32) {
        ((x * self.sx).round() as i32, (y * self.sy).round() as i32)
    }
}

// ── Screens ─────────────────────────────────────────────────────────────────

/// Draw whatever the current phase shows.
pub fn draw(buf: &mut PixelBuf, machine: &Machine) {
    match machine.phase() {
        Phase::Setup(panel) => draw_panel(buf, panel),
        Phase::Playing | Phase::GameOver(_) => draw_scene(buf, machine.state()),
    }
}

pub fn draw_scene(buf: &mut PixelBuf, state: &GameState) {
    let world = &state.world;
    let view = Viewport::new(world, buf.w, buf.h);
    let full = Rect::new(0, 0, buf.w as i32, buf.h as i32);
    Sprite::Background.draw(buf, full, state.frame);

    for pipe in &state.pipes {
        if !policy::is_visible(pipe) {
            continue;
        }
        let top = view.rect(pipe.x, 0.0, PIPE_WIDTH, pipe.top_height);
        Sprite::TopPipe.draw(buf, top, state.frame);
        let bottom = view.rect(
            pipe.x,
            world.height - pipe.bottom_height,
            PIPE_WIDTH,
            pipe.bottom_height,
        );
        Sprite::BottomPipe.draw(buf, bottom, state.frame);
    }

    let bird = &state.bird;
    let dst = view.rect(bird.x, bird.y, bird.width, bird.height);
    Sprite::Bird.draw(buf, dst, state.frame);

    let (sx, sy) = view.point(world.width * 0.05, world.height * 0.1);
    draw_text(buf, sx, sy, &state.score.to_string(), WHITE, true);
}

/// Where the setup screen's controls sit, for drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub board: Rect,
    pub title_y: i32,
    pub labels: [(i32, i32); 2],
    pub fields: [Rect; 2],
    pub start: Rect,
    pub hint_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTarget {
    Field(ConfigField),
    Start,
}

impl PanelLayout {
    pub fn new(pw: usize, ph: usize) -> Self {
        let cx = pw as i32 / 2;
        let cy = ph as i32 / 2;
        let label_w = text_width(ConfigField::Gravity.label());
        let field_w = MAX_INPUT_LEN as i32 * 4 + 3;
        let left = cx - (label_w + 3 + field_w) / 2;
        let field_x = left + label_w + 3;
        let start_w = text_width("START") + 4;

        Self {
            board: Rect::new(left - 4, cy - 14, label_w + 3 + field_w + 8, 32),
            title_y: cy - 22,
            labels: [(left, cy - 9), (left, cy - 1)],
            fields: [
                Rect::new(field_x, cy - 10, field_w, 7),
                Rect::new(field_x, cy - 2, field_w, 7),
            ],
            start: Rect::new(cx - start_w / 2, cy + 8, start_w, 7),
            hint_y: cy + 20,
        }
    }

    /// What a click at pixel `(x, y)` lands on.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<PanelTarget> {
        if self.start.contains(x, y) {
            return Some(PanelTarget::Start);
        }
        ConfigField::ALL
            .into_iter()
            .zip(self.fields)
            .find(|(_, r)| r.contains(x, y))
            .map(|(f, _)| PanelTarget::Field(f))
    }
}

pub fn draw_panel(buf: &mut PixelBuf, panel: &ConfigPanel) {
    let full = Rect::new(0, 0, buf.w as i32, buf.h as i32);
    Sprite::Background.draw(buf, full, 0);

    let layout = PanelLayout::new(buf.w, buf.h);
    let cx = buf.w as i32 / 2;
    draw_text_centered(buf, cx, layout.title_y, "FLAPPY", BIRD_Y, true);

    let b = layout.board;
    buf.fill(Rect::new(b.x - 1, b.y - 1, b.w + 2, b.h + 2), SHADOW);
    buf.fill(b, BOARD);
    buf.fill(Rect::new(b.x + 1, b.y + 1, b.w - 2, b.h - 2), BOARD_LIGHT);

    for ((field, (lx, ly)), r) in ConfigField::ALL
        .into_iter()
        .zip(layout.labels)
        .zip(layout.fields)
    {
        draw_text(buf, lx, ly, field.label(), WHITE, true);
        let input = panel.input(field);
        let focused = panel.focused() == field;
        let bg = match (&input.error, focused) {
            (Some(_), _) => FIELD_BAD,
            (None, true) => FIELD_FOCUS,
            (None, false) => FIELD,
        };
        buf.fill(r, bg);
        draw_text(buf, r.x + 2, r.y + 1, &input.text, SHADOW, false);
        if focused {
            let caret_x = r.x + 2 + text_width(&input.text) + 1;
            buf.fill_rect(caret_x, r.y + 1, 1, 5, SHADOW);
        }
    }

    let s = layout.start;
    buf.fill(Rect::new(s.x + 1, s.y + 1, s.w, s.h), SHADOW);
    buf.fill(s, BUTTON);
    draw_text(buf, s.x + 2, s.y + 1, "START", WHITE, false);

    draw_text_centered(buf, cx, layout.hint_y, "TAB SWITCH  ENTER START", WHITE, true);
}

/// Dim the frozen frame and show the final score.
pub fn draw_game_over(buf: &mut PixelBuf, state: &GameState, collision: Collision) {
    buf.darken();

    let cx = buf.w as i32 / 2;
    let cy = buf.h as i32 / 2;
    let panel_w = text_width("PRESS ANY KEY") + 8;
    let panel_h = 26;
    let px = cx - panel_w / 2;
    let py = cy - panel_h / 2;

    buf.fill_rect(px - 1, py - 1, panel_w + 2, panel_h + 2, SHADOW);
    buf.fill_rect(px, py, panel_w, panel_h, BOARD);
    buf.fill_rect(px + 1, py + 1, panel_w - 2, panel_h - 2, BOARD_LIGHT);

    draw_text_centered(buf, cx, py + 3, "GAME OVER!", WHITE, true);
    let cause = match collision {
        Collision::Ground => "GROUND",
        Collision::Pipe(_) => "PIPE",
    };
    draw_text_centered(buf, cx, py + 10, cause, SHADOW, false);
    draw_text_centered(buf, cx, py + 17, &state.score.to_string(), BIRD_Y, true);
    draw_text_centered(buf, cx, py + panel_h + 3, "PRESS ANY KEY", WHITE, true);
}
