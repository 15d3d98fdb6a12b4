//! Rendering layer — all terminal I/O lives here.
//!
//! The playfield is measured in abstract units; everything is scaled into
//! the area inside the border. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use invaders::collision::{Hitbox, Rect};
use invaders::compute::alive_enemies;
use invaders::entities::{GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Black;
const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_WAVE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

const BLOCK: &str = "█";

// ── Playfield → terminal cells ────────────────────────────────────────────────

/// Inner drawing area: one column of border on each side, HUD + top border
/// above, bottom border + hint line below.
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(term: (u16, u16), state: &GameState) -> Self {
        let (width, height) = term;
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Self {
            left: 1,
            top: 2,
            cols,
            rows,
            scale_x: cols as f32 / state.playfield.width(),
            scale_y: rows as f32 / state.playfield.height(),
        }
    }

    /// Cell span `[start, end)` covered by `[lo, hi)` along one axis, at
    /// least one cell wide, clipped to `limit`.
    fn span(lo: f32, hi: f32, scale: f32, limit: u16) -> Option<(u16, u16)> {
        let start = (lo * scale).floor().max(0.0);
        let end = (hi * scale).ceil().min(limit as f32);
        if start >= limit as f32 || end <= 0.0 {
            return None;
        }
        let start = start as u16;
        let end = (end as u16).max(start + 1);
        Some((start, end))
    }

    /// Terminal rectangle `(col, row, width, height)` for a playfield rectangle.
    fn cells(&self, r: Rect) -> Option<(u16, u16, u16, u16)> {
        let (c0, c1) = Self::span(r.x, r.right(), self.scale_x, self.cols)?;
        let (r0, r1) = Self::span(r.y, r.bottom(), self.scale_y, self.rows)?;
        Some((self.left + c0, self.top + r0, c1 - c0, r1 - r0))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a terminal of size `term` (columns, rows).
pub fn render<W: Write>(out: &mut W, state: &GameState, term: (u16, u16)) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term)?;
    draw_hud(out, state, term)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, term)?;
    } else {
        let view = Viewport::new(term, state);
        fill(out, &view, state.player.rect(), C_PLAYER)?;
        for enemy in alive_enemies(state) {
            fill(out, &view, enemy.rect(), C_ENEMY)?;
        }
        for bullet in &state.player_bullets {
            fill(out, &view, bullet.rect(), C_BULLET_PLAYER)?;
        }
        for bullet in &state.enemy_bullets {
            fill(out, &view, bullet.rect(), C_BULLET_ENEMY)?;
        }
    }

    draw_controls_hint(out, term)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, term: (u16, u16)) -> std::io::Result<()> {
    let (width, height) = term;
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, term: (u16, u16)) -> std::io::Result<()> {
    let width = term.0;

    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    // Wave — centre
    let wave_str = format!("[ WAVE {} ]", state.wave);
    let wx = (width / 2).saturating_sub(wave_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(&wave_str))?;

    // Lives — right
    let hearts: String = "♥".repeat(state.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let lx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(out: &mut W, view: &Viewport, rect: Rect, color: Color) -> std::io::Result<()> {
    let Some((col, row, w, h)) = view.cells(rect) else {
        return Ok(());
    };
    let line = BLOCK.repeat(w as usize);
    out.queue(style::SetForegroundColor(color))?;
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, term: (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term.1.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, term: (u16, u16)) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line,            Color::White),
        ("[ R ] Restart   [ Q ] Quit", Color::Yellow),
    ];

    let cx = term.0 / 2;
    let start_row = (term.1 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
