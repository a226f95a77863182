//! Frontend application
//!
//! Consumes the session snapshot read-only once per tick and accumulates
//! terminal events into the input state. The world is drawn one terminal
//! cell per tile.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use glam::Vec2;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::game::{InputState, Session, Status, SHARD_GOAL};
use crate::world::TILE_SIZE;

/// Ticks a pressed key counts as held when the terminal cannot report
/// key releases; refreshed by key repeat events
const HOLD_TTL: u8 = 12;

/// Keys the simulation treats as held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HeldKey {
    Up,
    Down,
    Left,
    Right,
    Attack,
}

/// Terminal frontend state
pub struct App {
    /// Whether the terminal reports key release events
    enhanced_keys: bool,
    /// Fallback hold timers, keyed by held key
    hold_ttls: HashMap<HeldKey, u8>,
    /// World-area rect of the last draw, for mouse mapping
    world_area: Rect,
    /// Top-left world tile of the last draw
    view_origin: (i32, i32),
    /// Frame counter driving the shake jitter
    frames: u64,
}

impl App {
    pub fn new(enhanced_keys: bool) -> Self {
        if !enhanced_keys {
            log::info!("Terminal lacks key release events; using hold timers");
        }
        Self {
            enhanced_keys,
            hold_ttls: HashMap::new(),
            world_area: Rect::default(),
            view_origin: (0, 0),
            frames: 0,
        }
    }

    /// Translate one terminal event. Returns true when the player asked to
    /// quit.
    pub fn handle_event(
        &mut self,
        event: &Event,
        session: &mut Session,
        input: &mut InputState,
    ) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key, session, input),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, input);
                false
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, session: &mut Session, input: &mut InputState) -> bool {
        let held = match key.code {
            KeyCode::Char('w') | KeyCode::Up => Some(HeldKey::Up),
            KeyCode::Char('s') | KeyCode::Down => Some(HeldKey::Down),
            KeyCode::Char('a') | KeyCode::Left => Some(HeldKey::Left),
            KeyCode::Char('d') | KeyCode::Right => Some(HeldKey::Right),
            KeyCode::Char(' ') => Some(HeldKey::Attack),
            _ => None,
        };

        if let Some(held) = held {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.set_held(input, held, true);
                    if !self.enhanced_keys {
                        self.hold_ttls.insert(held, HOLD_TTL);
                    }
                }
                KeyEventKind::Release => self.set_held(input, held, false),
            }
            return false;
        }

        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                match session.status {
                    Status::Menu => session.start(),
                    Status::Won | Status::Lost => session.restart(),
                    Status::Playing => {}
                }
                false
            }
            KeyCode::Char('q') | KeyCode::Esc => true,
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, input: &mut InputState) {
        let Some(world) = self.screen_to_world(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => input.press_pointer(world),
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                input.move_pointer(world)
            }
            _ => {}
        }
    }

    fn set_held(&mut self, input: &mut InputState, key: HeldKey, down: bool) {
        match key {
            HeldKey::Up => input.up = down,
            HeldKey::Down => input.down = down,
            HeldKey::Left => input.left = down,
            HeldKey::Right => input.right = down,
            HeldKey::Attack => input.attack = down,
        }
        if !down {
            self.hold_ttls.remove(&key);
        }
    }

    /// Decay the fallback hold timers once per frame
    pub fn tick_input(&mut self, input: &mut InputState) {
        if self.enhanced_keys {
            return;
        }
        let mut released = Vec::new();
        for (key, ttl) in self.hold_ttls.iter_mut() {
            *ttl = ttl.saturating_sub(1);
            if *ttl == 0 {
                released.push(*key);
            }
        }
        for key in released {
            self.set_held(input, key, false);
        }
    }

    /// Map a terminal cell to world pixel coordinates inside the last drawn
    /// viewport
    fn screen_to_world(&self, column: u16, row: u16) -> Option<Vec2> {
        let area = self.world_area;
        if area.width == 0
            || column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let tx = self.view_origin.0 + (column - area.x) as i32;
        let ty = self.view_origin.1 + (row - area.y) as i32;
        Some(Vec2::new(
            (tx as f32 + 0.5) * TILE_SIZE,
            (ty as f32 + 0.5) * TILE_SIZE,
        ))
    }

    /// Draw one frame from the snapshot
    pub fn render(&mut self, frame: &mut Frame, session: &Session) {
        self.frames += 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(frame.area());

        self.draw_hud(frame, chunks[0], session);

        match session.status {
            Status::Menu => self.draw_menu(frame, chunks[1]),
            Status::Playing => self.draw_world(frame, chunks[1], session),
            Status::Won | Status::Lost => {
                self.draw_world(frame, chunks[1], session);
                self.draw_outcome(frame, chunks[1], session);
            }
        }
    }

    fn draw_hud(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let hp = Span::styled(
            format!(" HP {:>3}/{}", session.player.health, session.player.max_health),
            Style::default().fg(Color::Rgb(220, 90, 90)),
        );
        let shards = Span::styled(
            format!("  shards {}/{}", session.shards, SHARD_GOAL),
            Style::default().fg(Color::Rgb(120, 210, 220)),
        );
        let gold = Span::styled(
            format!("  gold {}", session.gold),
            Style::default().fg(Color::Rgb(230, 190, 70)),
        );
        let diamonds = Span::styled(
            format!("  diamonds {}", session.diamonds),
            Style::default().fg(Color::Rgb(170, 230, 245)),
        );
        let hostiles = Span::styled(
            format!("  hostiles {}", session.hostiles.len()),
            Style::default().fg(Color::Rgb(100, 160, 80)),
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![hp, shards, gold, diamonds, hostiles])),
            area,
        );
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "S H A R D F A L L",
                Style::default().fg(Color::Rgb(120, 210, 220)),
            )),
            Line::from(""),
            Line::from("Dig deep. Collect 10 shards. Survive."),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] start    [Q] quit",
                Style::default().fg(Color::Rgb(150, 150, 150)),
            )),
        ];
        let para = Paragraph::new(lines).centered();
        let centered = center_rect(area, 44, 5);
        frame.render_widget(para, centered);
    }

    fn draw_outcome(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let (text, color) = match session.status {
            Status::Won => ("YOU ESCAPED WITH THE SHARDS", Color::Rgb(120, 210, 220)),
            _ => ("THE CAVES CLAIM ANOTHER MINER", Color::Rgb(200, 60, 60)),
        };
        let lines = vec![
            Line::from(Span::styled(text, Style::default().fg(color))),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] play again    [Q] quit",
                Style::default().fg(Color::Rgb(150, 150, 150)),
            )),
        ];
        let popup = center_rect(area, 36, 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).centered(), popup);
    }

    fn draw_world(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        self.world_area = area;

        // The snapshot camera centers the player; recenter on this
        // terminal's cell grid from the same midpoint.
        let center = session.camera + Vec2::new(
            crate::game::session::VIEW_WIDTH,
            crate::game::session::VIEW_HEIGHT,
        ) / 2.0;
        let mut origin_tx = (center.x / TILE_SIZE).floor() as i32 - area.width as i32 / 2;
        let origin_ty = (center.y / TILE_SIZE).floor() as i32 - area.height as i32 / 2;
        if session.shake >= 1.0 {
            origin_tx += if self.frames % 2 == 0 { 1 } else { -1 };
        }
        self.view_origin = (origin_tx, origin_ty);

        let buf = frame.buffer_mut();
        for row in 0..area.height {
            for col in 0..area.width {
                let tx = origin_tx + col as i32;
                let ty = origin_ty + row as i32;
                let cell = &mut buf[(area.x + col, area.y + row)];

                match session.grid.get(tx, ty) {
                    Some(tile) if tile.is_solid() => {
                        let (r, g, b) = tile.kind.color();
                        let glyph = damage_glyph(tile.durability, tile.max_durability);
                        cell.set_char(glyph)
                            .set_fg(Color::Rgb(r, g, b))
                            .set_bg(Color::Rgb(r / 3, g / 3, b / 3));
                    }
                    Some(_) => {
                        cell.set_char(' ').set_bg(Color::Rgb(18, 20, 28));
                    }
                    None => {
                        cell.set_char(' ').set_bg(Color::Rgb(8, 8, 10));
                    }
                }

                if session.hovered_tile == Some((tx, ty)) {
                    cell.set_bg(Color::Rgb(90, 90, 55));
                }
            }
        }

        for hostile in &session.hostiles {
            if let Some((col, row)) = self.world_cell(hostile.position) {
                let (r, g, b) = hostile.kind.color();
                buf[(col, row)]
                    .set_char(hostile.kind.glyph())
                    .set_fg(Color::Rgb(r, g, b));
            }
        }

        if let Some((col, row)) = self.world_cell(session.player.position) {
            let (r, g, b) = session.player.kind.color();
            buf[(col, row)]
                .set_char(session.player.kind.glyph())
                .set_fg(Color::Rgb(r, g, b));
        }

        for particle in &session.particles {
            let Some((col, row)) = self.world_cell(particle.position) else {
                continue;
            };
            let (r, g, b) = particle.color;
            match &particle.label {
                Some(text) => {
                    for (i, ch) in text.chars().enumerate() {
                        let x = col + i as u16;
                        if x < area.x + area.width {
                            buf[(x, row)].set_char(ch).set_fg(Color::Rgb(r, g, b));
                        }
                    }
                }
                None => {
                    buf[(col, row)].set_char('·').set_fg(Color::Rgb(r, g, b));
                }
            }
        }
    }

    /// Terminal cell of a world pixel position inside the current viewport
    fn world_cell(&self, position: Vec2) -> Option<(u16, u16)> {
        let area = self.world_area;
        let tx = (position.x / TILE_SIZE).floor() as i32 - self.view_origin.0;
        let ty = (position.y / TILE_SIZE).floor() as i32 - self.view_origin.1;
        if tx < 0 || ty < 0 || tx >= area.width as i32 || ty >= area.height as i32 {
            return None;
        }
        Some((area.x + tx as u16, area.y + ty as u16))
    }
}

/// Glyph for a tile by how chipped it is
fn damage_glyph(durability: i32, max_durability: i32) -> char {
    if max_durability <= 0 || durability >= max_durability {
        '█'
    } else if durability * 2 >= max_durability {
        '▓'
    } else {
        '▒'
    }
}

/// A `width`×`height` rect centered inside `area`
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
