//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, and the
//! `HitMap` the runtime uses to turn mouse clicks into control activations.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, Focus, Hit};
use crate::audio::MediaOutput;
use crate::config::UiSettings;
use crate::player::Request;

const CONTROLS: [(&str, &str); 8] = [
    ("tab/shift-tab", "focus"),
    ("←/→", "move / adjust"),
    ("enter/space", "activate"),
    ("1-4", "pick sound"),
    ("p", "play/pause"),
    ("+/-", "volume"),
    ("?", "help"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

fn focus_block(focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if focused {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block.border_type(BorderType::Rounded)
    }
}

/// Where each clickable control was drawn in the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub tracks: Vec<Rect>,
    pub play_pause: Rect,
    /// Inner area of the slider (inside its border).
    pub volume: Rect,
}

impl HitMap {
    /// Control under the terminal cell at `column`, `row`, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some(i) = self.tracks.iter().position(|r| contains(*r, column, row)) {
            return Some(Hit::Track(i));
        }
        if contains(self.play_pause, column, row) {
            return Some(Hit::PlayPause);
        }
        // Accept clicks on the slider's border rows too.
        let slider_row = Rect {
            x: self.volume.x,
            y: self.volume.y.saturating_sub(1),
            width: self.volume.width,
            height: self.volume.height + 2,
        };
        if self.volume.width > 0 && contains(slider_row, column, row) {
            let span = self.volume.width.saturating_sub(1).max(1) as f32;
            let ratio = (column - self.volume.x) as f32 / span;
            return Some(Hit::Volume {
                ratio: ratio.clamp(0.0, 1.0),
            });
        }
        None
    }
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw<M: MediaOutput>(frame: &mut Frame, app: &App<M>, ui_settings: &UiSettings) -> HitMap {
    let player = &app.player;
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lull ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track buttons
    let entries = player.catalog().entries();
    let track_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            entries
                .iter()
                .map(|_| Constraint::Ratio(1, entries.len() as u32)),
        )
        .split(chunks[1]);

    for (i, (entry, area)) in entries.iter().zip(track_areas.iter()).enumerate() {
        let selected = i == player.selected();
        let mut style = Style::default();
        if selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let button = Paragraph::new(format!("{} {}", entry.icon, entry.name))
            .alignment(Alignment::Center)
            .style(style)
            .block(focus_block(app.focus == Focus::Track(i)));
        frame.render_widget(button, *area);
        hits.tracks.push(*area);
    }

    // Transport: play/pause button + volume slider
    let transport = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(10)])
        .split(chunks[2]);

    let label = if player.is_playing() {
        "⏸  Pause"
    } else {
        "▶  Play"
    };
    let play_button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(focus_block(app.focus == Focus::PlayPause));
    frame.render_widget(play_button, transport[0]);
    hits.play_pause = transport[0];

    let volume_pct = (player.volume() * 100.0).round() as u16;
    let volume_block = focus_block(app.focus == Focus::Volume).title(" volume ");
    hits.volume = volume_block.inner(transport[1]);
    let gauge = Gauge::default()
        .block(volume_block)
        .ratio(f64::from(player.volume()).clamp(0.0, 1.0))
        .label(format!("{}%", volume_pct));
    frame.render_widget(gauge, transport[1]);

    // Status box
    let status = {
        let entry = player.selected_entry();
        let mut parts: Vec<String> = vec![format!(" Sound: {} {}", entry.icon, entry.name)];

        let state = match (player.is_playing(), player.pending()) {
            (false, Some(Request::Play)) => "Starting…",
            (true, Some(Request::Pause)) => "Pausing…",
            (true, _) => "Playing",
            (false, _) => "Stopped",
        };
        parts.push(state.to_string());
        parts.push(format!("Volume: {}%", volume_pct));

        match app.asset_info(player.selected()) {
            Some(info) if !info.exists => parts.push("asset missing".to_string()),
            Some(info) => {
                if let Some(d) = info.duration {
                    parts.push(format!("Loop: {}", format_mmss(d)));
                }
            }
            None => {}
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[3]);

    if app.show_help {
        let popup_area = centered_rect_sized(48, (CONTROLS.len() + 2) as u16, frame.area());
        frame.render_widget(Clear, popup_area);
        let lines = CONTROLS
            .iter()
            .map(|(k, v)| format!("{:<14} {}", k, v))
            .collect::<Vec<String>>()
            .join("\n");
        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" help (? closes) ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        );
        frame.render_widget(help, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    hits
}
