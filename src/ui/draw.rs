use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Field, StatusKind};
use crate::face::CardFace;

use super::card_preview::{CardPreview, CARD_COLS, CARD_ROWS};
use super::theme::Theme;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.config().resolve_theme();

    // Fill background with theme color
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Form + preview
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(36), // Form
            Constraint::Min(1),     // Preview
        ])
        .split(chunks[0]);

    draw_form(f, app, columns[0], &theme);
    draw_preview(f, app, columns[1], &theme);
    draw_status_bar(f, app, chunks[1], &theme);
}

/// Draw the form column: one bordered input per field
fn draw_form(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" cardsmith ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints: Vec<Constraint> = Field::ALL.iter().map(|_| Constraint::Length(3)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in Field::ALL.iter().zip(rows.iter()) {
        draw_field(f, app, *field, *row, theme);
    }
}

/// Draw a single input row, with the cursor in the focused one
fn draw_field(f: &mut Frame, app: &App, field: Field, area: Rect, theme: &Theme) {
    if area.height < 3 {
        return;
    }

    let focused = app.focus() == field;
    let draft = app.draft();

    let value = match field {
        Field::Name => draft.name.clone(),
        Field::Number => draft.number.clone(),
        Field::Expiry => draft.expiry.clone(),
        Field::Cvv => draft.cvv.clone(),
        Field::Theme => {
            let themes = app.themes();
            let at = themes.position(&draft.theme).unwrap_or(0) + 1;
            format!("◂ {} ▸  {}/{}", draft.theme, at, themes.len())
        }
    };

    let border_style = if focused {
        Style::default().fg(theme.input_focus)
    } else {
        Style::default().fg(theme.dimmed_alt)
    };
    let title_style = if focused {
        Style::default()
            .fg(theme.input_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dimmed)
    };

    let input = Paragraph::new(value.clone())
        .style(Style::default().fg(theme.foreground).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(format!(" {} ", field.label()), title_style))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(input, area);

    // Show cursor in the focused text input (the theme row is a selector)
    if focused && field != Field::Theme {
        let cursor_x = area.x + 1 + value.width() as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Draw the preview column: live card, details panel, disclaimer
fn draw_preview(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Preview ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let draft = app.draft();
    let face = CardFace::compose(draft);
    let style = app.themes().style(&draft.theme);

    // Center the card horizontally, clamp to the panel
    let card_w = CARD_COLS.min(inner.width);
    let card_x = inner.x + (inner.width - card_w) / 2;
    let card_h = CARD_ROWS.min(inner.height);
    let top_gap = (inner.height - card_h).min(1);
    let card_area = Rect {
        x: card_x,
        y: inner.y + top_gap,
        width: card_w,
        height: card_h,
    };
    f.render_widget(CardPreview::new(&face, style), card_area);

    // Details panel under the card
    let details_y = card_area.y + card_area.height + 1;
    if details_y + 4 <= inner.y + inner.height {
        let details_area = Rect {
            x: card_x,
            y: details_y,
            width: card_w,
            height: 4,
        };
        draw_details(f, app, &face, details_area, theme);
    }

    // Disclaimer on the panel's last line
    let disclaimer_y = inner.y + inner.height - 1;
    if disclaimer_y > details_y + 4 {
        let disclaimer = Paragraph::new("Design/demo only - never use real card data.")
            .style(Style::default().fg(theme.dimmed).bg(theme.background));
        f.render_widget(
            disclaimer,
            Rect {
                x: card_x,
                y: disclaimer_y,
                width: card_w,
                height: 1,
            },
        );
    }
}

/// Details panel: raw values next to the styled preview
fn draw_details(f: &mut Frame, app: &App, face: &CardFace, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Card Details ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            split_row(&face.number, &face.cvv_tag, width),
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            split_row(
                &format!("Template: {}", app.draft().theme),
                "Preview: Digital",
                width,
            ),
            Style::default().fg(theme.dimmed),
        )),
    ];

    let details = Paragraph::new(lines).style(Style::default().bg(theme.background));
    f.render_widget(details, inner);
}

/// Lay `left` and `right` on one row of `width` cells
fn split_row(left: &str, right: &str, width: usize) -> String {
    let pad = width
        .saturating_sub(left.width())
        .saturating_sub(right.width());
    format!("{left}{}{right}", " ".repeat(pad))
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let (text, style) = match app.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => theme.accent,
                StatusKind::Success => theme.success,
                StatusKind::Error => theme.failure,
            };
            (
                format!(" {}", status.text),
                Style::default().fg(color).bg(theme.background),
            )
        }
        None => (
            " Tab: next field | ←/→: theme | Ctrl+L: sample | Ctrl+E: export | Ctrl+U: clear | Esc: quit"
                .to_string(),
            Style::default().fg(theme.dimmed).bg(theme.background),
        ),
    };

    let status_bar = Paragraph::new(text).style(style);
    f.render_widget(status_bar, area);
}
