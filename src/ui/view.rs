use crate::app::render_state::{RenderState, StatusKind};
use crate::app::{AppMode, Focus};
use crate::ui::layout::{BoardLayout, PlacedChip};
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

const HINTS: &str = "Tab focus · Enter pick · </> move · c clear · s submit · : command · ? help";

const HELP_TEXT: &str = "\
Mouse
  click a word          add it to the answer
  click an answer word  put it back
  drag word → answer    add it
  drag answer → words   put it back
  drag answer → answer  move it

Keys
  Tab             switch between words and answer
  ←/→  h/l        move the cursor
  Enter  Space    add / put back the word under the cursor
  </>  Shift+←/→  move the answer word under the cursor
  c               clear the answer
  s               submit
  :               command deck
  q  Esc          quit without submitting

Commands
  :submit  :w     :clear     :mv 3 1     :q
  +word   -word   @words.txt   @@ (clipboard)";

/// Draws one frame from the render state and the layout computed for it
pub fn draw(frame: &mut Frame, state: &RenderState, layout: &BoardLayout, dragging: bool) {
    let base = Style::default().fg(colors::text()).bg(colors::background());
    frame.render_widget(Block::default().style(base), frame.area());

    draw_pool(frame, state, layout);
    draw_answer(frame, state, layout, dragging);
    frame.render_widget(render_preview(&state.preview), layout.areas.preview);
    frame.render_widget(render_status(state), layout.areas.status);
    frame.render_widget(render_command_deck(state), layout.areas.deck);

    if state.mode == AppMode::Help {
        draw_help(frame);
    }
}

fn strip_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        colors::accent()
    } else {
        colors::dimmed()
    };
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors::background()))
}

fn draw_pool(frame: &mut Frame, state: &RenderState, layout: &BoardLayout) {
    let title = match &state.source {
        Some(source) => format!(" Words · {} ", source),
        None => " Words ".to_string(),
    };
    let focused = state.focus == Focus::Pool && state.mode == AppMode::Composing;
    frame.render_widget(strip_block(title, focused), layout.areas.pool);

    if !state.has_pool() {
        frame.render_widget(render_placeholder(), layout.pool_inner);
        return;
    }

    let cursor = if focused { state.pool_cursor } else { None };
    for chip in &layout.pool_chips {
        // Placed words keep their slot and draw as blank space
        if chip.visible {
            draw_chip(frame, chip, cursor == Some(chip.index));
        }
    }
}

fn draw_answer(frame: &mut Frame, state: &RenderState, layout: &BoardLayout, dragging: bool) {
    let focused = state.focus == Focus::Answer && state.mode == AppMode::Composing;
    let title = match layout.answer_overflow() {
        0 => format!(" Answer · {} ", state.answer.len()),
        hidden => format!(" Answer · {} · {} scrolled ", state.answer.len(), hidden),
    };
    frame.render_widget(strip_block(title, focused || dragging), layout.areas.answer);

    let cursor = if focused { state.answer_cursor } else { None };
    for chip in &layout.answer_chips {
        draw_chip(frame, chip, cursor == Some(chip.index));
    }
}

fn draw_chip(frame: &mut Frame, chip: &PlacedChip, under_cursor: bool) {
    let mut style = Style::default().fg(colors::text()).bg(colors::chip());
    if under_cursor {
        style = Style::default()
            .fg(colors::background())
            .bg(colors::accent())
            .add_modifier(Modifier::BOLD);
    }
    frame
        .buffer_mut()
        .set_string(chip.area.x, chip.area.y, format!(" {} ", chip.text), style);
}

pub fn render_preview(preview: &str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(" » ", Style::default().fg(colors::accent())),
        Span::styled(preview.to_string(), Style::default().fg(colors::text())),
    ]);
    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_status(state: &RenderState) -> Paragraph<'static> {
    let (text, color) = match &state.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => colors::dimmed(),
                StatusKind::Warning => colors::warning(),
            };
            (format!(" {}", status.text), color)
        }
        None => (String::new(), colors::dimmed()),
    };
    Paragraph::new(text).style(Style::default().fg(color).bg(colors::background()))
}

pub fn render_command_deck(state: &RenderState) -> Paragraph<'static> {
    let line = match state.mode {
        AppMode::Command => Line::from(vec![
            Span::styled("▌", Style::default().fg(colors::accent())),
            Span::styled(
                format!(":{}", state.command_line),
                Style::default().fg(colors::text()),
            ),
            Span::styled("█", Style::default().fg(colors::dimmed())),
        ]),
        _ => Line::from(vec![
            Span::styled("▌", Style::default().fg(colors::dimmed())),
            Span::styled(HINTS, Style::default().fg(colors::dimmed())),
        ]),
    };
    Paragraph::new(line).style(Style::default().bg(colors::surface()))
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "No words loaded\nType :@words.txt to load a word list\nOr :@@ to load from clipboard\n:q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

fn draw_help(frame: &mut Frame) {
    let area = centered(frame.area(), 64, 26);
    frame.render_widget(Clear, area);
    let help = Paragraph::new(HELP_TEXT)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(" Help · any key to close ")
                .border_style(Style::default().fg(colors::accent())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));
    frame.render_widget(help, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::app::AppEvent;
    use crate::form::AnswerForm;
    use crate::input;
    use crate::tagging::TokenId;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn render_with_layout(app: &App) -> (Vec<String>, BoardLayout) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut layout = BoardLayout::default();
        terminal
            .draw(|frame| {
                let state = app.get_render_state();
                layout = BoardLayout::compute(&state, frame.area(), 24);
                draw(frame, &state, &layout, false);
            })
            .unwrap();
        (screen_text(&terminal), layout)
    }

    fn render(app: &App) -> Vec<String> {
        render_with_layout(app).0
    }

    /// The cells a chip covers on its row
    fn chip_cells(rows: &[String], chip: &PlacedChip) -> String {
        rows[chip.area.y as usize]
            .chars()
            .skip(chip.area.x as usize)
            .take(chip.area.width as usize)
            .collect()
    }

    #[test]
    fn test_placed_word_leaves_blank_slot() {
        let pool = input::from_text("the cat sat").unwrap();
        let mut app = App::with_pool(AnswerForm::default(), pool);
        app.handle_event(AppEvent::Select(TokenId(1)));

        let (rows, layout) = render_with_layout(&app);
        let [the, cat, sat] = [0, 1, 2].map(|i| &layout.pool_chips[i]);

        // "cat" keeps its slot as blank cells, so "sat" does not shift left
        assert_eq!(chip_cells(&rows, the), " the ");
        assert_eq!(chip_cells(&rows, cat), "     ");
        assert_eq!(chip_cells(&rows, sat), " sat ");
        assert!(sat.area.x > cat.area.x);

        assert_eq!(chip_cells(&rows, &layout.answer_chips[0]), " cat ");
        assert!(rows[17].contains("cat"));
    }

    #[test]
    fn test_long_answer_shows_scrolled_count() {
        let words = vec!["twenty-cell-long-tag"; 12].join(" ");
        let pool = input::from_text(&words).unwrap();
        let mut app = App::with_pool(AnswerForm::default(), pool);
        for id in 0..12 {
            app.handle_event(AppEvent::Select(TokenId(id)));
        }

        let (rows, layout) = render_with_layout(&app);
        let hidden = layout.answer_overflow();
        assert!(hidden > 0);
        assert!(rows[12].contains(&format!("Answer · 12 · {} scrolled", hidden)));
        // The newest word is on screen
        let last = layout.answer_chips.last().unwrap();
        assert_eq!(last.index, 11);
        assert_eq!(chip_cells(&rows, last).trim(), "twenty-cell-long-tag");
    }

    #[test]
    fn test_empty_pool_shows_placeholder() {
        let app = App::new(AnswerForm::default());
        let rows = render(&app);
        assert!(rows.iter().any(|row| row.contains("No words loaded")));
    }

    #[test]
    fn test_warning_is_rendered() {
        let pool = input::from_text("the cat").unwrap();
        let mut app = App::with_pool(AnswerForm::default(), pool);
        app.handle_event(AppEvent::Submit);
        let rows = render(&app);
        assert!(rows[18].contains("Compose an answer before submitting"));
    }

    #[test]
    fn test_command_deck_echoes_input() {
        let pool = input::from_text("the cat").unwrap();
        let mut app = App::with_pool(AnswerForm::default(), pool);
        app.handle_event(AppEvent::OpenCommand);
        for c in "mv 1 2".chars() {
            app.handle_event(AppEvent::CommandChar(c));
        }
        let rows = render(&app);
        assert!(rows[19].contains(":mv 1 2"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(AnswerForm::default());
        app.handle_event(AppEvent::Help);
        let rows = render(&app);
        assert!(rows.iter().any(|row| row.contains("Help")));
    }
}
