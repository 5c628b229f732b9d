//! Frame rendering for the calculator TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title.
pub const TITLE: &str = " procalc ";

/// Keyboard shortcuts for the help sidebar.
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter operand"),
    ("+-*/^", "Operation"),
    ("=", "Compute"),
    ("Bksp", "Delete digit"),
    ("Esc", "Clear"),
    ("%", "Percent"),
    ("Tab", "Scientific"),
    ("↑", "Recall result"),
    ("Ctrl+L", "Clear tape"),
    ("Ctrl+C", "Quit"),
];

/// Scientific key legend for the help sidebar.
pub const HELP_SCIENTIFIC: &str = "sin cos tan √ lg ln\nπ e n! |x| 1/x x^y";

/// Screen regions the calculator renders into.
///
/// Produced by [`layout`], which is pure so the mouse handler can hit-test
/// keypad buttons without a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Two-line display block.
    pub display: Rect,
    /// History tape panel.
    pub history: Rect,
    /// Standard keypad.
    pub keypad: Rect,
    /// Scientific keypad; zero-sized while the mode is off.
    pub sci_keypad: Rect,
    /// Help sidebar.
    pub help: Rect,
}

/// Computes the screen layout for a frame of the given area.
#[must_use]
pub fn layout(area: Rect, scientific: bool) -> ScreenAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // display + tape column
            Constraint::Length(24), // keypads
            Constraint::Length(22), // help sidebar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // display: two text lines + border
            Constraint::Min(5),    // tape
        ])
        .split(columns[0]);

    let sci_height = if scientific { 8 } else { 0 };
    let pads = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // 5 button rows + border
            Constraint::Length(sci_height),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    ScreenAreas {
        display: main[0],
        history: main[1],
        keypad: pads[0],
        sci_keypad: pads[1],
        help: columns[2],
    }
}

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a UI widget over the app state.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the two-line display block.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.engine().display();

        let lines = vec![
            Line::from(Span::styled(
                display.secondary,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                display.primary,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    /// Renders the tape panel, newest entries first.
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .history()
            .iter_rev()
            .take(usize::from(area.height.saturating_sub(2)))
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.clone(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(
                        crate::core::format::format_number(entry.value),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    /// Renders the help sidebar.
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(4)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(HELP_SCIENTIFIC)
            .style(Style::default().fg(Color::Cyan))
            .block(
                Block::default()
                    .title(" Functions ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[1], buf);
    }

    /// Renders the modal error notification over everything else.
    fn render_notification(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, 34, 5);
        Clear.render(popup, buf);

        let lines = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = layout(area, self.app.engine().scientific_mode());

        self.render_display(areas.display, buf);
        self.render_history(areas.history, buf);

        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);
        if self.app.engine().scientific_mode() {
            KeypadWidget::new(self.app.sci_keypad()).render(areas.sci_keypad, buf);
        }

        self.render_help(areas.help, buf);

        if let Some(message) = self.app.notification() {
            self.render_notification(message, area, buf);
        }
    }
}

/// Centers a fixed-size popup inside an area, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
