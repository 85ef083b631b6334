use crate::keybinds;
use crate::main_screen_widget::{MainScreenWidget, WidgetRef};
use crate::mode::ConversionMode;
use crate::session::{INVALID_INPUT_HINT, Session};
use crate::utils::{When, center};
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::Alignment::Center;
use ratatui::prelude::{Color, Line, Style, Stylize, Widget};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::BorderType::Double;
use ratatui::widgets::{Block, Paragraph, Wrap};

// room for a full u128 in binary plus separator and fraction digits
const MAX_INPUT_LEN: usize = 160;

pub struct ConverterScreen {
    session: Session,
    input: String,
    input_full: bool,
    exit_intended: bool,
}

impl ConverterScreen {
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            session: Session::new(mode),
            input: String::new(),
            input_full: false,
            exit_intended: false,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    fn push_char(&mut self, c: char) {
        self.input_full = self.input.chars().count() >= MAX_INPUT_LEN;
        if !self.input_full {
            self.input.push(c);
        }
    }
}

impl MainScreenWidget for ConverterScreen {
    fn handle_input(&mut self, input: KeyEvent) {
        match input {
            x if keybinds::is_exit(x) => self.exit_intended = true,
            x if keybinds::is_select(x) => self.session.convert(&self.input),
            x if keybinds::is_flip(x) => self.session.flip(),
            x if keybinds::is_delete(x) => {
                self.input.pop();
                self.input_full = false;
            }
            x => {
                if let Some(c) = keybinds::typed_char(x) {
                    self.push_char(c);
                }
            }
        }
    }

    fn is_exit_intended(&self) -> bool {
        self.exit_intended
    }
}

impl WidgetRef for ConverterScreen {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let [column] = Layout::horizontal([Constraint::Length(65)])
            .flex(Flex::Center)
            .horizontal_margin(1)
            .areas(area);

        let [title_area, input_area, result_area, status_area, instructions_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .flex(Flex::Center)
            .areas(column);

        self.render_title(title_area, buf);
        self.render_input(input_area, buf);
        self.render_result(result_area, buf);
        self.render_status(status_area, buf);
        render_instructions(instructions_area, buf);
    }
}

impl ConverterScreen {
    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        Block::bordered().dark_gray().render(area, buf);

        let title = self.session.title();
        #[allow(clippy::cast_possible_truncation)]
        Paragraph::new(Line::from(title).yellow().bold())
            .alignment(Center)
            .render(center(area, Constraint::Length(title.len() as u16)), buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let hint = self.session.hint();
        let hint_color = if hint == INVALID_INPUT_HINT { Color::Red } else { Color::White };

        let block = Block::bordered()
            .border_type(Double)
            .border_style(Style::default().dark_gray())
            .title(hint)
            .title_style(Style::default().fg(hint_color));
        let inner = block.inner(area);
        block.render(area, buf);

        // the hint doubles as placeholder while nothing has been typed
        let line = if self.input.is_empty() {
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray).italic()))
        } else {
            // keep the end of long input and the cursor in view
            let room = usize::from(inner.width).saturating_sub(1);
            let skip = self.input.chars().count().saturating_sub(room);
            let visible: String = self.input.chars().skip(skip).collect();
            Line::from(vec![
                Span::styled(visible, Style::default().fg(Color::White)),
                Span::styled("_", Style::default().fg(Color::LightCyan)),
            ])
        };
        Paragraph::new(line).render(inner, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .dark_gray()
            .title("Result")
            .title_alignment(Center)
            .title_style(Style::default().white());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.session.result().is_empty() {
            return;
        }

        let lines = vec![
            Line::from(self.session.label().fg(Color::Cyan)),
            Line::from(
                self.session
                    .result()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .dark_gray()
            .title("Status")
            .title_alignment(Center)
            .title_style(Style::default().white())
            .render(area, buf);

        let (text, color) = match self.session.last_error() {
            _ if self.input_full => {
                (format!("input is limited to {MAX_INPUT_LEN} characters"), Color::Yellow)
            }
            Some(err) => (format!(":( {err}"), Color::Red),
            None if !self.session.result().is_empty() => (":) converted".to_string(), Color::Green),
            None => return,
        };

        #[allow(clippy::cast_possible_truncation)]
        let width = Line::from(text.as_str()).width() as u16;
        Paragraph::new(text)
            .fg(color)
            .when(color == Color::Red, |p| p.bold())
            .alignment(Center)
            .render(center(area, Constraint::Length(width)), buf);
    }
}

fn render_instructions(area: Rect, buf: &mut Buffer) {
    Block::bordered().dark_gray().render(area, buf);

    let instruction_spans: Vec<Span> = [
        hotkey_span("Enter", "convert  "),
        hotkey_span("Tab", "flip  "),
        hotkey_span("Backspace", "delete  "),
        hotkey_span("Esc", "back"),
    ]
    .iter()
    .flatten()
    .cloned()
    .collect();

    Paragraph::new(vec![Line::from(instruction_spans)])
        .alignment(Center)
        .render(center(area, Constraint::Length(63)), buf);
}

fn hotkey_span<'a>(key: &'a str, description: &str) -> Vec<Span<'a>> {
    vec![
        Span::styled("<", Style::default().fg(Color::White)),
        Span::styled(key, Style::default().fg(Color::LightCyan)),
        Span::styled(format!("> {description}"), Style::default().fg(Color::White)),
    ]
}

impl Widget for &mut ConverterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_ref(area, buf);
    }
}
