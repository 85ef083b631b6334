use crate::converter_screen::ConverterScreen;
use crate::keybinds;
use crate::main_screen_widget::MainScreenWidget;
use crate::mode::ConversionMode;
use crate::utils::{AsciiArtWidget, AsciiCells};
use crossterm::event;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Span, Style, Widget};
use ratatui::widgets::{List, ListItem, ListState};
use std::collections::HashMap;

enum AppState {
    Start(StartMenuState),
    Converting(ConverterScreen),
    Exit,
}

fn handle_start_input(state: &mut StartMenuState, key: KeyEvent) -> Option<AppState> {
    match key {
        x if keybinds::is_up(x) => state.select_previous(),
        x if keybinds::is_down(x) => state.select_next(),
        x if keybinds::is_select(x) => {
            let mode = state.selected_mode();
            tracing::debug!(?mode, "opening converter");
            return Some(AppState::Converting(ConverterScreen::new(mode)));
        }
        x if keybinds::is_exit(x) => return Some(AppState::Exit),
        _ => {}
    }
    None
}

fn render_start_screen(state: &mut StartMenuState, area: Rect, buf: &mut Buffer) {
    // Build ASCII art to obtain real dimensions
    let cells = ascii_art_cells();
    let ascii_width = cells.get_width();
    let ascii_height = cells.get_height();
    let ascii_widget = AsciiArtWidget::new(cells);

    let selected = state.selected_index();
    let upper_labels: Vec<String> =
        state.items.iter().map(|mode| mode.menu_label().to_uppercase()).collect();
    #[allow(clippy::cast_possible_truncation)]
    let max_len = upper_labels.iter().map(|s| s.len() as u16).max().unwrap_or(0);

    let list_width = 2 + max_len; // marker + space + label
    #[allow(clippy::cast_possible_truncation)]
    let list_height = upper_labels.len() as u16;

    let spacing: u16 = 3;
    let total_height = ascii_height + spacing + list_height;

    // Center vertically & horizontally
    let start_y = area.y + area.height.saturating_sub(total_height) / 2;
    let ascii_x = area.x + area.width.saturating_sub(ascii_width) / 2;
    let list_x = area.x + area.width.saturating_sub(list_width) / 2;
    let ascii_y = start_y;
    let list_y = ascii_y + ascii_height + spacing;

    let ascii_area = Rect::new(
        ascii_x,
        ascii_y,
        ascii_width.min(area.width),
        ascii_height.min(area.height),
    );
    let list_area = Rect::new(
        list_x,
        list_y,
        list_width.min(area.width),
        list_height.min(area.height.saturating_sub(list_y.saturating_sub(area.y))),
    );

    ascii_widget.render(ascii_area, buf);

    let palette = [Color::LightGreen, Color::LightCyan];

    let items: Vec<ListItem> = upper_labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == selected { '»' } else { ' ' };
            let padded = format!("{:<width$}", label, width = max_len as usize);
            let line = format!("{marker} {padded}");
            let style = Style::default()
                .fg(palette[i % palette.len()])
                .add_modifier(Modifier::BOLD);
            ListItem::new(Span::styled(line, style))
        })
        .collect();

    let list = List::new(items);
    ratatui::widgets::StatefulWidget::render(list, list_area, buf, &mut state.list_state);
}

fn handle_crossterm_events(app_state: &mut AppState) -> color_eyre::Result<()> {
    if let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        handle_key(app_state, key);
    }
    Ok(())
}

fn handle_key(app_state: &mut AppState, key: KeyEvent) {
    // global exit via Ctrl+C
    if keybinds::is_quit(key) {
        *app_state = AppState::Exit;
        return;
    }

    *app_state = match std::mem::replace(app_state, AppState::Exit) {
        AppState::Start(mut menu) => {
            handle_start_input(&mut menu, key).unwrap_or(AppState::Start(menu))
        }
        AppState::Converting(mut screen) => {
            screen.handle_input(key);
            AppState::Converting(screen)
        }
        AppState::Exit => AppState::Exit,
    }
}

/// Runs the TUI. With `initial_mode` the start menu is skipped.
pub fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    initial_mode: Option<ConversionMode>,
) -> color_eyre::Result<()> {
    let mut app_state = match initial_mode {
        Some(mode) => AppState::Converting(ConverterScreen::new(mode)),
        None => AppState::Start(StartMenuState::new(ConversionMode::default())),
    };
    let mut last_mode = initial_mode.unwrap_or_default();

    while !matches!(app_state, AppState::Exit) {
        if let AppState::Converting(screen) = &app_state
            && screen.is_exit_intended()
        {
            // back to the menu with the direction that was last in use
            last_mode = screen.session().mode();
            tracing::debug!(screen = %screen.get_name(), ?last_mode, "leaving screen");
            app_state = AppState::Start(StartMenuState::new(last_mode));
            continue;
        }

        terminal.draw(|f| match &mut app_state {
            AppState::Start(menu) => render_start_screen(menu, f.area(), f.buffer_mut()),
            AppState::Converting(screen) => f.render_widget(&mut *screen, f.area()),
            AppState::Exit => {}
        })?;

        // nothing animates, so block until the next input event
        handle_crossterm_events(&mut app_state)?;
    }
    tracing::info!(?last_mode, "exiting");
    Ok(())
}

fn ascii_art_cells() -> AsciiCells {
    let art = indoc! {r#"
         _     _
        | |__ (_)_ __   ___ ___  _ ____   __
        | '_ \| | '_ \ / __/ _ \| '_ \ \ / /
        | |_) | | | | | (_| (_) | | | \ V /
        |_.__/|_|_| |_|\___\___/|_| |_|\_/
    "#};

    let colors = indoc! {r#"
         _     _
        | |__ (_)_ __   ___ ___  _ ____   __
        | '_ \| | '_ \ / __/ _ \| '_ \ \ / /
        | |_) | | | | | (_| (_) | | | \ V /
        |_.__/|_|_| |_|\___\___/|_| |_|\_/
    "#};

    let color_map = HashMap::from([
        ('|', Color::LightGreen),
        ('_', Color::LightCyan),
        ('/', Color::LightMagenta),
        ('\\', Color::LightMagenta),
        ('(', Color::LightYellow),
        (')', Color::LightYellow),
        ('V', Color::White),
    ]);

    let default_color = Color::Green;
    AsciiCells::from(art.to_string(), colors.to_string(), &color_map, default_color)
}

// Start menu state
struct StartMenuState {
    items: Vec<ConversionMode>,
    list_state: ListState,
}

impl StartMenuState {
    fn new(selected: ConversionMode) -> Self {
        let items = ConversionMode::ALL.to_vec();
        let selected_index = items.iter().position(|&m| m == selected).unwrap_or(0);
        Self { items, list_state: ListState::default().with_selected(Some(selected_index)) }
    }

    fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0).min(self.items.len() - 1)
    }
    fn selected_mode(&self) -> ConversionMode {
        self.items[self.selected_index()]
    }
    fn select_next(&mut self) {
        self.list_state.select_next();
    }
    fn select_previous(&mut self) {
        self.list_state.select_previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn start_menu_remembers_selection() {
        let menu = StartMenuState::new(ConversionMode::BinToDec);
        assert_eq!(menu.selected_mode(), ConversionMode::BinToDec);
    }

    #[test]
    fn down_then_enter_opens_binary_to_decimal() {
        let mut state = AppState::Start(StartMenuState::new(ConversionMode::DecToBin));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        match state {
            AppState::Converting(screen) => {
                assert_eq!(screen.session().mode(), ConversionMode::BinToDec);
            }
            _ => panic!("expected converter screen"),
        }
    }

    #[test]
    fn selection_clamps_past_last_item() {
        let mut menu = StartMenuState::new(ConversionMode::BinToDec);
        menu.select_next();
        assert_eq!(menu.selected_mode(), ConversionMode::BinToDec);
    }

    #[test]
    fn esc_on_start_menu_exits() {
        let mut state = AppState::Start(StartMenuState::new(ConversionMode::DecToBin));
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(matches!(state, AppState::Exit));
    }

    #[test]
    fn ctrl_c_exits_from_converter() {
        let mut state = AppState::Converting(ConverterScreen::new(ConversionMode::DecToBin));
        handle_key(
            &mut state,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        assert!(matches!(state, AppState::Exit));
    }

    #[test]
    fn start_screen_renders_both_directions() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut menu = StartMenuState::new(ConversionMode::DecToBin);
        render_start_screen(&mut menu, area, &mut buf);
        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("DECIMAL -> BINARY"));
        assert!(text.contains("BINARY  -> DECIMAL"));
    }
}
