use ratatui::layout::Flex;
use ratatui::prelude::*;
use std::collections::HashMap;

/// Colored characters of an ASCII-art banner, one row per art line.
pub struct AsciiCells {
    rows: Vec<Vec<(char, Color)>>,
}

impl AsciiCells {
    /// Pairs each art character with the color its counterpart in `colors`
    /// maps to, falling back to `default_color`.
    pub fn from(
        art: String,
        colors: String,
        color_map: &HashMap<char, Color>,
        default_color: Color,
    ) -> Self {
        let mut color_lines = colors.lines();
        let rows = art
            .lines()
            .map(|line| {
                let mask: Vec<char> = color_lines.next().unwrap_or_default().chars().collect();
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| {
                        let key = mask.get(x).copied().unwrap_or(ch);
                        (ch, color_map.get(&key).copied().unwrap_or(default_color))
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn get_width(&self) -> u16 {
        self.rows.iter().map(Vec::len).max().unwrap_or(0) as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn get_height(&self) -> u16 {
        self.rows.len() as u16
    }
}

pub struct AsciiArtWidget {
    cells: AsciiCells,
}

impl AsciiArtWidget {
    pub const fn new(cells: AsciiCells) -> Self {
        Self { cells }
    }
}

impl Widget for AsciiArtWidget {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in self.cells.rows.iter().enumerate() {
            for (x, &(ch, color)) in row.iter().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let position = Position::new(area.x + x as u16, area.y + y as u16);
                if area.contains(position)
                    && let Some(cell) = buf.cell_mut(position)
                {
                    cell.set_char(ch).set_fg(color);
                }
            }
        }
    }
}

pub fn center(area: Rect, horizontal: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(area);

    vertically_center(area)
}

pub fn vertically_center(area: Rect) -> Rect {
    let constraints = [Constraint::Fill(1), Constraint::Min(1), Constraint::Fill(1)];
    let [_, center, _] = Layout::vertical(constraints).areas(area);
    center
}

pub trait When {
    fn when(self, condition: bool, action: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized;
}

impl<T> When for T {
    fn when(self, condition: bool, action: impl FnOnce(T) -> T) -> Self {
        if condition { action(self) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_cells_measure_widest_line() {
        let cells = AsciiCells::from(
            "ab\nabcd".to_string(),
            "ab\nabcd".to_string(),
            &HashMap::new(),
            Color::White,
        );
        assert_eq!(cells.get_width(), 4);
        assert_eq!(cells.get_height(), 2);
    }

    #[test]
    fn ascii_art_uses_mask_colors_and_skips_spaces() {
        let map = HashMap::from([('x', Color::Red)]);
        let cells = AsciiCells::from("a b".to_string(), "x y".to_string(), &map, Color::Blue);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        AsciiArtWidget::new(cells).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].fg, Color::Blue);
    }

    #[test]
    fn when_applies_action_only_if_condition_holds() {
        assert_eq!(2_i32.when(true, |n| n * 10), 20);
        assert_eq!(2_i32.when(false, |n| n * 10), 2);
    }
}
