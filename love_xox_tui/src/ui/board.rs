//! Board rendering.

use love_xox::{Board, Cell, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Three 3-line rows plus two 1-line rules.
const BOARD_HEIGHT: u16 = 11;
const BOARD_WIDTH: u16 = 40;

/// Renders the 3x3 board, highlighting the cursor unless input is locked.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Position, locked: bool) {
    let [top, rule_a, middle, rule_b, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(board_area(area));

    for (row, area) in [top, middle, bottom].into_iter().enumerate() {
        render_row(f, area, board, row * 3, (!locked).then_some(cursor));
    }
    render_rule(f, rule_a);
    render_rule(f, rule_b);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, cursor: Option<Position>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (offset, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        render_cell(f, area, board, start + offset, cursor);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, index: usize, cursor: Option<Position>) {
    let (text, style) = match board.get(index).unwrap_or_default() {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark @ Mark::Player) => (
            mark.to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(mark @ Mark::Opponent) => (
            mark.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match cursor {
        Some(pos) if pos.to_index() == index => style.bg(Color::White).fg(Color::Black),
        _ => style,
    };

    // Vertically center the symbol in the three-line cell.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(text, style))])
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_rule(f: &mut Frame, area: Rect) {
    let rule = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// The board's fixed-size box in the middle of `area`, clipped to fit.
fn board_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_renders_marks_and_numbers() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let board = Board::from_cells([
            Cell::Occupied(Mark::Player),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Occupied(Mark::Opponent),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);

        terminal
            .draw(|f| render_board(f, f.area(), &board, Position::BottomRight, false))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains('9'));
        assert!(rendered.contains('❤'));
        assert!(!rendered.contains('1'));
    }

    #[test]
    fn test_board_area_is_centered_and_clipped() {
        let area = board_area(Rect::new(0, 0, 60, 21));
        assert_eq!(area, Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT));

        let small = board_area(Rect::new(0, 0, 30, 8));
        assert_eq!((small.width, small.height), (30, 8));
    }

    #[test]
    fn test_rules_span_board_width() {
        let mut terminal = Terminal::new(TestBackend::new(40, 11)).unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), &Board::new(), Position::Center, true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        for y in [3u16, 7] {
            let row: String = (0..40u16).map(|x| buffer[(x, y)].symbol()).collect();
            assert_eq!(row, "─".repeat(40));
        }
    }
}
