use crate::ledger::BudgetLedger;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Modifier, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ratatui::widgets::canvas::{Canvas, Points};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashMap;
use std::io;

pub fn run_chart(ledger: &BudgetLedger) -> Result<(), String> {
    let report = ledger.generate_report();

    let mut category_totals: Vec<(String, Decimal)> =
        report.category_totals.into_iter().collect();
    // use partial_cmp so if they are not comparable -> Equal
    category_totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut categories: Vec<String> = category_totals.iter().map(|(c, _)| c.clone()).collect();
    categories.sort();
    let category_colors = assign_colors(&categories);

    let data = ChartData {
        category_totals,
        category_colors,
        total_spent: report.total_spent,
    };

    render_chart(&data)
}

struct ChartData {
    category_totals: Vec<(String, Decimal)>,
    category_colors: HashMap<String, Color>,
    total_spent: Decimal,
}

fn assign_colors(categories: &[String]) -> HashMap<String, Color> {
    let palette = vec![
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::LightCyan,
        Color::LightMagenta,
        Color::LightYellow,
        Color::LightGreen,
        Color::LightBlue,
    ];

    let mut map = HashMap::new();
    for (idx, category) in categories.iter().enumerate() {
        map.insert(category.clone(), palette[idx % palette.len()]);
    }
    map
}

fn render_chart(data: &ChartData) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;

    let result = (|| {
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)
            .map_err(|e| format!("Failed to initialize terminal: {}", e))?;

        loop {
            terminal
                .draw(|frame| {
                    let size = frame.area();
                    let layout = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([
                            Constraint::Percentage(55),
                            Constraint::Percentage(45),
                        ])
                        .split(size);

                    render_pie_chart(frame, layout[0], data);
                    render_category_table(frame, layout[1], data);
                })
                .map_err(|e| format!("Failed to draw terminal UI: {}", e))?;

            if event::poll(std::time::Duration::from_millis(250))
                .map_err(|e| format!("Failed to poll input: {}", e))?
            {
                match event::read().map_err(|e| format!("Failed to read input: {}", e))? {
                    Event::Key(key) if key.code == KeyCode::Char('q') => break,
                    Event::Key(key) if key.code == KeyCode::Esc => break,
                    Event::Resize(_, _) => continue,
                    _ => {}
                }
            }
        }

        Ok(())
    })();

    disable_raw_mode().map_err(|e| format!("Failed to disable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
        .map_err(|e| format!("Failed to leave alternate screen: {}", e))?;

    result
}

fn render_pie_chart(frame: &mut ratatui::Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .title("Category Share  (press q to exit)")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.total_spent <= Decimal::ZERO {
        let empty = Paragraph::new("No expenses recorded")
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let mut slices = Vec::new();
    let total = data.total_spent.to_f64().unwrap_or(1.0).max(1.0);
    let mut start_angle = 0.0_f64;
    for (category, amount) in &data.category_totals {
        let value = amount.to_f64().unwrap_or(0.0);
        let ratio = value / total;
        let sweep = ratio * std::f64::consts::TAU; // TAU = 2 * PI
        slices.push((start_angle, start_angle + sweep, category.clone()));
        start_angle += sweep;
    }

    let canvas = Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            let step = 0.04;
            for (start, end, category) in &slices {
                let color = data
                    .category_colors
                    .get(category)
                    .copied()
                    .unwrap_or(Color::White);
                let mut points = Vec::new();
                let mut r = 0.0; // radius 0 center ... 1 edge
                while r <= 1.0 {
                    let mut angle = *start;
                    while angle <= *end {
                        points.push((r * angle.cos(), r * angle.sin()));
                        angle += 0.05;
                    }
                    r += step;
                }
                if !points.is_empty() {
                    ctx.draw(&Points { coords: &points, color });
                }
            }
        });

    frame.render_widget(canvas, inner);
}

fn render_category_table(frame: &mut ratatui::Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .title("Category Spend")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.category_totals.is_empty() {
        let empty = Paragraph::new("No expenses recorded")
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = Vec::new();
    let header = Line::from(vec![
        Span::styled(
            "Category",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Amount",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    lines.push(header);

    for (category, amount) in &data.category_totals {
        let color = data
            .category_colors
            .get(category)
            .copied()
            .unwrap_or(Color::White);
        let line = Line::from(vec![
            Span::styled(format!("{:15}", category), Style::default().fg(color)),
            Span::raw("  "),
            Span::styled(format!("{:>12.2}", amount), Style::default().fg(color)),
        ]);
        lines.push(line);
    }

    let total_line = Line::from(vec![
        Span::styled(
            format!("{:15}", "Total"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{:>12.2}", data.total_spent),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    lines.push(total_line);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}
