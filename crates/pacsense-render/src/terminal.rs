//! Interactive terminal viewer.
//!
//! Each pixel is one terminal cell painted with its grey level as the
//! background colour. [`draw`] takes over the terminal, shows the image
//! and returns once a key is pressed.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::error::RenderError;
use crate::image::{to_gray, ImageView};

/// Hint shown under the image.
pub const CLOSE_HINT: &str = "press any key to close";

/// Terminal colour of a pixel value.
pub fn gray_color(v: f32) -> Color {
    let g = to_gray(v);
    Color::Rgb(g, g, g)
}

/// The image as a paragraph of one blank, background-coloured cell per
/// pixel.
pub fn image_paragraph(image: &ImageView<'_>) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = image
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&v| Span::styled(" ", Style::default().bg(gray_color(v))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    Paragraph::new(lines)
}

/// Render `image` in the top-left corner of `frame` with the close hint
/// below it.
pub fn render_image(frame: &mut Frame, image: &ImageView<'_>) {
    let height = u16::try_from(image.height()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    frame.render_widget(image_paragraph(image), chunks[0]);
    let hint = Paragraph::new(Line::styled(CLOSE_HINT, Style::default().fg(Color::DarkGray)));
    frame.render_widget(hint, chunks[1]);
}

/// Redraw `image` on `terminal` until a key press arrives.
pub fn show_until_key<B: Backend>(
    terminal: &mut Terminal<B>,
    image: &ImageView<'_>,
) -> Result<(), RenderError> {
    loop {
        terminal.draw(|frame| render_image(frame, image))?;
        // Resize and focus events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Show `image` full-screen and block until a key is pressed.
///
/// The terminal is restored before returning, also when showing the
/// image failed.
pub fn draw(image: &ImageView<'_>) -> Result<(), RenderError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let shown = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(RenderError::from)
        .and_then(|mut terminal| {
            let result = terminal
                .hide_cursor()
                .map_err(RenderError::from)
                .and_then(|()| show_until_key(&mut terminal, image));
            restore(&mut terminal)?;
            result
        });
    disable_raw_mode()?;
    tracing::debug!(
        height = image.height(),
        width = image.width(),
        "image viewer closed"
    );
    shown
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), RenderError> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn rendered(image: &ImageView<'_>, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_image(f, image)).unwrap();
        terminal
    }

    #[test]
    fn pixels_become_gray_backgrounds() {
        let data = [-1.0, 0.0, 1.0, f32::NAN, 9.0, -9.0];
        let image = ImageView::new(&data, 2, 3).unwrap();
        let terminal = rendered(&image, 30, 4);
        let buf = terminal.backend().buffer();

        let bg = |x: u16, y: u16| buf.cell((x, y)).unwrap().bg;
        assert_eq!(bg(0, 0), Color::Rgb(0, 0, 0));
        assert_eq!(bg(1, 0), Color::Rgb(128, 128, 128));
        assert_eq!(bg(2, 0), Color::Rgb(255, 255, 255));
        assert_eq!(bg(0, 1), Color::Rgb(0, 0, 0));
        assert_eq!(bg(1, 1), Color::Rgb(255, 255, 255));
        assert_eq!(bg(2, 1), Color::Rgb(0, 0, 0));
        // Cells right of the image are untouched.
        assert_eq!(bg(3, 0), Color::Reset);
    }

    #[test]
    fn hint_sits_below_the_image() {
        let data = [0.5; 4];
        let image = ImageView::new(&data, 2, 2).unwrap();
        let terminal = rendered(&image, 30, 4);
        let buf = terminal.backend().buffer();
        let row: String = (0..CLOSE_HINT.len() as u16)
            .map(|x| buf.cell((x, 2)).unwrap().symbol().to_owned())
            .collect();
        assert_eq!(row, CLOSE_HINT);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn gray_color_clamps() {
        assert_eq!(gray_color(-4.0), Color::Rgb(0, 0, 0));
        assert_eq!(gray_color(4.0), Color::Rgb(255, 255, 255));
    }
}
