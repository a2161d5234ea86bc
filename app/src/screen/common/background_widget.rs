use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Blanks its area and paints it with a solid color, hiding whatever was drawn
/// underneath.
pub struct BackgroundWidget {
    color: Color,
}

impl BackgroundWidget {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = area.intersection(buf.area);

        for position in area.positions() {
            let cell = &mut buf[position];
            cell.reset();
            cell.set_bg(self.color);
        }
    }
}
