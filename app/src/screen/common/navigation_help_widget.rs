use input_mapping_common::MappingEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

const SEPARATOR: &str = " - ";

pub struct NavigationHelpWidget {
    key_bindings: Vec<(String, String)>,
    key_color: Color,
}

impl NavigationHelpWidget {
    pub fn new(mapping: Vec<MappingEntry>, key_color: Color) -> Self {
        let key_bindings = mapping
            .into_iter()
            .map(|entry| (entry.key_label(), entry.description))
            .collect();

        Self {
            key_bindings,
            key_color,
        }
    }

    fn key_column_width(&self) -> usize {
        self.key_bindings
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn min_width(&self) -> usize {
        let description_width = self
            .key_bindings
            .iter()
            .map(|(_, description)| description.chars().count())
            .max()
            .unwrap_or(0);

        self.key_column_width() + SEPARATOR.len() + description_width
    }

    pub fn height(&self) -> usize {
        self.key_bindings.len()
    }
}

impl Widget for NavigationHelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let key_width = self.key_column_width();

        for ((key, description), y) in self.key_bindings.into_iter().zip(area.y..area.bottom()) {
            let line = Line::from(vec![
                Span::raw(format!("{key:>key_width$}")).bold().fg(self.key_color),
                Span::raw(SEPARATOR),
                Span::raw(description),
            ]);

            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
