use ratatui::style::Color;

pub struct Resources {
    pub main_color: Color,
    pub secondary_color: Color,
    pub accent_color: Color,
    pub background_color: Color,
    pub error_color: Color,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            main_color: Color::White,
            secondary_color: Color::Rgb(0x62, 0x62, 0x62),
            accent_color: Color::Rgb(0x7D, 0x56, 0xF4),
            background_color: Color::Black,
            error_color: Color::Red,
        }
    }
}
