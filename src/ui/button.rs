use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Reset,
    Randomize,
}

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        action: ButtonAction,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            action,
        }
    }

    /// Check if mouse is hovering over button
    pub fn contains(&self, (mx, my): (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&mx) && (self.y..=self.y + self.height).contains(&my)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.contains(mouse_pos) {
            Color::from_rgba(130, 130, 150, 255)
        } else {
            Color::from_rgba(100, 100, 110, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Reset", ButtonAction::Reset);
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 60.0)));
        assert!(!button.contains((9.9, 30.0)));
        assert!(!button.contains((50.0, 60.5)));
    }
}
