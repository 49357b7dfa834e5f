// Presentation sink

/// RGB color, linear 0..1
pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.2, 0.2];

/// Visual state the character writes and a renderer would read.
///
/// All writes are fire-and-forget. The sprite flip and the model flip are
/// distinct: grounded states mirror the sprite only, the air state mirrors
/// the whole model, and bullet direction follows the model.
#[derive(Debug, Clone)]
pub struct Presentation {
    sprite_flipped: bool,
    model_flipped: bool,
    color: Color,
}

impl Presentation {
    pub fn new() -> Self {
        Self {
            sprite_flipped: false,
            model_flipped: false,
            color: WHITE,
        }
    }

    pub fn flip_sprite(&mut self, flip: bool) {
        self.sprite_flipped = flip;
    }

    pub fn flip_model(&mut self, flip: bool) {
        self.model_flipped = flip;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn sprite_flipped(&self) -> bool {
        self.sprite_flipped
    }

    pub fn model_flipped(&self) -> bool {
        self.model_flipped
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flips_are_independent() {
        let mut presentation = Presentation::new();
        presentation.flip_sprite(true);
        assert!(presentation.sprite_flipped());
        assert!(!presentation.model_flipped());

        presentation.flip_model(true);
        presentation.flip_sprite(false);
        assert!(presentation.model_flipped());
        assert!(!presentation.sprite_flipped());
    }

    #[test]
    fn test_color_defaults_to_white() {
        let presentation = Presentation::new();
        assert_eq!(presentation.color(), WHITE);
    }
}
