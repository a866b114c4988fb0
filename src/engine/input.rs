/// Directional keys held during one frame. W/S/A/D map to up/down/left/right.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Controls {
    pub fn from_egui(input: &egui::InputState) -> Self {
        Self {
            up: input.key_down(egui::Key::W),
            down: input.key_down(egui::Key::S),
            left: input.key_down(egui::Key::A),
            right: input.key_down(egui::Key::D),
        }
    }
}
