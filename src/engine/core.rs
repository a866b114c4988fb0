use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Canova".to_string(),
            window_width: 1280,
            window_height: 720,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameTiming {
    pub frame: u64,
    pub delta_seconds: f32,
    pub fps: f32,
}

impl FrameTiming {
    pub fn advance(&mut self, delta: Duration) {
        self.frame += 1;
        self.delta_seconds = delta.as_secs_f32();
        self.fps = if self.delta_seconds > 0.0 {
            1.0 / self.delta_seconds
        } else {
            0.0
        };
    }
}
