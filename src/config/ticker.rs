use {eframe::egui::Color32, std::time::Duration};

/// Price simulation settings.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub interval: Duration,
    /// Full width of the multiplicative price step, centred on zero (0.05 = ±2.5%).
    pub price_jitter: f64,
    /// Full width of the additive 24h change step, in percentage points.
    pub change_jitter: f64,
    /// Upper bound of the volume increment per tick.
    pub volume_bump: f64,
}

/// Settings for the scrolling price tape at the bottom of the window.
pub struct TapeConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,

    pub rainbow_mode: bool,
    pub rainbow_speed: f64,

    pub text_color_neutral: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_message: Color32,

    pub custom_messages: &'static [&'static str],
}

pub struct TickerConfig {
    pub simulation: SimulationConfig,
    /// How long a row stays highlighted after its price moves.
    pub flash_duration: Duration,
    pub tape: TapeConfig,
}

pub const TICKER: TickerConfig = TickerConfig {
    simulation: SimulationConfig {
        interval: Duration::from_millis(2000),
        price_jitter: 0.05,
        change_jitter: 0.1,
        volume_bump: 10_000.0,
    },
    flash_duration: Duration::from_millis(700),
    tape: TapeConfig {
        height: 18.0,
        speed_pixels_per_sec: 60.0, // Keep at 60 - smooth on 60fps monitors
        font_size: 10.0,
        item_spacing: 40.0,
        background_color: Color32::from_rgb(10, 10, 15),

        rainbow_mode: true,
        rainbow_speed: 2.0,

        text_color_neutral: Color32::LIGHT_GRAY,
        text_color_up: Color32::from_rgb(60, 200, 110),
        text_color_down: Color32::from_rgb(230, 80, 80),
        text_color_message: Color32::GOLD,

        custom_messages: &["SIMULATED PRICES", "Built with Rust"],
    },
};
