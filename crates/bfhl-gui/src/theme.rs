//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Error message color (red)
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
}
