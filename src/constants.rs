//! Default terminal sizes, config file names and window dimensions

/// Terminal layout defaults, in canvas units
pub mod layout {
    /// Side length of the square terminal body
    pub const BODY_SIZE: f32 = 30.0;

    /// Side length of the square outlet where wires attach
    pub const OUTLET_SIZE: f32 = 10.0;

    /// Length of the connector line between body edge and outlet edge
    pub const OUTLET_LINE_LENGTH: f32 = 20.0;

    /// Stroke width of the connector line
    pub const OUTLET_LINE_WIDTH: f32 = 4.0;
}

/// Configuration file constants
pub mod config {
    /// Directory created under the platform config dir
    pub const APP_DIR_NAME: &str = "logic-canvas";

    /// Layout file name inside [`APP_DIR_NAME`]
    pub const LAYOUT_FILE_NAME: &str = "layout.json";
}

/// Demo window sizing constants
pub mod window {
    /// Default inner size of the demo window
    pub const DEFAULT_SIZE: [f32; 2] = [800.0, 600.0];
}
