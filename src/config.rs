/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the orders service (host, port and path prefix)
    pub const API_BASE_URL: &'static str = "http://localhost:9011/petex";

    /// Rows shown per table page
    pub const PAGE_SIZE: usize = 2;

    /// Revenue chart height in pixels
    pub const CHART_HEIGHT_PX: u32 = 200;

    /// Revenue chart width relative to its section
    pub const CHART_WIDTH: &'static str = "50%";
}
