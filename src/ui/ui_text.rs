use std::sync::LazyLock;

pub const ICON_UP: &str = "\u{25b2}"; // ▲
pub const ICON_DOWN: &str = "\u{25bc}"; // ▼
pub const ICON_CLOSE: &str = "\u{00d7}"; // ×

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub label_last_updated: String,
    pub btn_refresh: String,
    pub btn_search: String,
    pub search_hint: String,

    // --- Detail card ---
    pub heading_detail: String,
    pub btn_add_watchlist: String,

    // --- Watchlist ---
    pub heading_watchlist: String,
    pub btn_remove: String,
    pub loading_caption: String,
    pub empty_watchlist: String,

    // General use
    pub label_volume: String,
    pub label_market_cap: String,
    pub label_updated: String,
    pub icon_close: String,

    // --- STATUS panel ---
    pub sp_disclaimer: String,
    pub sp_auto_refresh_prefix: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Quote Deck".to_string(),
    label_last_updated: "Last updated".to_string(),
    btn_refresh: "Refresh".to_string(),
    btn_search: "Search".to_string(),
    search_hint: "Search for stocks (e.g. AAPL, GOOGL, MSFT)".to_string(),

    heading_detail: "Stock Detail".to_string(),
    btn_add_watchlist: "Add to Watchlist".to_string(),

    heading_watchlist: "My Watchlist".to_string(),
    btn_remove: "Remove".to_string(),
    loading_caption: "Loading stock data...".to_string(),
    empty_watchlist: "No stocks in your watchlist. Search and add some stocks to get started!"
        .to_string(),

    label_volume: "Volume".to_string(),
    label_market_cap: "Market Cap".to_string(),
    label_updated: "Updated".to_string(),
    icon_close: ICON_CLOSE.to_string(),

    sp_disclaimer:
        "Stock data is simulated for demonstration purposes. In production, integrate with real stock market APIs."
            .to_string(),
    sp_auto_refresh_prefix: "Auto-refresh every".to_string(),
});
