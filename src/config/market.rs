//! The embedded quote table. Stands in for a real market-data API; the
//! status footer says as much to the user.

pub struct QuoteSeed {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: &'static str,
}

pub struct MarketConfig {
    pub quotes: &'static [QuoteSeed],
    pub default_watchlist: &'static [&'static str],
}

pub const MARKET: MarketConfig = MarketConfig {
    quotes: &[
        QuoteSeed {
            symbol: "AAPL",
            name: "Apple Inc.",
            price: 178.25,
            change: 2.15,
            change_percent: 1.22,
            volume: 45_123_456,
            market_cap: "2.8T",
        },
        QuoteSeed {
            symbol: "GOOGL",
            name: "Alphabet Inc.",
            price: 138.45,
            change: -1.25,
            change_percent: -0.89,
            volume: 23_456_789,
            market_cap: "1.7T",
        },
        QuoteSeed {
            symbol: "MSFT",
            name: "Microsoft Corp.",
            price: 412.80,
            change: 5.60,
            change_percent: 1.38,
            volume: 18_765_432,
            market_cap: "3.1T",
        },
        QuoteSeed {
            symbol: "TSLA",
            name: "Tesla Inc.",
            price: 242.15,
            change: -8.45,
            change_percent: -3.37,
            volume: 67_890_123,
            market_cap: "765B",
        },
        QuoteSeed {
            symbol: "AMZN",
            name: "Amazon.com Inc.",
            price: 168.90,
            change: 3.25,
            change_percent: 1.96,
            volume: 34_567_890,
            market_cap: "1.8T",
        },
    ],

    default_watchlist: &["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN"],
};
