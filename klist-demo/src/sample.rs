use klist::Coin;

pub fn top_gainers() -> Vec<Coin> {
    vec![
        Coin::new("btc", "Bitcoin", "BTC", 45250.50, 5.67),
        Coin::new("eth", "Ethereum", "ETH", 3250.75, 8.23),
        Coin::new("ada", "Cardano", "ADA", 1.25, 12.45),
        Coin::new("sol", "Solana", "SOL", 98.30, 15.67),
        Coin::new("dot", "Polkadot", "DOT", 22.45, 9.12),
        Coin::new("avax", "Avalanche", "AVAX", 78.90, 18.34),
        Coin::new("luna", "Terra Luna", "LUNA", 45.67, 7.89),
        Coin::new("atom", "Cosmos", "ATOM", 28.45, 11.23),
    ]
}

pub fn top_losers() -> Vec<Coin> {
    vec![
        Coin::new("doge", "Dogecoin", "DOGE", 0.08, -8.45),
        Coin::new("shib", "Shiba Inu", "SHIB", 0.000025, -12.67),
        Coin::new("icp", "Internet Computer", "ICP", 28.90, -15.23),
        Coin::new("etc", "Ethereum Classic", "ETC", 32.45, -6.78),
    ]
}

pub fn simple_strings() -> Vec<String> {
    ["First Item", "Second Item", "Third Item", "Fourth Item", "Fifth Item"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Gainers followed by losers.
pub fn all_coins() -> Vec<Coin> {
    let mut coins = top_gainers();
    coins.extend(top_losers());
    coins
}
