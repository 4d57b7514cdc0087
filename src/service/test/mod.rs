use crate::{
    data::price::{BirdeyeProvider, CoinGeckoProvider},
    error::{fetch::FetchError, guild::GuildError},
    model::{
        display::{COLOR_DOWN, COLOR_UP},
        price::PriceSample,
        target::GuildTarget,
    },
    service::{price::parse_price_response, reconcile::GuildReconciler},
};
use chrono::Utc;
use test_utils::{discord::FakeDiscord, fixture};

mod price;

const BOT_USER_ID: u64 = 42;
const ROLE_NAME: &str = "PriceBotSolColor";
const ROLE_ID: u64 = 500;

fn birdeye() -> BirdeyeProvider {
    BirdeyeProvider::new(
        "test-key".to_string(),
        "So11111111111111111111111111111111111111112".to_string(),
        "solana".to_string(),
    )
}

fn coingecko() -> CoinGeckoProvider {
    CoinGeckoProvider::new(fixture::price::DEFAULT_COIN_ID.to_string(), None)
}

fn sample(price: f64, change: Option<f64>) -> PriceSample {
    PriceSample::new(price, change, Utc::now())
}

fn targets(guild_ids: &[u64]) -> Vec<GuildTarget> {
    guild_ids
        .iter()
        .map(|&guild_id| GuildTarget::new(guild_id, ROLE_NAME))
        .collect()
}

/// Fake Discord where every guild has the bot as member and the color role at gray.
fn discord_with_guilds(guild_ids: &[u64]) -> FakeDiscord {
    guild_ids.iter().fold(FakeDiscord::new(BOT_USER_ID), |discord, &guild_id| {
        discord
            .with_guild(guild_id)
            .with_role(guild_id, ROLE_ID, ROLE_NAME, 0x95A5A6)
    })
}
