//! Seed binary: wipe the database and load a small roster of heroes,
//! powers, and links. Run with `cargo run --bin seed`.

use superheroes_api::{Store, Strength};

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// (hero index, power index, rating) into the rosters above.
const LINKS: &[(usize, usize, Strength)] = &[
    (0, 1, Strength::Strong),
    (1, 0, Strength::Average),
    (2, 3, Strength::Weak),
    (4, 2, Strength::Strong),
    (5, 1, Strength::Average),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seed=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:superheroes.db".into());
    let store = Store::connect(&database_url).await?;
    store.ensure_schema().await?;
    store.clear().await?;

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let hero = store.insert_hero(name, super_name).await?;
        hero_ids.push(hero.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let power = store.insert_power(name, description).await?;
        power_ids.push(power.id);
    }

    for &(hero, power, strength) in LINKS {
        store
            .insert_link(strength, hero_ids[hero], power_ids[power])
            .await?;
    }

    tracing::info!(
        heroes = hero_ids.len(),
        powers = power_ids.len(),
        links = LINKS.len(),
        "seed complete"
    );
    Ok(())
}
