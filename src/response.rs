//! Per-endpoint response shapes. Each route serializes an explicit
//! projection rather than the stored record, so the wire contract stays
//! fixed even if the tables grow columns.

use crate::models::{Hero, HeroPower, Power};
use serde::Serialize;

/// Hero as listed by `GET /heroes`: identity only, no link records.
#[derive(Debug, Serialize)]
pub struct HeroSummary {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

impl From<&Hero> for HeroSummary {
    fn from(hero: &Hero) -> Self {
        HeroSummary {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }
}

/// Flat link record embedded under `hero_powers`: foreign keys stay plain
/// ids, never expanded objects.
#[derive(Debug, Serialize)]
pub struct LinkRef {
    pub hero_id: i64,
    pub id: i64,
    pub power_id: i64,
    pub strength: String,
}

impl From<&HeroPower> for LinkRef {
    fn from(link: &HeroPower) -> Self {
        LinkRef {
            hero_id: link.hero_id,
            id: link.id,
            power_id: link.power_id,
            strength: link.strength.clone(),
        }
    }
}

/// Hero as served by `GET /heroes/{id}`: identity plus flat link records.
/// `hero_powers` is always present, `[]` when the hero has no links.
#[derive(Debug, Serialize)]
pub struct HeroDetail {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<LinkRef>,
}

impl HeroDetail {
    pub fn project(hero: &Hero, links: &[HeroPower]) -> Self {
        HeroDetail {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
            hero_powers: links.iter().map(LinkRef::from).collect(),
        }
    }
}

/// Power as served by the power routes: no link records in any power body.
#[derive(Debug, Serialize)]
pub struct PowerBody {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<&Power> for PowerBody {
    fn from(power: &Power) -> Self {
        PowerBody {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }
}

/// Power with its flat link records, nested inside a created hero-power.
#[derive(Debug, Serialize)]
pub struct PowerDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub hero_powers: Vec<LinkRef>,
}

impl PowerDetail {
    pub fn project(power: &Power, links: &[HeroPower]) -> Self {
        PowerDetail {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
            hero_powers: links.iter().map(LinkRef::from).collect(),
        }
    }
}

/// Body of a successful `POST /hero_powers`: the new link's own columns plus
/// both endpoints expanded one level. The nested link lists are read back
/// after the insert, so each includes the link just created.
#[derive(Debug, Serialize)]
pub struct HeroPowerCreated {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
    pub hero: HeroDetail,
    pub power: PowerDetail,
}

impl HeroPowerCreated {
    pub fn project(
        link: &HeroPower,
        hero: &Hero,
        hero_links: &[HeroPower],
        power: &Power,
        power_links: &[HeroPower],
    ) -> Self {
        HeroPowerCreated {
            id: link.id,
            strength: link.strength.clone(),
            hero_id: link.hero_id,
            power_id: link.power_id,
            hero: HeroDetail::project(hero, hero_links),
            power: PowerDetail::project(power, power_links),
        }
    }
}
