pub mod dom;
pub mod storage;
pub mod style;

use site::config::{EmailJsOverrides, SiteConfig, read_config};

// the checked-in site description, see webapp/site.toml
const SITE_TOML: &str = include_str!("../../site.toml");

pub fn site_config() -> anyhow::Result<SiteConfig> {
    Ok(read_config(SITE_TOML)?.with_overrides(EmailJsOverrides::from_build_env()))
}

// inline style for the staggered entrance animations; step is in seconds
pub fn entrance_delay(index: usize, step: f32) -> String {
    format!("animation-delay: {:.1}s;", index as f32 * step)
}
