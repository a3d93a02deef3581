use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Local, NaiveTime};
use log::info;

use crate::{
    assets::{AssetStore, Catalog},
    canvas::Canvas,
    compose,
    config::{ConfigUpdate, Configuration},
    encoder::{self, Frame},
};

/// The scoreboard engine: asset catalog plus the configuration on display.
///
/// Updates replace the configuration as a whole snapshot, so a render
/// always works on one consistent configuration.
pub struct Scoreboard<S> {
    catalog: Catalog<S>,
    current: RwLock<Arc<Configuration>>,
}

impl<S: AssetStore> Scoreboard<S> {
    /// Starts out blank until the first update arrives.
    pub fn new(store: S) -> Self {
        Self {
            catalog: Catalog::new(store),
            current: RwLock::new(Arc::new(Configuration::default())),
        }
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn update_config(&self, update: ConfigUpdate) -> Arc<Configuration> {
        let config = Arc::new(Configuration::from(update));
        info!("Configuration updated: {:?}", config);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&config);
        config
    }

    pub fn config(&self) -> Arc<Configuration> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn render_at(&self, time: NaiveTime) -> Canvas {
        let config = self.config();
        compose::render(&self.catalog, &config, time)
    }

    pub fn generate_binary_at(&self, time: NaiveTime) -> Frame {
        encoder::encode(&self.render_at(time))
    }

    /// Renders the current configuration with the local time and packs it
    /// into a frame. Asset reads block, so this can be slow.
    pub fn generate_binary(&self) -> Frame {
        self.generate_binary_at(Local::now().time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assets::MemoryStore,
        config::DEFAULT_IMAGE,
        encoder::FRAME_SIZE,
    };

    fn evening() -> NaiveTime {
        NaiveTime::from_hms_opt(21, 45, 0).unwrap()
    }

    #[test]
    fn test_starts_blank() {
        let scoreboard = Scoreboard::new(MemoryStore::new());
        assert_eq!(*scoreboard.config(), Configuration::default());
        assert_eq!(scoreboard.config().image, "");
    }

    #[test]
    fn test_update_returns_effective_config() {
        let scoreboard = Scoreboard::new(MemoryStore::new());
        let config = scoreboard.update_config(ConfigUpdate {
            home_team: Some("Fluminense".into()),
            ..Default::default()
        });
        assert_eq!(config.home_team, "Fluminense");
        assert_eq!(config.image, DEFAULT_IMAGE);
        assert_eq!(scoreboard.config(), config);
    }

    #[test]
    fn test_update_does_not_merge() {
        let scoreboard = Scoreboard::new(MemoryStore::new());
        scoreboard.update_config(ConfigUpdate {
            home_team: Some("Flamengo".into()),
            away_team: Some("Vasco".into()),
            home_score: Some("1".into()),
            away_score: Some("2".into()),
            image: Some("night".into()),
        });
        scoreboard.update_config(ConfigUpdate::from_json(br#"{"homeScore": "3"}"#).unwrap());

        let config = scoreboard.config();
        assert_eq!(config.home_score, "3");
        assert_eq!(config.home_team, "");
        assert_eq!(config.away_team, "");
        assert_eq!(config.away_score, "");
        assert_eq!(config.image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_old_snapshot_is_untouched() {
        let scoreboard = Scoreboard::new(MemoryStore::new());
        let first = scoreboard.update_config(ConfigUpdate {
            home_team: Some("Bahia".into()),
            ..Default::default()
        });
        scoreboard.update_config(ConfigUpdate::default());
        assert_eq!(first.home_team, "Bahia");
        assert_eq!(scoreboard.config().home_team, "");
    }

    #[test]
    fn test_binary_without_assets() {
        let scoreboard = Scoreboard::new(MemoryStore::new());
        scoreboard.update_config(ConfigUpdate {
            home_team: Some("Santos".into()),
            away_team: Some("Corinthians".into()),
            home_score: Some("2".into()),
            away_score: Some("2".into()),
            image: Some("missing".into()),
        });
        let frame = scoreboard.generate_binary();
        assert_eq!(frame.len(), FRAME_SIZE);
        assert!(frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_binary_with_background() {
        let store = MemoryStore::new();
        store.insert_bitlines(DEFAULT_IMAGE, &["1"]);
        let scoreboard = Scoreboard::new(store);
        scoreboard.update_config(ConfigUpdate::default());

        let frame = scoreboard.generate_binary_at(evening());
        // Background origin is (0, 20)
        assert_eq!(frame[20 * 16], 0x01);
        assert_eq!(frame.iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn test_concurrent_updates_and_renders() {
        let store = MemoryStore::new();
        store.insert_bitlines("A", &["1"]);
        let scoreboard = Scoreboard::new(store);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..50 {
                    scoreboard.update_config(ConfigUpdate {
                        home_score: Some(i.to_string()),
                        ..Default::default()
                    });
                }
            });
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..20 {
                        let frame = scoreboard.generate_binary_at(evening());
                        assert_eq!(frame.len(), FRAME_SIZE);
                    }
                });
            }
        });
        assert_eq!(scoreboard.config().home_score, "49");
    }
}
