// src/config.rs

const THEME_VAR: &str = "POCKET_QUIZ_THEME";
const WINDOW_VAR: &str = "POCKET_QUIZ_WINDOW";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Pocket Quiz".to_owned(),
            window_size: [420.0, 760.0],
            min_window_size: [320.0, 480.0],
            dark_mode: false,
        }
    }
}

impl AppConfig {
    /// Defaults + variables de entorno. Un valor inválido se ignora con aviso.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(theme) = lookup(THEME_VAR) {
            match theme.trim().to_ascii_lowercase().as_str() {
                "dark" => config.dark_mode = true,
                "light" => config.dark_mode = false,
                other => log::warn!("{THEME_VAR}={other:?} not recognised, expected dark|light"),
            }
        }

        if let Some(size) = lookup(WINDOW_VAR) {
            match parse_window_size(&size) {
                Some([w, h]) => {
                    config.window_size = [
                        w.max(config.min_window_size[0]),
                        h.max(config.min_window_size[1]),
                    ];
                }
                None => log::warn!("{WINDOW_VAR}={size:?} not recognised, expected WIDTHxHEIGHT"),
            }
        }

        config
    }
}

fn parse_window_size(raw: &str) -> Option<[f32; 2]> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    (w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0).then_some([w, h])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_vars_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn reads_theme_and_window() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("POCKET_QUIZ_THEME", "Dark"),
            ("POCKET_QUIZ_WINDOW", "800x600"),
        ]));
        assert!(cfg.dark_mode);
        assert_eq!(cfg.window_size, [800.0, 600.0]);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("POCKET_QUIZ_THEME", "sepia"),
            ("POCKET_QUIZ_WINDOW", "big"),
        ]));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn window_is_clamped_to_minimum() {
        let cfg = AppConfig::from_lookup(lookup(&[("POCKET_QUIZ_WINDOW", "100X100")]));
        assert_eq!(cfg.window_size, cfg.min_window_size);
    }
}
