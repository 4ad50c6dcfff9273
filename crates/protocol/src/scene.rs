use serde::{Deserialize, Serialize};

/// Presentation settings for the rendered seesaw page.
///
/// Colors are CSS color values (`"green"`, `"#1a1a2e"`, `"rgb(0, 128, 0)"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Edge length of each emoji wrapper before scaling.
    pub emoji_size_px: u32,
    /// Duration of the tilt and scale transitions.
    pub transition_ms: u32,
    /// Delay after load before the animation starts.
    pub start_delay_ms: u32,
    pub background: String,
    /// Counter badge border for the good side.
    pub good_color: String,
    /// Counter badge border for the low side.
    pub low_color: String,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            emoji_size_px: 60,
            transition_ms: 1000,
            start_delay_ms: 50,
            background: "white".into(),
            good_color: "green".into(),
            low_color: "red".into(),
        }
    }
}
