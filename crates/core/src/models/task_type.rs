use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// A catalog entry for an assignable block of work, e.g. meal assistance
/// or bathing. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskType {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    pub duration: u32,
}

impl TaskType {
    pub fn new(name: impl Into<String>, color: impl Into<String>, duration: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            text_color: None,
            duration,
        }
    }

    /// The color task labels are drawn in: the explicit `text_color` when
    /// set, black otherwise.
    pub fn effective_text_color(&self) -> String {
        self.text_color
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string())
    }

    /// Derives a contrasting label color as the bitwise-inverted RGB of
    /// the block color. Returns `None` when `color` is not `#rrggbb`.
    pub fn inverted_text_color(&self) -> Option<String> {
        invert_rgb(&self.color)
    }
}

fn invert_rgb(color: &str) -> Option<String> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("#{:02x}{:02x}{:02x}", !r, !g, !b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_color_defaults_to_black() {
        let task = TaskType::new("入浴介助", "#4FC3F7", 60);
        assert_eq!(task.effective_text_color(), DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn explicit_text_color_wins() {
        let mut task = TaskType::new("巡回", "#90A4AE", 30);
        task.text_color = Some("#ffffff".to_string());
        assert_eq!(task.effective_text_color(), "#ffffff");
    }

    #[test]
    fn inverted_text_color_flips_each_channel() {
        let task = TaskType::new("記録作成", "#7986CB", 60);
        assert_eq!(task.inverted_text_color(), Some("#867934".to_string()));
    }

    #[test]
    fn inverted_text_color_rejects_malformed_colors() {
        let task = TaskType::new("清掃", "teal", 30);
        assert_eq!(task.inverted_text_color(), None);
    }
}
