use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ShiftError;

/// The five work classifications a staff member can hold on a date.
///
/// The catalog is fixed; categories are not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftCategory {
    Day,
    Off,
    Early,
    Late,
    Night,
}

impl ShiftCategory {
    pub const ALL: [ShiftCategory; 5] = [
        ShiftCategory::Day,
        ShiftCategory::Off,
        ShiftCategory::Early,
        ShiftCategory::Late,
        ShiftCategory::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCategory::Day => "Day",
            ShiftCategory::Off => "Off",
            ShiftCategory::Early => "Early",
            ShiftCategory::Late => "Late",
            ShiftCategory::Night => "Night",
        }
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftCategory {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(ShiftCategory::Day),
            "Off" => Ok(ShiftCategory::Off),
            "Early" => Ok(ShiftCategory::Early),
            "Late" => Ok(ShiftCategory::Late),
            "Night" => Ok(ShiftCategory::Night),
            other => Err(ShiftError::Validation(format!(
                "Unknown shift category: {other}"
            ))),
        }
    }
}

/// An explicit shift decision for one staff member on one date.
///
/// At most one exists per (staff, date); writes go through upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftCategory,
}

impl Shift {
    pub fn new(staff_id: Uuid, date: NaiveDate, shift_type: ShiftCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            staff_id,
            date,
            shift_type,
        }
    }
}

/// Display metadata for one shift category: the single-character glyph
/// shown in calendar cells, the full label, and the cell color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTypeDefinition {
    pub id: ShiftCategory,
    pub label: String,
    pub name: String,
    pub color: String,
}

/// The fixed five-entry shift-type catalog.
pub fn shift_type_catalog() -> Vec<ShiftTypeDefinition> {
    let entry = |id, label: &str, name: &str, color: &str| ShiftTypeDefinition {
        id,
        label: label.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    };
    vec![
        entry(ShiftCategory::Day, "日", "日勤", "#ffffff"),
        entry(ShiftCategory::Off, "休", "公休", "#e2e8f0"),
        entry(ShiftCategory::Early, "早", "早番", "#fef9c3"),
        entry(ShiftCategory::Late, "遅", "遅番", "#ffedd5"),
        entry(ShiftCategory::Night, "夜", "夜勤", "#e0e7ff"),
    ]
}
