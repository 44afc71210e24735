//! Service - Bookable consultation offered by a doctor

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::format::{format_currency, format_duration_minutes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in US dollars, never negative
    pub price: f64,
    pub duration_minutes: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Service {
    pub fn price_label(&self) -> String {
        format_currency(self.price)
    }

    pub fn duration_label(&self) -> String {
        format_duration_minutes(self.duration_minutes)
    }
}
