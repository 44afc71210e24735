//! PatientStats - Headline figures on the patient dashboard

use gpui::{App, IntoElement, RenderOnce, Window};

use super::stat_grid::{StatGrid, StatTile, Tone};
use crate::domain::PatientStatsSummary;
use crate::utils::format::{format_currency, format_number};

#[derive(IntoElement)]
pub struct PatientStats {
    summary: PatientStatsSummary,
}

impl PatientStats {
    pub fn new(summary: PatientStatsSummary) -> Self {
        Self { summary }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        let s = &self.summary;
        vec![
            StatTile::new(
                "Upcoming Appointments",
                format_number(s.upcoming_appointments.into()),
                Tone::Primary,
                "📅",
            ),
            StatTile::new(
                "Completed Visits",
                format_number(s.completed_appointments.into()),
                Tone::Success,
                "✓",
            ),
            StatTile::new(
                "Active Prescriptions",
                format_number(s.active_prescriptions.into()),
                Tone::Info,
                "💊",
            ),
            StatTile::new("Total Spent", format_currency(s.total_spent), Tone::Warning, "$"),
        ]
    }
}

impl RenderOnce for PatientStats {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        StatGrid::new(self.tiles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_from_summary() {
        let tiles = PatientStats::new(PatientStatsSummary {
            upcoming_appointments: 2,
            completed_appointments: 14,
            active_prescriptions: 1,
            total_spent: 1260.5,
        })
        .tiles();

        let values: Vec<&str> = tiles.iter().map(|t| t.value.as_ref()).collect();
        assert_eq!(values, ["2", "14", "1", "$1,260.50"]);
    }
}
