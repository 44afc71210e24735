//! DoctorStats - Headline figures on the doctor dashboard

use gpui::{App, IntoElement, RenderOnce, Window};

use super::stat_grid::{StatGrid, StatTile, Tone};
use crate::domain::DoctorStatsSummary;
use crate::utils::format::{format_currency, format_number};

#[derive(IntoElement)]
pub struct DoctorStats {
    summary: DoctorStatsSummary,
}

impl DoctorStats {
    pub fn new(summary: DoctorStatsSummary) -> Self {
        Self { summary }
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        let s = &self.summary;
        vec![
            StatTile::new(
                "Total Patients",
                format_number(s.total_patients.into()),
                Tone::Primary,
                "👥",
            ),
            StatTile::new(
                "Today's Appointments",
                format_number(s.today_appointments.into()),
                Tone::Info,
                "📅",
            ),
            StatTile::new(
                "Pending Requests",
                format_number(s.pending_appointments.into()),
                Tone::Warning,
                "⏳",
            )
            .hint("Awaiting your confirmation"),
            StatTile::new(
                "Monthly Revenue",
                format_currency(s.monthly_revenue),
                Tone::Success,
                "$",
            ),
        ]
    }
}

impl RenderOnce for DoctorStats {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        StatGrid::new(self.tiles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_from_summary() {
        let stats = DoctorStats::new(DoctorStatsSummary {
            total_patients: 1284,
            today_appointments: 6,
            pending_appointments: 2,
            monthly_revenue: 18450.0,
        });
        let tiles = stats.tiles();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].value.as_ref(), "1,284");
        assert_eq!(tiles[1].label.as_ref(), "Today's Appointments");
        assert_eq!(tiles[2].value.as_ref(), "2");
        assert_eq!(tiles[3].value.as_ref(), "$18,450.00");
    }

    #[test]
    fn test_zero_summary_renders_zeros() {
        let tiles = DoctorStats::new(DoctorStatsSummary::default()).tiles();
        assert!(tiles[..3].iter().all(|t| t.value.as_ref() == "0"));
        assert_eq!(tiles[3].value.as_ref(), "$0.00");
    }
}
