use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fleet car selectable on the vehicle-request page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub available: bool,
}

/// Existing booking shown on the availability calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleBooking {
    pub date: NaiveDate,
    pub time: String,
    pub driver: String,
    pub destination: String,
}

impl VehicleBooking {
    /// Bookings overlapping a given calendar day.
    pub fn on_date(bookings: &[VehicleBooking], date: NaiveDate) -> Vec<VehicleBooking> {
        bookings.iter().filter(|b| b.date == date).cloned().collect()
    }
}

/// Processing state of a facility fault ticket. Unlike service requests,
/// facility tickets move through an `InProgress` stage handled off-system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityStatus {
    Pending,
    InProgress,
    Completed,
}

impl FacilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FacilityStatus::Pending => "접수 대기",
            FacilityStatus::InProgress => "처리 중",
            FacilityStatus::Completed => "완료",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            FacilityStatus::Pending => "badge badge--pending",
            FacilityStatus::InProgress => "badge badge--progress",
            FacilityStatus::Completed => "badge badge--completed",
        }
    }
}

/// Fault report listed under "최근 신고 내역" on the facility page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityTicket {
    pub id: String,
    pub location: String,
    pub category: String,
    pub summary: String,
    pub urgency: String,
    pub status: FacilityStatus,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookings_filter_by_exact_date() {
        let bookings = crate::seed::vehicle_bookings();
        let feb_20 = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        let hits = VehicleBooking::on_date(&bookings, feb_20);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|b| b.date == feb_20));

        let empty_day = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        assert!(VehicleBooking::on_date(&bookings, empty_day).is_empty());
    }
}
