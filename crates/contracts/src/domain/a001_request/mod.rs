pub mod aggregate;

pub use aggregate::{
    approve_request, cancel_request, count_by_status, reject_request, HistoryStep, Request,
    RequestStatus, ServiceKind,
};
