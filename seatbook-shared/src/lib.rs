pub mod models;
pub mod seat;

pub use models::events::SelectionEvent;
pub use models::submission::SubmissionPayload;
pub use seat::{join_seat_ids, SeatId, SeatIdError, SEAT_IDS_FIELD, SEAT_ID_DELIMITER};
