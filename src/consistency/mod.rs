pub mod refetcher;
pub mod request_sequence;
pub mod view_state;

pub use refetcher::{RefetchOutcome, mutate_then_refetch};
pub use request_sequence::{RequestSequencer, RequestToken};
pub use view_state::ViewState;
