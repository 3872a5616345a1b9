//! `pv-queue` — voter arrival stream and booth allocation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`arrivals`]   | `Arrival`, `ArrivalGenerator`, `Arrivals` (infinite iterator) |
//! | [`booth_pool`] | `BoothPool` (`BinaryHeap<Reverse<Minutes>>` with a hard cap) |
//! | [`error`]      | `QueueError`, `QueueResult<T>`                             |
//!
//! # Queueing model (summary)
//!
//! ```text
//! arrival_time += gap                       (gap ~ Exp(arrival_rate))
//! if pool full:  t_free = pop earliest departure
//!                start  = max(t_free, arrival_time)
//! else:          start  = arrival_time
//! departure = start + duration              (pushed back into the pool)
//! ```
//!
//! Booths are interchangeable, so the pool tracks only *when* each occupied
//! booth frees up, never *which* booth it is.

pub mod arrivals;
pub mod booth_pool;
pub mod error;


pub use arrivals::{Arrival, ArrivalGenerator, Arrivals};
pub use booth_pool::BoothPool;
pub use error::{QueueError, QueueResult};
