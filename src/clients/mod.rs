//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient), and the
//! collaborator traits they implement.

pub mod actor_client;
pub mod payment_client;
pub mod reservation_client;
pub mod traits;

pub use actor_client::ActorClient;
pub use payment_client::*;
pub use reservation_client::*;
pub use traits::*;
