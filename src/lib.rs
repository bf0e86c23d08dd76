mod bounded;
mod circular_list;
mod circular_queue;
mod config;
mod deque;
mod errors;
mod handle;
mod node;
mod priority;
mod priority_queue;
mod queue;

pub use circular_list::CircularList;
pub use circular_queue::CircularQueue;
pub use config::QueueConfig;
pub use deque::Deque;
pub use errors::{CapacityError, ListError, QueueKind};
pub use handle::Handle;
pub use priority::{insert_by_priority, PriorityItem};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
