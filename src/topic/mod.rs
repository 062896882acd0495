//! The topic board slice: votable topics, list fetching, draft text.

mod effects;
mod intent;
mod reducer;
mod state;

pub use effects::TopicEffects;
pub use intent::TopicIntent;
pub use reducer::TopicReducer;
pub use state::{Topic, TopicState};
