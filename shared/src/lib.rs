pub mod events;
pub mod faq;
pub mod fps;
pub mod lightbox;
pub mod motion;
pub mod nav;
pub mod scroll;

pub use events::{CardPhase, CardTransition, EventsBoard, FILTER_ALL, Slide};
pub use faq::FaqAccordion;
pub use fps::FrameSampler;
pub use lightbox::derive_content;
pub use nav::NavState;
