pub mod component;
pub mod history;
pub mod router;

pub use component::{Component, DeferredLoader};
pub use history::{Location, WebHistory};
pub use router::{Navigation, ResolvedRoute, RouteDescriptor, RouteTarget, Router, RouterOptions};
