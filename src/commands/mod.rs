mod downloads;
mod route;

pub use downloads::downloads;
pub use route::route;
