pub mod battle;
pub mod card;
pub mod collection;
pub mod drop;
pub mod dropdown;
pub mod price;
pub mod request;

pub use battle::*;
pub use card::*;
pub use collection::*;
pub use drop::*;
pub use dropdown::*;
pub use price::*;
pub use request::*;
