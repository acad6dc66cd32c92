pub mod books;
pub mod dashboard;
pub mod loans;
pub mod users;

pub use books::*;
pub use dashboard::*;
pub use loans::*;
pub use users::*;
