pub mod task;
pub mod user;

pub use task::{CreatedTask, Task, TaskTextInput};
pub use user::User;
