pub mod answers;
pub mod questions;
pub mod surveys;

pub use answers::Entity as Answers;
pub use answers::Model as Answer;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
pub use surveys::Entity as Surveys;
pub use surveys::Model as Survey;
