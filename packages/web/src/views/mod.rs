mod dashboard;
pub use dashboard::{Dashboard, SearchQuery};

mod home;
pub use home::Home;

mod users;
pub use users::{UserDetail, Users};

mod settings;
pub use settings::Settings;

mod sign_in;
pub use sign_in::SignIn;
