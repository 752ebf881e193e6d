mod dashboard_layout;
pub use dashboard_layout::DashboardLayoutView;

mod sign_in;
pub use sign_in::SignInView;
