pub mod app;
pub mod appointments_page;
pub mod pagination;
pub mod register_page;
pub mod toast;

pub use app::App;
pub use appointments_page::AppointmentsPage;
pub use pagination::Pagination;
pub use register_page::RegisterPage;
pub use toast::Toast;
