mod auth_page;
pub use auth_page::AuthPage;

mod dashboard;
pub use dashboard::Dashboard;

mod events;
pub use events::EventsView;

mod campus;
pub use campus::{ClubsView, MapView, NotificationsView, SubjectsView, SupportView};

mod admin_users;
pub use admin_users::AdminUsersView;

mod admin_logs;
pub use admin_logs::AdminLogsView;

mod admin_settings;
pub use admin_settings::AdminSettingsView;

mod unreadable_session;
pub use unreadable_session::UnreadableSession;
