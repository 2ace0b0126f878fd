mod types;
pub use types::ZoneDirectory;

mod static_directory;
pub use static_directory::StaticDirectory;

mod http_directory;
pub use http_directory::HttpDirectory;
