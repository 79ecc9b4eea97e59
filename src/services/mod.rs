pub mod change_source;
pub mod notifier;

pub use change_source::ChangeSourceService;
pub use notifier::NotifierService;
