mod timeline;

pub use timeline::TimelinePage;
