//! Application services.

mod download_invoker;

pub use download_invoker::DownloadInvoker;
