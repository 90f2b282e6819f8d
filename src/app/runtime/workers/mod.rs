/// City search worker.
pub mod cities;
/// News page worker.
pub mod news;
/// News submission worker.
pub mod submit;
