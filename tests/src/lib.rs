//! Cross-crate tests: services from `solid-core` driven through fake,
//! stub and dry-run adapters.

#[cfg(test)]
mod fakes;
#[cfg(test)]
mod geometry;
#[cfg(test)]
mod notifications;
#[cfg(test)]
mod orders;
