pub mod traits;
pub mod window_event;
pub mod xcb;

#[cfg(test)]
pub mod recording;
