//! TCP transport: binds the listener and spawns a task per connection.

pub mod listener;
