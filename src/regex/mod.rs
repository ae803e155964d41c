// Cached, lazily compiled patterns shared by the whole process

#[macro_use]
mod cache;
