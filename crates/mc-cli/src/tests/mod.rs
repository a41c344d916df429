mod clipboard;
mod notify;
