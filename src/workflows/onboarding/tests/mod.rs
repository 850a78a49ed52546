mod common;
mod completion;
