mod compilation;
mod event;
