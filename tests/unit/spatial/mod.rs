mod buffer;
mod depth;
