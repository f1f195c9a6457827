pub mod color; pub mod config; pub mod framebuffer; pub mod grid; pub mod projection; pub mod rng; pub mod sim; pub mod starfield;
