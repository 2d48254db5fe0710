pub mod clientraw;

pub use clientraw::ClientrawWriter;
