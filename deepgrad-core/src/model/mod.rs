pub mod sequential;

pub use sequential::Model;
